use crate::kernel::notification::NotificationSlot;

/// The remote listing plus the cursor over it.
///
/// `files` is only ever replaced wholesale: by a successful fetch or by an empty listing after a
/// failed one.
#[derive(Debug, Clone)]
pub struct ListingState {
    pub files: Vec<String>,
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub view_height: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            selected: None,
            scroll_offset: 0,
            view_height: 10,
        }
    }
}

impl ListingState {
    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.files.get(idx))
            .map(String::as_str)
    }

    /// Replaces the listing. The selection follows the previously selected name when it is
    /// still present, otherwise it is clamped to the new length.
    pub fn replace(&mut self, files: Vec<String>) -> bool {
        if files == self.files {
            return false;
        }

        let prev_name = self.selected_name().map(str::to_string);
        let prev_index = self.selected;
        self.files = files;

        self.selected = if self.files.is_empty() {
            None
        } else if let Some(idx) = prev_name
            .as_deref()
            .and_then(|name| self.files.iter().position(|f| f == name))
        {
            Some(idx)
        } else {
            Some(prev_index.unwrap_or(0).min(self.files.len() - 1))
        };

        match self.selected {
            Some(idx) => self.keep_row_visible(idx),
            None => self.scroll_offset = 0,
        }
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.files.is_empty() || self.selected.is_some();
        self.files.clear();
        self.selected = None;
        self.scroll_offset = 0;
        changed
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        if let Some(idx) = self.selected {
            self.keep_row_visible(idx);
        } else {
            self.clamp_scroll();
        }
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.files.is_empty() || delta == 0 {
            return false;
        }

        let new_index = match self.selected {
            None => {
                if delta < 0 {
                    self.files.len() - 1
                } else {
                    0
                }
            }
            Some(current) if delta < 0 => current.saturating_sub(delta.unsigned_abs()),
            Some(current) => current.saturating_add(delta as usize).min(self.files.len() - 1),
        };

        self.select(new_index)
    }

    pub fn select_first(&mut self) -> bool {
        if self.files.is_empty() {
            return false;
        }
        self.select(0)
    }

    pub fn select_last(&mut self) -> bool {
        if self.files.is_empty() {
            return false;
        }
        self.select(self.files.len() - 1)
    }

    /// `row` is relative to the visible window.
    pub fn click_row(&mut self, row: usize) -> bool {
        let index = self.scroll_offset + row;
        if index >= self.files.len() {
            return false;
        }
        self.select(index)
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.files.is_empty() || delta == 0 {
            return false;
        }

        let max_scroll = self.files.len().saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;

        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }

        self.scroll_offset != prev
    }

    fn select(&mut self, index: usize) -> bool {
        let prev = (self.selected, self.scroll_offset);
        self.selected = Some(index);
        self.keep_row_visible(index);
        prev != (self.selected, self.scroll_offset)
    }

    fn clamp_scroll(&mut self) {
        let view_height = self.view_height.max(1);
        let max_scroll = self.files.len().saturating_sub(view_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
            self.clamp_scroll();
            return;
        }

        if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll();
    }
}

/// In-flight flags. `loading` and `uploading` are independent of each other.
#[derive(Debug, Clone, Default)]
pub struct TransferState {
    pub loading: bool,
    pub uploading: bool,
    /// Id of the most recently issued listing request; responses to older ids are dropped.
    pub latest_list_request: u64,
}

impl TransferState {
    pub fn next_list_request(&mut self) -> u64 {
        self.latest_list_request += 1;
        self.latest_list_request
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteFile { name: String },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

impl ConfirmDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDialogKind {
    UploadPath,
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FileList,
    ConfirmDialog,
    InputDialog,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub confirm_dialog: ConfirmDialogState,
    pub input_dialog: InputDialogState,
    pub should_quit: bool,
}

impl UiState {
    /// Modal dialogs capture all input while visible; the confirm dialog wins.
    pub fn focus(&self) -> FocusTarget {
        if self.confirm_dialog.visible {
            FocusTarget::ConfirmDialog
        } else if self.input_dialog.visible {
            FocusTarget::InputDialog
        } else {
            FocusTarget::FileList
        }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub listing: ListingState,
    pub transfer: TransferState,
    pub drag: DragState,
    pub notification: NotificationSlot,
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
