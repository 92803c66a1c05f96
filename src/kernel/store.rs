use crate::core::Command;

use super::{Action, AppState, Effect, FocusTarget};

mod dialogs;
mod listing;
mod transfer;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Tick { now } => DispatchResult::changed(self.state.notification.expire(now)),
            Action::Quit => {
                let prev = self.state.ui.should_quit;
                self.state.ui.should_quit = true;
                DispatchResult::changed(!prev)
            }
            action @ (Action::Mount
            | Action::Refresh
            | Action::ListSetViewHeight { .. }
            | Action::ListMoveSelection { .. }
            | Action::ListScroll { .. }
            | Action::ListClickRow { .. }
            | Action::FilesListed { .. }
            | Action::FilesListFailed { .. }) => self.reduce_listing_action(action),
            action @ (Action::SelectFiles { .. }
            | Action::DownloadFile { .. }
            | Action::RequestDelete { .. }
            | Action::DragEnter
            | Action::DragOver
            | Action::DragLeave
            | Action::Drop { .. }
            | Action::UploadFinished { .. }
            | Action::DownloadFinished { .. }
            | Action::DeleteFinished { .. }) => self.reduce_transfer_action(action),
            action @ (Action::ConfirmDialogAccept
            | Action::ConfirmDialogCancel
            | Action::OpenUploadDialog
            | Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel) => self.reduce_dialog_action(action),
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        if command == Command::Quit {
            return self.dispatch(Action::Quit);
        }

        match self.state.ui.focus() {
            FocusTarget::ConfirmDialog => match command {
                Command::Confirm => self.dispatch(Action::ConfirmDialogAccept),
                Command::Cancel => self.dispatch(Action::ConfirmDialogCancel),
                _ => DispatchResult::unchanged(),
            },
            FocusTarget::InputDialog => match command {
                Command::Confirm => self.dispatch(Action::InputDialogAccept),
                Command::Cancel => self.dispatch(Action::InputDialogCancel),
                _ => DispatchResult::unchanged(),
            },
            FocusTarget::FileList => self.dispatch_list_command(command),
        }
    }

    fn dispatch_list_command(&mut self, command: Command) -> DispatchResult {
        let page = self.state.listing.view_height.max(1) as isize;
        let selected = self.state.listing.selected_name().map(str::to_string);
        match command {
            Command::CursorUp => self.dispatch(Action::ListMoveSelection { delta: -1 }),
            Command::CursorDown => self.dispatch(Action::ListMoveSelection { delta: 1 }),
            Command::PageUp => self.dispatch(Action::ListMoveSelection { delta: -page }),
            Command::PageDown => self.dispatch(Action::ListMoveSelection { delta: page }),
            Command::CursorFirst => DispatchResult::changed(self.state.listing.select_first()),
            Command::CursorLast => DispatchResult::changed(self.state.listing.select_last()),
            // The refresh control is disabled while a fetch is in flight.
            Command::Refresh if self.state.transfer.loading => DispatchResult::unchanged(),
            Command::Refresh => self.dispatch(Action::Refresh),
            // The file picker is disabled while an upload is in flight.
            Command::PickUpload if self.state.transfer.uploading => DispatchResult::unchanged(),
            Command::PickUpload => self.dispatch(Action::OpenUploadDialog),
            Command::DownloadSelected | Command::Confirm => match selected {
                Some(name) => self.dispatch(Action::DownloadFile { name }),
                None => DispatchResult::unchanged(),
            },
            Command::DeleteSelected => match selected {
                Some(name) => self.dispatch(Action::RequestDelete { name }),
                None => DispatchResult::unchanged(),
            },
            Command::Cancel | Command::Quit | Command::Custom(_) => DispatchResult::unchanged(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
