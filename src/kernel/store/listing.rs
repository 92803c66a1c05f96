use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_listing_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Mount | Action::Refresh => self.begin_refresh(),
            Action::ListSetViewHeight { height } => {
                super::DispatchResult::changed(self.state.listing.set_view_height(height))
            }
            Action::ListMoveSelection { delta } => {
                super::DispatchResult::changed(self.state.listing.move_selection(delta))
            }
            Action::ListScroll { delta } => {
                super::DispatchResult::changed(self.state.listing.scroll(delta))
            }
            Action::ListClickRow { row } => {
                super::DispatchResult::changed(self.state.listing.click_row(row))
            }
            Action::FilesListed {
                request_id,
                files,
                ..
            } => {
                if request_id != self.state.transfer.latest_list_request {
                    return super::DispatchResult::unchanged();
                }
                let was_loading = std::mem::replace(&mut self.state.transfer.loading, false);
                let listing_changed = self.state.listing.replace(files);
                super::DispatchResult::changed(was_loading || listing_changed)
            }
            Action::FilesListFailed {
                request_id,
                error,
                now,
            } => {
                if request_id != self.state.transfer.latest_list_request {
                    return super::DispatchResult::unchanged();
                }
                self.state.transfer.loading = false;
                self.state.listing.clear();
                self.state.notification.error(format!("Error: {error}"), now);
                super::DispatchResult::changed(true)
            }
            _ => super::DispatchResult::unchanged(),
        }
    }

    /// Never refused: overlapping refreshes each get a fresh id and only the newest one is
    /// applied when it resolves.
    pub(super) fn begin_refresh(&mut self) -> super::DispatchResult {
        let request_id = self.state.transfer.next_list_request();
        self.state.transfer.loading = true;
        super::DispatchResult {
            effects: vec![Effect::ListFiles { request_id }],
            state_changed: true,
        }
    }
}
