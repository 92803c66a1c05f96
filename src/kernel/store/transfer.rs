use crate::kernel::{Action, Effect};
use std::path::PathBuf;

impl super::Store {
    pub(super) fn reduce_transfer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SelectFiles { paths } => self.begin_upload(paths),
            Action::DownloadFile { name } => super::DispatchResult {
                effects: vec![Effect::DownloadFile { name }],
                state_changed: false,
            },
            Action::RequestDelete { name } => {
                let dialog = &mut self.state.ui.confirm_dialog;
                dialog.visible = true;
                dialog.message = format!("Delete file \"{name}\"?");
                dialog.on_confirm = Some(crate::kernel::PendingAction::DeleteFile { name });
                super::DispatchResult::changed(true)
            }
            Action::DragEnter | Action::DragOver => {
                let prev = std::mem::replace(&mut self.state.drag.active, true);
                super::DispatchResult::changed(!prev)
            }
            Action::DragLeave => {
                let prev = std::mem::replace(&mut self.state.drag.active, false);
                super::DispatchResult::changed(prev)
            }
            Action::Drop { paths } => {
                let was_active = std::mem::replace(&mut self.state.drag.active, false);
                let mut result = self.begin_upload(paths);
                result.state_changed |= was_active;
                result
            }
            Action::UploadFinished { name, result, now } => {
                self.state.transfer.uploading = false;
                match result {
                    Ok(()) => {
                        self.state
                            .notification
                            .success(format!("File \"{name}\" uploaded"), now);
                        let mut refresh = self.begin_refresh();
                        refresh.state_changed = true;
                        refresh
                    }
                    Err(error) => {
                        self.state
                            .notification
                            .error(format!("Upload failed: {error}"), now);
                        super::DispatchResult::changed(true)
                    }
                }
            }
            Action::DownloadFinished { name, result, now } => {
                match result {
                    Ok(_) => self
                        .state
                        .notification
                        .success(format!("File \"{name}\" downloaded"), now),
                    Err(error) => self
                        .state
                        .notification
                        .error(format!("Download failed: {error}"), now),
                }
                super::DispatchResult::changed(true)
            }
            Action::DeleteFinished { name, result, now } => match result {
                Ok(()) => {
                    self.state
                        .notification
                        .success(format!("File \"{name}\" deleted"), now);
                    let mut refresh = self.begin_refresh();
                    refresh.state_changed = true;
                    refresh
                }
                Err(error) => {
                    self.state
                        .notification
                        .error(format!("Delete failed: {error}"), now);
                    super::DispatchResult::changed(true)
                }
            },
            _ => super::DispatchResult::unchanged(),
        }
    }

    /// Select-File: the first path wins, the rest of the selection is ignored.
    pub(super) fn begin_upload(&mut self, paths: Vec<PathBuf>) -> super::DispatchResult {
        let Some(path) = paths.into_iter().next() else {
            return super::DispatchResult::unchanged();
        };
        self.state.transfer.uploading = true;
        super::DispatchResult {
            effects: vec![Effect::UploadFile { path }],
            state_changed: true,
        }
    }
}
