use crate::kernel::{Action, Effect, InputDialogKind, PendingAction};
use std::path::PathBuf;

impl super::Store {
    pub(super) fn reduce_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ConfirmDialogAccept => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                let pending = dialog.on_confirm.take();
                dialog.reset();

                let effects = match pending {
                    Some(PendingAction::DeleteFile { name }) => vec![Effect::DeleteFile { name }],
                    None => Vec::new(),
                };
                super::DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::ConfirmDialogCancel => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                dialog.reset();
                super::DispatchResult::changed(true)
            }
            Action::OpenUploadDialog => {
                let dialog = &mut self.state.ui.input_dialog;
                if dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                dialog.reset();
                dialog.visible = true;
                dialog.title = "Upload file".to_string();
                dialog.kind = Some(InputDialogKind::UploadPath);
                super::DispatchResult::changed(true)
            }
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || ch.is_control() {
                    return super::DispatchResult::unchanged();
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                super::DispatchResult::changed(changed)
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return super::DispatchResult::unchanged();
                }

                let next = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                super::DispatchResult::changed(changed)
            }
            Action::InputDialogAccept => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }

                let Some(kind) = dialog.kind else {
                    dialog.reset();
                    return super::DispatchResult::changed(true);
                };

                match kind {
                    InputDialogKind::UploadPath => {
                        let value = unquote(dialog.value.trim());
                        if value.is_empty() {
                            let prev = dialog.error.replace("Path required".to_string());
                            return super::DispatchResult::changed(
                                prev.as_deref() != dialog.error.as_deref(),
                            );
                        }
                        let path = PathBuf::from(value);
                        dialog.reset();

                        let mut result = self.begin_upload(vec![path]);
                        result.state_changed = true;
                        result
                    }
                }
            }
            Action::InputDialogCancel => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult::unchanged();
                }
                dialog.reset();
                super::DispatchResult::changed(true)
            }
            _ => super::DispatchResult::unchanged(),
        }
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
