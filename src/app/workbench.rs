//! Workbench: owns the store, routes input, executes effects, renders.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, KeybindingService};
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action as KernelAction, AppState, Effect, FocusTarget, Store};
use crate::views::FileListView;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

mod input;
mod render;
mod util;

const HEADER_HEIGHT: u16 = 1;
const BANNER_HEIGHT: u16 = 1;
const DROP_ZONE_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const SCROLL_STEP: isize = 3;

pub struct Workbench {
    store: Store,
    runtime: AsyncRuntime,
    keybindings: KeybindingService,
    theme: UiTheme,
    file_list: FileListView,
    last_render_area: Option<Rect>,
    last_drop_zone_area: Option<Rect>,
}

impl Workbench {
    pub fn new(runtime: AsyncRuntime, settings: &Settings) -> Self {
        let mut keybindings = KeybindingService::new();
        keybindings.apply_rules(&settings.keybindings);

        let mut theme = UiTheme::default();
        theme.apply_settings(&settings.theme);

        Self {
            store: Store::new(AppState::new()),
            runtime,
            keybindings,
            theme,
            file_list: FileListView::new(),
            last_render_area: None,
            last_drop_zone_area: None,
        }
    }

    /// Issues the initial listing fetch.
    pub fn mount(&mut self) -> bool {
        self.dispatch_kernel(KernelAction::Mount)
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        let now = Instant::now();
        let action = match msg {
            AppMessage::FilesListed { request_id, files } => KernelAction::FilesListed {
                request_id,
                files,
                now,
            },
            AppMessage::FilesListFailed { request_id, error } => KernelAction::FilesListFailed {
                request_id,
                error,
                now,
            },
            AppMessage::UploadFinished { name, result } => {
                KernelAction::UploadFinished { name, result, now }
            }
            AppMessage::DownloadFinished { name, result } => {
                if let Ok(path) = &result {
                    tracing::info!(name = %name, path = %path.display(), "download saved");
                }
                KernelAction::DownloadFinished { name, result, now }
            }
            AppMessage::DeleteFinished { name, result } => {
                KernelAction::DeleteFinished { name, result, now }
            }
        };
        self.dispatch_kernel(action)
    }

    /// Expires the notification once its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.dispatch_kernel(KernelAction::Tick { now })
    }

    /// Earliest instant at which `tick` can change anything.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.store.state().notification.expires_at()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus()
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        tracing::debug!(?effect, "effect");
        match effect {
            Effect::ListFiles { request_id } => self.runtime.list_files(request_id),
            Effect::UploadFile { path } => {
                tracing::info!(path = %path.display(), "upload requested");
                self.runtime.upload_file(path);
            }
            Effect::DownloadFile { name } => {
                tracing::info!(name = %name, "download requested");
                self.runtime.download_file(name);
            }
            Effect::DeleteFile { name } => {
                tracing::info!(name = %name, "delete requested");
                self.runtime.delete_file(name);
            }
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }
}
