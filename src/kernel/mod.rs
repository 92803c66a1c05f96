//! Headless application core (state/action/effect).

pub mod action;
pub mod drop_payload;
pub mod effect;
pub mod file_icon;
pub mod notification;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use drop_payload::parse_drop_payload;
pub use effect::Effect;
pub use file_icon::FileIcon;
pub use notification::{Notification, NotificationKind, NotificationSlot, NOTIFICATION_TTL};
pub use state::{
    AppState, ConfirmDialogState, DragState, FocusTarget, InputDialogKind, InputDialogState,
    ListingState, PendingAction, TransferState, UiState,
};
pub use store::{DispatchResult, Store};
