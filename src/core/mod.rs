//! Core input abstractions shared by the kernel and the terminal frontend:
//! - Event: terminal-independent key/mouse/paste events
//! - Command: semantic commands bound to keys
//! - View: render + input contract for frontends

pub mod command;
pub mod event;
#[cfg(feature = "tui")]
pub mod view;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyModifiers};
