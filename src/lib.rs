//! filedeck - terminal client for a remote file store
//!
//! Modules:
//! - core: input events, commands, the View contract
//! - kernel: state, actions, effects, store; services (HTTP client, runtime, settings)
//! - tui: crossterm translation and terminal lifecycle
//! - views: file list widget
//! - app: Workbench (layout, input routing, effect execution)

#[cfg(feature = "tui")]
pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
