//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the store and the transfer client build without terminal crates.

pub mod crossterm;
pub mod terminal_guard;
