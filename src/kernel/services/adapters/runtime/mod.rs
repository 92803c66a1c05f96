//! Async runtime adapter: executes transfer effects and sends completions back to the UI thread.

mod async_runtime;
mod message;

pub use async_runtime::AsyncRuntime;
pub use message::AppMessage;
