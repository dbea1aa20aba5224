//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator and the dispatcher that
//! runs store calls off the UI loop.

mod dispatcher;
mod handlers;
mod r#loop;

pub use dispatcher::Dispatcher;
pub use r#loop::EventLoop;
