//! selector-ui - Widget state and TUI components for the transcript selector
//!
//! The widget state is sans-IO: language selections enqueue fetch requests
//! that a runner executes, and completions come back as outcomes. This keeps
//! every behavior contract of the widget testable without a server.

pub mod app;
pub mod components;
pub mod event;

pub use app::*;
pub use event::*;
