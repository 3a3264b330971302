//! UI components for the transcript selector

pub mod header;
pub mod footer;
pub mod language_select;
pub mod transcript_pane;
pub mod overlays;

pub use header::*;
pub use footer::*;
pub use language_select::*;
pub use transcript_pane::*;
pub use overlays::*;
