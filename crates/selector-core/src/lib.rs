//! selector-core - Core types and business logic for the transcript selector
//!
//! This crate provides the data model for time-coded transcript lines, the
//! lenient parsing of server responses, and the pure rendering step that
//! turns sequences into displayable lines.

pub mod types;
pub mod parser;
pub mod render;

pub use types::*;
pub use parser::*;
pub use render::*;
