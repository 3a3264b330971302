//! selector-client - Network edge of the transcript selector
//!
//! Resolves host handler names to URLs and fetches transcript content for a
//! selected language. All parsing lives in selector-core; this crate only
//! moves bytes.

pub mod client;
pub mod resolver;

pub use client::*;
pub use resolver::*;

pub use reqwest::Url;
