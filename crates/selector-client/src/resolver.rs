//! Handler URL resolution
//!
//! The host runtime owns the mapping from handler names to callable URLs.
//! The widget only knows the name of its data handler (`sequences`) and asks
//! a resolver for the rest.

use reqwest::Url;
use thiserror::Error;

/// Name of the transcript data handler
pub const SEQUENCES_HANDLER: &str = "sequences";

/// Resolution errors
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid handler URL for '{handler}': {message}")]
    InvalidHandler { handler: String, message: String },
}

/// Resolves a handler name to a callable URL
pub trait HandlerUrlResolver {
    fn handler_url(&self, handler: &str) -> Result<Url, ResolveError>;
}

/// Resolver that joins handler names onto a host base URL
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base: Url,
}

impl BaseUrlResolver {
    pub fn new(base: Url) -> Self {
        Self { base }
    }
}

impl HandlerUrlResolver for BaseUrlResolver {
    fn handler_url(&self, handler: &str) -> Result<Url, ResolveError> {
        // Url::join treats a base without a trailing slash as a file and
        // would replace its last segment, so force directory semantics.
        let mut base = self.base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(handler).map_err(|e| ResolveError::InvalidHandler {
            handler: handler.to_string(),
            message: e.to_string(),
        })
    }
}
