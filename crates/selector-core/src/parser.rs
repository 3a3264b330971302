//! Server response parsing
//!
//! The `sequences` endpoint answers in one of two shapes, chosen by
//! deployment configuration: a pre-rendered markup blob (`content` mode) or
//! a JSON array of [`Sequence`] objects (`sequences` mode). Array elements
//! with missing or mistyped fields are skipped rather than failing the whole
//! response; the transcript region should never go blank because one line is
//! damaged.

use serde::Deserialize;
use thiserror::Error;

use crate::types::Sequence;

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of sequences, got {0}")]
    NotAnArray(&'static str),
}

/// A parsed `sequences` response
#[derive(Debug, Clone, PartialEq)]
pub enum SequencesResponse {
    /// Pre-rendered markup, replaced into the display region verbatim
    Content(String),
    /// Structured lines rendered client-side; `skipped` counts malformed
    /// elements dropped from the array
    Sequences { lines: Vec<Sequence>, skipped: usize },
}

#[derive(Deserialize)]
struct ContentPayload {
    content: String,
}

/// Parse a `content`-mode response body
pub fn parse_content(body: &str) -> Result<SequencesResponse, ParseError> {
    let payload: ContentPayload = serde_json::from_str(body)?;
    Ok(SequencesResponse::Content(payload.content))
}

/// Parse a `sequences`-mode response body
pub fn parse_sequences(body: &str) -> Result<SequencesResponse, ParseError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(_) => return Err(ParseError::NotAnArray("an object")),
        serde_json::Value::String(_) => return Err(ParseError::NotAnArray("a string")),
        serde_json::Value::Null => return Err(ParseError::NotAnArray("null")),
        _ => return Err(ParseError::NotAnArray("a scalar")),
    };

    let mut lines = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for item in items {
        match serde_json::from_value::<Sequence>(item) {
            Ok(seq) => lines.push(seq),
            Err(_) => skipped += 1,
        }
    }

    Ok(SequencesResponse::Sequences { lines, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_mode() {
        let resp = parse_content(r#"{"content": "<p>Hi</p>"}"#).unwrap();
        assert_eq!(resp, SequencesResponse::Content("<p>Hi</p>".to_string()));
    }

    #[test]
    fn test_parse_content_missing_field() {
        assert!(parse_content(r#"{"body": "<p>Hi</p>"}"#).is_err());
    }

    #[test]
    fn test_parse_sequences() {
        let raw = r#"[
            {"start": {"hours": 0, "minutes": 1, "seconds": 5}, "text": "Hello"},
            {"start": {"hours": 0, "minutes": 2, "seconds": 0}, "text": "World"}
        ]"#;
        match parse_sequences(raw).unwrap() {
            SequencesResponse::Sequences { lines, skipped } => {
                assert_eq!(lines.len(), 2);
                assert_eq!(skipped, 0);
                assert_eq!(lines[0].text, "Hello");
                assert_eq!(lines[0].start.to_string(), "0:1:5");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sequences_skips_malformed() {
        let raw = r#"[
            {"start": {"hours": 0, "minutes": 0, "seconds": 1}, "text": "ok"},
            {"text": "no start"},
            {"start": {"hours": 0, "minutes": 0, "seconds": 3}},
            {"start": {"hours": 0, "minutes": 0, "seconds": 4}, "text": "also ok"}
        ]"#;
        match parse_sequences(raw).unwrap() {
            SequencesResponse::Sequences { lines, skipped } => {
                assert_eq!(lines.len(), 2);
                assert_eq!(skipped, 2);
                assert_eq!(lines[1].text, "also ok");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sequences_rejects_non_array() {
        assert!(parse_sequences(r#"{"content": "x"}"#).is_err());
        assert!(parse_sequences("null").is_err());
        assert!(parse_sequences("not json at all").is_err());
    }

    #[test]
    fn test_parse_sequences_empty_array() {
        match parse_sequences("[]").unwrap() {
            SequencesResponse::Sequences { lines, skipped } => {
                assert!(lines.is_empty());
                assert_eq!(skipped, 0);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
