//! Core type definitions for transcript selector data

use serde::{Deserialize, Serialize};

/// Start time of one transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Timecode {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

impl std::fmt::Display for Timecode {
    // Matches the host markup: components are not zero-padded
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// A single time-coded transcript line as sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub start: Timecode,
    pub text: String,
}

/// Per-user state handed over by the host at initialization
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserState {
    /// Language code of the last transcript the user viewed, if any.
    /// The host sends this as `current_language`; empty/null means the
    /// server decides which transcript to serve.
    #[serde(default, alias = "current_language")]
    pub current_lang: Option<String>,
}

impl UserState {
    /// Language code to request at construction time
    pub fn lang(&self) -> &str {
        self.current_lang.as_deref().unwrap_or("")
    }
}

/// One entry of the language selection control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageOption {
    /// Language code sent to the server (e.g. "en", "de")
    #[serde(alias = "language")]
    pub code: String,
    /// Human-readable label shown in the selector
    #[serde(default)]
    pub label: String,
}

impl LanguageOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }

    /// Label if present, otherwise the code itself
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.code
        } else {
            &self.label
        }
    }
}

/// Initialization payload from the host runtime
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitArgs {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub user_state: UserState,
    /// Available transcript languages
    #[serde(default)]
    pub options: Vec<LanguageOption>,
}

/// Visibility state of the transcript region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldState {
    #[default]
    Unfolded,
    Folded,
}

impl FoldState {
    pub fn toggle(self) -> Self {
        match self {
            FoldState::Unfolded => FoldState::Folded,
            FoldState::Folded => FoldState::Unfolded,
        }
    }

    /// State class communicated to stylesheets
    pub fn class_name(self) -> &'static str {
        match self {
            FoldState::Unfolded => "unfolded",
            FoldState::Folded => "folded",
        }
    }

    pub fn is_folded(self) -> bool {
        matches!(self, FoldState::Folded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timecode_display_unpadded() {
        let tc = Timecode {
            hours: 0,
            minutes: 1,
            seconds: 5,
        };
        assert_eq!(tc.to_string(), "0:1:5");
    }

    #[test]
    fn test_fold_round_trip() {
        let state = FoldState::default();
        assert_eq!(state.class_name(), "unfolded");
        let toggled = state.toggle();
        assert_eq!(toggled.class_name(), "folded");
        assert!(toggled.is_folded());
        assert_eq!(toggled.toggle(), state);
    }

    #[test]
    fn test_init_args_host_payload() {
        let raw = r#"{
            "display_name": "A very cool track",
            "user_state": {"current_language": null},
            "options": [
                {"language": "en", "label": "English"},
                {"language": "de", "label": "Deutsch"}
            ]
        }"#;
        let init: InitArgs = serde_json::from_str(raw).unwrap();
        assert_eq!(init.display_name, "A very cool track");
        assert_eq!(init.user_state.lang(), "");
        assert_eq!(init.options.len(), 2);
        assert_eq!(init.options[0].code, "en");
        assert_eq!(init.options[1].display_label(), "Deutsch");
    }

    #[test]
    fn test_user_state_current_lang_alias() {
        let state: UserState = serde_json::from_str(r#"{"current_lang": "uk"}"#).unwrap();
        assert_eq!(state.lang(), "uk");
        let state: UserState = serde_json::from_str(r#"{"current_language": "de"}"#).unwrap();
        assert_eq!(state.lang(), "de");
        let state: UserState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.lang(), "");
    }
}
