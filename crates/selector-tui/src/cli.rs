//! CLI argument parsing

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;

use selector_client::{RequestMethod, ResponseMode};
use selector_core::{InitArgs, LanguageOption, UserState};

/// Transcript language selector widget
#[derive(Parser, Debug)]
#[command(name = "transcript-selector")]
#[command(version)]
#[command(about = "Interactive transcript language selector for embedded audio players")]
pub struct Cli {
    /// Base URL of the host block; the `sequences` handler URL is resolved
    /// against it
    #[arg(value_name = "BASE_URL")]
    pub base_url: String,

    /// Initial language code (overrides the init-args user state)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Available languages as comma-separated `code=Label` pairs
    /// (e.g. "en=English,de=Deutsch"); bare codes are accepted
    #[arg(long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Host init-args JSON file (display_name, user_state, options)
    #[arg(long)]
    pub init_args: Option<PathBuf>,

    /// Display name shown in the header
    #[arg(long)]
    pub display_name: Option<String>,

    /// Request method for the sequences endpoint (get or post)
    #[arg(long, default_value = "get", value_parser = parse_method)]
    pub method: RequestMethod,

    /// Response shape (content or sequences)
    #[arg(long, default_value = "content", value_parser = parse_mode)]
    pub mode: ResponseMode,

    /// Write logs to this file; filter via RUST_LOG
    #[arg(long, env = "TRANSCRIPT_SELECTOR_LOG")]
    pub log_file: Option<PathBuf>,
}

fn parse_method(s: &str) -> Result<RequestMethod, String> {
    RequestMethod::from_str(s)
}

fn parse_mode(s: &str) -> Result<ResponseMode, String> {
    ResponseMode::from_str(s)
}

impl Cli {
    /// Assemble the widget init payload from the init-args file and flags;
    /// flags win over the file.
    pub fn load_init_args(&self) -> Result<InitArgs> {
        let mut init = match &self.init_args {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read init args: {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid init args: {}", path.display()))?
            }
            None => InitArgs::default(),
        };

        if let Some(langs) = &self.languages {
            init.options = langs.iter().map(|s| parse_language(s)).collect();
        }
        if let Some(lang) = &self.lang {
            init.user_state = UserState {
                current_lang: Some(lang.clone()),
            };
        }
        if let Some(name) = &self.display_name {
            init.display_name = name.clone();
        }

        Ok(init)
    }
}

/// Parse a `code=Label` pair; a bare code gets the code as its label
fn parse_language(raw: &str) -> LanguageOption {
    match raw.split_once('=') {
        Some((code, label)) => LanguageOption::new(code.trim(), label.trim()),
        None => LanguageOption::new(raw.trim(), ""),
    }
}
