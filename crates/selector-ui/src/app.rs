//! Widget state and logic

use selector_client::FetchError;
use selector_core::{
    render_sequences, FoldState, InitArgs, LanguageOption, RenderedLine, SequencesResponse,
};
use tracing::debug;

/// An outbound request the widget wants executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Language the request is tagged with
    pub lang: String,
}

/// Completion of a fetch, tagged with the language it was issued for
#[derive(Debug)]
pub struct FetchOutcome {
    pub lang: String,
    pub result: Result<SequencesResponse, FetchError>,
}

/// Content of the transcript display region
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Display {
    /// Nothing loaded yet
    #[default]
    Empty,
    /// Pre-rendered markup, shown verbatim
    Content(String),
    /// Client-rendered transcript lines
    Lines(Vec<RenderedLine>),
}

/// Widget state
pub struct App {
    /// Title shown in the header
    pub display_name: String,
    /// Available transcript languages
    pub languages: Vec<LanguageOption>,
    /// Highlighted entry in the language selector
    pub highlighted: usize,
    /// Last explicitly selected language (or the initial user state)
    pub current_lang: String,
    /// Visibility of the transcript region
    pub fold: FoldState,
    /// Transcript region content
    pub display: Display,
    /// Requests waiting to be executed by the runner
    pending: Vec<FetchRequest>,
    /// Transcript pane scroll offset
    pub scroll: u16,
    /// Show help overlay
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Error message to display
    pub error_message: Option<String>,
}

impl App {
    /// Create the widget from the host init payload. Issues the initial
    /// fetch for the user's current language (empty string lets the server
    /// pick a default).
    pub fn new(init: InitArgs) -> Self {
        let current_lang = init.user_state.lang().to_string();
        let highlighted = init
            .options
            .iter()
            .position(|opt| opt.code == current_lang)
            .unwrap_or(0);

        Self {
            display_name: init.display_name,
            languages: init.options,
            highlighted,
            pending: vec![FetchRequest {
                lang: current_lang.clone(),
            }],
            current_lang,
            fold: FoldState::default(),
            display: Display::default(),
            scroll: 0,
            show_help: false,
            status_message: None,
            error_message: None,
        }
    }

    /// Move the selector highlight up
    pub fn select_prev(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    /// Move the selector highlight down
    pub fn select_next(&mut self) {
        if self.highlighted + 1 < self.languages.len() {
            self.highlighted += 1;
        }
    }

    /// Commit the highlighted language
    pub fn confirm_selection(&mut self) {
        if let Some(option) = self.languages.get(self.highlighted) {
            let code = option.code.clone();
            self.select_language(code);
        }
    }

    /// Switch to a language and request its transcript. Exactly one request
    /// is issued per selection; a failure later leaves the current display
    /// untouched.
    pub fn select_language(&mut self, lang: String) {
        self.current_lang = lang.clone();
        self.pending.push(FetchRequest { lang });
    }

    /// Flip transcript visibility. Purely local, no network involved.
    pub fn toggle_fold(&mut self) {
        self.fold = self.fold.toggle();
    }

    /// Drain requests for the runner to execute
    pub fn take_pending_fetches(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Apply a fetch completion. Last response wins: outcomes tagged with a
    /// language other than the current selection are stale and dropped.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.lang != self.current_lang {
            debug!(
                stale = %outcome.lang,
                current = %self.current_lang,
                "dropping stale sequences response"
            );
            return;
        }

        match outcome.result {
            Ok(SequencesResponse::Content(markup)) => {
                self.display = Display::Content(markup);
                self.scroll = 0;
                self.error_message = None;
                self.status_message = None;
            }
            Ok(SequencesResponse::Sequences { lines, skipped }) => {
                self.display = Display::Lines(render_sequences(&lines));
                self.scroll = 0;
                self.error_message = None;
                self.status_message =
                    (skipped > 0).then(|| format!("{} malformed line(s) skipped", skipped));
            }
            Err(e) => {
                // Display stays as it was
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Scroll the transcript pane up
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll the transcript pane down
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Header title
    pub fn title(&self) -> String {
        if self.display_name.is_empty() {
            "Audio transcript".to_string()
        } else {
            self.display_name.clone()
        }
    }

    /// Status line info
    pub fn status_info(&self) -> String {
        let lang = if self.current_lang.is_empty() {
            "default"
        } else {
            &self.current_lang
        };
        format!("Lang: {} | {}", lang, self.fold.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selector_core::{ParseError, Sequence, Timecode, UserState};

    fn make_init(current_lang: &str) -> InitArgs {
        InitArgs {
            display_name: "Track".to_string(),
            user_state: UserState {
                current_lang: Some(current_lang.to_string()),
            },
            options: vec![
                LanguageOption::new("en", "English"),
                LanguageOption::new("de", "Deutsch"),
            ],
        }
    }

    fn sequences_for(text: &str) -> SequencesResponse {
        SequencesResponse::Sequences {
            lines: vec![Sequence {
                start: Timecode {
                    hours: 0,
                    minutes: 1,
                    seconds: 5,
                },
                text: text.to_string(),
            }],
            skipped: 0,
        }
    }

    #[test]
    fn test_construction_issues_initial_request() {
        let mut app = App::new(make_init("en"));
        assert_eq!(app.current_lang, "en");
        assert!(!app.fold.is_folded());
        let pending = app.take_pending_fetches();
        assert_eq!(pending, vec![FetchRequest { lang: "en".to_string() }]);
        // Drained; nothing further without user interaction
        assert!(app.take_pending_fetches().is_empty());
    }

    #[test]
    fn test_empty_initial_lang_still_fetches() {
        let mut app = App::new(InitArgs::default());
        assert_eq!(app.current_lang, "");
        let pending = app.take_pending_fetches();
        assert_eq!(pending, vec![FetchRequest { lang: String::new() }]);
    }

    #[test]
    fn test_select_language_issues_one_request() {
        let mut app = App::new(make_init("en"));
        app.take_pending_fetches();

        app.select_language("de".to_string());
        assert_eq!(app.current_lang, "de");
        let pending = app.take_pending_fetches();
        assert_eq!(pending, vec![FetchRequest { lang: "de".to_string() }]);
    }

    #[test]
    fn test_confirm_selection_uses_highlighted_option() {
        let mut app = App::new(make_init("en"));
        app.take_pending_fetches();

        app.select_next();
        app.confirm_selection();
        assert_eq!(app.current_lang, "de");
        assert_eq!(
            app.take_pending_fetches(),
            vec![FetchRequest { lang: "de".to_string() }]
        );
    }

    #[test]
    fn test_stale_response_never_overwrites() {
        let mut app = App::new(make_init("en"));
        app.take_pending_fetches();

        // User selects de before the en response lands
        app.select_language("de".to_string());

        app.apply_outcome(FetchOutcome {
            lang: "en".to_string(),
            result: Ok(sequences_for("english line")),
        });
        assert_eq!(app.display, Display::Empty);

        app.apply_outcome(FetchOutcome {
            lang: "de".to_string(),
            result: Ok(sequences_for("german line")),
        });
        match &app.display {
            Display::Lines(lines) => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].text, "german line");
                assert_eq!(lines[0].timecode, "0:1:5");
            }
            other => panic!("unexpected display: {:?}", other),
        }
    }

    #[test]
    fn test_failed_fetch_keeps_previous_display() {
        let mut app = App::new(make_init("en"));
        app.apply_outcome(FetchOutcome {
            lang: "en".to_string(),
            result: Ok(sequences_for("english line")),
        });
        let before = app.display.clone();

        app.select_language("de".to_string());
        app.apply_outcome(FetchOutcome {
            lang: "de".to_string(),
            result: Err(FetchError::Parse(ParseError::NotAnArray("null"))),
        });

        assert_eq!(app.display, before);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_content_mode_replaces_verbatim() {
        let mut app = App::new(make_init("en"));
        app.apply_outcome(FetchOutcome {
            lang: "en".to_string(),
            result: Ok(SequencesResponse::Content("<p>Hi</p>".to_string())),
        });
        assert_eq!(app.display, Display::Content("<p>Hi</p>".to_string()));
    }

    #[test]
    fn test_skipped_lines_surface_in_status() {
        let mut app = App::new(make_init("en"));
        app.apply_outcome(FetchOutcome {
            lang: "en".to_string(),
            result: Ok(SequencesResponse::Sequences {
                lines: vec![],
                skipped: 2,
            }),
        });
        assert_eq!(
            app.status_message.as_deref(),
            Some("2 malformed line(s) skipped")
        );
    }

    #[test]
    fn test_fold_toggle_round_trip() {
        let mut app = App::new(make_init("en"));
        assert_eq!(app.fold.class_name(), "unfolded");
        app.toggle_fold();
        assert_eq!(app.fold.class_name(), "folded");
        app.toggle_fold();
        assert_eq!(app.fold.class_name(), "unfolded");
        // Toggling never touches the pending queue
        app.take_pending_fetches();
        app.toggle_fold();
        assert!(app.take_pending_fetches().is_empty());
    }

    #[test]
    fn test_highlight_starts_at_current_lang() {
        let app = App::new(make_init("de"));
        assert_eq!(app.highlighted, 1);
        let app = App::new(make_init(""));
        assert_eq!(app.highlighted, 0);
    }
}
