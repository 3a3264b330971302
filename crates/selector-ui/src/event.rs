//! Event handling for the selector TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Move language highlight up
    SelectPrev,
    /// Move language highlight down
    SelectNext,
    /// Commit the highlighted language
    ConfirmLanguage,
    /// Fold/unfold the transcript region
    ToggleFold,
    /// Scroll transcript up
    ScrollUp,
    /// Scroll transcript down
    ScrollDown,
    /// Toggle help overlay
    ToggleHelp,
    /// Redraw screen
    Redraw,
    /// No action
    None,
}

/// Handle a terminal event and return the corresponding action
pub fn handle_event(event: Event) -> AppAction {
    match event {
        Event::Key(key) => handle_key(key),
        Event::Resize(_, _) => AppAction::Redraw,
        _ => AppAction::None,
    }
}

/// Handle a key event
fn handle_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('l') => AppAction::Redraw,
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,

        // Language selection
        KeyCode::Char('k') | KeyCode::Up => AppAction::SelectPrev,
        KeyCode::Char('j') | KeyCode::Down => AppAction::SelectNext,
        KeyCode::Enter => AppAction::ConfirmLanguage,

        // Transcript region
        KeyCode::Char('t') | KeyCode::Char(' ') => AppAction::ToggleFold,
        KeyCode::PageUp => AppAction::ScrollUp,
        KeyCode::PageDown => AppAction::ScrollDown,

        KeyCode::Char('?') => AppAction::ToggleHelp,
        KeyCode::Char('r') => AppAction::Redraw,

        _ => AppAction::None,
    }
}

/// Key binding help text
pub const HELP_TEXT: &str = r#"
╭─────────────────────────────────────╮
│         transcript-selector         │
│             Key Bindings            │
├─────────────────────────────────────┤
│                                     │
│  Languages                          │
│  ─────────                          │
│  j/k, ↑/↓    Highlight language     │
│  Enter       Load transcript        │
│                                     │
│  Transcript                         │
│  ──────────                         │
│  t, Space    Fold/unfold            │
│  PgUp/PgDn   Scroll                 │
│                                     │
│  Other                              │
│  ─────                              │
│  r           Redraw screen          │
│  ?           Show this help         │
│  q, Esc      Quit                   │
│                                     │
╰─────────────────────────────────────╯
"#;
