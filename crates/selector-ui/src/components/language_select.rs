//! Language selection pane

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use selector_core::LanguageOption;

use crate::App;

/// Render the language selection pane
pub fn render_language_select(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Languages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = if app.languages.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No transcripts available",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.languages
            .iter()
            .map(|opt| format_language_item(opt, opt.code == app.current_lang))
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.languages.is_empty() {
        state.select(Some(app.highlighted));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Format one selector entry: active language gets a marker and color
fn format_language_item(option: &LanguageOption, is_current: bool) -> ListItem<'static> {
    let marker = if is_current { "●" } else { " " };
    let style = if is_current {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", marker), style),
        Span::styled(option.display_label().to_string(), style),
        Span::styled(
            format!("  ({})", option.code),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}
