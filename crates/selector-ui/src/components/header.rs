//! Header component

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

/// Render the header
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let lang = if app.current_lang.is_empty() {
        "default".to_string()
    } else {
        app.current_lang.clone()
    };

    let header_text = format!("{} │ transcript: {}", app.title(), lang);

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}
