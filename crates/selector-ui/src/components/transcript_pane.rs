//! Transcript display region

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use crate::{App, Display};

/// Render the transcript region. While folded only the frame is drawn, with
/// the fold state class in the title so the visibility state stays visible.
pub fn render_transcript_pane(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Transcript ({}) ", app.fold.class_name()))
        .borders(Borders::ALL)
        .border_style(if app.fold.is_folded() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        });

    if app.fold.is_folded() {
        frame.render_widget(block, area);
        return;
    }

    let inner = block.inner(area);
    let content = display_lines(&app.display);
    let total_lines = content.len() as u16;

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(paragraph, area);

    if total_lines > inner.height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        let mut scrollbar_state = ScrollbarState::new(total_lines as usize)
            .position(app.scroll as usize)
            .viewport_content_length(inner.height as usize);

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Turn the display region content into terminal lines
fn display_lines(display: &Display) -> Vec<Line<'static>> {
    match display {
        Display::Empty => vec![Line::from(Span::styled(
            "No transcript loaded",
            Style::default().fg(Color::DarkGray),
        ))],
        // Pre-rendered markup is passed through as-is
        Display::Content(markup) => markup
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect(),
        Display::Lines(lines) => lines
            .iter()
            .map(|line| {
                let text_style = if line.first {
                    Style::default().fg(Color::White).bold()
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:>8}  ", line.timecode),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(line.text.clone(), text_style),
                ])
            })
            .collect(),
    }
}
