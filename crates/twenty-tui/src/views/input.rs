//! Input line and key hints.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use twenty_core::Mode;

use crate::app::TuiApp;

/// Draw the input line and status bar.
pub fn draw(frame: &mut Frame, app: &TuiApp, input_area: Rect, status_area: Rect) {
    let finished = app.session.state().is_terminal();
    match app.session.mode() {
        Mode::HumanGuesses => {
            let input = Paragraph::new(format!("> {}", app.input_text)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
            frame.render_widget(input, input_area);

            // 2 for "> ", 1 for the left border
            let cursor_x = input_area.x + 1 + 2 + app.input_cursor as u16;
            let cursor_y = input_area.y + 1;
            if !app.show_help && cursor_x < input_area.x + input_area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, cursor_y));
            }
        }
        Mode::SystemGuesses => {
            let prompt = match app.session.pending_question() {
                Some(tag) => Line::from(vec![
                    Span::raw(format!("{} ", tag.question())),
                    Span::styled("[y / n]", Style::default().fg(Color::Yellow).bold()),
                ]),
                None => Line::from(Span::styled(
                    "Press Enter for a new game",
                    Style::default().fg(Color::DarkGray),
                )),
            };
            let input = Paragraph::new(prompt).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
            frame.render_widget(input, input_area);
        }
    }

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut spans = match (app.session.mode(), finished) {
        (_, true) => vec![key("Enter"), Span::raw(":new game  ")],
        (Mode::HumanGuesses, false) => vec![key("Enter"), Span::raw(":send  ")],
        (Mode::SystemGuesses, false) => vec![key("y/n"), Span::raw(":answer  ")],
    };
    spans.extend([
        key("F2"),
        Span::raw(":mode  "),
        key("F3"),
        Span::raw(":level  "),
        key("F4"),
        Span::raw(":strategy  "),
        key("\u{2191}\u{2193}"),
        Span::raw(":scroll  "),
        key("F1"),
        Span::raw(":help  "),
        key("Ctrl+C"),
        Span::raw(":quit"),
    ]);
    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::DarkGray).bg(Color::Black));

    frame.render_widget(status, status_area);
}
