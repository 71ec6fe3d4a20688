//! Scrollable transcript panel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;
use crate::shared::{OutputStyle, bottom_scroll};

/// Draw the transcript, pinned to the newest line unless scrolled back.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.output_lines.len());
    for (i, ol) in app.output_lines.iter().enumerate() {
        // Gap before each new game's banner.
        if i > 0 && ol.style == OutputStyle::System && ol.text.starts_with("--- ") {
            lines.push(Line::default());
        }
        let (prefix, style) = ol.style.look();
        lines.push(Line::from(Span::styled(format!("{prefix}{}", ol.text), style)));
    }

    let scroll = bottom_scroll(&lines, area, app.output_scroll);
    let title = if app.output_scroll > 0 {
        format!(" Transcript (\u{2191}{}) ", app.output_scroll)
    } else {
        " Transcript ".to_string()
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
