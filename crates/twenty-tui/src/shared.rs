//! Shared utilities for views: output types, layout helpers, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use twenty_core::{Entry, Speaker};

/// Visual style for a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Something the player said (yellow, "> " prefix).
    Command,
    /// A reply from the game (white).
    Result,
    /// Errors and failed oracle calls (red).
    Error,
    /// Intro, hints, and outcomes (cyan).
    System,
}

impl OutputStyle {
    /// Prefix and style the transcript panel draws this kind of line with.
    pub fn look(self) -> (&'static str, Style) {
        match self {
            Self::Command => ("> ", Style::default().fg(Color::Yellow).bold()),
            Self::Result => ("", Style::default().fg(Color::White)),
            Self::Error => ("! ", Style::default().fg(Color::Red)),
            Self::System => ("", Style::default().fg(Color::Cyan).italic()),
        }
    }

    /// Style for a transcript entry.
    pub fn for_entry(entry: &Entry) -> Self {
        match entry {
            Entry::OracleFailure { .. } => Self::Error,
            Entry::Narration { .. } | Entry::Hint { .. } | Entry::Outcome { .. } => Self::System,
            _ if entry.speaker() == Speaker::Human => Self::Command,
            _ => Self::Result,
        }
    }
}

/// A single line in the transcript panel.
#[derive(Debug, Clone)]
pub struct OutputLine {
    /// Visual style of this line.
    pub style: OutputStyle,
    /// The text content.
    pub text: String,
}

/// Rows `lines` take up once wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width);
    lines
        .iter()
        .map(|l| match width {
            0 => 1,
            w => l.width().max(1).div_ceil(w) as u16,
        })
        .fold(0u16, u16::saturating_add)
}

/// Scroll offset for a bordered panel that sticks to the bottom, moved
/// `back` rows up from there.
pub fn bottom_scroll(lines: &[Line], area: Rect, back: u16) -> u16 {
    let height = wrapped_height(lines, area.width.saturating_sub(2));
    height
        .saturating_sub(area.height.saturating_sub(2))
        .saturating_sub(back)
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("You Guess:"),
        Line::from("  Enter       Send a question, 'guess <name>', or 'hint'"),
        Line::from("  Esc         Clear input"),
        Line::from("  \u{2190} / \u{2192}       Move cursor"),
        Line::from(""),
        Line::from("I Guess:"),
        Line::from("  y / n       Answer the question"),
        Line::from(""),
        Line::from("Settings:"),
        Line::from("  F2          Switch mode"),
        Line::from("  F3          Next difficulty"),
        Line::from("  F4          Next question strategy"),
        Line::from("  F5          New game"),
        Line::from(""),
        Line::from("  \u{2191} / \u{2193}       Scroll transcript"),
        Line::from("  F1          Toggle this help"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use twenty_core::TraitTag;

    #[test]
    fn entry_styles() {
        assert_eq!(
            OutputStyle::for_entry(&Entry::narration("hi")),
            OutputStyle::System
        );
        let failure = Entry::OracleFailure {
            error: "down".into(),
            timestamp: Entry::narration("").timestamp(),
        };
        assert_eq!(OutputStyle::for_entry(&failure), OutputStyle::Error);
        let answer = Entry::HumanAnswer {
            tag: TraitTag::God,
            answer: true,
            remaining: 1,
            timestamp: Entry::narration("").timestamp(),
        };
        assert_eq!(OutputStyle::for_entry(&answer), OutputStyle::Command);
        let question = Entry::SystemQuestion {
            tag: TraitTag::God,
            number: 1,
            timestamp: Entry::narration("").timestamp(),
        };
        assert_eq!(OutputStyle::for_entry(&question), OutputStyle::Result);
    }

    #[test]
    fn wrapping_counts_rows() {
        let lines = vec![Line::from("x".repeat(25)), Line::from(""), Line::from("short")];
        assert_eq!(wrapped_height(&lines, 10), 3 + 1 + 1);
        assert_eq!(wrapped_height(&lines, 0), 3);
    }

    #[test]
    fn scroll_sticks_to_bottom() {
        let lines: Vec<Line> = (0..20).map(|i| Line::from(format!("line {i}"))).collect();
        // 10 rows high with borders leaves 8 visible
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(bottom_scroll(&lines, area, 0), 12);
        assert_eq!(bottom_scroll(&lines, area, 5), 7);
        assert_eq!(bottom_scroll(&lines, area, 50), 0);
        assert_eq!(bottom_scroll(&lines[..3], area, 0), 0);
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }
}
