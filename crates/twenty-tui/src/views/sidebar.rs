//! Sidebar panel: settings, counters, and remaining candidates.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use twenty_core::{GameState, Mode};

use crate::app::TuiApp;

/// Draw the sidebar status panel.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || inner.width < 6 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(inner);

    draw_info(frame, app, chunks[0]);
    if app.session.mode() == Mode::SystemGuesses {
        draw_candidates(frame, app, chunks[1]);
    }
}

fn field(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(value, Style::default().fg(color).bold()),
    ])
}

/// Settings and counters.
fn draw_info(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let session = &app.session;
    let state_color = match session.state() {
        GameState::Win => Color::Green,
        GameState::Lose => Color::Red,
        _ => Color::White,
    };

    let mut lines = vec![
        field("Mode", session.mode().to_string(), Color::Cyan),
        field("Level", session.config().difficulty.to_string(), Color::Cyan),
        field("State", session.state().to_string(), state_color),
    ];

    match session.mode() {
        Mode::HumanGuesses => {
            let guesses = session.attempts_remaining();
            let guess_color = if guesses <= 1 {
                Color::Red
            } else if guesses <= 2 {
                Color::Yellow
            } else {
                Color::Green
            };
            lines.push(field("Guesses", guesses.to_string(), guess_color));
            lines.push(field(
                "Questions",
                session.questions_remaining().to_string(),
                Color::White,
            ));
            lines.push(field(
                "Hints",
                format!("{}/{}", session.hints_shown(), session.secret().hints.len()),
                Color::White,
            ));
            lines.push(Line::from(Span::styled(
                format!("Oracle: {}", app.oracle_label),
                Style::default().fg(Color::DarkGray),
            )));
        }
        Mode::SystemGuesses => {
            lines.push(field(
                "Strategy",
                session.config().strategy.to_string(),
                Color::Cyan,
            ));
            lines.push(field(
                "Asked",
                session.questions_asked().to_string(),
                Color::White,
            ));
            lines.push(field(
                "Questions",
                session.questions_remaining().to_string(),
                Color::White,
            ));
            lines.push(Line::from(Span::styled(
                format!("You are {}", session.secret().name),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Characters still consistent with the answers.
fn draw_candidates(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .candidates()
        .iter()
        .map(|c| {
            ListItem::new(Line::from(Span::styled(
                format!(" \u{25b8} {}", c.name),
                Style::default().fg(Color::Magenta),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("Candidates ({})", app.session.candidates().len()))
            .borders(Borders::NONE)
            .title_style(Style::default().fg(Color::Magenta).bold()),
    );
    frame.render_widget(list, area);
}
