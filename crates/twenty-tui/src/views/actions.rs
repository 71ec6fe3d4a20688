//! Top action bar with clickable buttons.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use twenty_core::Mode;

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reveal the next hint.
    Hint,
    /// Prefill the input with "guess ".
    Guess,
    /// Answer yes.
    Yes,
    /// Answer no.
    No,
    /// Start over with the same settings.
    NewGame,
    /// Switch mode.
    Mode,
    /// Next difficulty.
    Difficulty,
    /// Next question strategy.
    Strategy,
    /// Toggle the help popup.
    Help,
}

/// An action button definition.
struct ActionButton {
    label: &'static str,
    action: Action,
    /// Buttons that only put text in the input are drawn differently.
    prefill: bool,
}

const fn button(label: &'static str, action: Action) -> ActionButton {
    ActionButton {
        label,
        action,
        prefill: false,
    }
}

const HUMAN_ROW: &[ActionButton] = &[
    ActionButton {
        label: "Guess",
        action: Action::Guess,
        prefill: true,
    },
    button("Hint", Action::Hint),
    button("New", Action::NewGame),
];

const SYSTEM_ROW: &[ActionButton] = &[
    button("Yes", Action::Yes),
    button("No", Action::No),
    button("New", Action::NewGame),
];

const SETTINGS_ROW: &[ActionButton] = &[
    button("Mode", Action::Mode),
    button("Level", Action::Difficulty),
    button("Strategy", Action::Strategy),
    button("Help", Action::Help),
];

fn rows(mode: Mode) -> [&'static [ActionButton]; 2] {
    match mode {
        Mode::HumanGuesses => [HUMAN_ROW, SETTINGS_ROW],
        Mode::SystemGuesses => [SYSTEM_ROW, SETTINGS_ROW],
    }
}

/// Draw the action bar. Game buttons on top, settings below.
pub fn draw(frame: &mut Frame, area: Rect, mode: Mode) {
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    for (row_idx, row_buttons) in rows(mode).iter().enumerate() {
        if row_idx >= lines.len() {
            break;
        }

        let spans: Vec<Span> = row_buttons
            .iter()
            .flat_map(|btn| {
                let bg = if btn.prefill {
                    Color::Cyan
                } else if row_idx == 1 {
                    Color::Magenta
                } else {
                    Color::Green
                };
                let style = Style::default()
                    .fg(Color::Black)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD);
                vec![
                    Span::styled(format!(" {} ", btn.label), style),
                    Span::raw(" "),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), lines[row_idx]);
    }
}

/// Check if a mouse click at (col, row) hits a button.
pub fn hit_test(col: u16, row: u16, area: Rect, mode: Mode) -> Option<Action> {
    if row < area.y || row >= area.y + area.height || col < area.x {
        return None;
    }

    let buttons = rows(mode).get((row - area.y) as usize).copied()?;

    let mut x = area.x;
    for btn in buttons {
        let btn_width = btn.label.len() as u16 + 2; // " label "
        if col >= x && col < x + btn_width {
            return Some(btn.action);
        }
        x += btn_width + 1;
    }

    None
}
