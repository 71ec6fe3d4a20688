//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::views;

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    log::info!("tui started");
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        match event::read().map_err(|e| format!("event error: {e}"))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size().map_err(|e| format!("terminal error: {e}"))?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let regions = views::layout(frame.area());

    let title = Paragraph::new(format!(" Twenty Questions | {}", app.session.status()))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(title, regions.title);

    views::actions::draw(frame, regions.actions, app.session.mode());
    views::output::draw(frame, app, regions.output);
    views::sidebar::draw(frame, app, regions.sidebar);
    views::input::draw(frame, app, regions.input, regions.status);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
