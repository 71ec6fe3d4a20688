//! Stderr logging for the line-oriented commands.

use simplelog::{ColorChoice, TermLogger, TerminalMode};

/// Install a terminal logger. Warnings and errors only unless `-v` is given.
pub fn init_terminal(verbosity: u8) -> Result<(), String> {
    TermLogger::init(
        twenty_tui::logging::level_for(verbosity),
        twenty_tui::logging::config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| format!("cannot start logging: {e}"))
}
