//! File logging for the full-screen UI.
//!
//! Anything written to the terminal would corrupt the alternate screen, so
//! the TUI logs to a file instead.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Shared simplelog settings: no source locations, targets, or threads.
pub fn config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build()
}

/// Where the TUI logs when no path is given.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("twenty-tui.log")
}

/// Map a `-v` count to a level: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a logger writing to `path`, creating parent directories.
pub fn init_file(path: &Path, level: LevelFilter) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create {}: {e}", parent.display()))?;
    }
    let file =
        File::create(path).map_err(|e| format!("cannot create {}: {e}", path.display()))?;
    WriteLogger::init(level, config(), file).map_err(|e| format!("cannot start logging: {e}"))
}
