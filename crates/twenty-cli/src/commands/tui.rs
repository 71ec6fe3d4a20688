use std::path::Path;

use twenty_tui::app::TuiApp;
use twenty_tui::logging;

use crate::GameArgs;

pub fn run(
    catalogue: Option<&Path>,
    args: &GameArgs,
    log_file: Option<&Path>,
    verbosity: u8,
) -> Result<(), String> {
    let log_path = log_file
        .map(Path::to_path_buf)
        .unwrap_or_else(logging::default_log_path);
    logging::init_file(&log_path, logging::level_for(verbosity))?;

    let catalogue = super::load_catalogue(catalogue)?;
    let config = super::game_config(args)?;
    let (oracle, label) = super::oracle(args);

    let app = TuiApp::new(catalogue, config, oracle, label)?;
    twenty_tui::terminal::run(app)
}
