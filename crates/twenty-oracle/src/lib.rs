//! Question oracle backed by an OpenAI-compatible chat-completions service.
//!
//! [`ChatOracle`] implements [`twenty_core::QuestionOracle`] by sending the
//! secret character's name and attributes along with the player's question,
//! and returning whatever text the model answers with.

pub mod client;
pub mod config;
pub mod prompt;
pub mod wire;

pub use client::ChatOracle;
pub use config::OracleConfig;

use twenty_core::{OfflineOracle, QuestionOracle};

/// Build the oracle the front ends should use: a [`ChatOracle`] when an
/// endpoint is configured, otherwise [`OfflineOracle`].
pub fn build(config: &OracleConfig) -> Box<dyn QuestionOracle> {
    match ChatOracle::new(config.clone()) {
        Ok(oracle) => Box::new(oracle),
        Err(e) => {
            if config.is_configured() {
                log::warn!("oracle unavailable, questions will fail: {e}");
            }
            Box::new(OfflineOracle)
        }
    }
}

/// Short human-readable description of where questions go.
pub fn describe(config: &OracleConfig) -> String {
    match config.completions_url() {
        Some(_) => config.model.clone(),
        None => "offline".to_string(),
    }
}
