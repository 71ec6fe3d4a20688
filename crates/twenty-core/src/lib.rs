//! Candidate-narrowing engine for a Marvel-themed twenty questions game.
//!
//! Provides the character catalogue and its closed trait vocabulary, the
//! candidate filter, the question selector, and the turn controller that
//! drives both play modes: the human guessing a secret character with help
//! from an external question oracle, and the system narrowing a candidate
//! set until it commits to a final guess.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod filter;
pub mod oracle;
pub mod selector;
pub mod session;
pub mod transcript;

pub use catalogue::{Catalogue, Character, Difficulty, TraitTag};
pub use config::{GameConfig, Mode};
pub use error::{CatalogueError, GameError, GameResult, OracleError};
pub use filter::filter;
pub use oracle::{OfflineOracle, QuestionOracle};
pub use selector::{QuestionSelector, Strategy};
pub use session::{GameState, Intent, Session, parse_answer};
pub use transcript::{Entry, Speaker, Transcript};
