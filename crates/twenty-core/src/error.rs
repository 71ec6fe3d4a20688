//! Error types for the game engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalogue::Difficulty;
use crate::config::Mode;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by the turn controller.
///
/// None of these mutate the session: the caller can show the message and
/// let the player retry.
#[derive(Debug, Error)]
pub enum GameError {
    /// Empty or whitespace-only input.
    #[error("please type a question or a guess")]
    EmptyInput,

    /// The action belongs to the other play mode.
    #[error("that action is only available in '{expected}' mode")]
    WrongMode {
        /// The mode the action requires.
        expected: Mode,
    },

    /// The game has not been started yet.
    #[error("the game has not started yet")]
    NotStarted,

    /// The game already reached a win or a loss.
    #[error("the game is over, start a new game to keep playing")]
    GameOver,

    /// An answer was given but no question is pending.
    #[error("no question is waiting for an answer")]
    NoPendingQuestion,

    /// The question budget is spent; only guesses remain.
    #[error("out of questions, make a guess")]
    OutOfQuestions,

    /// The selected catalogue partition has no characters.
    #[error("difficulty '{0}' has no characters")]
    EmptyPartition(Difficulty),

    /// A character name that is not in the roster.
    #[error("unknown character: {0}")]
    UnknownCharacter(String),
}

/// Errors raised while loading or validating a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalogue is not valid JSON or has the wrong shape.
    #[error("invalid catalogue: {0}")]
    Json(#[from] serde_json::Error),

    /// A partition key that is not a known difficulty.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A trait tag outside the closed vocabulary.
    #[error("unknown trait '{tag}' on {character}")]
    UnknownTrait {
        /// Character that carries the tag.
        character: String,
        /// The unrecognised tag.
        tag: String,
    },

    /// Two characters share a name (case-insensitively).
    #[error("duplicate character: {0}")]
    DuplicateName(String),

    /// A character with an empty name.
    #[error("character names must not be empty")]
    EmptyName,

    /// The catalogue has no characters at all.
    #[error("catalogue has no characters")]
    Empty,
}

/// Errors raised by a question oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No oracle endpoint is configured.
    #[error("no oracle configured")]
    NotConfigured,

    /// The request could not be sent or timed out.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response decoded but carried no text.
    #[error("empty response")]
    EmptyResponse,
}
