//! Configuration for a game session.

use serde::{Deserialize, Serialize};

use crate::catalogue::Difficulty;
use crate::selector::Strategy;

/// Who does the guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// The system picks a secret; the human asks questions and guesses.
    HumanGuesses,
    /// The human plays a character; the system asks and guesses.
    SystemGuesses,
}

impl Mode {
    /// Parse a mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "you guess" | "human" | "human guesses" | "you" => Some(Self::HumanGuesses),
            "i guess" | "me" | "ai guesses" | "ai" | "system" | "system guesses" => {
                Some(Self::SystemGuesses)
            }
            _ => None,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::HumanGuesses => Self::SystemGuesses,
            Self::SystemGuesses => Self::HumanGuesses,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HumanGuesses => write!(f, "You Guess"),
            Self::SystemGuesses => write!(f, "I Guess"),
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for the secret draw and random question choices.
    pub seed: u64,
    /// Play mode.
    pub mode: Mode,
    /// Catalogue partition to draw characters from.
    pub difficulty: Difficulty,
    /// Guesses the human gets in human-guesses mode.
    pub max_attempts: u32,
    /// Question budget in either mode.
    pub max_questions: u32,
    /// Question selection policy in system-guesses mode.
    pub strategy: Strategy,
    /// Whether a failed oracle call still uses up a question.
    pub charge_failed_questions: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mode: Mode::HumanGuesses,
            difficulty: Difficulty::Easy,
            max_attempts: 5,
            max_questions: 20,
            strategy: Strategy::Priority,
            charge_failed_questions: false,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the play mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the catalogue partition.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the number of guesses (at least 1).
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the question budget (at least 1).
    pub fn with_max_questions(mut self, questions: u32) -> Self {
        self.max_questions = questions.max(1);
        self
    }

    /// Set the question selection strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Make failed oracle calls consume a question.
    pub fn with_charged_failures(mut self, charge: bool) -> Self {
        self.charge_failed_questions = charge;
        self
    }
}
