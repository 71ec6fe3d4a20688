//! Transcript entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalogue::TraitTag;

/// Who said a line of the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// The game itself.
    System,
    /// The player.
    Human,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "Game"),
            Self::Human => write!(f, "You"),
        }
    }
}

/// A single exchange in the game transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    /// Intro text and prompts.
    Narration {
        /// The message.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
    /// A free-text question from the player.
    HumanQuestion {
        /// The literal question.
        question: String,
        /// When asked.
        timestamp: DateTime<Utc>,
    },
    /// The oracle's verbatim answer.
    OracleAnswer {
        /// The answer text.
        answer: String,
        /// When answered.
        timestamp: DateTime<Utc>,
    },
    /// The oracle could not answer.
    OracleFailure {
        /// The failure description.
        error: String,
        /// When the call failed.
        timestamp: DateTime<Utc>,
    },
    /// A name guessed by the player.
    Guess {
        /// The guessed name as typed.
        name: String,
        /// When guessed.
        timestamp: DateTime<Utc>,
    },
    /// A revealed hint.
    Hint {
        /// One-based hint number.
        number: usize,
        /// The hint text.
        text: String,
        /// When revealed.
        timestamp: DateTime<Utc>,
    },
    /// A closed-vocabulary question posed by the system.
    SystemQuestion {
        /// The tag asked about.
        tag: TraitTag,
        /// One-based question number.
        number: u32,
        /// When asked.
        timestamp: DateTime<Utc>,
    },
    /// The player's yes/no answer to a system question.
    HumanAnswer {
        /// The tag answered.
        tag: TraitTag,
        /// The answer.
        answer: bool,
        /// Candidates left after filtering.
        remaining: usize,
        /// When answered.
        timestamp: DateTime<Utc>,
    },
    /// The system commits to a character.
    FinalGuess {
        /// The guessed character.
        name: String,
        /// When guessed.
        timestamp: DateTime<Utc>,
    },
    /// The game ended.
    Outcome {
        /// Whether the guesser won.
        won: bool,
        /// The closing message.
        message: String,
        /// When the game ended.
        timestamp: DateTime<Utc>,
    },
}

impl Entry {
    /// Narration with the current time.
    pub fn narration(text: impl Into<String>) -> Self {
        Self::Narration {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Who said this line.
    pub fn speaker(&self) -> Speaker {
        match self {
            Self::HumanQuestion { .. } | Self::Guess { .. } | Self::HumanAnswer { .. } => {
                Speaker::Human
            }
            _ => Speaker::System,
        }
    }

    /// The chat line for this entry.
    pub fn text(&self) -> String {
        match self {
            Self::Narration { text, .. } => text.clone(),
            Self::HumanQuestion { question, .. } => question.clone(),
            Self::OracleAnswer { answer, .. } => answer.clone(),
            Self::OracleFailure { error, .. } => format!("Unable to answer: {error}"),
            Self::Guess { name, .. } => format!("Is it {name}?"),
            Self::Hint { number, text, .. } => format!("Hint {number}: {text}"),
            Self::SystemQuestion { tag, number, .. } => {
                format!("Question {number}: {}", tag.question())
            }
            Self::HumanAnswer { answer, .. } => String::from(if *answer { "Yes" } else { "No" }),
            Self::FinalGuess { name, .. } => format!("My final guess is {name}!"),
            Self::Outcome { message, .. } => message.clone(),
        }
    }

    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Narration { timestamp, .. }
            | Self::HumanQuestion { timestamp, .. }
            | Self::OracleAnswer { timestamp, .. }
            | Self::OracleFailure { timestamp, .. }
            | Self::Guess { timestamp, .. }
            | Self::Hint { timestamp, .. }
            | Self::SystemQuestion { timestamp, .. }
            | Self::HumanAnswer { timestamp, .. }
            | Self::FinalGuess { timestamp, .. }
            | Self::Outcome { timestamp, .. } => *timestamp,
        }
    }
}
