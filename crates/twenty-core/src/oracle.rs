//! The free-text question oracle used in human-guesses mode.

use crate::catalogue::Character;
use crate::error::OracleError;

/// Answers a human's free-text question about the secret character.
///
/// The returned text is shown verbatim; the engine never parses it.
pub trait QuestionOracle {
    /// Answer `question` about `secret`.
    fn answer_question(&self, secret: &Character, question: &str) -> Result<String, OracleError>;
}

/// Oracle used when no service is configured. Every call fails with
/// [`OracleError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineOracle;

impl QuestionOracle for OfflineOracle {
    fn answer_question(&self, _secret: &Character, _question: &str) -> Result<String, OracleError> {
        Err(OracleError::NotConfigured)
    }
}

impl<O: QuestionOracle + ?Sized> QuestionOracle for &O {
    fn answer_question(&self, secret: &Character, question: &str) -> Result<String, OracleError> {
        (**self).answer_question(secret, question)
    }
}

impl<O: QuestionOracle + ?Sized> QuestionOracle for Box<O> {
    fn answer_question(&self, secret: &Character, question: &str) -> Result<String, OracleError> {
        (**self).answer_question(secret, question)
    }
}
