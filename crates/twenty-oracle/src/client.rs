//! Blocking HTTP client for the chat-completions oracle.

use reqwest::blocking::Client;

use twenty_core::{Character, OracleError, QuestionOracle};

use crate::config::OracleConfig;
use crate::prompt::{SYSTEM_PROMPT, question_prompt};
use crate::wire::{ChatCompletionRequest, ChatMessage, decode_response};

/// Longest error body kept in [`OracleError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Answers questions by calling a chat-completions service.
#[derive(Debug, Clone)]
pub struct ChatOracle {
    config: OracleConfig,
    url: String,
    client: Client,
}

impl ChatOracle {
    /// Create an oracle. Fails with [`OracleError::NotConfigured`] when no
    /// endpoint is set.
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let url = config.completions_url().ok_or(OracleError::NotConfigured)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OracleError::Transport(e.to_string()))?;
        log::info!("oracle endpoint {url} (model {})", config.model);
        Ok(Self {
            config,
            url,
            client,
        })
    }

    /// The settings in use.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// The chat-completions URL requests go to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the request body for a question.
    pub fn request(&self, secret: &Character, question: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(question_prompt(secret, question)),
            ],
            temperature: self.config.temperature,
        }
    }
}

impl QuestionOracle for ChatOracle {
    fn answer_question(&self, secret: &Character, question: &str) -> Result<String, OracleError> {
        let body = self.request(secret, question);
        log::debug!("asking oracle about {}: {question}", secret.name);

        let mut req = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }
        let resp = req.send().map_err(|e| {
            if e.is_timeout() {
                OracleError::Transport(format!(
                    "timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else {
                OracleError::Transport(e.to_string())
            }
        })?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| OracleError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }
        decode_response(&text)
    }
}
