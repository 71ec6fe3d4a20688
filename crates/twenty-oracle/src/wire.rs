//! Chat-completions wire types.

use serde::{Deserialize, Serialize};

use twenty_core::OracleError;

/// Request body.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
}

/// One message in a request.
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    /// `system`, `user`, or `assistant`.
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Response body.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completions, best first.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChatMessageResponse,
}

/// A generated message.
#[derive(Debug, Deserialize)]
pub struct ChatMessageResponse {
    /// Generated text. Some services send `null` for empty output.
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract the first completion's text from a response body.
pub fn decode_response(body: &str) -> Result<String, OracleError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| OracleError::Malformed(e.to_string()))?;
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(OracleError::EmptyResponse);
    }
    Ok(text)
}
