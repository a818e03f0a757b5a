// src/error.rs
use thiserror::Error;

pub const REQUEST_DATA_ERROR: &str = "Error creating request data.";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Ways an exchange can end without a usable reply.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("backend answered with status {code}")]
    Status { code: u16, body: Vec<u8> },

    #[error("transport failure: {}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Transport { message: Option<String> },
}

impl ExchangeError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Transport {
            message: (!message.is_empty()).then_some(message),
        }
    }

    /// Whether the transport layer may reattempt the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Text shown to the user in place of a reply.
    pub fn display_text(&self) -> String {
        match self {
            Self::Serialize(_) => REQUEST_DATA_ERROR.to_string(),
            Self::Status { code, body } => {
                let mut text = format!("Error: Status Code: {code} - ");
                // Undecodable bodies are left out of the message.
                if let Ok(body) = std::str::from_utf8(body) {
                    text.push_str(body);
                }
                text
            }
            Self::Transport { message } => {
                format!("Error: {}", message.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
        }
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::transport("timeout");
        }
        Self::transport(error_chain(&err))
    }
}

/// Join an error with all of its sources: `outer: cause: root`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
