// src/services/exchange.rs
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::config::RequestConfig;
use crate::error::ExchangeError;
use crate::message::OutboundMessage;
use crate::services::display::reply_text;

/// One round trip with the backend for a single chat message.
///
/// Implementations always produce a display string. Failures are folded into
/// that string rather than returned.
#[async_trait]
pub trait Exchange: Send + Sync {
    async fn send(&self, message: &str) -> String;
}

/// Exchange over HTTP with transport-level retries.
#[derive(Debug, Clone)]
pub struct HttpExchange {
    client: Client,
    config: RequestConfig,
}

impl HttpExchange {
    pub fn new(client: Client, config: RequestConfig) -> Self {
        Self { client, config }
    }

    /// Run the exchange and return the display text of a successful reply.
    pub async fn exchange(&self, message: &str) -> Result<String, ExchangeError> {
        let body = serde_json::to_vec(&OutboundMessage::new(message))?;

        let mut attempt = 0;
        loop {
            let timeout = self.config.attempt_timeout(attempt);
            match self.attempt(&body, timeout).await {
                Ok(raw) => {
                    debug!(attempt, body = %raw, "Received reply");
                    return Ok(reply_text(&raw));
                }
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    warn!(attempt, ?timeout, error = %err, "Attempt failed, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(&self, body: &[u8], timeout: Duration) -> Result<String, ExchangeError> {
        let response = self
            .client
            .request(self.config.method.clone(), &self.config.url)
            .headers(self.config.headers.clone())
            .timeout(timeout)
            .body(body.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .unwrap_or_default();
            return Err(ExchangeError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Exchange for HttpExchange {
    async fn send(&self, message: &str) -> String {
        match self.exchange(message).await {
            Ok(text) => text,
            Err(err) => {
                error!(url = %self.config.url, error = %err, "Exchange failed");
                err.display_text()
            }
        }
    }
}
