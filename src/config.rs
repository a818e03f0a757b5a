// src/config.rs
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

pub const DEFAULT_API_URL: &str = "http://10.0.2.2:8081/api/ai/ask";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_RETRIES: u32 = 1;
pub const DEFAULT_BACKOFF_MULTIPLIER: f32 = 1.0;
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Everything needed to issue one request except the body.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub timeout: Duration,
    pub max_retries: u32,
    pub backoff_multiplier: f32,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl RequestConfig {
    pub fn new(url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Self {
            url: url.into(),
            method: Method::POST,
            headers,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Timeout for the given zero-based attempt. Each retry grows the previous
    /// timeout by `timeout * backoff_multiplier`.
    pub fn attempt_timeout(&self, attempt: u32) -> Duration {
        let factor = 1.0 + self.backoff_multiplier.max(0.0) as f64;
        let millis = self.timeout.as_millis() as f64 * factor.powi(attempt as i32);
        Duration::from_millis(millis.min(u64::MAX as f64) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = RequestConfig::default();
        assert_eq!(config.url, DEFAULT_API_URL);
        assert_eq!(config.method, Method::POST);
        assert_eq!(config.timeout, Duration::from_millis(30_000));
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
    }

    #[test]
    fn attempt_timeout_grows_with_multiplier() {
        let config = RequestConfig::default();
        assert_eq!(config.attempt_timeout(0), Duration::from_millis(30_000));
        assert_eq!(config.attempt_timeout(1), Duration::from_millis(60_000));
        assert_eq!(config.attempt_timeout(2), Duration::from_millis(120_000));

        let flat = RequestConfig::default().with_backoff_multiplier(0.0);
        assert_eq!(flat.attempt_timeout(3), Duration::from_millis(30_000));
    }
}
