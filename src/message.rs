// src/message.rs
use serde::Serialize;

/// Body of every request sent to the backend: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage<'a> {
    pub message: &'a str,
}

impl<'a> OutboundMessage<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}
