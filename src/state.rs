// src/state.rs

pub const INITIAL_RESPONSE: &str = "Response will appear here...";
pub const EMPTY_MESSAGE: &str = "Message cannot be empty";

/// A validated send waiting to go out to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub seq: u64,
    pub message: String,
}

/// The two pieces of screen state: what the user is typing and what is shown.
#[derive(Debug, Clone)]
pub struct ChatState {
    input: String,
    response_text: String,
    latest_seq: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            response_text: INITIAL_RESPONSE.to_string(),
            latest_seq: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Handle the "send" intent.
    ///
    /// Blank input is rejected locally. Otherwise the input is tagged with a
    /// fresh sequence number and the current display text is left untouched
    /// until the reply arrives.
    pub fn submit(&mut self) -> Option<Dispatch> {
        if self.input.trim().is_empty() {
            self.response_text = EMPTY_MESSAGE.to_string();
            return None;
        }

        self.latest_seq += 1;
        Some(Dispatch {
            seq: self.latest_seq,
            message: self.input.clone(),
        })
    }

    /// Apply a delivered reply. Replies for a superseded send are dropped.
    /// Returns whether the display text was replaced.
    pub fn apply_reply(&mut self, seq: u64, text: String) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.response_text = text;
        true
    }
}
