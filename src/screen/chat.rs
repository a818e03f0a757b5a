// src/screen/chat.rs
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::render;
use crate::error::ExchangeError;
use crate::services::exchange::Exchange;
use crate::state::{ChatState, Dispatch};

/// A finished exchange delivered back to the screen loop.
#[derive(Debug)]
pub struct Reply {
    pub seq: u64,
    pub text: String,
}

/// Terminal chat screen: one input line in, one display string out.
///
/// Exchanges run on spawned tasks and report back over a channel, so display
/// state is only ever touched from the loop that owns the screen.
pub struct ChatScreen {
    state: ChatState,
    exchange: Arc<dyn Exchange>,
    tx: mpsc::UnboundedSender<Reply>,
    rx: mpsc::UnboundedReceiver<Reply>,
    in_flight: usize,
}

impl ChatScreen {
    pub fn new(exchange: Arc<dyn Exchange>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ChatState::new(),
            exchange,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state.set_input(input);
    }

    /// Send the current input. Returns `false` when the input was blank and
    /// nothing was dispatched.
    pub fn send(&mut self) -> bool {
        let Some(dispatch) = self.state.submit() else {
            return false;
        };

        debug!(seq = dispatch.seq, "Dispatching message");
        let exchange = Arc::clone(&self.exchange);
        let tx = self.tx.clone();
        let Dispatch { seq, message } = dispatch;
        tokio::spawn(async move {
            let task = tokio::spawn(async move { exchange.send(&message).await });
            let text = match task.await {
                Ok(text) => text,
                Err(err) => {
                    error!(seq, error = %err, "Exchange task failed");
                    ExchangeError::Transport { message: None }.display_text()
                }
            };
            // The screen may already be gone.
            let _ = tx.send(Reply { seq, text });
        });

        self.in_flight += 1;
        true
    }

    /// Wait for the next reply and apply it. Returns whether the display text
    /// changed, or `None` when nothing is in flight.
    pub async fn next_reply(&mut self) -> Option<bool> {
        if self.in_flight == 0 {
            return None;
        }
        let reply = self.rx.recv().await?;
        Some(self.apply(reply))
    }

    /// Send a single message and wait for its outcome.
    pub async fn send_once(&mut self, message: impl Into<String>) -> &str {
        self.set_input(message);
        if self.send() {
            while self.in_flight > 0 {
                if self.next_reply().await.is_none() {
                    break;
                }
            }
        }
        self.state.response_text()
    }

    /// Drive the screen from line input until EOF or `/quit`.
    ///
    /// On EOF, replies still in flight are awaited and rendered before
    /// returning.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        render(&mut output, self.state.response_text()).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if matches!(line.trim(), "/quit" | "/exit") {
                        info!("Leaving chat");
                        return Ok(());
                    }
                    self.set_input(line);
                    if !self.send() {
                        render(&mut output, self.state.response_text()).await?;
                    }
                }
                Some(reply) = self.rx.recv() => {
                    if self.apply(reply) {
                        render(&mut output, self.state.response_text()).await?;
                    }
                }
            }
        }

        while let Some(changed) = self.next_reply().await {
            if changed {
                render(&mut output, self.state.response_text()).await?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, reply: Reply) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let applied = self.state.apply_reply(reply.seq, reply.text);
        if !applied {
            debug!(seq = reply.seq, "Dropping stale reply");
        }
        applied
    }
}
