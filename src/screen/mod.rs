// src/screen/mod.rs
pub mod chat;

pub use chat::{ChatScreen, Reply};

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Print the current display text on its own line.
pub async fn render<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
