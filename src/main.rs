use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_client::config::RequestConfig;
use chat_client::screen::{ChatScreen, render};
use chat_client::services::exchange::HttpExchange;

#[derive(Parser, Debug)]
#[command(name = "chat-client", version, about = "Send chat messages to a local AI backend")]
struct Cli {
    /// Send one message, print the reply and exit
    #[arg(short, long)]
    message: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = RequestConfig::default();

    let client = reqwest::Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    info!(url = %config.url, "Chat client ready");
    let mut screen = ChatScreen::new(Arc::new(HttpExchange::new(client, config)));
    let mut stdout = tokio::io::stdout();

    match cli.message {
        Some(message) => {
            let text = screen.send_once(message).await.to_string();
            render(&mut stdout, &text).await?;
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            screen.run(stdin, &mut stdout).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_only_accepts_one_shot_message() {
        let cli = Cli::try_parse_from(["chat-client", "-m", "hi"]).unwrap();
        assert_eq!(cli.message.as_deref(), Some("hi"));
        assert!(Cli::try_parse_from(["chat-client"]).unwrap().message.is_none());

        for flag in ["--url", "--timeout-ms", "--max-retries", "--backoff-multiplier"] {
            assert!(Cli::try_parse_from(["chat-client", flag, "1"]).is_err(), "{flag}");
        }
    }
}
