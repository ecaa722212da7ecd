//! `globe-area` replays a recorded pointer-event script through the
//! rectangle selector and prints the result of every area request.

mod config;
mod replay;
mod script;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("overlay renderer failed: {0}")]
    Renderer(#[from] tokio::task::JoinError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ReplayError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Cli::parse().into_config()?;
    let events = script::load(config.script.as_deref())?;
    tracing::info!(events = events.len(), drag_modifier = %config.selector.drag_modifier, "replaying script");

    let outcome = replay::run(&config, &events).await?;
    for message in &outcome.messages {
        println!("{message}");
    }

    tracing::info!(
        frames = outcome.frames,
        visible = outcome.selection.visible,
        rectangle = ?outcome.selection.rectangle,
        "replay finished"
    );
    Ok(())
}
