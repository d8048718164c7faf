use anyhow::Result;
use clap::Parser;
use resume_matcher::match_cli::{handle_match_command, MatchCli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("resume_matcher=warn")),
        )
        .init();

    let cli = MatchCli::parse();
    handle_match_command(cli).await
}
