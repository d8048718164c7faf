use anyhow::Result;
use resume_matcher::{start_web_server, AppConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("resume_matcher=info,rocket::server=off")),
        )
        .init();

    let config = AppConfig::load()?;

    info!("Starting resumatch API server");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!(
        "Improver configured: {}",
        AppConfig::improver_api_key().is_some()
    );

    start_web_server(config).await
}
