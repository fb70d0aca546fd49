use anyhow::Result;
use number_words::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("number_words=info".parse()?),
        )
        .init();

    info!("Starting number-words service");

    let config = Config::from_env()?;
    server::serve(&config).await?;

    info!("Stopped");
    Ok(())
}
