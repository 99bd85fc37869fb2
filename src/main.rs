use anyhow::Result;
use tracing::info;

mod api;
mod config;
mod directory;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("facelist=info".parse()?)
        )
        .init();

    info!("Starting facelist v{}", env!("CARGO_PKG_VERSION"));

    let cfg = config::load()?;
    info!("Configuration loaded");

    api::serve(cfg).await?;

    Ok(())
}
