use std::net::Ipv4Addr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use studentreg::config::{Cli, ServerConfig};
use studentreg::store::StudentStore;
use studentreg::{api, logging, seeder};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config: ServerConfig = Cli::parse().into();
    logging::init_tracing();

    let store = Arc::new(StudentStore::new());

    if config.seed {
        seeder::seed(&store, config.seed_count);
        return Ok(());
    }

    let app = api::create_router(store);
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!("Listening on http://0.0.0.0:{}", config.port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
