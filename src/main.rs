use std::sync::Arc;

use anyhow::Context;

use notes_api::store::memory::MemoryStore;
use notes_api::{app, config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, NOTES_API_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Notes API in {:?} mode", config.environment);

    let store = Arc::new(MemoryStore::with_demo_data().context("failed to seed demo data")?);
    let app = app(store);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🚀 Notes API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
