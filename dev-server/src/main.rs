//! Development server for location admin UI development
//!
//! This binary creates a persistent API server seeded with regions and
//! sample locations for frontend development.
//!
//! Usage: cargo run -p dev-server
//! Set DEV_SERVER_PORT to pin the port (defaults to 8000).

use anyhow::{Context, Result};
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting location admin development server");

    let port = match std::env::var("DEV_SERVER_PORT") {
        Ok(port) => port.parse().context("DEV_SERVER_PORT must be a port")?,
        Err(_) => 8000,
    };
    let app = test_helpers::spawn_app_on_port(port).await;

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Setting up development test data...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
