use anyhow::Context;

use api::{
    Config, build,
    store::{DEFAULT_REGIONS, Store},
    telemetry::{get_subscriber, init_subscriber},
};

/// Location admin API server
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root. All are optional.
///
/// - IP_ADDRESS: Server bind address (default 127.0.0.1, use 0.0.0.0 for public)
/// - PORT: Server port (default 8000, 0 for an OS-assigned port)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or
///   comma-separated list for production)
///
/// Example development command:
/// cargo run -p api
///
/// Example production command:
/// IP_ADDRESS=0.0.0.0 PORT=8000 ALLOWED_ORIGINS=https://admin.example.com \
/// cargo run -p api --release
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;

    let store = Store::new();
    for name in DEFAULT_REGIONS {
        store.create_region(name).await;
    }

    let server = build(&mut config, store).context("Failed to bind")?;
    tracing::info!("Listening on http://{}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
