//! Browser tests live in `#[tokio::test]` functions; run with
//! `cargo test -p ui-tests`.
//!
//! `cargo run -p ui-tests` instead seeds sample data and opens a headed
//! browser on the location list for manual inspection.

#![allow(unused)]

use anyhow::Result;
use tracing::info;

mod framework;
#[cfg(test)]
mod locations;

use crate::framework::TestEnvironment;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🔧 Setting up test environment with headed browser");
    let env = TestEnvironment::setup_headed().await?;

    // regions are already seeded by the environment
    for details in [
        test_helpers::location_details_a(),
        test_helpers::location_details_b(),
    ] {
        env.api.client.create_location(&details).await?;
    }

    env.goto("/admin/locations").await?;
    let current_url = env.browser.current_url().await?;
    info!("🌐 Browser is now open at: {current_url}");
    info!("👋 Press Ctrl+C to exit and close the browser");

    tokio::signal::ctrl_c().await?;
    info!("🧹 Cleaning up and closing browser");
    Ok(())
}
