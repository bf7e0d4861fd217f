use anyhow::Result;
use fantoccini::Locator;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::framework::TestEnvironment;

/// Creating a location from the blank form lands back on the list, which
/// shows the new record.
#[tokio::test]
async fn create_location_redirects_to_list() -> Result<()> {
    let env = TestEnvironment::setup().await?;

    env.goto("/admin/locations/new").await?;
    assert_eq!(env.heading().await?, "Create Location");

    env.fill("site-name", "Riverside").await?;
    env.fill("location", "Dock 3").await?;
    env.fill("time-zone", "Europe/London").await?;
    env.fill("latitude", "0").await?;

    info!("🚀 Submitting the create form");
    env.submit_button().await?.click().await?;
    env.wait_for_path("/admin/locations").await?;

    let body = env.browser.find(Locator::Css("main")).await?.text().await?;
    assert!(body.contains("Riverside"), "list should show the new location");

    let stored = env.api.client.list_locations().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].details.region_id, None);
    assert_eq!(stored[0].details.latitude, Some(0.0));
    assert_eq!(stored[0].details.longitude, None);

    Ok(())
}

/// A rejected save keeps the user on the form, shows the server's reason
/// in a danger banner and keeps what they typed.
#[tokio::test]
async fn rejected_save_shows_danger_banner() -> Result<()> {
    let env = TestEnvironment::setup().await?;

    env.goto("/admin/locations/new").await?;
    env.fill("site-name", "Riverside").await?;
    env.fill("location", "Dock 3").await?;
    env.fill("time-zone", "Europe/Atlantis").await?;
    env.submit_button().await?.click().await?;
    sleep(Duration::from_secs(1)).await;

    let banner = env.browser.find(Locator::Css("[role='alert']")).await?;
    assert_eq!(
        banner.attr("data-severity").await?.as_deref(),
        Some("danger")
    );
    assert_eq!(
        banner.text().await?,
        "Bad request: Europe/Atlantis is not a recognized time zone"
    );
    env.wait_for_path("/admin/locations/new").await?;

    let site_name = env.browser.find(Locator::Id("site-name")).await?;
    assert_eq!(site_name.prop("value").await?.as_deref(), Some("Riverside"));
    assert!(env.api.client.list_locations().await?.is_empty());

    Ok(())
}

/// The submit button is disabled and reads "Saving..." while the save is
/// outstanding, then the form redirects once the API answers.
#[tokio::test]
async fn submit_is_disabled_while_saving() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    let created = env
        .api
        .create_test_location(&test_helpers::location_details_a())
        .await?;

    env.goto(&format!("/admin/locations/{}/edit", created.location_id))
        .await?;
    assert_eq!(env.heading().await?, "Edit Location");
    let site_name = env.browser.find(Locator::Id("site-name")).await?;
    assert_eq!(
        site_name.prop("value").await?.as_deref(),
        Some("Headquarters")
    );
    env.fill("site-name", "Headquarters (moved)").await?;

    let hold = env.api.store.hold().await;
    env.submit_button().await?.click().await?;
    sleep(Duration::from_millis(500)).await;

    let button = env.submit_button().await?;
    assert!(!button.is_enabled().await?, "submit should be disabled");
    assert_eq!(button.text().await?, "Saving...");
    env.wait_for_path("/edit").await?;

    drop(hold);
    env.wait_for_path("/admin/locations").await?;

    let stored = env.api.client.get_location(&created.location_id).await?;
    assert_eq!(stored.details.site_name, "Headquarters (moved)");

    Ok(())
}
