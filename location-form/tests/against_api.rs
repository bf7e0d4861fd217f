//! Drive the form controller against a running api.

use location_form::{
    Field, LocationFormController, Phase, Severity, Submission,
};
use payloads::{LocationId, RegionId};
use test_helpers::{location_details_a, spawn_app};

#[tokio::test]
async fn create_location_from_blank_form() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_regions().await;
    let controller = LocationFormController::new(app.client.clone(), None);

    controller.initialize().await;
    assert_eq!(controller.state().regions.len(), 5);

    controller.set_field(Field::SiteName, "HQ");
    controller.set_field(Field::Location, "Main");
    controller.set_field(Field::TimeZone, "UTC");
    controller.set_field(Field::RegionId, "");
    controller.set_field(Field::Latitude, "");
    controller.set_field(Field::Longitude, "");

    let Submission::Saved(saved) = controller.submit().await else {
        panic!("expected the location to be saved");
    };

    let stored = app.client.get_location(&saved.location_id).await?;
    assert_eq!(stored.details.site_name, "HQ");
    assert_eq!(stored.details.region_id, None);
    assert_eq!(stored.details.latitude, None);
    assert_eq!(stored.details.longitude, None);
    assert_eq!(controller.state().phase, Phase::Redirected);

    Ok(())
}

#[tokio::test]
async fn edit_existing_location() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_regions().await;
    let created = app.create_test_location(&location_details_a()).await?;
    let controller = LocationFormController::new(
        app.client.clone(),
        Some(created.location_id),
    );

    controller.initialize().await;
    assert_eq!(controller.state().draft.to_details(), created.details);

    controller.set_field(Field::RegionId, "3");
    controller.set_field(Field::Latitude, "0");
    assert!(matches!(controller.submit().await, Submission::Saved(_)));

    let stored = app.client.get_location(&created.location_id).await?;
    assert_eq!(stored.details.region_id, Some(RegionId(3)));
    assert_eq!(stored.details.latitude, Some(0.0));
    assert_eq!(stored.details.longitude, created.details.longitude);

    Ok(())
}

#[tokio::test]
async fn server_rejection_is_shown_and_draft_kept() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let controller = LocationFormController::new(app.client.clone(), None);
    controller.initialize().await;

    controller.set_field(Field::SiteName, "HQ");
    controller.set_field(Field::Location, "Main");
    controller.set_field(Field::TimeZone, "Europe/Atlantis");
    let draft = controller.state().draft;

    assert_eq!(controller.submit().await, Submission::Failed);

    let state = controller.state();
    let message = state.message.expect("a failure message");
    assert_eq!(message.severity, Severity::Danger);
    assert_eq!(
        message.text,
        "Bad request: Europe/Atlantis is not a recognized time zone"
    );
    assert_eq!(state.draft, draft);
    assert_eq!(state.phase, Phase::Ready);
    assert!(app.client.list_locations().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn unknown_location_shows_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let controller =
        LocationFormController::new(app.client.clone(), Some(LocationId(9)));

    controller.initialize().await;

    let message = controller.state().message.expect("a failure message");
    assert_eq!(message.text, "Not found: Location not found");
    assert!(message.is_error());

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let client = payloads::APIClient {
        // nothing listens on the discard port
        address: "http://127.0.0.1:9".into(),
        inner_client: reqwest::Client::new(),
    };
    let controller = LocationFormController::new(client, None);

    controller.initialize().await;

    let message = controller.state().message.expect("a failure message");
    assert_eq!(
        message.text,
        "Network error. Please check your connection."
    );

    Ok(())
}
