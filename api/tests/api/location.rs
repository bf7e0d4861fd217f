use payloads::{LocationDetails, LocationId, RegionId};
use reqwest::StatusCode;
use test_helpers::{
    assert_status_code, location_details_a, location_details_b, spawn_app,
};

#[tokio::test]
async fn create_read_update_location() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_regions().await;

    let created = app.create_test_location(&location_details_a()).await?;

    let mut details = created.details.clone();
    details.site_name = "Headquarters (old)".into();
    details.region_id = None;
    details.latitude = None;
    let updated = app
        .client
        .update_location(&created.location_id, &details)
        .await?;
    assert_eq!(updated.location_id, created.location_id);
    assert_eq!(updated.details, details);

    let retrieved = app.client.get_location(&created.location_id).await?;
    assert_eq!(retrieved.details, details);

    Ok(())
}

#[tokio::test]
async fn list_locations() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_regions().await;
    assert!(app.client.list_locations().await?.is_empty());

    let a = app.create_test_location(&location_details_a()).await?;
    let b = app.create_test_location(&location_details_b()).await?;

    assert_eq!(app.client.list_locations().await?, vec![a, b]);

    Ok(())
}

#[tokio::test]
async fn zero_coordinates_are_stored() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let created = app.create_test_location(&location_details_b()).await?;

    assert_eq!(created.details.latitude, Some(0.0));
    assert_eq!(created.details.longitude, Some(0.0));

    Ok(())
}

#[tokio::test]
async fn missing_location_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_location(&LocationId(42)).await;
    assert_eq!(
        result.as_ref().unwrap_err().to_string(),
        "Not found: Location not found"
    );
    assert_status_code(result, StatusCode::NOT_FOUND);

    let result = app
        .client
        .update_location(&LocationId(42), &location_details_b())
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn invalid_details_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_regions().await;

    let cases: Vec<(LocationDetails, &str)> = vec![
        (
            LocationDetails {
                site_name: "".into(),
                ..location_details_a()
            },
            "Bad request: site name is required",
        ),
        (
            LocationDetails {
                location: " ".into(),
                ..location_details_a()
            },
            "Bad request: location is required",
        ),
        (
            LocationDetails {
                time_zone: "Europe/Atlantis".into(),
                ..location_details_a()
            },
            "Bad request: Europe/Atlantis is not a recognized time zone",
        ),
        (
            LocationDetails {
                region_id: Some(RegionId(0)),
                ..location_details_a()
            },
            "Bad request: Region 0 does not exist",
        ),
        (
            LocationDetails {
                latitude: Some(-91.0),
                ..location_details_a()
            },
            "Bad request: Latitude -91 is invalid - must be between -90 and 90",
        ),
    ];

    for (details, expected) in cases {
        let result = app.client.create_location(&details).await;
        assert_eq!(result.as_ref().unwrap_err().to_string(), expected);
        assert_status_code(result, StatusCode::BAD_REQUEST);
    }
    assert!(app.client.list_locations().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn explicit_nulls_clear_optional_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_regions().await;
    let created = app.create_test_location(&location_details_a()).await?;

    let cleared = LocationDetails {
        region_id: None,
        latitude: None,
        longitude: None,
        ..created.details.clone()
    };
    app.client
        .update_location(&created.location_id, &cleared)
        .await?;

    let retrieved = app.client.get_location(&created.location_id).await?;
    assert_eq!(retrieved.details.region_id, None);
    assert_eq!(retrieved.details.latitude, None);
    assert_eq!(retrieved.details.longitude, None);

    Ok(())
}
