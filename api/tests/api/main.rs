mod location;
mod region;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn undecodable_body_is_not_a_network_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // health_check answers 200 with plain text, not a location
    let response = app
        .client
        .inner_client
        .get(format!("{}/api/health_check", app.client.address))
        .send()
        .await?;
    let result =
        payloads::api_client::ok_body::<payloads::responses::Location>(response)
            .await;

    let err = result.unwrap_err();
    assert!(matches!(err, payloads::ClientError::Decode(_)));
    assert_eq!(err.to_string(), "Unexpected response from the server.");

    Ok(())
}
