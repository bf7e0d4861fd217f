use test_helpers::spawn_app;

#[tokio::test]
async fn list_regions_in_id_order() -> anyhow::Result<()> {
    let app = spawn_app().await;
    assert!(app.client.get_regions().await?.is_empty());

    let created = app.create_test_regions().await;
    let listed = app.client.get_regions().await?;

    assert_eq!(listed, created);
    assert_eq!(listed[0].name, "Europe");
    assert!(listed.windows(2).all(|w| w[0].region_id < w[1].region_id));

    Ok(())
}
