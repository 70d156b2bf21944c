use location_stub::model::{LOCATION_CODES, paths};
use location_stub::{LocationClient, LocationDetails, LocationList, StubResponse, StubServer};

mod common;
use common::fixture_store;

/// List all items and validate that LON, MAN, CAM and LCS come back in
/// response order
#[tokio::test]
async fn test_list_all_returns_location_codes_in_order() -> anyhow::Result<()> {
    let store = fixture_store();
    let server = StubServer::start().await;
    server
        .register(
            "GET",
            paths::LIST_ALL,
            StubResponse::from_fixture(&store, "locations")?,
        )
        .await;

    let client = LocationClient::new(server.base_url());
    let response = client.list_all().await?;

    assert_eq!(response.status_code, 200);
    assert!(response.is_success);

    let list: LocationList = response.decode()?;
    assert_eq!(list.location_codes(), LOCATION_CODES);

    Ok(())
}

/// A path with no registered stub answers the server's 404 default
#[tokio::test]
async fn test_unregistered_path_returns_404() -> anyhow::Result<()> {
    let server = StubServer::start().await;
    let client = LocationClient::new(server.base_url());

    let response = client.get("/location/endpoint").await?;

    assert_eq!(response.status_code, 404);
    assert!(!response.is_success);

    Ok(())
}

/// Fetch the location named by the properties file and validate the item
/// values against the record, in fixture order: cost, location, id
#[tokio::test]
async fn test_single_location_matches_fixture_record() -> anyhow::Result<()> {
    let store = fixture_store();
    let record = store.load_record()?;
    let expected = vec![
        record.cost_amount().to_string(),
        record.location_name.clone(),
        record.id.clone(),
    ];

    let server = StubServer::start().await;
    server
        .register(
            "GET",
            &paths::location(&record.location_name),
            StubResponse::from_fixture(&store, &record.file_name)?,
        )
        .await;

    let client = LocationClient::new(server.base_url());
    let response = client.location(&record.location_name).await?;

    assert_eq!(response.status_code, 200);

    let details: LocationDetails = response.decode()?;
    assert_eq!(details.items.len(), 1);
    let actual: Vec<String> = details.items[0]
        .values()
        .iter()
        .map(|value| value.to_string())
        .collect();
    assert_eq!(actual, expected);

    Ok(())
}

/// POST a new item and validate the response returns all the items
#[tokio::test]
async fn test_post_returns_canned_location_list() -> anyhow::Result<()> {
    let store = fixture_store();
    let canned = store.read_json_fixture("locations")?;

    let server = StubServer::start().await;
    server
        .register("POST", paths::LIST_ALL, StubResponse::json(canned.clone()))
        .await;

    let body = store.read_json_fixture("post_location")?;
    let client = LocationClient::new(server.base_url());
    let response = client.post_list_all(body).await?;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body.as_bytes(), canned.as_slice());

    let list: LocationList = response.decode()?;
    assert_eq!(list.location_codes(), LOCATION_CODES);

    Ok(())
}
