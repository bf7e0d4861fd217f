pub mod mock;

use api::{Config, store::Store, telemetry};
use payloads::{LocationDetails, RegionId, responses};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    /// Direct access to the server's data, for setup the API doesn't offer.
    pub store: Store,
}

impl TestApp {
    /// Seed the standard regions, returned in id order.
    pub async fn create_test_regions(&self) -> Vec<responses::Region> {
        let mut regions = Vec::new();
        for name in api::store::DEFAULT_REGIONS {
            regions.push(self.store.create_region(name).await);
        }
        regions
    }

    /// Create a location through the API and check it round-trips.
    pub async fn create_test_location(
        &self,
        details: &LocationDetails,
    ) -> anyhow::Result<responses::Location> {
        let created = self.client.create_location(details).await?;
        assert_eq!(&created.details, details);

        let retrieved = self.client.get_location(&created.location_id).await?;
        assert_eq!(retrieved, created);
        Ok(created)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let store = Store::new();
    let server = api::build(&mut config, store.clone())
        .expect("Failed to bind test server");
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn location_details_a() -> LocationDetails {
    LocationDetails {
        site_name: "Headquarters".into(),
        location: "London Bridge".into(),
        time_zone: "Europe/London".into(),
        region_id: Some(RegionId(1)),
        latitude: Some(51.5079),
        longitude: Some(-0.0877),
    }
}

pub fn location_details_b() -> LocationDetails {
    LocationDetails {
        site_name: "Field Office".into(),
        location: "Null Island".into(),
        time_zone: "UTC".into(),
        region_id: None,
        latitude: Some(0.0),
        longitude: Some(0.0),
    }
}
