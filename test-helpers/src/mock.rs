//! Mock data for local development.
//!
//! Seeds the regions plus a handful of locations covering the shapes the
//! form has to handle: fully specified, no region, and coordinates at zero.

use crate::TestApp;
use anyhow::Result;
use payloads::{LocationDetails, RegionId, responses};

pub struct DevDataset {
    pub regions: Vec<responses::Region>,
    pub locations: Vec<responses::Location>,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("🌍 Creating regions");
        let regions = app.create_test_regions().await;

        tracing::info!("📍 Creating locations");
        let mut locations = Vec::new();
        for details in [
            crate::location_details_a(),
            crate::location_details_b(),
            LocationDetails {
                site_name: "West Coast Office".into(),
                location: "Mission District".into(),
                time_zone: "America/Los_Angeles".into(),
                region_id: Some(RegionId(2)),
                latitude: Some(37.7599),
                longitude: Some(-122.4148),
            },
            LocationDetails {
                site_name: "Warehouse".into(),
                location: "Unit 4".into(),
                time_zone: "Asia/Singapore".into(),
                region_id: Some(RegionId(4)),
                latitude: None,
                longitude: None,
            },
        ] {
            locations.push(app.client.create_location(&details).await?);
        }

        Ok(Self { regions, locations })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        tracing::info!("   🌍 Regions:");
        for region in &self.regions {
            tracing::info!("      - {} ({})", region.name, region.region_id);
        }
        tracing::info!("   📍 Locations:");
        for location in &self.locations {
            tracing::info!(
                "      - {} / {} ({}) edit at /admin/locations/{}/edit",
                location.details.site_name,
                location.details.location,
                location.details.time_zone,
                location.location_id
            );
        }
    }
}
