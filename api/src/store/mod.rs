//! In-memory store for locations and regions.
//!
//! ## Design Decisions
//!
//! - **Sequential ids**: location and region ids are assigned by the store,
//!   starting at 1, and never reused.
//! - **Validation on write**: `create_location` and `update_location` run
//!   the same checks, so an update can never store what a create would
//!   reject. Region references are checked against the regions present at
//!   write time.
//! - **Ordering**: listings are ordered by id, which the `BTreeMap` keys
//!   give for free.

use std::collections::BTreeMap;
use std::sync::Arc;

use payloads::{
    LocationDetails, LocationId, RegionId,
    requests::{LOCATION_NAME_MAX_LEN, SITE_NAME_MAX_LEN},
    responses,
};
use tokio::sync::RwLock;
#[cfg(feature = "test-utils")]
use tokio::sync::OwnedRwLockWriteGuard;

/// Regions the standalone server starts with.
pub const DEFAULT_REGIONS: [&str; 5] = [
    "Europe",
    "North America",
    "South America",
    "Asia Pacific",
    "Africa",
];

#[derive(Default)]
struct Inner {
    locations: BTreeMap<LocationId, LocationDetails>,
    regions: BTreeMap<RegionId, String>,
    last_location_id: i64,
    last_region_id: i64,
}

/// Cheap to clone; clones share the same data.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_region(&self, name: &str) -> responses::Region {
        let mut inner = self.inner.write().await;
        inner.last_region_id += 1;
        let region_id = RegionId(inner.last_region_id);
        inner.regions.insert(region_id, name.to_string());
        responses::Region {
            region_id,
            name: name.to_string(),
        }
    }

    pub async fn list_regions(&self) -> Vec<responses::Region> {
        let inner = self.inner.read().await;
        inner
            .regions
            .iter()
            .map(|(region_id, name)| responses::Region {
                region_id: *region_id,
                name: name.clone(),
            })
            .collect()
    }

    pub async fn list_locations(&self) -> Vec<responses::Location> {
        let inner = self.inner.read().await;
        inner
            .locations
            .iter()
            .map(|(location_id, details)| responses::Location {
                location_id: *location_id,
                details: details.clone(),
            })
            .collect()
    }

    pub async fn get_location(
        &self,
        location_id: &LocationId,
    ) -> Result<responses::Location, StoreError> {
        let inner = self.inner.read().await;
        let details = inner
            .locations
            .get(location_id)
            .ok_or(StoreError::LocationNotFound)?;
        Ok(responses::Location {
            location_id: *location_id,
            details: details.clone(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_location(
        &self,
        details: &LocationDetails,
    ) -> Result<responses::Location, StoreError> {
        let mut inner = self.inner.write().await;
        validate_location(details, &inner.regions)?;
        inner.last_location_id += 1;
        let location_id = LocationId(inner.last_location_id);
        inner.locations.insert(location_id, details.clone());
        Ok(responses::Location {
            location_id,
            details: details.clone(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_location(
        &self,
        location_id: &LocationId,
        details: &LocationDetails,
    ) -> Result<responses::Location, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.locations.contains_key(location_id) {
            return Err(StoreError::LocationNotFound);
        }
        validate_location(details, &inner.regions)?;
        inner.locations.insert(*location_id, details.clone());
        Ok(responses::Location {
            location_id: *location_id,
            details: details.clone(),
        })
    }
}

/// While alive, every request that touches the store waits.
#[cfg(feature = "test-utils")]
pub struct StoreHold(#[allow(dead_code)] OwnedRwLockWriteGuard<Inner>);

#[cfg(feature = "test-utils")]
impl Store {
    /// Stall the API until the returned hold is dropped.
    pub async fn hold(&self) -> StoreHold {
        StoreHold(self.inner.clone().write_owned().await)
    }
}

fn validate_location(
    details: &LocationDetails,
    regions: &BTreeMap<RegionId, String>,
) -> Result<(), StoreError> {
    required("site name", &details.site_name, SITE_NAME_MAX_LEN)?;
    required("location", &details.location, LOCATION_NAME_MAX_LEN)?;

    if jiff::tz::db().get(&details.time_zone).is_err() {
        return Err(StoreError::UnknownTimeZone(details.time_zone.clone()));
    }
    if let Some(region_id) = details.region_id
        && !regions.contains_key(&region_id)
    {
        return Err(StoreError::UnknownRegion(region_id));
    }
    if let Some(latitude) = details.latitude
        && !(-90.0..=90.0).contains(&latitude)
    {
        return Err(StoreError::LatitudeOutOfRange(latitude));
    }
    if let Some(longitude) = details.longitude
        && !(-180.0..=180.0).contains(&longitude)
    {
        return Err(StoreError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

fn required(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::FieldRequired(field));
    }
    if value.chars().count() > max_len {
        return Err(StoreError::FieldTooLong(field));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Location not found")]
    LocationNotFound,
    #[error("{0} is required")]
    FieldRequired(&'static str),
    #[error("{0} is too long")]
    FieldTooLong(&'static str),
    #[error("{0} is not a recognized time zone")]
    UnknownTimeZone(String),
    #[error("Region {0} does not exist")]
    UnknownRegion(RegionId),
    #[error("Latitude {0} is invalid - must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is invalid - must be between -180 and 180")]
    LongitudeOutOfRange(f64),
}
