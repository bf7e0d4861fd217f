use crate::{LocationDetails, LocationId, RegionId};
use serde::{Deserialize, Serialize};

/// A stored location, as returned by `GET /locations/{id}` and by the
/// create/update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: LocationId,
    #[serde(flatten)]
    pub details: LocationDetails,
}

/// A region a location may optionally belong to. Read-only from the
/// client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub region_id: RegionId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_reads_flat_camel_case_record() {
        let location: Location = serde_json::from_value(serde_json::json!({
            "locationId": 7,
            "siteName": "HQ",
            "location": "Main",
            "timeZone": "Europe/London",
            "regionId": 2,
            "latitude": 51.5,
            "longitude": null,
        }))
        .unwrap();

        assert_eq!(location.location_id, LocationId(7));
        assert_eq!(location.details.site_name, "HQ");
        assert_eq!(location.details.region_id, Some(RegionId(2)));
        assert_eq!(location.details.latitude, Some(51.5));
        assert_eq!(location.details.longitude, None);
    }
}
