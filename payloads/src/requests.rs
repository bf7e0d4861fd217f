use crate::RegionId;
use serde::{Deserialize, Serialize};

pub const SITE_NAME_MAX_LEN: usize = 255;
pub const LOCATION_NAME_MAX_LEN: usize = 255;

/// Body of both the create (`POST /locations`) and update
/// (`PUT /locations/{id}`) requests.
///
/// Optional fields serialize as explicit `null` rather than being omitted,
/// so an update clears a previously set region or coordinate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    pub site_name: String,
    pub location: String,
    /// IANA time zone name, e.g. "Europe/London".
    pub time_zone: String,
    pub region_id: Option<RegionId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
