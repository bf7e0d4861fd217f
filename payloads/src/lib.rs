pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use requests::LocationDetails;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id type wrapper helps ensure we don't mix up location and region ids.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct LocationId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct RegionId(pub i64);
