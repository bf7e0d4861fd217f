use std::fmt::Display;

use payloads::{
    APIClient, ClientError, LocationDetails, LocationId, responses,
};

/// The backend calls the form depends on.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded wasm executor and hold `!Send` fetch handles.
#[allow(async_fn_in_trait)]
pub trait LocationsApi {
    type Error: Display;

    async fn get_location(
        &self,
        location_id: LocationId,
    ) -> Result<responses::Location, Self::Error>;

    async fn get_regions(
        &self,
    ) -> Result<Vec<responses::Region>, Self::Error>;

    async fn create_location(
        &self,
        details: &LocationDetails,
    ) -> Result<responses::Location, Self::Error>;

    async fn update_location(
        &self,
        location_id: LocationId,
        details: &LocationDetails,
    ) -> Result<responses::Location, Self::Error>;
}

impl LocationsApi for APIClient {
    type Error = ClientError;

    async fn get_location(
        &self,
        location_id: LocationId,
    ) -> Result<responses::Location, ClientError> {
        APIClient::get_location(self, &location_id).await
    }

    async fn get_regions(
        &self,
    ) -> Result<Vec<responses::Region>, ClientError> {
        APIClient::get_regions(self).await
    }

    async fn create_location(
        &self,
        details: &LocationDetails,
    ) -> Result<responses::Location, ClientError> {
        APIClient::create_location(self, details).await
    }

    async fn update_location(
        &self,
        location_id: LocationId,
        details: &LocationDetails,
    ) -> Result<responses::Location, ClientError> {
        APIClient::update_location(self, &location_id, details).await
    }
}
