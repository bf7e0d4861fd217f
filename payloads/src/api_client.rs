use crate::{LocationDetails, LocationId, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// All locations, ordered by id.
    pub async fn list_locations(
        &self,
    ) -> Result<Vec<responses::Location>, ClientError> {
        let response = self.empty_get("locations").await?;
        ok_body(response).await
    }

    pub async fn get_location(
        &self,
        location_id: &LocationId,
    ) -> Result<responses::Location, ClientError> {
        let response =
            self.empty_get(&format!("locations/{location_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_location(
        &self,
        details: &LocationDetails,
    ) -> Result<responses::Location, ClientError> {
        let response = self.post("locations", details).await?;
        ok_body(response).await
    }

    /// Replace every field of an existing location.
    pub async fn update_location(
        &self,
        location_id: &LocationId,
        details: &LocationDetails,
    ) -> Result<responses::Location, ClientError> {
        let response =
            self.put(&format!("locations/{location_id}"), details).await?;
        ok_body(response).await
    }

    pub async fn get_regions(
        &self,
    ) -> Result<Vec<responses::Region>, ClientError> {
        let response = self.empty_get("regions").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// A successful response whose body isn't what we expected.
    #[error("Unexpected response from the server.")]
    Decode(#[source] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            ClientError::Decode(e)
        } else {
            ClientError::Network(e)
        }
    })
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
