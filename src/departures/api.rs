use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::types::LocationDepartures;

/// Client with a total per-request timeout. One is built per invocation.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder().timeout(timeout).build().map_err(Error::Client)
}

pub struct DeparturesClient {
    client: Client,
    url: String,
}

impl DeparturesClient {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }

    /// Raw body of the departure-times endpoint.
    pub async fn fetch(&self) -> Result<Bytes> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(Error::Fetch)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.map_err(Error::Fetch)?;
            return Err(Error::FetchStatus {
                status: status.to_string(),
                body,
            });
        }

        response.bytes().await.map_err(Error::Fetch)
    }
}

pub fn decode_departures(body: &[u8]) -> Result<LocationDepartures> {
    Ok(serde_json::from_slice(body)?)
}
