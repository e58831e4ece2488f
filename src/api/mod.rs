//! HTTP client for the LocalLedger REST API
//!
//! Every resource endpoint wraps its payload in a status envelope:
//! `{ "status": "SUCCESS" | "ERROR", "message": ..., "data": ... }`.
//! The health probe is the one endpoint that responds bare.

pub mod brokers;
pub mod cash_flow;
pub mod strategies;
pub mod trades;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::config::ApiConfig;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {code}: {body}")]
    Status { code: StatusCode, body: String },
    /// Error envelope from the server; the message is shown to the user as-is
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response shape: {0}")]
    Decode(String),
    #[error("Response carried no data")]
    MissingData,
}

/// Response wrapper shared by all resource endpoints
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Envelope<T> {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<T>,
}

/// Health probe response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status == "UP"
    }
}

/// Client for the LocalLedger backend; cheap to clone into spawned tasks
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Probe the backend; `GET /api/health` responds without an envelope
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.url("/health");
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { code: status, body });
        }
        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        unwrap_envelope(response).await
    }

    async fn get_data_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("GET {} (with query)", url);
        let response = self.client.get(&url).query(query).send().await?;
        unwrap_envelope(response).await
    }

    async fn post_data<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        unwrap_envelope(response).await
    }

    async fn put_data<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(body).send().await?;
        unwrap_envelope(response).await
    }

    async fn delete_resource(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        unwrap_empty_envelope(response).await
    }
}

/// Unwrap an envelope that must carry data
async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let envelope: Envelope<T> = parse_envelope(response).await?;
    if envelope.status != "SUCCESS" {
        return Err(ApiError::Api(envelope.message));
    }
    envelope.data.ok_or(ApiError::MissingData)
}

/// Unwrap an envelope whose data slot is expected to be null (deletes)
async fn unwrap_empty_envelope(response: reqwest::Response) -> Result<(), ApiError> {
    let envelope: Envelope<serde_json::Value> = parse_envelope(response).await?;
    if envelope.status != "SUCCESS" {
        return Err(ApiError::Api(envelope.message));
    }
    Ok(())
}

/// Parse the envelope out of the body; error envelopes travel on non-2xx
/// statuses too, so the body is tried before the status code is judged
async fn parse_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Envelope<T>, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    match serde_json::from_str(&body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if status.is_success() => Err(ApiError::Decode(e.to_string())),
        Err(_) => {
            error!("API returned {}: {}", status, body);
            Err(ApiError::Status { code: status, body })
        }
    }
}

#[cfg(test)]
pub(crate) fn test_client(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout: std::time::Duration::from_secs(5),
    };
    ApiClient::new(&config).expect("client should build")
}
