//! Intake endpoint transport

use async_trait::async_trait;
use lead_forms::FormValues;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;

/// Transport errors
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout or client setup failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-2xx answer
    #[error("endpoint answered with status {0}")]
    Status(u16),
    /// Answer body was not what the endpoint should send
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Liveness payload returned by the intake endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeInfo {
    /// Always true from a healthy endpoint
    pub ok: bool,
    /// Deployment environment name
    pub env: String,
    /// API version tag
    pub version: String,
}

/// Delivers a validated lead to the intake endpoint.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Post the values; `Ok` only for a 2xx answer.
    async fn submit(&self, values: &FormValues) -> Result<(), TransportError>;
}

/// HTTP transport backed by reqwest
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Client for `config.endpoint` with the configured timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { endpoint: config.endpoint.clone(), client })
    }

    /// Endpoint URL this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query the liveness probe on the same path
    pub async fn probe(&self) -> Result<ProbeInfo, TransportError> {
        let resp = self.client.get(&self.endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(TransportError::Status(resp.status().as_u16()));
        }
        let info: ProbeInfo = resp.json().await.map_err(|e| TransportError::Decode(e.to_string()))?;
        if !info.ok {
            return Err(TransportError::Decode("probe reported ok=false".into()));
        }
        Ok(info)
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn submit(&self, values: &FormValues) -> Result<(), TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "posting lead");
        let resp = self.client.post(&self.endpoint).json(values).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(())
    }
}
