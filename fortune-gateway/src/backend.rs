//! Outbound HTTP client for the fortune backend

use crate::api::{CreateFortune, Fortune};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Fixed timeout applied to every outbound call
pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from talking to the fortune backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// The call never produced a usable body (connect error, timeout)
    #[error("request to fortune backend failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with something that is not a fortune
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the fortune backend, shared across all handlers
///
/// Wraps a single `reqwest::Client` connection pool created once at
/// startup; cloning is cheap and safe for concurrent use.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(BACKEND_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch a single random fortune
    pub async fn random_fortune(&self) -> Result<Fortune, BackendError> {
        let url = format!("{}/fortunes/random", self.base_url);
        debug!("GET {url}");

        let start = Instant::now();
        let body = self.client.get(url).send().await?.text().await?;
        crate::metrics::record_backend_call("random", start.elapsed().as_secs_f64());

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch every fortune the backend holds
    pub async fn list_fortunes(&self) -> Result<Vec<Fortune>, BackendError> {
        let url = format!("{}/fortunes", self.base_url);
        debug!("GET {url}");

        let start = Instant::now();
        let body = self.client.get(url).send().await?.text().await?;
        crate::metrics::record_backend_call("list", start.elapsed().as_secs_f64());

        Ok(serde_json::from_str(&body)?)
    }

    /// Forward a new fortune to the backend
    ///
    /// The response body is discarded; the backend owns the outcome.
    pub async fn create_fortune(&self, fortune: &CreateFortune) -> Result<(), BackendError> {
        let url = format!("{}/fortunes", self.base_url);
        debug!("POST {url}");

        let start = Instant::now();
        self.client.post(url).json(fortune).send().await?;
        crate::metrics::record_backend_call("create", start.elapsed().as_secs_f64());

        Ok(())
    }
}
