//! HTTP client for the greeting backend.

use std::time::Duration;

use crate::config::{FrontendConfig, USER_AGENT};
use crate::error::FetchError;
use crate::message::Message;
use crate::middleware::{RequestId, REQUEST_ID_HEADER};

/// Fetches the greeting from a fixed backend URL.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct MessageClient {
    http: reqwest::Client,
    api_url: String,
}

impl MessageClient {
    pub fn new(config: &FrontendConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Issue one GET to the backend and return its `message` field.
    ///
    /// `request_id` is forwarded so the backend logs under the same id.
    /// No retries. Non-2xx statuses are failures.
    pub async fn fetch_message(&self, request_id: RequestId) -> Result<String, FetchError> {
        tracing::debug!(url = %self.api_url, "Calling backend");

        let response = self
            .http
            .get(&self.api_url)
            .header(REQUEST_ID_HEADER, request_id.0.to_string())
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: Message = response.json().await.map_err(FetchError::Decode)?;
        Ok(body.message)
    }
}
