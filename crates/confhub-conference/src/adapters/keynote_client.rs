//! HTTP Keynote Client
//!
//! Fetches keynotes from the keynote service using reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use confhub::{DomainError, Keynote, KeynoteClient};

const USER_AGENT: &str = concat!("confhub-conference/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of KeynoteClient
pub struct HttpKeynoteClient {
    client: Client,
    base_url: String,
}

impl HttpKeynoteClient {
    /// Build a client for the keynote service at `base_url`.
    /// Every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn keynote_url(&self, id: i64) -> String {
        format!("{}/api/keynotes/{}", self.base_url, id)
    }
}

#[async_trait]
impl KeynoteClient for HttpKeynoteClient {
    async fn fetch_keynote(&self, id: i64) -> Result<Option<Keynote>, DomainError> {
        let response = self
            .client
            .get(self.keynote_url(id))
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() {
                    "timed out"
                } else if e.is_connect() {
                    "connection failed"
                } else {
                    "request failed"
                };
                DomainError::DownstreamUnavailable(format!("keynote {}: {}: {}", id, kind, e))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(DomainError::DownstreamUnavailable(format!(
                "keynote {}: keynote service answered {}",
                id, status
            )));
        }

        let keynote = response.json::<Keynote>().await.map_err(|e| {
            DomainError::DownstreamUnavailable(format!("keynote {}: invalid body: {}", id, e))
        })?;

        Ok(Some(keynote))
    }
}
