//! Native delivery API client over reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::delivery;
use super::{BlogPost, ClientFactory, ContentClient, Credentials, Region, StackKeys};
use crate::error::{FetchError, SdkInitializationError};

/// Builds [`StackClient`]s for one delivery endpoint
#[derive(Debug, Clone)]
pub struct StackFactory {
    base_url: String,
    timeout: Option<Duration>,
}

impl StackFactory {
    /// Factory for a Contentstack region
    pub fn new(region: Region) -> Self {
        Self {
            base_url: region.base_url(),
            timeout: None,
        }
    }

    /// Factory for an explicit base URL (proxies, local fakes)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Bound each request; unbounded by default
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl ClientFactory for StackFactory {
    type Client = StackClient;

    async fn create(&self, credentials: &Credentials) -> Result<StackClient, SdkInitializationError> {
        let keys = credentials.validate()?;

        let mut builder = Client::builder().user_agent(concat!("stackblog/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SdkInitializationError::Library(e.to_string()))?;

        tracing::info!(base_url = %self.base_url, environment = %keys.environment, "Content client ready");

        Ok(StackClient {
            http,
            base_url: self.base_url.clone(),
            keys,
        })
    }
}

/// Client handle bound to one stack and environment
#[derive(Debug, Clone)]
pub struct StackClient {
    http: Client,
    base_url: String,
    keys: StackKeys,
}

#[async_trait(?Send)]
impl ContentClient for StackClient {
    async fn query(&self, category: &str) -> Result<Vec<BlogPost>, FetchError> {
        let request = delivery::entries_request(&self.base_url, &self.keys, category);

        let mut call = self.http.get(&request.url);
        for (name, value) in &request.headers {
            call = call.header(*name, value);
        }

        let response = call
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        delivery::parse_entries(status, &body)
    }
}
