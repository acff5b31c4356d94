//! Browser Delivery Client
//!
//! gloo-net transport for the delivery API. Request building and response
//! parsing come from `stackblog::content::delivery`.

use async_trait::async_trait;
use gloo_net::http::Request;

use stackblog::content::delivery;
use stackblog::{
    BlogPost, ClientFactory, ContentClient, Credentials, FetchError, Region,
    SdkInitializationError, StackKeys,
};

/// Builds [`BrowserStackClient`]s for one delivery endpoint
pub struct BrowserStackFactory {
    base_url: String,
}

impl BrowserStackFactory {
    pub fn new(region: Region) -> Self {
        Self {
            base_url: region.base_url(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ClientFactory for BrowserStackFactory {
    type Client = BrowserStackClient;

    async fn create(&self, credentials: &Credentials) -> Result<BrowserStackClient, SdkInitializationError> {
        let keys = credentials.validate()?;

        // fetch() needs a window; workers and non-browser hosts lack one
        if web_sys::window().is_none() {
            return Err(SdkInitializationError::Library(
                "no browser window available".to_string(),
            ));
        }

        Ok(BrowserStackClient {
            base_url: self.base_url.clone(),
            keys,
        })
    }
}

/// Client handle for the session
pub struct BrowserStackClient {
    base_url: String,
    keys: StackKeys,
}

#[async_trait(?Send)]
impl ContentClient for BrowserStackClient {
    async fn query(&self, category: &str) -> Result<Vec<BlogPost>, FetchError> {
        let request = delivery::entries_request(&self.base_url, &self.keys, category);

        let mut builder = Request::get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        delivery::parse_entries(status, &body)
    }
}
