//! Content Client
//!
//! The narrow seam between the blog and the headless CMS:
//! - [`ClientFactory`] turns credentials into a client handle
//! - [`ContentClient`] issues a query for one content category
//! - [`fetch_posts`] runs the single query of a session
//!
//! The delivery API wire format lives in [`delivery`] so the native
//! (`reqwest`) and browser (`gloo-net`) transports share it.

pub mod delivery;
mod fetcher;
#[cfg(feature = "native")]
mod stack;

pub use fetcher::fetch_posts;
#[cfg(feature = "native")]
pub use stack::{StackClient, StackFactory};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FetchError, SdkInitializationError};

/// Content type uid the blog queries
pub const BLOG_POST_CATEGORY: &str = "blog_post";

/// A published blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Stable identifier assigned by the content store
    pub uid: String,
    pub title: String,
    /// Canonical path, e.g. `/hello`
    #[serde(default)]
    pub url: String,
    /// Pre-rendered markup, displayed verbatim
    #[serde(default)]
    pub body: String,
}

impl BlogPost {
    pub fn new(
        uid: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Stack credentials as supplied by configuration; any of them may be absent.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub delivery_token: Option<String>,
    pub environment: Option<String>,
}

// Tokens stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("delivery_token", &self.delivery_token.as_ref().map(|_| "<set>"))
            .field("environment", &self.environment)
            .finish()
    }
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        delivery_token: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Some(api_key.into()),
            delivery_token: Some(delivery_token.into()),
            environment: Some(environment.into()),
        }
    }

    /// Check that all three values are present and non-blank
    pub fn validate(&self) -> Result<StackKeys, SdkInitializationError> {
        Ok(StackKeys {
            api_key: required(&self.api_key, "api_key")?,
            delivery_token: required(&self.delivery_token, "delivery_token")?,
            environment: required(&self.environment, "environment")?,
        })
    }
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, SdkInitializationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(SdkInitializationError::MissingCredential(name)),
    }
}

/// Validated credentials held by a client handle
#[derive(Clone, PartialEq, Eq)]
pub struct StackKeys {
    pub api_key: String,
    pub delivery_token: String,
    pub environment: String,
}

impl fmt::Debug for StackKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackKeys")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Delivery API data centre
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    Us,
    Eu,
    AzureNa,
    AzureEu,
    GcpNa,
}

impl Region {
    /// CDN host serving the delivery API
    pub fn cdn_host(&self) -> &'static str {
        match self {
            Region::Us => "cdn.contentstack.io",
            Region::Eu => "eu-cdn.contentstack.com",
            Region::AzureNa => "azure-na-cdn.contentstack.com",
            Region::AzureEu => "azure-eu-cdn.contentstack.com",
            Region::GcpNa => "gcp-na-cdn.contentstack.com",
        }
    }

    /// `https://` base URL for this region
    pub fn base_url(&self) -> String {
        format!("https://{}", self.cdn_host())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" | "na" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "azure-na" => Ok(Region::AzureNa),
            "azure-eu" => Ok(Region::AzureEu),
            "gcp-na" => Ok(Region::GcpNa),
            other => Err(format!("unknown region: {}", other)),
        }
    }
}

/// An authenticated connection context able to query content.
///
/// Read-only after construction. Declared `?Send`: both the browser event
/// loop and the native current-thread runtime are single-threaded.
#[async_trait(?Send)]
pub trait ContentClient {
    /// Fetch every entry of `category`, in backend order
    async fn query(&self, category: &str) -> Result<Vec<BlogPost>, FetchError>;
}

/// Builds the session's client handle from credentials.
///
/// Must not touch the network; the query is the first network access.
#[async_trait(?Send)]
pub trait ClientFactory {
    type Client: ContentClient;

    async fn create(&self, credentials: &Credentials) -> Result<Self::Client, SdkInitializationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_credentials() {
        let keys = Credentials::new("blt123", "cs456", "production")
            .validate()
            .unwrap();
        assert_eq!(keys.api_key, "blt123");
        assert_eq!(keys.delivery_token, "cs456");
        assert_eq!(keys.environment, "production");
    }

    #[test]
    fn test_validate_reports_first_missing() {
        let creds = Credentials {
            api_key: Some("blt123".into()),
            delivery_token: None,
            environment: None,
        };
        assert_eq!(
            creds.validate(),
            Err(SdkInitializationError::MissingCredential("delivery_token"))
        );
    }

    #[test]
    fn test_validate_rejects_blank() {
        let creds = Credentials::new("blt123", "cs456", "   ");
        assert_eq!(
            creds.validate(),
            Err(SdkInitializationError::MissingCredential("environment"))
        );
    }

    #[test]
    fn test_debug_hides_tokens() {
        let creds = Credentials::new("blt-secret", "cs-secret", "production");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("production"));
    }

    #[test]
    fn test_region_parsing() {
        assert_eq!("EU".parse::<Region>(), Ok(Region::Eu));
        assert_eq!("azure-na".parse::<Region>(), Ok(Region::AzureNa));
        assert!("mars".parse::<Region>().is_err());
        assert_eq!(Region::default().base_url(), "https://cdn.contentstack.io");
    }

    #[test]
    fn test_post_deserialize_defaults() {
        let post: BlogPost =
            serde_json::from_str(r#"{"uid":"a1","title":"Hello","locale":"en-us"}"#).unwrap();
        assert_eq!(post, BlogPost::new("a1", "Hello", "", ""));
    }
}
