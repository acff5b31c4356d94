//! Delivery API access and build-time settings.

mod client;

pub use client::BrowserStackFactory;

use stackblog::{ChatWidgetConfig, Credentials, Region, SiteInfo};

/// Stack credentials captured when the bundle was built.
///
/// Absent values surface as a client initialization error at startup.
pub fn build_credentials() -> Credentials {
    Credentials {
        api_key: option_env!("CONTENTSTACK_API_KEY").map(str::to_string),
        delivery_token: option_env!("CONTENTSTACK_DELIVERY_TOKEN").map(str::to_string),
        environment: option_env!("CONTENTSTACK_ENVIRONMENT").map(str::to_string),
    }
}

/// Client factory for the build-time region or host
pub fn build_factory() -> BrowserStackFactory {
    if let Some(host) = option_env!("CONTENTSTACK_HOST") {
        return BrowserStackFactory::with_base_url(host);
    }

    let region = option_env!("CONTENTSTACK_REGION")
        .and_then(|r| r.parse().ok())
        .unwrap_or(Region::Us);
    BrowserStackFactory::new(region)
}

/// Chat widget settings, overridable at build time
pub fn chat_config() -> ChatWidgetConfig {
    let defaults = ChatWidgetConfig::default();
    ChatWidgetConfig {
        api_endpoint: option_env!("STACKBLOG_CHAT_ENDPOINT")
            .map(str::to_string)
            .unwrap_or(defaults.api_endpoint),
        collection_name: option_env!("STACKBLOG_CHAT_COLLECTION")
            .map(str::to_string)
            .unwrap_or(defaults.collection_name),
        script_url: option_env!("STACKBLOG_CHAT_SCRIPT_URL")
            .map(str::to_string)
            .unwrap_or(defaults.script_url),
    }
}

/// Header text, overridable at build time
pub fn site_info() -> SiteInfo {
    let defaults = SiteInfo::default();
    SiteInfo {
        title: option_env!("STACKBLOG_SITE_TITLE")
            .map(str::to_string)
            .unwrap_or(defaults.title),
        tagline: option_env!("STACKBLOG_SITE_TAGLINE")
            .map(str::to_string)
            .unwrap_or(defaults.tagline),
    }
}
