//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chat::ChatWidgetConfig;
use crate::content::{Credentials, Region, StackFactory, BLOG_POST_CATEGORY};
use crate::render::SiteInfo;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contentstack: ContentstackConfig,

    #[serde(default)]
    pub chat: ChatWidgetConfig,

    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delivery API configuration
#[derive(Clone, Deserialize)]
pub struct ContentstackConfig {
    pub api_key: Option<String>,

    pub delivery_token: Option<String>,

    pub environment: Option<String>,

    #[serde(default)]
    pub region: Region,

    /// Base URL overriding the region's CDN host
    pub host: Option<String>,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Per-request timeout; unbounded when unset
    pub request_timeout_secs: Option<u64>,
}

fn default_content_type() -> String {
    BLOG_POST_CATEGORY.to_string()
}

impl Default for ContentstackConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            delivery_token: None,
            environment: None,
            region: Region::default(),
            host: None,
            content_type: default_content_type(),
            request_timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for ContentstackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentstackConfig")
            .field("credentials", &self.credentials())
            .field("region", &self.region)
            .field("host", &self.host)
            .field("content_type", &self.content_type)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl ContentstackConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            delivery_token: self.delivery_token.clone(),
            environment: self.environment.clone(),
        }
    }

    /// Client factory for the configured endpoint
    pub fn factory(&self) -> StackFactory {
        let factory = match &self.host {
            Some(host) => StackFactory::with_base_url(host.clone()),
            None => StackFactory::new(self.region),
        };

        match self.request_timeout_secs {
            Some(secs) => factory.timeout(Duration::from_secs(secs)),
            None => factory,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> ConfigLoad {
        let mut config = Config::default();
        let warnings = config.apply_env_overrides();
        ConfigLoad {
            config,
            source: None,
            warnings,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<ConfigLoad, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok(ConfigLoad {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Standard config locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("stackblog").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/stackblog/config.toml"));
        paths.push(PathBuf::from("./stackblog.toml"));
        paths
    }

    /// Load from default locations or environment
    pub fn load_default() -> ConfigLoad {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first of `paths` that parses.
    ///
    /// Files that exist but fail to load are skipped and reported in the
    /// returned warnings; nothing is logged here because logging is not
    /// set up until the config is known.
    pub fn load_first(paths: &[PathBuf]) -> ConfigLoad {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(mut loaded) => {
                    skipped.append(&mut loaded.warnings);
                    loaded.warnings = skipped;
                    return loaded;
                }
                Err(e) => skipped.push(e),
            }
        }

        let mut loaded = Self::from_env();
        skipped.append(&mut loaded.warnings);
        loaded.warnings = skipped;
        loaded
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, returning the ones that were rejected.
    ///
    /// Each credential accepts the `STACKBLOG_` name first, then the
    /// `CONTENTSTACK_` name the browser build also reads.
    pub fn apply_overrides<L>(&mut self, lookup: L) -> Vec<ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&'static str]| {
            names
                .iter()
                .find_map(|name| lookup(*name).map(|value| (*name, value)))
        };
        let mut rejected = Vec::new();

        // Contentstack overrides
        if let Some((_, v)) = first(&["STACKBLOG_API_KEY", "CONTENTSTACK_API_KEY"]) {
            self.contentstack.api_key = Some(v);
        }
        if let Some((_, v)) = first(&["STACKBLOG_DELIVERY_TOKEN", "CONTENTSTACK_DELIVERY_TOKEN"]) {
            self.contentstack.delivery_token = Some(v);
        }
        if let Some((_, v)) = first(&["STACKBLOG_ENVIRONMENT", "CONTENTSTACK_ENVIRONMENT"]) {
            self.contentstack.environment = Some(v);
        }
        if let Some((name, v)) = first(&["STACKBLOG_REGION", "CONTENTSTACK_REGION"]) {
            match v.parse() {
                Ok(region) => self.contentstack.region = region,
                Err(error) => rejected.push(ConfigError::Override { name, error }),
            }
        }
        if let Some(host) = lookup("STACKBLOG_HOST") {
            self.contentstack.host = Some(host);
        }

        // Chat widget overrides
        if let Some(endpoint) = lookup("STACKBLOG_CHAT_ENDPOINT") {
            self.chat.api_endpoint = endpoint;
        }
        if let Some(collection) = lookup("STACKBLOG_CHAT_COLLECTION") {
            self.chat.collection_name = collection;
        }
        if let Some(script_url) = lookup("STACKBLOG_CHAT_SCRIPT_URL") {
            self.chat.script_url = script_url;
        }

        // Logging overrides
        if let Some(level) = lookup("STACKBLOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("STACKBLOG_LOG_FORMAT") {
            match format.parse() {
                Ok(format) => self.logging.format = format,
                Err(error) => rejected.push(ConfigError::Override {
                    name: "STACKBLOG_LOG_FORMAT",
                    error,
                }),
            }
        }

        rejected
    }
}

/// A loaded config plus what went wrong on the way
#[derive(Debug, Default)]
pub struct ConfigLoad {
    pub config: Config,

    /// File the config came from; `None` for defaults plus environment
    pub source: Option<PathBuf>,

    /// Config files that were skipped and overrides that were rejected
    pub warnings: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Emit the load outcome. Call once a subscriber is installed.
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring {name}: {error}")]
    Override { name: &'static str, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Stackblog Configuration
#
# Environment variables override these settings:
# - STACKBLOG_API_KEY (or CONTENTSTACK_API_KEY)
# - STACKBLOG_DELIVERY_TOKEN (or CONTENTSTACK_DELIVERY_TOKEN)
# - STACKBLOG_ENVIRONMENT (or CONTENTSTACK_ENVIRONMENT)
# - STACKBLOG_REGION, STACKBLOG_HOST
# - STACKBLOG_CHAT_ENDPOINT, STACKBLOG_CHAT_COLLECTION, STACKBLOG_CHAT_SCRIPT_URL
# - STACKBLOG_LOG_LEVEL, STACKBLOG_LOG_FORMAT

[contentstack]
# Stack API key, delivery token and publishing environment.
# All three are required.
api_key = ""
delivery_token = ""
environment = ""

# Data centre: us, eu, azure-na, azure-eu, gcp-na
region = "us"

# Optional base URL replacing the region's CDN host
# host = "https://cdn.contentstack.io"

# Content type holding blog posts
content_type = "blog_post"

# Optional per-request timeout in seconds
# request_timeout_secs = 30

[chat]
# Endpoint the embedded chat widget talks to
api_endpoint = "http://127.0.0.1:8000/chat"

# Chat collection identifier
collection_name = "agent_3707864b-f735-4ebf-8a07-68a4ba8823cd"

# Script that defines the chat widget element
script_url = "/chat-widget/contentstack-chat-widget.js"

[site]
title = "My Tech Blog"
tagline = "Powered by Contentstack"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
