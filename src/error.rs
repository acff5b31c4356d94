//! Error types
//!
//! The load lifecycle has exactly two failure kinds: the client could not be
//! constructed, or the content query did not yield data. Both end the session
//! in the terminal error view with a fixed, kind-specific message; the
//! detailed cause is only ever logged.

use thiserror::Error;

/// Message shown when the content client could not be constructed.
pub const INIT_FAILURE_MESSAGE: &str =
    "Could not load Contentstack SDK. Please check the network and refresh the page.";

/// Message shown when the content query failed.
pub const FETCH_FAILURE_MESSAGE: &str =
    "Failed to fetch blog posts. Please check your Contentstack credentials and network connection.";

/// The content client could not be constructed. No network access happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkInitializationError {
    /// A credential was absent or blank
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The underlying HTTP client could not be created
    #[error("Client library failed to load: {0}")]
    Library(String),
}

/// The content query was attempted but did not yield data.
///
/// The variants exist for logging; callers treat them identically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The delivery API rejected the credentials
    #[error("Credentials rejected by delivery API (HTTP {0})")]
    Unauthorized(u16),

    /// Any other non-success status
    #[error("Delivery API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Either half of the load lifecycle failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Client initialization failed: {0}")]
    Init(#[from] SdkInitializationError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl LoadError {
    /// Static message for the error view
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Init(_) => INIT_FAILURE_MESSAGE,
            LoadError::Fetch(_) => FETCH_FAILURE_MESSAGE,
        }
    }
}
