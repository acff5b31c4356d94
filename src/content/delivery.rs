//! Delivery API wire format.
//!
//! Requests are described as plain data and responses are parsed from a
//! status code and body, so the transport (reqwest natively, gloo-net in the
//! browser) only moves bytes.

use serde::Deserialize;

use super::{BlogPost, StackKeys};
use crate::error::FetchError;

/// Statuses the delivery API uses for bad or missing credentials
const AUTH_FAILURE_STATUSES: [u16; 4] = [401, 403, 412, 422];

/// Longest error body kept in a [`FetchError::Status`]
const MAX_ERROR_BODY: usize = 256;

/// A GET request against the delivery API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

/// Build the "all entries of a content type" request.
pub fn entries_request(base_url: &str, keys: &StackKeys, category: &str) -> DeliveryRequest {
    DeliveryRequest {
        url: format!(
            "{}/v3/content_types/{}/entries?environment={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(category),
            urlencoding::encode(&keys.environment),
        ),
        headers: vec![
            ("api_key", keys.api_key.clone()),
            ("access_token", keys.delivery_token.clone()),
        ],
    }
}

#[derive(Deserialize)]
struct EntriesEnvelope {
    entries: Vec<BlogPost>,
}

/// Interpret a delivery API response.
///
/// Entries keep the order the backend returned them in.
pub fn parse_entries(status: u16, body: &str) -> Result<Vec<BlogPost>, FetchError> {
    if AUTH_FAILURE_STATUSES.contains(&status) {
        return Err(FetchError::Unauthorized(status));
    }

    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            status,
            body: body.chars().take(MAX_ERROR_BODY).collect(),
        });
    }

    let envelope: EntriesEnvelope = serde_json::from_str(body)?;
    Ok(envelope.entries)
}
