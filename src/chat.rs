//! Chat widget settings.
//!
//! The widget is an opaque embedded component shipped as its own script; the
//! blog loads that script and hands the element an endpoint and a collection
//! identifier.

use serde::Deserialize;

/// Configuration passed to the embedded chat widget
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatWidgetConfig {
    /// HTTP endpoint the widget posts messages to
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Collection / session identifier on the chat backend
    #[serde(default = "default_collection_name")]
    pub collection_name: String,

    /// Script defining the `contentstack-chat-widget` element
    #[serde(default = "default_script_url")]
    pub script_url: String,
}

fn default_api_endpoint() -> String {
    "http://127.0.0.1:8000/chat".to_string()
}

fn default_collection_name() -> String {
    "agent_3707864b-f735-4ebf-8a07-68a4ba8823cd".to_string()
}

fn default_script_url() -> String {
    "/chat-widget/contentstack-chat-widget.js".to_string()
}

impl Default for ChatWidgetConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            collection_name: default_collection_name(),
            script_url: default_script_url(),
        }
    }
}
