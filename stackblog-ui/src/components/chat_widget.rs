//! Chat Widget Mount
//!
//! The widget is a third-party custom element with its own lifecycle. The
//! blog loads the script that defines it and hands the element its
//! configuration; the element upgrades once the script has run.

use leptos::*;

use stackblog::ChatWidgetConfig;

/// Mount point for the embedded chat widget
#[component]
pub fn ChatWidget(config: ChatWidgetConfig) -> impl IntoView {
    view! {
        <script type="module" src=config.script_url></script>
        <contentstack-chat-widget
            data-api-endpoint=config.api_endpoint
            data-collection-name=config.collection_name
        />
    }
}
