//! App Root Component
//!
//! Provides the blog state, starts the one-shot load, and lays out the page.

use leptos::*;

use crate::api;
use crate::components::{BlogView, ChatWidget, Header};
use crate::state::provide_blog_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_blog_state(api::site_info());

    // Build the client and fetch posts once for this session
    state.start(api::build_factory(), api::build_credentials());

    view! {
        <div class="bg-slate-50 min-h-screen font-sans text-slate-800">
            <Header />
            <main class="container mx-auto p-4 md:p-8">
                <BlogView />
            </main>
            <ChatWidget config=api::chat_config() />
        </div>
    }
}
