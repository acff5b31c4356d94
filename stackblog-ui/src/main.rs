//! Stackblog
//!
//! Single-page blog built with Leptos (WASM).
//!
//! # Features
//!
//! - Post grid and detail view, no routing
//! - Posts fetched once per session from the Contentstack delivery API
//! - Embedded chat widget
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The view state machine and delivery API codec come from the
//! `stackblog` core crate; this crate supplies the browser transport and the
//! components. Stack credentials are baked in at build time from
//! `CONTENTSTACK_API_KEY`, `CONTENTSTACK_DELIVERY_TOKEN` and
//! `CONTENTSTACK_ENVIRONMENT`.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
