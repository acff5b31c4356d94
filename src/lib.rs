//! # Stackblog
//!
//! A single-page blog front-end for the Contentstack delivery API.
//!
//! ## Modules
//!
//! - [`content`]: client factory, client handle, delivery API codec, fetcher
//! - [`view`]: the view state machine
//! - [`session`]: load lifecycle and user interaction
//! - [`render`]: presentation model and text renderer
//! - [`chat`]: settings for the embedded chat widget
//! - `config`: TOML + environment configuration (`native` feature)
//!
//! With default features off the crate has no native-only dependencies and
//! is shared by the Leptos WASM frontend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stackblog::content::{Credentials, Region, StackFactory};
//! use stackblog::render::{screen, text};
//! use stackblog::BlogSession;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let credentials = Credentials::new("blt...", "cs...", "production");
//!     let mut session = BlogSession::new(StackFactory::new(Region::Us), credentials);
//!
//!     session.start().await;
//!     print!("{}", text::render(&screen(session.state())));
//!
//!     session.select_position(1);
//!     print!("{}", text::render(&screen(session.state())));
//! }
//! ```

pub mod chat;
#[cfg(feature = "native")]
pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod session;
pub mod view;

// Re-export top-level types for convenience
pub use chat::ChatWidgetConfig;

pub use content::{
    fetch_posts, BlogPost, ClientFactory, ContentClient, Credentials, Region, StackKeys,
    BLOG_POST_CATEGORY,
};

#[cfg(feature = "native")]
pub use content::{StackClient, StackFactory};

pub use error::{
    FetchError, LoadError, SdkInitializationError, FETCH_FAILURE_MESSAGE, INIT_FAILURE_MESSAGE,
};

pub use render::{screen, PostCard, Screen, SiteInfo};

pub use session::{load, BlogSession};

pub use view::{transition, Posts, ViewEvent, ViewState};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, ConfigLoad, ContentstackConfig, LogFormat, LoggingConfig};
