//! Presentation model
//!
//! [`screen`] maps a [`ViewState`] to what should be on screen, one rule
//! per variant. Renderers (the Leptos components, [`text`]) only lay the
//! result out; they never branch on anything but the [`Screen`] variant.
//!
//! Post bodies are passed through verbatim as trusted HTML. Content from a
//! stack that is not fully trusted is a cross-site-scripting exposure.

pub mod text;

use serde::Deserialize;

use crate::view::ViewState;

/// Heading above the post grid
pub const LIST_HEADING: &str = "Latest Posts";

/// Shown instead of an empty grid
pub const EMPTY_PLACEHOLDER: &str =
    "No blog posts found. Please add some posts in your Contentstack space.";

/// Affordance on each grid card
pub const READ_MORE: &str = "Read more →";

/// Affordance on the detail view
pub const BACK_LABEL: &str = "← Back to all posts";

/// Header text around every screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteInfo {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_title() -> String {
    "My Tech Blog".to_string()
}

fn default_tagline() -> String {
    "Powered by Contentstack".to_string()
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
        }
    }
}

/// One clickable summary in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard<'a> {
    /// 1-based position in the grid
    pub position: usize,
    pub uid: &'a str,
    pub title: &'a str,
    pub affordance: &'static str,
}

/// Rendered form of a view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Nothing has started yet
    Blank,
    Spinner,
    ErrorBanner {
        message: &'a str,
    },
    PostGrid {
        heading: &'static str,
        cards: Vec<PostCard<'a>>,
    },
    EmptyList {
        heading: &'static str,
        placeholder: &'static str,
    },
    PostDetail {
        back_label: &'static str,
        title: &'a str,
        /// Inserted as-is
        body_html: &'a str,
    },
}

/// Presentation for `state`
pub fn screen(state: &ViewState) -> Screen<'_> {
    match state {
        ViewState::Uninitialized => Screen::Blank,
        ViewState::Loading => Screen::Spinner,
        ViewState::Error(message) => Screen::ErrorBanner {
            message: message.as_str(),
        },
        ViewState::List(posts) if posts.is_empty() => Screen::EmptyList {
            heading: LIST_HEADING,
            placeholder: EMPTY_PLACEHOLDER,
        },
        ViewState::List(posts) => Screen::PostGrid {
            heading: LIST_HEADING,
            cards: posts
                .iter()
                .enumerate()
                .map(|(i, post)| PostCard {
                    position: i + 1,
                    uid: &post.uid,
                    title: &post.title,
                    affordance: READ_MORE,
                })
                .collect(),
        },
        ViewState::Detail { .. } => match state.selected_post() {
            Some(post) => Screen::PostDetail {
                back_label: BACK_LABEL,
                title: &post.title,
                body_html: &post.body,
            },
            // Unreachable through `transition`, which only builds in-range indexes
            None => Screen::Blank,
        },
    }
}
