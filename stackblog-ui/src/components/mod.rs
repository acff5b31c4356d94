//! UI Components
//!
//! Leptos components for each screen of the blog, plus page chrome.

pub mod blog_view;
pub mod chat_widget;
pub mod error_banner;
pub mod header;
pub mod loading;
pub mod post_detail;
pub mod post_list;

pub use blog_view::BlogView;
pub use chat_widget::ChatWidget;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use loading::Loading;
pub use post_detail::PostDetail;
pub use post_list::{EmptyPostList, PostList};
