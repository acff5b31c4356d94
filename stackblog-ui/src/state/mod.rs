//! State Management
//!
//! View state signal and the load lifecycle that drives it.

pub mod global;

pub use global::{provide_blog_state, use_blog_state, BlogState};
