//! View Model
//!
//! The state machine that the load lifecycle and user interaction drive.

pub mod state;

pub use state::{transition, Posts, ViewEvent, ViewState};
