//! State management module
//!
//! This module contains the shared application state and the countdown
//! display record it publishes.

pub mod app_state;
pub mod countdown_view;

// Re-export main types
pub use app_state::AppState;
pub use countdown_view::{CountdownFields, CountdownView};
