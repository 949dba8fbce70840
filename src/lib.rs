//! DevClash - countdown and scroll-state service for the hackathon site
//!
//! The countdown engine and the scroll-state tracker are pure functions of
//! their inputs; the rest of the crate hosts them behind a small HTTP API
//! with a periodic ticker for the countdown.

pub mod api;
pub mod config;
pub mod countdown;
pub mod error;
pub mod scroll;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::ConfigError;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
