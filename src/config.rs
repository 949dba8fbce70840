//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{
    countdown::CountdownConfig,
    error::ConfigError,
    scroll::{OverlayBand, ScrollSettings},
};

/// Default event start, read as host local time.
pub const DEFAULT_START: &str = "2026-02-28T00:00:00";
/// Default event end, read as host local time.
pub const DEFAULT_END: &str = "2026-04-06T23:59:59";

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "devclash")]
#[command(about = "Countdown and scroll-state service for the DevClash hackathon site")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, env = "DEVCLASH_PORT", default_value = "20553")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, env = "DEVCLASH_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Event start (ISO-8601; local time when no offset is given)
    #[arg(long, env = "DEVCLASH_START", default_value = DEFAULT_START)]
    pub start: String,

    /// Event end (ISO-8601; local time when no offset is given)
    #[arg(long, env = "DEVCLASH_END", default_value = DEFAULT_END)]
    pub end: String,

    /// Countdown refresh interval in milliseconds
    #[arg(long, env = "DEVCLASH_TICK_MS", default_value = "1000")]
    pub tick_ms: u64,

    /// Probe point below the viewport top for nav highlighting, in pixels
    #[arg(long, default_value = "100", allow_negative_numbers = true)]
    pub probe_offset: f64,

    /// Start of the background overlay band, in viewport heights
    #[arg(long, default_value = "0.5")]
    pub overlay_start: f64,

    /// End of the background overlay band, in viewport heights
    #[arg(long, default_value = "3.0")]
    pub overlay_end: f64,

    /// Scroll offset past which the nav bar condenses, in pixels
    #[arg(long, default_value = "50")]
    pub condense_after: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Parse the event window
    pub fn countdown(&self) -> Result<CountdownConfig, ConfigError> {
        CountdownConfig::parse(&self.start, &self.end)
    }

    /// Countdown refresh interval
    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        Ok(Duration::from_millis(self.tick_ms))
    }

    pub fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            probe_offset: self.probe_offset,
            overlay_band: OverlayBand::new(self.overlay_start, self.overlay_end),
            condense_after: self.condense_after,
        }
    }
}
