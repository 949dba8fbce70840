//! Main application state management

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{error, info, warn};

use super::CountdownView;
use crate::{
    countdown::{CountdownConfig, CountdownState},
    error::ConfigError,
    scroll::ScrollTracker,
};

/// State shared by the countdown ticker and the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Event window, absent when it failed to load
    pub countdown: Option<CountdownConfig>,
    /// Countdown refresh interval
    pub tick_interval: Duration,
    /// Scroll computations for the page
    pub tracker: ScrollTracker,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Latest countdown evaluation
    pub countdown_tx: watch::Sender<CountdownView>,
    /// Keep the receiver alive to prevent channel closure
    pub _countdown_rx: watch::Receiver<CountdownView>,
}

impl AppState {
    /// Create the state. A failed event window is reported once here and the
    /// countdown stays suppressed for the lifetime of the process.
    pub fn new(
        countdown: Result<CountdownConfig, ConfigError>,
        tick_interval: Duration,
        tracker: ScrollTracker,
        port: u16,
        host: String,
    ) -> Self {
        let (countdown, initial) = match countdown {
            Ok(config) => {
                if config.is_degenerate() {
                    warn!(
                        "Event start {} is not before end {}, countdown will never report 'during'",
                        config.start, config.end
                    );
                }
                (Some(config), CountdownView::Pending)
            }
            Err(e) => {
                error!("Countdown disabled: {}", e);
                let view = CountdownView::Unavailable {
                    error: e.to_string(),
                };
                (None, view)
            }
        };
        let (countdown_tx, countdown_rx) = watch::channel(initial);

        Self {
            countdown,
            tick_interval,
            tracker,
            start_time: Instant::now(),
            port,
            host,
            countdown_tx,
            _countdown_rx: countdown_rx,
        }
    }

    /// Publish a fresh evaluation, replacing the previous one
    pub fn publish_countdown(&self, state: &CountdownState, evaluated_at: DateTime<Utc>) {
        let Some(config) = self.countdown.as_ref() else {
            warn!("Ignoring countdown update while the countdown is suppressed");
            return;
        };

        let view = CountdownView::from_state(config, state, evaluated_at);
        // send_replace never fails, even with no receivers left
        self.countdown_tx.send_replace(view);
    }

    /// Get the latest countdown view
    pub fn countdown_view(&self) -> CountdownView {
        self.countdown_tx.borrow().clone()
    }

    /// Subscribe to countdown updates
    pub fn subscribe_countdown(&self) -> watch::Receiver<CountdownView> {
        self.countdown_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    pub fn log_summary(&self) {
        match &self.countdown {
            Some(config) => info!(
                "Event window: {} -> {}, refresh every {:?}",
                config.start, config.end, self.tick_interval
            ),
            None => info!("Event window unavailable, countdown suppressed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::{compute_phase, Phase};
    use chrono::TimeZone;

    fn window() -> CountdownConfig {
        CountdownConfig::new(
            Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 4, 6, 23, 59, 59).unwrap(),
        )
    }

    fn state(countdown: Result<CountdownConfig, ConfigError>) -> AppState {
        AppState::new(
            countdown,
            Duration::from_secs(1),
            ScrollTracker::default(),
            20553,
            "127.0.0.1".to_string(),
        )
    }

    #[test]
    fn starts_pending() {
        assert_eq!(state(Ok(window())).countdown_view(), CountdownView::Pending);
    }

    #[test]
    fn config_errors_suppress_the_countdown() {
        let app = state(Err(ConfigError::Missing { field: "end" }));
        assert_eq!(
            app.countdown_view(),
            CountdownView::Unavailable {
                error: "missing end instant".to_string()
            }
        );

        // Updates cannot revive a suppressed countdown.
        let config = window();
        app.publish_countdown(&compute_phase(&config, config.start), config.start);
        assert_eq!(app.countdown_view().phase(), None);
    }

    #[test]
    fn publish_replaces_the_previous_view() {
        let app = state(Ok(window()));
        let mut rx = app.subscribe_countdown();
        let config = window();

        app.publish_countdown(&compute_phase(&config, config.start), config.start);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().phase(), Some(Phase::During));

        app.publish_countdown(&compute_phase(&config, config.end), config.end);
        assert_eq!(app.countdown_view().phase(), Some(Phase::After));
    }

    #[test]
    fn uptime_starts_in_seconds() {
        assert!(state(Ok(window())).get_uptime().ends_with('s'));
    }
}
