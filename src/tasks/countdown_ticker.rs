//! Countdown ticker background task

use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    countdown::{compute_phase, Clock, CountdownConfig, CountdownState, Phase},
    state::AppState,
};

/// Evaluate the countdown once and publish the result.
fn evaluate(state: &AppState, config: &CountdownConfig, clock: &dyn Clock) -> CountdownState {
    let now = clock.now();
    let current = compute_phase(config, now);
    state.publish_countdown(&current, now);
    debug!("Countdown tick: {:?} {}", current.phase, current.time_left());
    current
}

/// Re-evaluate once per `period`, starting one period from now. The caller
/// has already published the evaluation for the present moment.
async fn run_ticker(
    state: Arc<AppState>,
    config: CountdownConfig,
    clock: Arc<dyn Clock>,
    period: Duration,
    mut last_phase: Phase,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let current = evaluate(&state, &config, clock.as_ref());
        if current.phase != last_phase {
            info!("Countdown phase: {}", current.phase.label());
            last_phase = current.phase;
        }

        if current.is_final() {
            info!("Event has ended, stopping countdown ticker");
            break;
        }
    }
}

/// Owns a running ticker. Dropping the guard cancels the task, so nothing
/// is published after teardown.
#[derive(Debug)]
pub struct TickerGuard {
    handle: Option<JoinHandle<()>>,
}

impl TickerGuard {
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancel the ticker and wait for it to wind down.
    pub async fn stop(mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.abort();
        if let Err(e) = handle.await {
            if !e.is_cancelled() {
                warn!("Countdown ticker ended abnormally: {}", e);
            }
        }
        debug!("Countdown ticker stopped");
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

/// Publish the current countdown, then spawn the periodic ticker on the
/// current runtime. The first view is in place before this returns, so the
/// page never reads a pending countdown. No task is spawned when the
/// countdown is suppressed or the event is already over.
pub fn spawn_countdown_ticker(
    state: Arc<AppState>,
    clock: Arc<dyn Clock>,
    period: Duration,
) -> TickerGuard {
    let Some(config) = state.countdown else {
        warn!("Countdown ticker not started: no event window");
        return TickerGuard { handle: None };
    };

    let first = evaluate(&state, &config, clock.as_ref());
    info!("Countdown phase: {}", first.phase.label());
    if first.is_final() {
        info!("Event has already ended, countdown ticker not started");
        return TickerGuard { handle: None };
    }

    info!("Starting countdown ticker ({:?} interval)", period);
    let handle = tokio::spawn(run_ticker(state, config, clock, period, first.phase));
    TickerGuard {
        handle: Some(handle),
    }
}
