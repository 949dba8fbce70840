use std::{
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use chrono::{DateTime, Duration, TimeZone, Utc};

use devclash::{
    countdown::{Clock, CountdownConfig, Phase},
    scroll::ScrollTracker,
    state::{AppState, CountdownView},
    tasks::spawn_countdown_ticker,
    ConfigError,
};

/// Clock the test moves by hand.
struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(now)))
    }

    fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

fn window() -> CountdownConfig {
    CountdownConfig::new(
        Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 4, 6, 23, 59, 59).unwrap(),
    )
}

fn app(countdown: Result<CountdownConfig, ConfigError>) -> Arc<AppState> {
    Arc::new(AppState::new(
        countdown,
        StdDuration::from_secs(1),
        ScrollTracker::default(),
        0,
        "127.0.0.1".to_string(),
    ))
}

#[tokio::test(start_paused = true)]
async fn first_evaluation_is_immediate() {
    let config = window();
    let state = app(Ok(config));
    let clock = ManualClock::new(config.start - Duration::hours(12));
    let mut rx = state.subscribe_countdown();

    let _guard = spawn_countdown_ticker(Arc::clone(&state), clock, StdDuration::from_secs(1));
    rx.changed().await.unwrap();

    let view = rx.borrow_and_update().clone();
    assert_eq!(view.phase(), Some(Phase::Before));
    assert_eq!(view.fields().unwrap().hours, 12);
}

#[tokio::test(start_paused = true)]
async fn ticks_follow_the_clock_and_stop_after_the_end() {
    let config = window();
    let state = app(Ok(config));
    let clock = ManualClock::new(config.end - Duration::seconds(2));
    let mut rx = state.subscribe_countdown();

    let guard = spawn_countdown_ticker(
        Arc::clone(&state),
        Arc::clone(&clock) as Arc<dyn Clock>,
        StdDuration::from_secs(1),
    );

    rx.changed().await.unwrap();
    let first = rx.borrow_and_update().clone();
    assert_eq!(first.phase(), Some(Phase::During));
    assert_eq!(first.fields().unwrap().seconds, 2);

    clock.set(config.end);
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().phase(), Some(Phase::After));

    // The ticker exits on its own once the event is over.
    tokio::time::sleep(StdDuration::from_secs(1)).await;
    assert!(guard.is_finished());

    clock.set(config.start);
    tokio::time::sleep(StdDuration::from_secs(5)).await;
    assert!(!rx.has_changed().unwrap());
    assert_eq!(state.countdown_view().phase(), Some(Phase::After));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_guard_stops_publishing() {
    let config = window();
    let state = app(Ok(config));
    let clock = ManualClock::new(config.start - Duration::days(3));
    let mut rx = state.subscribe_countdown();

    let guard = spawn_countdown_ticker(
        Arc::clone(&state),
        Arc::clone(&clock) as Arc<dyn Clock>,
        StdDuration::from_secs(1),
    );
    rx.changed().await.unwrap();
    let _ = rx.borrow_and_update();

    drop(guard);
    tokio::task::yield_now().await;

    clock.set(config.start);
    tokio::time::sleep(StdDuration::from_secs(5)).await;
    assert!(!rx.has_changed().unwrap());
    assert_eq!(state.countdown_view().phase(), Some(Phase::Before));
}

#[tokio::test(start_paused = true)]
async fn explicit_stop_waits_for_the_task() {
    let config = window();
    let state = app(Ok(config));
    let clock = ManualClock::new(config.start);

    let guard = spawn_countdown_ticker(Arc::clone(&state), clock, StdDuration::from_secs(1));
    tokio::time::sleep(StdDuration::from_secs(3)).await;
    guard.stop().await;

    assert_eq!(state.countdown_view().phase(), Some(Phase::During));
}

#[tokio::test]
async fn suppressed_countdown_never_ticks() {
    let state = app(Err(ConfigError::Missing { field: "start" }));
    let clock = ManualClock::new(window().start);

    let guard = spawn_countdown_ticker(Arc::clone(&state), clock, StdDuration::from_millis(10));
    tokio::time::sleep(StdDuration::from_millis(50)).await;

    assert!(guard.is_finished());
    assert!(matches!(
        state.countdown_view(),
        CountdownView::Unavailable { .. }
    ));
}

#[tokio::test]
async fn countdown_is_published_before_spawn_returns() {
    let config = window();
    let state = app(Ok(config));
    let clock = ManualClock::new(config.start - Duration::hours(12));

    let _guard = spawn_countdown_ticker(Arc::clone(&state), clock, StdDuration::from_secs(1));

    let view = state.countdown_view();
    assert!(view.phase().is_some());
    assert_eq!(view.phase(), Some(Phase::Before));
    assert_eq!(view.fields().unwrap().hours, 12);
}

#[tokio::test]
async fn ended_event_publishes_after_without_a_task() {
    let config = window();
    let state = app(Ok(config));
    let clock = ManualClock::new(config.end + Duration::days(30));

    let guard = spawn_countdown_ticker(Arc::clone(&state), clock, StdDuration::from_secs(1));

    assert!(guard.is_finished());
    assert_eq!(state.countdown_view().phase(), Some(Phase::After));
}
