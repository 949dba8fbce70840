//! Phase engine: where "now" falls relative to the event window

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{instant::parse_instant_in, TimeLeft};
use crate::error::ConfigError;

/// Which part of the event the present moment falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    During,
    After,
}

impl Phase {
    /// Header shown above the countdown digits.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Before => "Starts In",
            Phase::During => "Ends In",
            Phase::After => "Event Ended",
        }
    }
}

/// The configured event window. Loaded once, never mutated.
///
/// `start` is expected to precede `end`. When it does not, the engine never
/// reports `During`: any `now` before `start` is `Before`, everything else is
/// `After`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CountdownConfig {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Parse both instants, reading offset-less values in `tz`.
    pub fn parse_in<Tz: chrono::TimeZone>(
        start: &str,
        end: &str,
        tz: &Tz,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            start: parse_instant_in("start", start, tz)?,
            end: parse_instant_in("end", end, tz)?,
        })
    }

    /// Parse both instants, reading offset-less values as host local time.
    pub fn parse(start: &str, end: &str) -> Result<Self, ConfigError> {
        Self::parse_in(start, end, &chrono::Local)
    }

    /// True when the window can never produce `During`.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }
}

/// Result of one evaluation of the phase engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    pub phase: Phase,
    /// Time until the next boundary; zero once the event is over.
    pub remaining: Duration,
}

impl CountdownState {
    pub fn time_left(&self) -> TimeLeft {
        TimeLeft::from_duration(self.remaining)
    }

    /// No later evaluation can differ from this one.
    pub fn is_final(&self) -> bool {
        self.phase == Phase::After
    }
}

/// Evaluate the phase for `now` over the half-open window `[start, end)`.
pub fn compute_phase(config: &CountdownConfig, now: DateTime<Utc>) -> CountdownState {
    if now < config.start {
        CountdownState {
            phase: Phase::Before,
            remaining: config.start - now,
        }
    } else if now < config.end {
        CountdownState {
            phase: Phase::During,
            remaining: config.end - now,
        }
    } else {
        CountdownState {
            phase: Phase::After,
            remaining: Duration::zero(),
        }
    }
}
