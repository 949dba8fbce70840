//! Display record for the countdown

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::{CountdownConfig, CountdownState, Phase};

/// What the page shows for the countdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum CountdownView {
    /// Not evaluated yet.
    #[default]
    Pending,
    Before(CountdownFields),
    During(CountdownFields),
    After(CountdownFields),
    /// The event window could not be loaded; the countdown is suppressed.
    Unavailable { error: String },
}

/// Four numeric fields plus context for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownFields {
    pub label: String,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub remaining_ms: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CountdownView {
    pub fn from_state(
        config: &CountdownConfig,
        state: &CountdownState,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let left = state.time_left();
        let fields = CountdownFields {
            label: state.phase.label().to_string(),
            days: left.days,
            hours: left.hours,
            minutes: left.minutes,
            seconds: left.seconds,
            remaining_ms: state.remaining.num_milliseconds(),
            start: config.start,
            end: config.end,
            updated_at,
        };
        match state.phase {
            Phase::Before => Self::Before(fields),
            Phase::During => Self::During(fields),
            Phase::After => Self::After(fields),
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Before(_) => Some(Phase::Before),
            Self::During(_) => Some(Phase::During),
            Self::After(_) => Some(Phase::After),
            Self::Pending | Self::Unavailable { .. } => None,
        }
    }

    pub fn fields(&self) -> Option<&CountdownFields> {
        match self {
            Self::Before(fields) | Self::During(fields) | Self::After(fields) => Some(fields),
            Self::Pending | Self::Unavailable { .. } => None,
        }
    }
}
