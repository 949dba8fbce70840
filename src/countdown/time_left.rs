//! Day/hour/minute/second breakdown of a remaining duration

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// The four numeric fields shown by the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Break a millisecond count down by truncating division.
    pub fn from_millis(total_ms: u64) -> Self {
        Self {
            days: total_ms / MS_PER_DAY,
            hours: (total_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (total_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (total_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Negative durations clamp to zero.
    pub fn from_duration(remaining: Duration) -> Self {
        Self::from_millis(remaining.num_milliseconds().max(0) as u64)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_each_unit() {
        // 1d 2h 3m 4.999s
        let ms = MS_PER_DAY + 2 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 4 * MS_PER_SECOND + 999;
        assert_eq!(
            TimeLeft::from_millis(ms),
            TimeLeft {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4,
            }
        );
    }

    #[test]
    fn sub_second_remainder_reads_as_zero() {
        assert!(TimeLeft::from_millis(999).is_zero());
    }

    #[test]
    fn negative_durations_clamp() {
        assert!(TimeLeft::from_duration(Duration::seconds(-30)).is_zero());
    }

    #[test]
    fn display_pads_to_two_digits() {
        let left = TimeLeft {
            days: 120,
            hours: 3,
            minutes: 0,
            seconds: 9,
        };
        assert_eq!(left.to_string(), "120:03:00:09");
    }
}
