//! Countdown module
//!
//! Pure phase computation over the configured event window, plus the
//! pieces needed to feed it: instant parsing and a clock abstraction.

pub mod clock;
pub mod instant;
pub mod phase;
pub mod time_left;

pub use clock::{Clock, SystemClock};
pub use instant::{parse_instant, parse_instant_in};
pub use phase::{compute_phase, CountdownConfig, CountdownState, Phase};
pub use time_left::TimeLeft;
