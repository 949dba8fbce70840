//! ISO-8601 instant parsing for the event window

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::ConfigError;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an instant, reading offset-less date-times as host local time.
pub fn parse_instant(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ConfigError> {
    parse_instant_in(field, raw, &Local)
}

/// Parse an instant, reading offset-less date-times in `tz`.
///
/// Accepted forms:
/// - RFC 3339 with an offset (`2026-02-28T00:00:00Z`, `2026-02-28T00:00:00+02:00`)
/// - ISO-8601 offsets without seconds or colon (`2026-02-28T09:00+05:30`, `...+0530`)
/// - date and time without offset (`2026-02-28T00:00:00`, `2026-02-28T00:00`)
/// - a bare date (`2026-02-28`), which is UTC midnight
pub fn parse_instant_in<Tz: TimeZone>(
    field: &'static str,
    raw: &str,
    tz: &Tz,
) -> Result<DateTime<Utc>, ConfigError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing { field });
    }

    let invalid = |reason: String| ConfigError::InvalidInstant {
        field,
        value: value.to_string(),
        reason,
    };

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(value, format) {
            return Ok(instant.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            // DST folds resolve to the earlier reading; gaps have no reading at all.
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|instant| instant.with_timezone(&Utc))
                .ok_or_else(|| invalid("local time does not exist in this time zone".to_string()));
        }
    }

    if value.contains('T') {
        let reason = match NaiveDateTime::parse_from_str(value, NAIVE_FORMATS[0]) {
            Err(e) => e.to_string(),
            Ok(_) => "unsupported date-time form".to_string(),
        };
        return Err(invalid(reason));
    }

    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc())
            .ok_or_else(|| invalid("date has no midnight".to_string())),
        Err(e) => Err(invalid(e.to_string())),
    }
}
