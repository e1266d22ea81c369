//! Time span encoding for exercise durations
//!
//! Durations are persisted as `[-][d.]hh:mm:ss[.fffffff]` strings, where the
//! optional fraction counts 100-nanosecond ticks. The module doubles as a
//! serde `with` adapter:
//!
//! ```ignore
//! #[serde(with = "crate::timespan")]
//! pub duration: chrono::Duration,
//! ```

use crate::errors::InvalidTimeSpan;
use chrono::Duration;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Write;

const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_TICK: i64 = 100;
const TICK_DIGITS: usize = 7;
/// Largest accepted day component
pub const MAX_DAYS: i64 = 100_000;
/// Longest accepted exercise duration in whole minutes; always parses back
pub const MAX_MINUTES: i64 = MAX_DAYS * 24 * 60;

/// Format a duration as a time span string
pub fn format_timespan(duration: Duration) -> String {
    let negative = duration < Duration::zero();
    let magnitude = if negative { -duration } else { duration };

    let total_seconds = magnitude.num_seconds();
    let ticks = (magnitude - Duration::seconds(total_seconds))
        .num_nanoseconds()
        .unwrap_or(0)
        / NANOS_PER_TICK;

    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut out = String::with_capacity(20);
    if negative {
        out.push('-');
    }
    if days > 0 {
        let _ = write!(out, "{}.", days);
    }
    let _ = write!(out, "{:02}:{:02}:{:02}", hours, minutes, seconds);
    if ticks > 0 {
        let _ = write!(out, ".{:07}", ticks);
    }
    out
}

/// Parse a time span string
pub fn parse_timespan(text: &str) -> Result<Duration, InvalidTimeSpan> {
    let invalid = || InvalidTimeSpan(text.to_string());
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut parts = body.split(':');
    let (Some(head), Some(minutes), Some(seconds), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let (days, hours) = match head.split_once('.') {
        Some((days, hours)) => (component(days).ok_or_else(invalid)?, component(hours).ok_or_else(invalid)?),
        None => (0, component(head).ok_or_else(invalid)?),
    };
    let minutes = component(minutes).ok_or_else(invalid)?;
    let (seconds, ticks) = match seconds.split_once('.') {
        Some((whole, fraction)) => (
            component(whole).ok_or_else(invalid)?,
            fraction_ticks(fraction).ok_or_else(invalid)?,
        ),
        None => (component(seconds).ok_or_else(invalid)?, 0),
    };

    if days > MAX_DAYS || hours > 23 || minutes > 59 || seconds > 59 {
        return Err(invalid());
    }

    let total = Duration::days(days)
        + Duration::hours(hours)
        + Duration::minutes(minutes)
        + Duration::seconds(seconds)
        + Duration::nanoseconds(ticks * NANOS_PER_TICK);

    Ok(if negative { -total } else { total })
}

fn component(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn fraction_ticks(text: &str) -> Option<i64> {
    if text.is_empty() || text.len() > TICK_DIGITS || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{:0<width$}", text, width = TICK_DIGITS);
    padded.parse().ok()
}

/// Duration in fractional minutes
pub fn as_minutes(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 60_000.0
}

/// Serde serializer for `#[serde(with = "timespan")]`
pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timespan(*duration))
}

/// Serde deserializer for `#[serde(with = "timespan")]`
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_timespan(&text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::minutes(30), "00:30:00")]
    #[case(Duration::minutes(45), "00:45:00")]
    #[case(Duration::hours(2) + Duration::seconds(5), "02:00:05")]
    #[case(Duration::days(1) + Duration::hours(2), "1.02:00:00")]
    #[case(Duration::milliseconds(1500), "00:00:01.5000000")]
    #[case(Duration::zero(), "00:00:00")]
    #[case(-Duration::minutes(5), "-00:05:00")]
    fn test_format_timespan(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_timespan(duration), expected);
    }

    #[rstest]
    #[case("00:30:00", Duration::minutes(30))]
    #[case("1.02:00:00", Duration::days(1) + Duration::hours(2))]
    #[case("00:00:01.5", Duration::milliseconds(1500))]
    #[case("00:37:30.0000000", Duration::minutes(37) + Duration::seconds(30))]
    #[case(" 00:10:00 ", Duration::minutes(10))]
    #[case("-00:05:00", -Duration::minutes(5))]
    fn test_parse_timespan(#[case] text: &str, #[case] expected: Duration) {
        assert_eq!(parse_timespan(text).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("30")]
    #[case("00:30")]
    #[case("00:60:00")]
    #[case("24:00:00")]
    #[case("aa:bb:cc")]
    #[case("00:00:00.12345678")]
    #[case("00:00:00:00")]
    #[case("99999999999.00:00:00")]
    fn test_parse_rejects_malformed(#[case] text: &str) {
        assert!(parse_timespan(text).is_err(), "{:?} should be rejected", text);
    }

    #[test]
    fn test_longest_duration_round_trips() {
        let longest = Duration::minutes(MAX_MINUTES);
        assert_eq!(format_timespan(longest), "100000.00:00:00");
        assert_eq!(parse_timespan(&format_timespan(longest)).unwrap(), longest);

        let beyond = Duration::days(MAX_DAYS + 1);
        assert!(parse_timespan(&format_timespan(beyond)).is_err());
    }

    #[test]
    fn test_as_minutes() {
        assert_eq!(as_minutes(Duration::minutes(90)), 90.0);
        assert_eq!(as_minutes(Duration::seconds(30)), 0.5);
    }

    #[test]
    fn test_serde_adapter() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "super")]
            duration: Duration,
        }

        let json = serde_json::to_string(&Wrapper { duration: Duration::minutes(40) }).unwrap();
        assert_eq!(json, r#"{"duration":"00:40:00"}"#);

        let back: Wrapper = serde_json::from_str(r#"{"duration":"01:00:00"}"#).unwrap();
        assert_eq!(back.duration, Duration::hours(1));

        assert!(serde_json::from_str::<Wrapper>(r#"{"duration":"soon"}"#).is_err());
    }
}
