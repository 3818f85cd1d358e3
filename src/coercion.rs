//! Literal coercion
//!
//! Converts a textual constraint challenge into a typed literal for a given
//! basic data kind. Used by the number validator to build comparison guards;
//! also part of the public API for downstream emitters that need typed
//! bounds.

use chrono::{DateTime, Datelike, Timelike};

use crate::error::{GeneratorError, Result};
use crate::model::BasicType;

/// A typed literal produced from a textual challenge
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Date(DateValue),
    Time(TimeValue),
    Timestamp(TimestampValue),
}

/// A calendar date with its original UTC offset preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Offset from UTC in minutes, as written in the challenge
    pub offset_minutes: i32,
}

/// A duration-of-day; hours may exceed 24 when the challenge spans days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValue {
    pub hours: i64,
    pub minutes: u32,
    pub seconds: u32,
}

/// A full timestamp with its original UTC offset preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampValue {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Offset from UTC in minutes, as written in the challenge
    pub offset_minutes: i32,
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(v) => write!(f, "{}", v),
            Literal::Real(v) => write!(f, "{}", v),
            Literal::Date(v) => write!(
                f,
                "{:04}-{:02}-{:02}{}",
                v.year,
                v.month,
                v.day,
                format_offset(v.offset_minutes)
            ),
            Literal::Time(v) => write!(f, "{:02}:{:02}:{:02}", v.hours, v.minutes, v.seconds),
            Literal::Timestamp(v) => write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}",
                v.year,
                v.month,
                v.day,
                v.hour,
                v.minute,
                v.second,
                format_offset(v.offset_minutes)
            ),
        }
    }
}

fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

/// Coerce a textual challenge into a typed literal for `kind`.
///
/// Integer challenges that fail strict integer parsing fall back to a
/// floating-point parse truncated toward zero; the source-parity behavior is
/// truncation, never rounding or rejection.
pub fn coerce(challenge: &str, kind: BasicType) -> Result<Literal> {
    let trimmed = challenge.trim();
    match kind {
        BasicType::Integer => coerce_integer(trimmed),
        BasicType::Real => trimmed
            .parse::<f64>()
            .map(Literal::Real)
            .map_err(|_| unparseable(challenge, kind)),
        BasicType::Date => coerce_date(trimmed).ok_or_else(|| unparseable(challenge, kind)),
        BasicType::Time => coerce_time(trimmed).ok_or_else(|| unparseable(challenge, kind)),
        BasicType::Timestamp => {
            coerce_timestamp(trimmed).ok_or_else(|| unparseable(challenge, kind))
        }
        BasicType::String | BasicType::Boolean => Err(GeneratorError::UnsupportedKind { kind }),
    }
}

fn unparseable(value: &str, kind: BasicType) -> GeneratorError {
    GeneratorError::UnparseableChallenge {
        value: value.to_string(),
        kind,
    }
}

fn coerce_integer(text: &str) -> Result<Literal> {
    if let Ok(v) = text.parse::<i64>() {
        return Ok(Literal::Integer(v));
    }
    // Fallback: parse as a float and truncate toward zero
    text.parse::<f64>()
        .map(|v| Literal::Integer(v.trunc() as i64))
        .map_err(|_| unparseable(text, BasicType::Integer))
}

/// Parse an offset date-time, then zero the time-of-day while keeping the
/// numeric offset the challenge was written with.
fn coerce_date(text: &str) -> Option<Literal> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(Literal::Date(DateValue {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            offset_minutes: dt.offset().local_minus_utc() / 60,
        }));
    }
    // Bare calendar date: taken as written, offset zero
    let date = chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(Literal::Date(DateValue {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        offset_minutes: 0,
    }))
}

/// Parse a duration-of-day (`H:MM:SS`, or `D.HH:MM:SS` spanning days), with
/// an offset date-time converted to UTC as the fallback form.
fn coerce_time(text: &str) -> Option<Literal> {
    if let Some(value) = parse_duration_of_day(text) {
        return Some(Literal::Time(value));
    }
    let dt = DateTime::parse_from_rfc3339(text).ok()?;
    let utc = dt.to_utc();
    Some(Literal::Time(TimeValue {
        hours: i64::from(utc.hour()),
        minutes: utc.minute(),
        seconds: utc.second(),
    }))
}

fn parse_duration_of_day(text: &str) -> Option<TimeValue> {
    let (days, clock) = match text.split_once('.') {
        Some((d, rest)) => (d.parse::<i64>().ok()?, rest),
        None => (0, text),
    };
    let mut parts = clock.split(':');
    let hours = parts.next()?.parse::<i64>().ok()?;
    let minutes = parts.next()?.parse::<u32>().ok()?;
    let seconds = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 || hours < 0 {
        return None;
    }
    Some(TimeValue {
        hours: days * 24 + hours,
        minutes,
        seconds,
    })
}

fn coerce_timestamp(text: &str) -> Option<Literal> {
    let dt = DateTime::parse_from_rfc3339(text).ok()?;
    Some(Literal::Timestamp(TimestampValue {
        year: dt.year(),
        month: dt.month(),
        day: dt.day(),
        hour: dt.hour(),
        minute: dt.minute(),
        second: dt.second(),
        offset_minutes: dt.offset().local_minus_utc() / 60,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(coerce("10", BasicType::Integer).unwrap(), Literal::Integer(10));
        assert_eq!(coerce(" 42 ", BasicType::Integer).unwrap(), Literal::Integer(42));
    }

    #[test]
    fn test_integer_fallback_truncates() {
        // Truncation toward zero, not rounding
        assert_eq!(coerce("10.5", BasicType::Integer).unwrap(), Literal::Integer(10));
        assert_eq!(coerce("10.9", BasicType::Integer).unwrap(), Literal::Integer(10));
        assert_eq!(coerce("-10.9", BasicType::Integer).unwrap(), Literal::Integer(-10));
    }

    #[test]
    fn test_integer_unparseable() {
        let err = coerce("ten", BasicType::Integer).unwrap_err();
        assert!(err.is_unparseable_challenge());
    }

    #[test]
    fn test_real_coercion() {
        assert_eq!(coerce("2.5", BasicType::Real).unwrap(), Literal::Real(2.5));
        assert_eq!(coerce("-3", BasicType::Real).unwrap(), Literal::Real(-3.0));
    }

    #[test]
    fn test_date_zeroes_time_and_keeps_offset() {
        let lit = coerce("2023-01-01T13:45:10+02:00", BasicType::Date).unwrap();
        match lit {
            Literal::Date(d) => {
                assert_eq!((d.year, d.month, d.day), (2023, 1, 1));
                assert_eq!(d.offset_minutes, 120);
            }
            other => panic!("Expected Date, got {:?}", other),
        }

        let lit = coerce("2023-01-01T00:00:00+02:00", BasicType::Date).unwrap();
        assert_eq!(lit.to_string(), "2023-01-01+02:00");
    }

    #[test]
    fn test_time_duration_form() {
        let lit = coerce("13:45:00", BasicType::Time).unwrap();
        assert_eq!(
            lit,
            Literal::Time(TimeValue { hours: 13, minutes: 45, seconds: 0 })
        );

        // Day-spanning duration: hours exceed 24
        let lit = coerce("1.02:03:04", BasicType::Time).unwrap();
        assert_eq!(
            lit,
            Literal::Time(TimeValue { hours: 26, minutes: 3, seconds: 4 })
        );
    }

    #[test]
    fn test_time_datetime_fallback_converts_to_utc() {
        let lit = coerce("2023-01-01T13:45:00+02:00", BasicType::Time).unwrap();
        assert_eq!(
            lit,
            Literal::Time(TimeValue { hours: 11, minutes: 45, seconds: 0 })
        );
    }

    #[test]
    fn test_timestamp_preserves_fields() {
        let lit = coerce("2023-06-15T08:30:45-05:30", BasicType::Timestamp).unwrap();
        match lit {
            Literal::Timestamp(t) => {
                assert_eq!((t.year, t.month, t.day), (2023, 6, 15));
                assert_eq!((t.hour, t.minute, t.second), (8, 30, 45));
                assert_eq!(t.offset_minutes, -330);
            }
            other => panic!("Expected Timestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_kinds() {
        assert!(matches!(
            coerce("abc", BasicType::String),
            Err(GeneratorError::UnsupportedKind { kind: BasicType::String })
        ));
        assert!(matches!(
            coerce("true", BasicType::Boolean),
            Err(GeneratorError::UnsupportedKind { kind: BasicType::Boolean })
        ));
    }
}
