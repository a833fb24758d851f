//! Time string parsing and formatting.
//!
//! Two parsers are provided because callers need different strictness:
//!
//! - [`parse_time`] accepts `ss.d`, `mm:ss.d` and `hh:mm:ss.d`.
//! - [`parse_minutes_seconds`] accepts only `mm:ss.d`, with unbounded minutes.
//!
//! [`format_time`] produces strings that [`parse_time`] reads back unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Compiled regexes for field validation
static WHOLE_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static SECONDS_FIELD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)$").unwrap());

/// Guidance shown when [`parse_time`] rejects input.
pub const TIME_FORMAT_HINT: &str = "Use format mm:ss.d or hh:mm:ss.d";

/// Guidance shown when [`parse_minutes_seconds`] rejects input.
pub const MIN_SEC_FORMAT_HINT: &str = "Use format mm:ss.d";

/// Largest number of fractional digits [`format_time`] emits.
pub const MAX_DECIMALS: u32 = 6;

/// Time parsing error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeParseError {
    #[error("Time cannot be empty")]
    Empty,

    #[error("Invalid time format: found {found} ':'-separated fields")]
    FieldCount { found: usize },

    #[error("Invalid {field} value '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid {field}: {value} (must be below 60)")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Parse a time string in `ss.d`, `mm:ss.d` or `hh:mm:ss.d` form to seconds.
///
/// Minutes and seconds must be below 60 whenever more than one field is
/// given; a lone seconds field may be any duration.
pub fn parse_time(input: &str) -> Result<f64, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [s] => (0, 0, parse_seconds(s)?),
        [m, s] => (0, parse_whole(m, "minutes")?, parse_seconds(s)?),
        [h, m, s] => (
            parse_whole(h, "hours")?,
            parse_whole(m, "minutes")?,
            parse_seconds(s)?,
        ),
        _ => return Err(TimeParseError::FieldCount { found: parts.len() }),
    };

    if parts.len() > 1 {
        check_clock_field("minutes", minutes as f64)?;
        check_clock_field("seconds", seconds)?;
    }

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
}

/// Parse a strict `mm:ss.d` time string to seconds.
///
/// Exactly two fields are required. Minutes are unbounded, seconds must be
/// below 60.
pub fn parse_minutes_seconds(input: &str) -> Result<f64, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let [m, s] = parts.as_slice() else {
        return Err(TimeParseError::FieldCount { found: parts.len() });
    };

    let minutes = parse_whole(m, "minutes")?;
    let seconds = parse_seconds(s)?;
    check_clock_field("seconds", seconds)?;

    Ok(minutes as f64 * 60.0 + seconds)
}

/// Format seconds as `m:ss.d`, or `h:mm:ss.d` from one hour up.
///
/// Negative input formats as zero. The value is rounded to `decimals`
/// places; with `decimals == 0` whole seconds are truncated instead.
pub fn format_time(seconds: f64, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };

    let unit = 10u64.pow(decimals);
    let scaled = if decimals == 0 {
        seconds.floor() as u64
    } else {
        (seconds * unit as f64).round() as u64
    };

    let whole = scaled / unit;
    let fraction = scaled % unit;
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let secs = whole % 60;

    let mut out = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    };
    if decimals > 0 {
        out.push_str(&format!(".{:0width$}", fraction, width = decimals as usize));
    }
    out
}

fn parse_whole(field: &str, name: &'static str) -> Result<u32, TimeParseError> {
    let invalid = || TimeParseError::InvalidField {
        field: name,
        value: field.to_string(),
    };
    if !WHOLE_FIELD_REGEX.is_match(field) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

fn parse_seconds(field: &str) -> Result<f64, TimeParseError> {
    let invalid = || TimeParseError::InvalidField {
        field: "seconds",
        value: field.to_string(),
    };
    if !SECONDS_FIELD_REGEX.is_match(field) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

fn check_clock_field(name: &'static str, value: f64) -> Result<(), TimeParseError> {
    if value >= 60.0 {
        return Err(TimeParseError::OutOfRange { field: name, value });
    }
    Ok(())
}
