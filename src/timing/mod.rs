//! Time string handling for splits and race times.

pub mod codec;

pub use codec::{
    format_time, parse_minutes_seconds, parse_time, TimeParseError, MIN_SEC_FORMAT_HINT,
    TIME_FORMAT_HINT,
};
