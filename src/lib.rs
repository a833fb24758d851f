//! SkiErg Calc - Ski-Ergometer Power and Start Group Calculator
//!
//! Converts between pace, power, time and distance using the Concept2
//! power formula, parses and formats split times, and seeds athletes into
//! competition start groups from their 5000m power-to-weight ratio.

pub mod metrics;
pub mod storage;
pub mod timing;

// Re-export commonly used types
pub use metrics::start_group::{classify_athlete, ClassificationResult, ExperienceTier, StartGroup};
pub use storage::config::AppConfig;
pub use timing::codec::{format_time, parse_minutes_seconds, parse_time, TimeParseError};
