//! Metrics module for ski-ergometer power calculations and start groups.

pub mod error;
pub mod power;
pub mod start_group;

pub use error::{MetricsError, MetricsResult};
pub use power::{
    distance_from_pace, distance_from_watts, pace_to_watts, required_pace, required_watts,
    time_from_pace, time_from_watts, watts_per_kg, watts_to_pace,
};
pub use start_group::{
    classify, classify_athlete, position_in_band, threshold_for, ClassificationResult,
    ExperienceTier, StartGroup, START_GROUP_THRESHOLDS,
};
