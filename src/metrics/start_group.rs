//! Start group classification from power-to-weight ratio.
//!
//! Athletes are seeded into start groups (Elit, 1-9) by the W/kg they hold
//! over a 5000m ski-ergometer test. The threshold for each group depends on
//! the athlete's self-reported experience tier: the more experience, the
//! higher the ratio required for the same group.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{MetricsError, MetricsResult};
use super::power::{pace_to_watts, watts_per_kg, RACE_DISTANCE_M, SPLIT_DISTANCE_M};

/// Headroom above the Elit threshold used as the top of the Elit band.
pub const TOP_BAND_HEADROOM: f64 = 1.5;

/// Self-reported experience tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    /// Little experience (lowest thresholds).
    Liten,
    /// Fair experience.
    #[default]
    Okej,
    /// Large experience (strictest thresholds).
    Stor,
}

impl ExperienceTier {
    /// All tiers, least to most experienced.
    pub const ALL: [ExperienceTier; 3] = [
        ExperienceTier::Liten,
        ExperienceTier::Okej,
        ExperienceTier::Stor,
    ];

    /// Get the name used in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ExperienceTier::Liten => "liten",
            ExperienceTier::Okej => "okej",
            ExperienceTier::Stor => "stor",
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExperienceTier {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liten" => Ok(ExperienceTier::Liten),
            "okej" => Ok(ExperienceTier::Okej),
            "stor" => Ok(ExperienceTier::Stor),
            other => Err(MetricsError::InvalidInput(format!(
                "unknown experience tier '{}' (expected liten, okej or stor)",
                other
            ))),
        }
    }
}

/// Competition start group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartGroup {
    Elit,
    #[serde(rename = "1")]
    Group1,
    #[serde(rename = "2")]
    Group2,
    #[serde(rename = "3")]
    Group3,
    #[serde(rename = "4")]
    Group4,
    #[serde(rename = "5")]
    Group5,
    #[serde(rename = "6")]
    Group6,
    #[serde(rename = "7")]
    Group7,
    #[serde(rename = "8")]
    Group8,
    #[serde(rename = "9")]
    Group9,
    /// Ratio is below the group 9 threshold.
    #[serde(rename = "Under 9")]
    Under9,
}

impl StartGroup {
    /// Ranked groups in table order, Elit first.
    pub const ALL: [StartGroup; 10] = [
        StartGroup::Elit,
        StartGroup::Group1,
        StartGroup::Group2,
        StartGroup::Group3,
        StartGroup::Group4,
        StartGroup::Group5,
        StartGroup::Group6,
        StartGroup::Group7,
        StartGroup::Group8,
        StartGroup::Group9,
    ];

    /// Get the display label for this group.
    pub fn label(&self) -> &'static str {
        match self {
            StartGroup::Elit => "Elit",
            StartGroup::Group1 => "1",
            StartGroup::Group2 => "2",
            StartGroup::Group3 => "3",
            StartGroup::Group4 => "4",
            StartGroup::Group5 => "5",
            StartGroup::Group6 => "6",
            StartGroup::Group7 => "7",
            StartGroup::Group8 => "8",
            StartGroup::Group9 => "9",
            StartGroup::Under9 => "Under 9",
        }
    }

    /// Position in the threshold table (0 = Elit), `None` for `Under9`.
    pub fn rank(&self) -> Option<usize> {
        Self::ALL.iter().position(|g| g == self)
    }

    /// The next stronger group, `None` for Elit and `Under9`.
    pub fn above(&self) -> Option<StartGroup> {
        match self.rank() {
            Some(rank) if rank > 0 => Some(Self::ALL[rank - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for StartGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Minimum W/kg for a group, per experience tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub liten: f64,
    pub okej: f64,
    pub stor: f64,
}

impl TierThresholds {
    /// Get the threshold that applies to `tier`.
    pub fn for_tier(&self, tier: ExperienceTier) -> f64 {
        match tier {
            ExperienceTier::Liten => self.liten,
            ExperienceTier::Okej => self.okej,
            ExperienceTier::Stor => self.stor,
        }
    }
}

/// A row of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StartGroupThreshold {
    pub group: StartGroup,
    pub thresholds: TierThresholds,
}

const fn row(group: StartGroup, liten: f64, okej: f64, stor: f64) -> StartGroupThreshold {
    StartGroupThreshold {
        group,
        thresholds: TierThresholds { liten, okej, stor },
    }
}

/// W/kg thresholds, strictly descending on every column from Elit to 9.
/// Within a row, liten < okej < stor.
pub const START_GROUP_THRESHOLDS: [StartGroupThreshold; 10] = [
    row(StartGroup::Elit, 3.12, 3.64, 4.45),
    row(StartGroup::Group1, 2.66, 3.12, 3.81),
    row(StartGroup::Group2, 2.39, 2.82, 3.45),
    row(StartGroup::Group3, 2.12, 2.51, 3.08),
    row(StartGroup::Group4, 1.94, 2.31, 2.84),
    row(StartGroup::Group5, 1.82, 2.17, 2.67),
    row(StartGroup::Group6, 1.73, 2.07, 2.54),
    row(StartGroup::Group7, 1.65, 1.98, 2.44),
    row(StartGroup::Group8, 1.57, 1.89, 2.33),
    row(StartGroup::Group9, 1.50, 1.81, 2.24),
];

/// Get the minimum W/kg for `group` at `tier`, `None` for `Under9`.
pub fn threshold_for(group: StartGroup, tier: ExperienceTier) -> Option<f64> {
    group
        .rank()
        .map(|rank| START_GROUP_THRESHOLDS[rank].thresholds.for_tier(tier))
}

/// Determine the start group for a W/kg ratio.
///
/// Returns the strongest group whose threshold for `tier` is at or below
/// `ratio`, or [`StartGroup::Under9`] when the ratio misses every threshold.
pub fn classify(ratio: f64, tier: ExperienceTier) -> StartGroup {
    START_GROUP_THRESHOLDS
        .iter()
        .find(|row| ratio >= row.thresholds.for_tier(tier))
        .map(|row| row.group)
        .unwrap_or(StartGroup::Under9)
}

/// Fractional position of `ratio` within the band of `group`.
///
/// 0.0 is the group's own threshold, 1.0 the threshold of the group above.
/// Elit has no group above, so its band tops out at
/// `threshold * TOP_BAND_HEADROOM`. Returns `None` for `Under9`.
pub fn position_in_band(ratio: f64, group: StartGroup, tier: ExperienceTier) -> Option<f64> {
    let lower = threshold_for(group, tier)?;
    let upper = group
        .above()
        .and_then(|above| threshold_for(above, tier))
        .unwrap_or(lower * TOP_BAND_HEADROOM);

    if upper == lower {
        return Some(0.5);
    }

    let position = (ratio - lower) / (upper - lower);
    if position.is_nan() {
        return Some(0.0);
    }
    Some(position.clamp(0.0, 1.0))
}

/// Start group classification for one athlete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Average power over the race, rounded to whole watts.
    pub watts: u32,
    /// Power-to-weight ratio, rounded to 2 decimals.
    pub watts_per_kg: f64,
    /// Average pace per 500m in seconds, rounded to 1 decimal.
    pub pace_secs: f64,
    /// Assigned start group.
    pub group: StartGroup,
    /// Position within the group band, `None` below group 9.
    pub position: Option<f64>,
    /// Experience tier the thresholds were taken from.
    pub tier: ExperienceTier,
}

/// Classify an athlete from body weight and 5000m race time.
///
/// Group and band position are computed at full precision; only the
/// returned display values are rounded.
pub fn classify_athlete(
    weight_kg: f64,
    time_5000m_secs: f64,
    tier: ExperienceTier,
) -> MetricsResult<ClassificationResult> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(MetricsError::InvalidInput(
            "Weight must be a positive number of kilograms".to_string(),
        ));
    }
    if !time_5000m_secs.is_finite() || time_5000m_secs <= 0.0 {
        return Err(MetricsError::InvalidInput(
            "5000m time must be a positive number of seconds".to_string(),
        ));
    }

    let pace = (time_5000m_secs / RACE_DISTANCE_M) * SPLIT_DISTANCE_M;
    let watts = pace_to_watts(pace);
    let ratio = watts_per_kg(watts, weight_kg);
    let group = classify(ratio, tier);
    let position = position_in_band(ratio, group, tier);

    tracing::debug!(
        "Classified {:.1} kg / {:.1} s as group {} ({:.3} W/kg, tier {})",
        weight_kg,
        time_5000m_secs,
        group,
        ratio,
        tier
    );

    Ok(ClassificationResult {
        watts: watts.round() as u32,
        watts_per_kg: round_to(ratio, 2),
        pace_secs: round_to(pace, 1),
        group,
        position,
        tier,
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
