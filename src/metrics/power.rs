//! Power and pace conversions for the ski ergometer.
//!
//! The Concept2 monitor relates pace and power with a cube law:
//!
//! ```text
//! watts = 2.80 * (500 / pace)^3
//! ```
//!
//! where `pace` is the number of seconds needed to cover 500 meters. Every
//! other formula here is derived from that law and from
//! `time = (distance / 500) * pace`.
//!
//! Non-positive inputs have no physical conversion; those cases return `0.0`
//! so downstream arithmetic stays finite.

/// Constant of the Concept2 power formula.
pub const C2_POWER_CONSTANT: f64 = 2.80;

/// Distance a pace value refers to, in meters.
pub const SPLIT_DISTANCE_M: f64 = 500.0;

/// Race distance used for start-group seeding, in meters.
pub const RACE_DISTANCE_M: f64 = 5000.0;

/// Convert pace (seconds per 500m) to watts.
pub fn pace_to_watts(pace_secs: f64) -> f64 {
    if pace_secs <= 0.0 {
        return 0.0;
    }
    C2_POWER_CONSTANT * (SPLIT_DISTANCE_M / pace_secs).powi(3)
}

/// Convert watts to pace (seconds per 500m).
pub fn watts_to_pace(watts: f64) -> f64 {
    if watts <= 0.0 {
        return 0.0;
    }
    SPLIT_DISTANCE_M / (watts / C2_POWER_CONSTANT).cbrt()
}

/// Time in seconds to cover `distance_m` at a constant power.
pub fn time_from_watts(distance_m: f64, watts: f64) -> f64 {
    if distance_m <= 0.0 || watts <= 0.0 {
        return 0.0;
    }
    time_from_pace(distance_m, watts_to_pace(watts))
}

/// Time in seconds to cover `distance_m` at a constant pace.
pub fn time_from_pace(distance_m: f64, pace_secs: f64) -> f64 {
    if distance_m <= 0.0 || pace_secs <= 0.0 {
        return 0.0;
    }
    (distance_m / SPLIT_DISTANCE_M) * pace_secs
}

/// Distance in meters covered in `time_secs` at a constant power.
pub fn distance_from_watts(time_secs: f64, watts: f64) -> f64 {
    if time_secs <= 0.0 || watts <= 0.0 {
        return 0.0;
    }
    distance_from_pace(time_secs, watts_to_pace(watts))
}

/// Distance in meters covered in `time_secs` at a constant pace.
pub fn distance_from_pace(time_secs: f64, pace_secs: f64) -> f64 {
    if time_secs <= 0.0 || pace_secs <= 0.0 {
        return 0.0;
    }
    (time_secs / pace_secs) * SPLIT_DISTANCE_M
}

/// Average power needed to cover `distance_m` in `time_secs`.
pub fn required_watts(distance_m: f64, time_secs: f64) -> f64 {
    if distance_m <= 0.0 || time_secs <= 0.0 {
        return 0.0;
    }
    pace_to_watts(required_pace(distance_m, time_secs))
}

/// Average pace (seconds per 500m) needed to cover `distance_m` in `time_secs`.
pub fn required_pace(distance_m: f64, time_secs: f64) -> f64 {
    if distance_m <= 0.0 || time_secs <= 0.0 {
        return 0.0;
    }
    (time_secs / distance_m) * SPLIT_DISTANCE_M
}

/// Power normalized by body mass (W/kg).
///
/// The caller guarantees `weight_kg > 0`.
pub fn watts_per_kg(watts: f64, weight_kg: f64) -> f64 {
    watts / weight_kg
}
