//! Unit tests for pace, power, time and distance conversions.

use skiergcalc::metrics::power::{
    distance_from_pace, distance_from_watts, pace_to_watts, required_pace, required_watts,
    time_from_pace, time_from_watts, watts_per_kg, watts_to_pace,
};

#[test]
fn test_pace_to_watts_two_minute_split() {
    // 2.80 * (500/120)^3
    let watts = pace_to_watts(120.0);
    assert!((watts - 202.5).abs() < 0.05);
}

#[test]
fn test_faster_pace_means_more_power() {
    assert!(pace_to_watts(100.0) > pace_to_watts(110.0));
    assert!(pace_to_watts(110.0) > pace_to_watts(120.0));
}

#[test]
fn test_round_trip_across_paces() {
    let mut pace = 60.0;
    while pace <= 300.0 {
        let back = watts_to_pace(pace_to_watts(pace));
        assert!((back - pace).abs() < 1e-9, "pace {} came back as {}", pace, back);
        pace += 7.5;
    }
}

#[test]
fn test_non_positive_sentinels() {
    for value in [0.0, -0.5, -120.0] {
        assert_eq!(pace_to_watts(value), 0.0);
        assert_eq!(watts_to_pace(value), 0.0);
    }
}

#[test]
fn test_time_from_watts_matches_pace_formula() {
    let watts = 200.0;
    let pace = watts_to_pace(watts);
    let time = time_from_watts(5000.0, watts);
    assert!((time - pace * 10.0).abs() < 1e-9);
    assert!((time - time_from_pace(5000.0, pace)).abs() < 1e-9);
}

#[test]
fn test_distance_from_watts_is_inverse_of_time() {
    let watts = 180.0;
    let time = time_from_watts(3000.0, watts);
    assert!((distance_from_watts(time, watts) - 3000.0).abs() < 1e-6);
}

#[test]
fn test_distance_from_pace() {
    // 20 minutes at 2:00/500m
    assert_eq!(distance_from_pace(1200.0, 120.0), 5000.0);
    assert_eq!(distance_from_pace(-1.0, 120.0), 0.0);
    assert_eq!(distance_from_watts(1200.0, 0.0), 0.0);
}

#[test]
fn test_required_effort() {
    assert_eq!(required_pace(5000.0, 1200.0), 120.0);
    let watts = required_watts(5000.0, 1200.0);
    assert!((watts - pace_to_watts(120.0)).abs() < 1e-9);
    assert!((time_from_watts(5000.0, watts) - 1200.0).abs() < 0.1);

    assert_eq!(required_watts(0.0, 1200.0), 0.0);
    assert_eq!(required_watts(5000.0, 0.0), 0.0);
    assert_eq!(required_pace(0.0, 1200.0), 0.0);
}

#[test]
fn test_watts_per_kg() {
    assert!((watts_per_kg(175.0, 75.0) - 2.33).abs() < 0.01);
}
