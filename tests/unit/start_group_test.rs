//! Unit tests for start group classification.

use skiergcalc::metrics::start_group::{
    classify, classify_athlete, position_in_band, threshold_for, ExperienceTier, StartGroup,
    START_GROUP_THRESHOLDS,
};
use skiergcalc::metrics::MetricsError;

#[test]
fn test_table_monotonic_for_every_tier() {
    for tier in ExperienceTier::ALL {
        for i in 0..START_GROUP_THRESHOLDS.len() - 1 {
            let stronger = START_GROUP_THRESHOLDS[i].thresholds.for_tier(tier);
            let weaker = START_GROUP_THRESHOLDS[i + 1].thresholds.for_tier(tier);
            assert!(stronger > weaker, "row {} not above row {} for {}", i, i + 1, tier);
        }
    }
}

#[test]
fn test_table_has_expected_groups() {
    let labels: Vec<&str> = START_GROUP_THRESHOLDS.iter().map(|r| r.group.label()).collect();
    assert_eq!(labels, vec!["Elit", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
}

#[test]
fn test_under_9_is_distinct() {
    assert_eq!(StartGroup::Under9.label(), "Under 9");
    assert!(StartGroup::ALL.iter().all(|g| g.label() != StartGroup::Under9.label()));
    assert_eq!(threshold_for(StartGroup::Under9, ExperienceTier::Okej), None);
}

#[test]
fn test_threshold_boundaries_are_inclusive() {
    for tier in ExperienceTier::ALL {
        for row in START_GROUP_THRESHOLDS {
            assert_eq!(classify(row.thresholds.for_tier(tier), tier), row.group);
        }
    }
}

#[test]
fn test_more_experience_means_lower_or_equal_group() {
    // Lower tier thresholds put the same ratio in an equal or stronger group
    let mut ratio = 1.0;
    while ratio < 5.0 {
        let liten = classify(ratio, ExperienceTier::Liten);
        let okej = classify(ratio, ExperienceTier::Okej);
        let stor = classify(ratio, ExperienceTier::Stor);
        let rank = |g: StartGroup| g.rank().unwrap_or(StartGroup::ALL.len());
        assert!(rank(liten) <= rank(okej));
        assert!(rank(okej) <= rank(stor));
        ratio += 0.05;
    }
    assert_ne!(
        classify(2.5, ExperienceTier::Liten),
        classify(2.5, ExperienceTier::Stor)
    );
}

#[test]
fn test_position_always_in_unit_range() {
    let mut ratio = 0.0;
    while ratio < 8.0 {
        for tier in ExperienceTier::ALL {
            let group = classify(ratio, tier);
            match position_in_band(ratio, group, tier) {
                Some(position) => assert!((0.0..=1.0).contains(&position)),
                None => assert_eq!(group, StartGroup::Under9),
            }
        }
        ratio += 0.01;
    }
}

#[test]
fn test_position_in_band_halfway() {
    // Group 2 liten spans 2.39..2.66
    let position = position_in_band(2.525, StartGroup::Group2, ExperienceTier::Liten).unwrap();
    assert!((position - 0.5).abs() < 1e-9);
}

#[test]
fn test_classify_athlete_two_minute_pace() {
    let result = classify_athlete(75.0, 1200.0, ExperienceTier::Okej).unwrap();
    assert_eq!(result.pace_secs, 120.0);
    assert_eq!(result.watts, 203);
    assert!((result.watts_per_kg - 2.70).abs() < 1e-9);
    assert_eq!(result.group, StartGroup::Group3);
    assert_eq!(result.tier, ExperienceTier::Okej);
}

#[test]
fn test_classify_athlete_rounding() {
    // 100 kg, 16:40 => 1:40.0/500m, 350 W
    let result = classify_athlete(100.0, 1000.0, ExperienceTier::Okej).unwrap();
    assert_eq!(result.pace_secs, 100.0);
    assert_eq!(result.watts, 350);
    assert!((result.watts_per_kg - 3.5).abs() < 1e-9);
    assert_eq!(result.group, StartGroup::Group1);
}

#[test]
fn test_classify_athlete_slow_time_is_under_9() {
    let result = classify_athlete(90.0, 1800.0, ExperienceTier::Okej).unwrap();
    assert_eq!(result.group, StartGroup::Under9);
    assert_eq!(result.position, None);
}

#[test]
fn test_classify_athlete_invalid_inputs() {
    assert!(matches!(
        classify_athlete(0.0, 1200.0, ExperienceTier::Okej),
        Err(MetricsError::InvalidInput(_))
    ));
    assert!(classify_athlete(75.0, 0.0, ExperienceTier::Okej).is_err());
    assert!(classify_athlete(75.0, -5.0, ExperienceTier::Stor).is_err());
}

#[test]
fn test_classification_serializes_labels() {
    let result = classify_athlete(75.0, 1200.0, ExperienceTier::Stor).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["tier"], "stor");
    assert_eq!(json["group"], result.group.label());
}
