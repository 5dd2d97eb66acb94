use proptest::prelude::*;
use snake_grid_core::{BoundaryMode, Configuration, DifficultyTier, SpawnPolicy};
use snake_grid_system_difficulty::{classify, effective_speed, max_speed, MIN_SPEED};

fn configuration(
    columns: u32,
    speed_setting: u8,
    boundary: BoundaryMode,
    spawn: SpawnPolicy,
) -> Configuration {
    Configuration::new(columns, columns, speed_setting)
        .with_boundary(boundary)
        .with_spawn_policy(spawn)
}

#[test]
fn interpolation_endpoints_are_exact() {
    assert_eq!(effective_speed(10, 0), MIN_SPEED);
    assert_eq!(effective_speed(10, 15), max_speed(10));
    assert_eq!(effective_speed(10, 15), 13);
    for columns in 1..=40 {
        assert_eq!(effective_speed(columns, 0), MIN_SPEED);
        assert_eq!(effective_speed(columns, 15), max_speed(columns));
    }
}

#[test]
fn reference_configurations_land_in_expected_tiers() {
    let cases = [
        (6, 0, BoundaryMode::Wrap, SpawnPolicy::Immediate, 3, DifficultyTier::VeryEasy),
        (10, 0, BoundaryMode::Wrap, SpawnPolicy::Immediate, 3, DifficultyTier::VeryEasy),
        (10, 7, BoundaryMode::Wrap, SpawnPolicy::Immediate, 8, DifficultyTier::Easy),
        (10, 15, BoundaryMode::Wrap, SpawnPolicy::Immediate, 13, DifficultyTier::Medium),
        (20, 15, BoundaryMode::Wrap, SpawnPolicy::Immediate, 22, DifficultyTier::Hard),
        (30, 15, BoundaryMode::Wrap, SpawnPolicy::Immediate, 30, DifficultyTier::VeryHard),
        (30, 15, BoundaryMode::Lethal, SpawnPolicy::Delayed, 30, DifficultyTier::Ultimate),
    ];

    for (columns, speed_setting, boundary, spawn, expected_speed, expected_tier) in cases {
        let classification = classify(&configuration(columns, speed_setting, boundary, spawn));
        assert_eq!(
            classification.effective_speed(),
            expected_speed,
            "speed for {columns} columns at setting {speed_setting}"
        );
        assert_eq!(
            classification.tier(),
            expected_tier,
            "tier for {columns} columns at setting {speed_setting} ({boundary:?}, {spawn:?})"
        );
    }
}

#[test]
fn lethal_boundary_and_delayed_spawn_raise_raw_score() {
    let base = classify(&configuration(12, 5, BoundaryMode::Wrap, SpawnPolicy::Immediate));
    let lethal = classify(&configuration(12, 5, BoundaryMode::Lethal, SpawnPolicy::Immediate));
    let both = classify(&configuration(12, 5, BoundaryMode::Lethal, SpawnPolicy::Delayed));

    assert!((lethal.raw_score() - base.raw_score() * 1.5).abs() < 1e-9);
    assert!((both.raw_score() - base.raw_score() * 1.5 * 1.2).abs() < 1e-9);
    assert!(base.tier() <= lethal.tier() && lethal.tier() <= both.tier());
}

fn arb_boundary() -> impl Strategy<Value = BoundaryMode> {
    prop_oneof![Just(BoundaryMode::Wrap), Just(BoundaryMode::Lethal)]
}

fn arb_spawn() -> impl Strategy<Value = SpawnPolicy> {
    prop_oneof![Just(SpawnPolicy::Immediate), Just(SpawnPolicy::Delayed)]
}

proptest! {
    #[test]
    fn tier_never_decreases_with_more_columns(
        columns in 1u32..60,
        speed_setting in 0u8..=15,
        boundary in arb_boundary(),
        spawn in arb_spawn(),
    ) {
        let smaller = classify(&configuration(columns, speed_setting, boundary, spawn));
        let larger = classify(&configuration(columns + 1, speed_setting, boundary, spawn));
        prop_assert!(smaller.tier() <= larger.tier());
        prop_assert!(smaller.effective_speed() <= larger.effective_speed());
    }

    #[test]
    fn tier_never_decreases_with_higher_speed_setting(
        columns in 1u32..60,
        speed_setting in 0u8..15,
        boundary in arb_boundary(),
        spawn in arb_spawn(),
    ) {
        let slower = classify(&configuration(columns, speed_setting, boundary, spawn));
        let faster = classify(&configuration(columns, speed_setting + 1, boundary, spawn));
        prop_assert!(slower.tier() <= faster.tier());
        prop_assert!(slower.effective_speed() <= faster.effective_speed());
    }

    #[test]
    fn effective_speed_stays_within_bounds(columns in 1u32..60, speed_setting in 0u8..=15) {
        let speed = effective_speed(columns, speed_setting);
        prop_assert!(speed >= MIN_SPEED);
        prop_assert!(speed <= max_speed(columns));
    }
}
