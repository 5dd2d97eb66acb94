#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure difficulty classifier deriving movement speed and tier from configuration.
//!
//! The classifier is consulted when a session is configured and never during a
//! tick. Every constant below is an empirically tuned value and is kept as is.

use std::time::Duration;

use snake_grid_core::{BoundaryMode, Configuration, DifficultyTier, SpawnPolicy, MAX_SPEED_SETTING};

/// Slowest effective speed, in moves per second.
pub const MIN_SPEED: u32 = 3;

/// Smallest grid edge used as the lower reference for tier scoring.
const REFERENCE_MIN_GRID: f64 = 6.0;
/// Largest grid edge used as the upper reference for tier scoring.
const REFERENCE_MAX_GRID: f64 = 30.0;
/// Fastest reference speed paired with [`REFERENCE_MAX_GRID`].
const REFERENCE_MAX_SPEED: f64 = 30.0;

const LETHAL_BOUNDARY_FACTOR: f64 = 1.5;
const DELAYED_SPAWN_FACTOR: f64 = 1.2;

const SPEED_PER_COLUMN: f64 = 20.0 / 24.0;
const SPEED_BASE: f64 = 5.0;

const TIER_STEPS: i32 = 5;

/// Speed and tier derived from a configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    effective_speed: u32,
    tier: DifficultyTier,
    raw_score: f64,
}

impl Classification {
    /// Moves per second the external clock should issue.
    #[must_use]
    pub const fn effective_speed(&self) -> u32 {
        self.effective_speed
    }

    /// Discrete tier used for scoring.
    #[must_use]
    pub const fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Continuous score the tier was derived from.
    #[must_use]
    pub const fn raw_score(&self) -> f64 {
        self.raw_score
    }

    /// Interval between two ticks at the effective speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.effective_speed.max(1)))
    }
}

/// Classifies the configuration into an effective speed and a difficulty tier.
///
/// Speed settings above [`MAX_SPEED_SETTING`] are treated as the maximum.
#[must_use]
pub fn classify(configuration: &Configuration) -> Classification {
    let effective_speed = effective_speed(configuration.grid_columns, configuration.speed_setting);
    let raw_score = raw_score(configuration, effective_speed);
    Classification {
        effective_speed,
        tier: tier_for(raw_score),
        raw_score,
    }
}

/// Fastest effective speed reachable on a grid with `columns` columns.
#[must_use]
pub fn max_speed(columns: u32) -> u32 {
    (f64::from(columns) * SPEED_PER_COLUMN + SPEED_BASE).round() as u32
}

/// Linearly interpolates the speed setting between [`MIN_SPEED`] and [`max_speed`].
#[must_use]
pub fn effective_speed(columns: u32, speed_setting: u8) -> u32 {
    let setting = f64::from(speed_setting.min(MAX_SPEED_SETTING));
    let min = f64::from(MIN_SPEED);
    let max = f64::from(max_speed(columns));
    let step = (max - min) / f64::from(MAX_SPEED_SETTING);
    (min + setting * step).round() as u32
}

fn raw_score(configuration: &Configuration, effective_speed: u32) -> f64 {
    let boundary_factor = match configuration.boundary_mode {
        BoundaryMode::Lethal => LETHAL_BOUNDARY_FACTOR,
        BoundaryMode::Wrap => 1.0,
    };
    let spawn_factor = match configuration.spawn_policy {
        SpawnPolicy::Delayed => DELAYED_SPAWN_FACTOR,
        SpawnPolicy::Immediate => 1.0,
    };
    f64::from(configuration.grid_columns)
        * f64::from(effective_speed)
        * boundary_factor
        * spawn_factor
}

fn tier_for(raw_score: f64) -> DifficultyTier {
    let min_score = REFERENCE_MIN_GRID * f64::from(MIN_SPEED);
    let max_score = REFERENCE_MAX_GRID
        * REFERENCE_MAX_SPEED
        * LETHAL_BOUNDARY_FACTOR
        * DELAYED_SPAWN_FACTOR;
    let growth = (max_score / min_score).powf(1.0 / f64::from(TIER_STEPS));

    let graded = [
        DifficultyTier::VeryEasy,
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
    ];
    for (exponent, tier) in (1..=TIER_STEPS - 1).zip(graded) {
        if raw_score <= min_score * growth.powi(exponent) {
            return tier;
        }
    }

    if raw_score < max_score - 1.0 {
        DifficultyTier::VeryHard
    } else {
        DifficultyTier::Ultimate
    }
}
