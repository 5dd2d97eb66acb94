//! Session settings resolved from an optional TOML file and command-line flags.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use snake_grid_core::{BoundaryMode, Cell, Configuration, SpawnPolicy};
use snake_grid_simulation::DEFAULT_RNG_SEED;

/// Ticks executed when neither the file nor the flags bound the run.
pub(crate) const DEFAULT_MAX_TICKS: u64 = 10_000;

/// Contents of a settings file. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SettingsFile {
    pub(crate) grid_rows: Option<u32>,
    pub(crate) grid_columns: Option<u32>,
    pub(crate) speed_setting: Option<u8>,
    pub(crate) boundary_mode: Option<BoundaryMode>,
    pub(crate) spawn_policy: Option<SpawnPolicy>,
    pub(crate) start_cell: Option<Cell>,
    pub(crate) seed: Option<u64>,
    pub(crate) max_ticks: Option<u64>,
}

impl SettingsFile {
    /// Reads and parses a settings file from disk.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Layers `overrides` on top of `self`; keys present in `overrides` win.
    #[must_use]
    pub(crate) fn overlay(self, overrides: Self) -> Self {
        Self {
            grid_rows: overrides.grid_rows.or(self.grid_rows),
            grid_columns: overrides.grid_columns.or(self.grid_columns),
            speed_setting: overrides.speed_setting.or(self.speed_setting),
            boundary_mode: overrides.boundary_mode.or(self.boundary_mode),
            spawn_policy: overrides.spawn_policy.or(self.spawn_policy),
            start_cell: overrides.start_cell.or(self.start_cell),
            seed: overrides.seed.or(self.seed),
            max_ticks: overrides.max_ticks.or(self.max_ticks),
        }
    }

    /// Fills in defaults for every missing key.
    #[must_use]
    pub(crate) fn resolve(self) -> Settings {
        let defaults = Configuration::default();
        let mut configuration = Configuration::new(
            self.grid_rows.unwrap_or(defaults.grid_rows),
            self.grid_columns.unwrap_or(defaults.grid_columns),
            self.speed_setting.unwrap_or(defaults.speed_setting),
        )
        .with_boundary(self.boundary_mode.unwrap_or_default())
        .with_spawn_policy(self.spawn_policy.unwrap_or_default());
        if let Some(start) = self.start_cell {
            configuration = configuration.with_start_cell(start);
        }

        Settings {
            configuration,
            seed: self.seed.unwrap_or(DEFAULT_RNG_SEED),
            max_ticks: self.max_ticks.unwrap_or(DEFAULT_MAX_TICKS),
        }
    }
}

/// Fully resolved settings for one headless run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) configuration: Configuration,
    pub(crate) seed: u64,
    pub(crate) max_ticks: u64,
}
