#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives a Snake Grid session headlessly.
//!
//! The binary plays the external collaborators of the simulation: it loads
//! the configuration, feeds headings, acts as the clock and stores the best
//! score per difficulty tier.

mod autopilot;
mod script;
mod settings;

use std::{
    fs,
    path::{Path, PathBuf},
    thread,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use snake_grid_core::{BoundaryMode, Direction, HighscoreTable, ScoreReport, SpawnPolicy};
use snake_grid_simulation::Simulation;
use snake_grid_world::query;
use tracing_subscriber::EnvFilter;

use crate::settings::{Settings, SettingsFile};

/// Runs a Snake Grid session without a display and prints its score report.
#[derive(Debug, Parser)]
#[command(name = "snake-grid", author, version, about)]
struct Cli {
    /// TOML file providing session settings; flags take precedence.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of grid rows.
    #[arg(long)]
    rows: Option<u32>,
    /// Number of grid columns.
    #[arg(long)]
    columns: Option<u32>,
    /// Speed setting in 0..=15.
    #[arg(long)]
    speed: Option<u8>,
    /// Behaviour when the head leaves the grid.
    #[arg(long, value_enum)]
    boundary: Option<BoundaryArg>,
    /// Collectable placement policy.
    #[arg(long, value_enum)]
    spawn: Option<SpawnArg>,
    /// Seed for collectable placement.
    #[arg(long)]
    seed: Option<u64>,
    /// Upper bound on the number of ticks to simulate.
    #[arg(long, value_name = "TICKS")]
    max_ticks: Option<u64>,
    /// Heading script such as "R3D2L"; the autopilot steers when omitted.
    #[arg(long, value_name = "SCRIPT")]
    moves: Option<String>,
    /// TOML file holding the best score per difficulty tier.
    #[arg(long, value_name = "PATH")]
    highscores: Option<PathBuf>,
    /// Sleeps for the session's tick interval between ticks.
    #[arg(long)]
    realtime: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum BoundaryArg {
    Wrap,
    Lethal,
}

impl From<BoundaryArg> for BoundaryMode {
    fn from(value: BoundaryArg) -> Self {
        match value {
            BoundaryArg::Wrap => Self::Wrap,
            BoundaryArg::Lethal => Self::Lethal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SpawnArg {
    Immediate,
    Delayed,
}

impl From<SpawnArg> for SpawnPolicy {
    fn from(value: SpawnArg) -> Self {
        match value {
            SpawnArg::Immediate => Self::Immediate,
            SpawnArg::Delayed => Self::Delayed,
        }
    }
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default(),
        };
        let flags = SettingsFile {
            grid_rows: self.rows,
            grid_columns: self.columns,
            speed_setting: self.speed,
            boundary_mode: self.boundary.map(BoundaryMode::from),
            spawn_policy: self.spawn.map(SpawnPolicy::from),
            start_cell: None,
            seed: self.seed,
            max_ticks: self.max_ticks,
        };
        Ok(file.overlay(flags).resolve())
    }
}

#[derive(Debug, Serialize)]
struct RunSummary {
    #[serde(flatten)]
    report: ScoreReport,
    new_best: bool,
}

/// Entry point for the Snake Grid command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let script = cli
        .moves
        .as_deref()
        .map(script::decode)
        .transpose()
        .context("invalid move script")?;

    let report = run(&settings, script.as_deref(), cli.realtime)?;
    let new_best = match &cli.highscores {
        Some(path) => record_highscore(path, &report)?,
        None => false,
    };

    let summary = RunSummary { report, new_best };
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("failed to encode score report")?
    );
    Ok(())
}

fn run(settings: &Settings, script: Option<&[Direction]>, realtime: bool) -> Result<ScoreReport> {
    let mut simulation = Simulation::with_seed(settings.seed);
    simulation
        .configure(settings.configuration)
        .context("invalid session configuration")?;
    let interval = simulation
        .tick_interval()
        .context("simulation did not report a tick interval")?;

    let budget = match script {
        Some(script) => settings.max_ticks.min(script.len() as u64),
        None => settings.max_ticks,
    };

    for tick in 0..budget {
        let direction = match script {
            Some(script) => script
                .get(usize::try_from(tick).unwrap_or(usize::MAX))
                .copied()
                .unwrap_or(Direction::None),
            None => autopilot_heading(&simulation),
        };
        if direction != Direction::None {
            simulation.set_direction(direction);
        }

        let result = simulation.advance().context("simulation rejected the tick")?;
        if result.is_terminal() {
            tracing::info!(tick, ?result, "session finished");
            break;
        }
        if realtime {
            thread::sleep(interval);
        }
    }

    simulation
        .score_report()
        .context("simulation has no active session")
}

fn autopilot_heading(simulation: &Simulation) -> Direction {
    let world = simulation.world();
    match query::head(world) {
        Some(head) => autopilot::steer(
            &query::occupancy_view(world),
            head,
            simulation.heading(),
            query::chain_length(world),
            simulation.collectable_cell(),
        ),
        None => Direction::None,
    }
}

fn record_highscore(path: &Path, report: &ScoreReport) -> Result<bool> {
    let mut table = if path.exists() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read highscores from {}", path.display()))?;
        toml::from_str::<HighscoreTable>(&contents)
            .with_context(|| format!("failed to parse highscores in {}", path.display()))?
    } else {
        HighscoreTable::default()
    };

    let improved = table.record(report);
    if improved {
        tracing::info!(tier = %report.tier, score = report.score, "new best score");
        let encoded = toml::to_string(&table).context("failed to encode highscores")?;
        fs::write(path, encoded)
            .with_context(|| format!("failed to write highscores to {}", path.display()))?;
    }
    Ok(improved)
}
