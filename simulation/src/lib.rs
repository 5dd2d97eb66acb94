#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Simulation controller composing the world and the pure systems.
//!
//! [`Simulation`] is the surface exposed to collaborators: the input handler
//! calls [`Simulation::set_direction`], the clock calls
//! [`Simulation::advance`] once per [`Simulation::tick_interval`], and the
//! renderer and scoring collaborators read the query methods between ticks.
//! Each call is routed through the world's command/event protocol, with the
//! spawning system reacting to the resulting events.

use std::time::Duration;

use snake_grid_core::{
    Cell, Command, Configuration, ConfigurationError, DifficultyTier, Direction, Event,
    ScoreReport, SessionOutcome, TickResult,
};
use snake_grid_system_difficulty::{classify, Classification};
use snake_grid_system_spawning::{Config as SpawningConfig, SpawnOutcome, Spawning};
use snake_grid_world::{
    self as world,
    query::{self, ChainCells},
    World,
};
use thiserror::Error;

/// Seed used when the caller does not supply one.
pub const DEFAULT_RNG_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Failures surfaced by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The supplied configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    /// An operation required a configured session.
    #[error("the simulation has not been configured")]
    NotConfigured,
    /// A tick was requested after the session ended.
    #[error("the session already ended ({outcome:?})")]
    SessionFinished {
        /// Terminal state of the session.
        outcome: SessionOutcome,
    },
}

#[derive(Debug)]
struct ActiveSession {
    configuration: Configuration,
    classification: Classification,
    spawning: Spawning,
    /// The spawner found no free cell for a collectable.
    exhausted: bool,
    /// A tick was reported as won because the spawner ran out of cells.
    won_by_exhaustion: bool,
}

/// Consumer-facing simulation controller.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    session: Option<ActiveSession>,
    rng_seed: u64,
    last_events: Vec<Event>,
}

impl Simulation {
    /// Creates an unconfigured simulation seeded with [`DEFAULT_RNG_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_RNG_SEED)
    }

    /// Creates an unconfigured simulation whose collectable placement is
    /// driven by the provided seed.
    #[must_use]
    pub fn with_seed(rng_seed: u64) -> Self {
        Self {
            world: World::new(),
            session: None,
            rng_seed,
            last_events: Vec::new(),
        }
    }

    /// Validates and applies the configuration, starting a fresh session.
    ///
    /// On failure the previous state is kept untouched.
    pub fn configure(&mut self, configuration: Configuration) -> Result<(), SimulationError> {
        let grid = configuration.validate()?;
        let classification = classify(&configuration);
        tracing::info!(
            speed = classification.effective_speed(),
            tier = %classification.tier(),
            "configuring simulation"
        );

        self.session = Some(ActiveSession {
            configuration,
            classification,
            spawning: Spawning::new(SpawningConfig::new(
                configuration.spawn_policy,
                self.rng_seed,
            )),
            exhausted: false,
            won_by_exhaustion: false,
        });
        let spawn = self.dispatch(Command::ConfigureSession {
            grid,
            start: configuration.start(),
        });
        self.record_spawn(spawn);
        Ok(())
    }

    /// Restarts the configured session: single head at the start cell, zero
    /// score and a fresh collectable.
    pub fn reset(&mut self) -> Result<(), SimulationError> {
        let session = self.session.as_mut().ok_or(SimulationError::NotConfigured)?;
        session.exhausted = false;
        session.won_by_exhaustion = false;
        let spawn = self.dispatch(Command::Reset);
        self.record_spawn(spawn);
        Ok(())
    }

    /// Requests a heading change; invalid requests are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        let mut events = Vec::new();
        world::apply(
            &mut self.world,
            Command::SetDirection { direction },
            &mut events,
        );
        self.last_events.extend(events);
    }

    /// Advances the session by one tick.
    ///
    /// Calling this before [`Simulation::configure`] or after a terminal
    /// result is a caller error.
    pub fn advance(&mut self) -> Result<TickResult, SimulationError> {
        if self.session.is_none() {
            return Err(SimulationError::NotConfigured);
        }
        let outcome = self.outcome();
        if outcome != SessionOutcome::InProgress {
            return Err(SimulationError::SessionFinished { outcome });
        }

        let spawn = self.dispatch(Command::Advance);
        self.record_spawn(spawn);
        let result = match (query::outcome(&self.world), self.session.as_mut()) {
            (SessionOutcome::Lost, _) => TickResult::Lost,
            (SessionOutcome::Won, _) => TickResult::Won,
            (SessionOutcome::InProgress, Some(session)) if session.exhausted => {
                session.won_by_exhaustion = true;
                TickResult::Won
            }
            (SessionOutcome::InProgress, _) => TickResult::Continue,
        };

        tracing::debug!(
            tick = query::tick_index(&self.world),
            score = query::score(&self.world),
            ?result,
            "tick applied"
        );
        Ok(result)
    }

    /// Lazily enumerates chain cells from head to tail.
    #[must_use]
    pub fn current_chain_cells(&self) -> ChainCells<'_> {
        query::chain_cells(&self.world)
    }

    /// Cell holding the active collectable, if any.
    #[must_use]
    pub fn collectable_cell(&self) -> Option<Cell> {
        query::collectable(&self.world)
    }

    /// Reports whether the active collectable lies under the body.
    #[must_use]
    pub fn collectable_obscured(&self) -> bool {
        query::collectable_obscured(&self.world)
    }

    /// Number of collectables consumed in the current session.
    #[must_use]
    pub fn score(&self) -> u32 {
        query::score(&self.world)
    }

    /// Tier of the configured session.
    #[must_use]
    pub fn difficulty_tier(&self) -> Option<DifficultyTier> {
        self.classification().map(|classification| classification.tier())
    }

    /// Speed and tier derived at configuration time.
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.session.as_ref().map(|session| session.classification)
    }

    /// Cadence at which the external clock should call [`Simulation::advance`].
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        self.classification()
            .map(|classification| classification.tick_interval())
    }

    /// Configuration of the active session.
    #[must_use]
    pub fn configuration(&self) -> Option<&Configuration> {
        self.session.as_ref().map(|session| &session.configuration)
    }

    /// Heading travelled on the most recent tick.
    #[must_use]
    pub fn heading(&self) -> Direction {
        query::heading(&self.world)
    }

    /// Lifecycle state of the session.
    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        match &self.session {
            Some(session) if session.won_by_exhaustion => SessionOutcome::Won,
            _ => query::outcome(&self.world),
        }
    }

    /// Number of ticks applied since configuration or reset.
    #[must_use]
    pub fn tick_index(&self) -> u64 {
        query::tick_index(&self.world)
    }

    /// Events produced by the most recent tick, configuration or reset,
    /// followed by any heading changes accepted since.
    #[must_use]
    pub fn last_events(&self) -> &[Event] {
        &self.last_events
    }

    /// Summary for the scoring and persistence collaborator.
    #[must_use]
    pub fn score_report(&self) -> Option<ScoreReport> {
        let classification = self.classification()?;
        Some(ScoreReport {
            score: self.score(),
            tier: classification.tier(),
            effective_speed: classification.effective_speed(),
            outcome: self.outcome(),
            ticks: self.tick_index(),
        })
    }

    /// Read-only access to the underlying world for advanced collaborators.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    fn record_spawn(&mut self, spawn: SpawnOutcome) {
        if let Some(session) = self.session.as_mut() {
            match spawn {
                SpawnOutcome::Exhausted => session.exhausted = true,
                SpawnOutcome::Placed(_) => session.exhausted = false,
                SpawnOutcome::Idle => {}
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> SpawnOutcome {
        let starts_tick = matches!(
            command,
            Command::Advance | Command::ConfigureSession { .. } | Command::Reset
        );
        if starts_tick {
            self.last_events.clear();
        }

        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);

        let mut commands = Vec::new();
        let outcome = match self.session.as_mut() {
            Some(session) => session.spawning.handle(
                &events,
                query::occupancy_view(&self.world),
                query::head(&self.world),
                &mut commands,
            ),
            None => SpawnOutcome::Idle,
        };
        self.last_events.extend(events);

        for command in commands {
            let mut generated = Vec::new();
            world::apply(&mut self.world, command, &mut generated);
            self.last_events.extend(generated);
        }

        if outcome == SpawnOutcome::Exhausted {
            tracing::info!("no free cell left for a collectable");
        }
        outcome
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
