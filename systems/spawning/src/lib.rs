#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for placing collectables.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use snake_grid_core::{Cell, Command, Event, OccupancyView, SpawnPolicy};

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    policy: SpawnPolicy,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided policy and seed.
    #[must_use]
    pub const fn new(policy: SpawnPolicy, rng_seed: u64) -> Self {
        Self { policy, rng_seed }
    }
}

/// Result of a spawning pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Nothing required a new collectable.
    Idle,
    /// A placement command was emitted for the cell.
    Placed(Cell),
    /// A collectable was required but no cell was available.
    Exhausted,
}

/// Pure system that emits a placement command whenever a collectable is needed.
#[derive(Debug)]
pub struct Spawning {
    policy: SpawnPolicy,
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            policy: config.policy,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Policy applied when selecting cells.
    #[must_use]
    pub const fn policy(&self) -> SpawnPolicy {
        self.policy
    }

    /// Consumes world events and immutable views to emit placement commands.
    ///
    /// A collectable is required after the session is configured and after
    /// each pickup, unless the same batch finished the session.
    pub fn handle(
        &mut self,
        events: &[Event],
        occupancy: OccupancyView<'_>,
        head: Option<Cell>,
        out: &mut Vec<Command>,
    ) -> SpawnOutcome {
        let finished = events
            .iter()
            .any(|event| matches!(event, Event::SessionWon { .. } | Event::SessionLost { .. }));
        if finished {
            return SpawnOutcome::Idle;
        }

        let needed = events.iter().any(|event| {
            matches!(
                event,
                Event::SessionConfigured { .. } | Event::CollectableConsumed { .. }
            )
        });
        if !needed {
            return SpawnOutcome::Idle;
        }

        let Some(head) = head else {
            return SpawnOutcome::Idle;
        };

        match select_next(occupancy, head, self.policy, &mut self.rng) {
            Some(cell) => {
                out.push(Command::PlaceCollectable { cell });
                SpawnOutcome::Placed(cell)
            }
            None => SpawnOutcome::Exhausted,
        }
    }
}

/// Picks the next collectable cell under the provided policy.
///
/// [`SpawnPolicy::Immediate`] enumerates free cells in row-major order and
/// draws uniformly among them, returning `None` when the chain covers the
/// grid. [`SpawnPolicy::Delayed`] only excludes the head cell and may
/// therefore return a cell under the body; it returns `None` only for a
/// single-cell grid.
pub fn select_next<R>(
    occupancy: OccupancyView<'_>,
    head: Cell,
    policy: SpawnPolicy,
    rng: &mut R,
) -> Option<Cell>
where
    R: Rng + ?Sized,
{
    match policy {
        SpawnPolicy::Immediate => select_free(occupancy, rng),
        SpawnPolicy::Delayed => select_except_head(occupancy, head, rng),
    }
}

fn select_free<R>(occupancy: OccupancyView<'_>, rng: &mut R) -> Option<Cell>
where
    R: Rng + ?Sized,
{
    let free_count = occupancy.free_cells().count();
    if free_count == 0 {
        return None;
    }
    let chosen = rng.gen_range(0..free_count);
    occupancy.free_cells().nth(chosen)
}

fn select_except_head<R>(occupancy: OccupancyView<'_>, head: Cell, rng: &mut R) -> Option<Cell>
where
    R: Rng + ?Sized,
{
    let grid = occupancy.grid();
    let cell_count = grid.cell_count();
    let head_index = grid.index_of(head)?;
    if cell_count < 2 {
        return None;
    }

    let mut chosen = rng.gen_range(0..cell_count - 1);
    if chosen >= head_index {
        chosen += 1;
    }
    grid.cell_at(chosen)
}
