#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Snake Grid engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. The simulation controller submits
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for systems to react to deterministically. Systems consume event streams,
//! query immutable snapshots such as [`OccupancyView`], and respond
//! exclusively with new command batches.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted value for [`Configuration::speed_setting`].
pub const MAX_SPEED_SETTING: u8 = 15;

/// Location of a single grid cell expressed as row and column coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u32,
    column: u32,
}

impl Cell {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Heading of the chain head.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// No heading yet; the chain stays in place.
    #[default]
    None,
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Returns the exact reverse of the direction. [`Direction::None`] has no reverse.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Row and column deltas applied by a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::None => (0, 0),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Behaviour applied when the head leaves the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// The head re-enters from the opposite edge.
    #[default]
    Wrap,
    /// Leaving the grid ends the session.
    Lethal,
}

/// Consistency policy used when choosing the next collectable cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Choose uniformly among cells not covered by the chain.
    #[default]
    Immediate,
    /// Choose uniformly among every cell except the head, possibly under the body.
    Delayed,
}

/// Fixed-size rectangular coordinate space with boundary semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridModel {
    rows: u32,
    columns: u32,
    boundary: BoundaryMode,
}

impl GridModel {
    /// Creates a new grid description.
    #[must_use]
    pub const fn new(rows: u32, columns: u32, boundary: BoundaryMode) -> Self {
        Self {
            rows,
            columns,
            boundary,
        }
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Boundary behaviour applied at the grid edges.
    #[must_use]
    pub const fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.rows) * u64::from(self.columns);
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Reports whether the cell lies within the grid bounds.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.rows && cell.column() < self.columns
    }

    /// Row-major index of the cell, if it lies within the grid.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        Some(row * width + column)
    }

    /// Cell located at the provided row-major index, if it lies within the grid.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        let width = usize::try_from(self.columns).ok()?;
        let row = u32::try_from(index / width).ok()?;
        let column = u32::try_from(index % width).ok()?;
        Some(Cell::new(row, column))
    }

    /// Moves `cell` one step in `direction`.
    ///
    /// Returns the destination together with a flag that is set only when the
    /// move left the grid under [`BoundaryMode::Lethal`]; in that case the
    /// destination is the clamped edge cell. Wrapping under
    /// [`BoundaryMode::Wrap`] is a legal move and never sets the flag.
    #[must_use]
    pub fn wrap(&self, cell: Cell, direction: Direction) -> (Cell, bool) {
        let (row_delta, column_delta) = direction.offset();
        let row = i64::from(cell.row()) + row_delta;
        let column = i64::from(cell.column()) + column_delta;
        let rows = i64::from(self.rows.max(1));
        let columns = i64::from(self.columns.max(1));

        let outside = row < 0 || row >= rows || column < 0 || column >= columns;
        match self.boundary {
            BoundaryMode::Wrap => {
                let row = row.rem_euclid(rows);
                let column = column.rem_euclid(columns);
                (Cell::new(row as u32, column as u32), false)
            }
            BoundaryMode::Lethal => {
                let row = row.clamp(0, rows - 1);
                let column = column.clamp(0, columns - 1);
                (Cell::new(row as u32, column as u32), outside)
            }
        }
    }
}

/// Session configuration supplied once by the configuration collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Number of grid rows.
    pub grid_rows: u32,
    /// Number of grid columns.
    pub grid_columns: u32,
    /// Player-facing speed setting in `0..=15`.
    pub speed_setting: u8,
    /// Behaviour applied when the head leaves the grid.
    #[serde(default)]
    pub boundary_mode: BoundaryMode,
    /// Policy used to place collectables.
    #[serde(default)]
    pub spawn_policy: SpawnPolicy,
    /// Cell occupied by the head after configuration or reset.
    ///
    /// Defaults to the grid centre when absent.
    #[serde(default)]
    pub start_cell: Option<Cell>,
}

impl Configuration {
    /// Creates a configuration with the default boundary, spawn policy and start cell.
    #[must_use]
    pub const fn new(grid_rows: u32, grid_columns: u32, speed_setting: u8) -> Self {
        Self {
            grid_rows,
            grid_columns,
            speed_setting,
            boundary_mode: BoundaryMode::Wrap,
            spawn_policy: SpawnPolicy::Immediate,
            start_cell: None,
        }
    }

    /// Returns a copy using the provided boundary mode.
    #[must_use]
    pub const fn with_boundary(mut self, boundary_mode: BoundaryMode) -> Self {
        self.boundary_mode = boundary_mode;
        self
    }

    /// Returns a copy using the provided spawn policy.
    #[must_use]
    pub const fn with_spawn_policy(mut self, spawn_policy: SpawnPolicy) -> Self {
        self.spawn_policy = spawn_policy;
        self
    }

    /// Returns a copy that places the head at the provided cell.
    #[must_use]
    pub const fn with_start_cell(mut self, start_cell: Cell) -> Self {
        self.start_cell = Some(start_cell);
        self
    }

    /// Grid model described by the configuration.
    #[must_use]
    pub const fn grid(&self) -> GridModel {
        GridModel::new(self.grid_rows, self.grid_columns, self.boundary_mode)
    }

    /// Cell the head occupies at session start.
    #[must_use]
    pub const fn start(&self) -> Cell {
        match self.start_cell {
            Some(cell) => cell,
            None => Cell::new(self.grid_rows / 2, self.grid_columns / 2),
        }
    }

    /// Checks the configuration, returning the grid model when it is usable.
    pub fn validate(&self) -> Result<GridModel, ConfigurationError> {
        if self.grid_rows < 1 || self.grid_columns < 1 {
            return Err(ConfigurationError::EmptyGrid {
                rows: self.grid_rows,
                columns: self.grid_columns,
            });
        }
        if self.speed_setting > MAX_SPEED_SETTING {
            return Err(ConfigurationError::SpeedSettingOutOfRange {
                value: self.speed_setting,
            });
        }
        let grid = self.grid();
        let start = self.start();
        if !grid.contains(start) {
            return Err(ConfigurationError::StartOutOfBounds { cell: start });
        }
        Ok(grid)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(10, 10, 7)
    }
}

/// Reasons a configuration may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The grid must contain at least one row and one column.
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid {
        /// Rows requested by the configuration.
        rows: u32,
        /// Columns requested by the configuration.
        columns: u32,
    },
    /// The speed setting exceeded [`MAX_SPEED_SETTING`].
    #[error("speed setting {value} exceeds the maximum of {max}", max = MAX_SPEED_SETTING)]
    SpeedSettingOutOfRange {
        /// Rejected speed setting.
        value: u8,
    },
    /// The start cell lies outside the configured grid.
    #[error("start cell {cell} lies outside the grid")]
    StartOutOfBounds {
        /// Rejected start cell.
        cell: Cell,
    },
}

/// Discrete difficulty classification derived from configuration.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    /// Lowest tier.
    VeryEasy,
    /// Second tier.
    Easy,
    /// Third tier.
    Medium,
    /// Fourth tier.
    Hard,
    /// Fifth tier.
    VeryHard,
    /// Reserved for configurations at the top of the reference range.
    Ultimate,
}

impl DifficultyTier {
    /// Every tier in ascending order.
    pub const ALL: [Self; 6] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
        Self::Ultimate,
    ];

    /// Human readable label for the tier.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very hard",
            Self::Ultimate => "ultimate",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of advancing the simulation by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickResult {
    /// The session continues.
    Continue,
    /// The head left a lethal boundary or ran into the chain.
    Lost,
    /// The chain covers every cell of the grid.
    Won,
}

impl TickResult {
    /// Reports whether no further ticks may be issued.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Reason a session was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossCause {
    /// The head attempted to leave a lethal grid.
    Boundary,
    /// The head moved onto a cell held by the chain.
    Collision,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the grid and places a single head segment at `start`.
    ConfigureSession {
        /// Grid the session plays on.
        grid: GridModel,
        /// Cell occupied by the head.
        start: Cell,
    },
    /// Reinitialises the chain at the configured start cell and clears the score.
    Reset,
    /// Requests a heading change before the next tick.
    SetDirection {
        /// Requested heading.
        direction: Direction,
    },
    /// Advances the chain by one tick.
    Advance,
    /// Places the active collectable at the provided cell.
    PlaceCollectable {
        /// Cell receiving the collectable.
        cell: Cell,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a session was configured or reset.
    SessionConfigured {
        /// Grid the session plays on.
        grid: GridModel,
        /// Cell occupied by the head.
        head: Cell,
    },
    /// Confirms that a heading change was accepted.
    HeadingChanged {
        /// Heading applied on the next tick.
        direction: Direction,
    },
    /// Confirms that the head moved between two cells.
    HeadAdvanced {
        /// Cell the head occupied before the tick.
        from: Cell,
        /// Cell the head occupies after the tick.
        to: Cell,
    },
    /// Reports that a body segment changed cell during the tick.
    SegmentRelocated {
        /// Cell the segment vacated.
        from: Cell,
        /// Cell the segment now occupies.
        to: Cell,
    },
    /// Reports that the head consumed the active collectable.
    CollectableConsumed {
        /// Cell the collectable occupied.
        cell: Cell,
        /// Score after the pickup.
        score: u32,
    },
    /// Reports that a new tail segment was appended.
    ChainGrew {
        /// Cell occupied by the new tail.
        cell: Cell,
        /// Chain length after growing.
        length: usize,
    },
    /// Confirms that a collectable was placed.
    CollectablePlaced {
        /// Cell receiving the collectable.
        cell: Cell,
    },
    /// Announces that the session ended in a loss.
    SessionLost {
        /// Why the session was lost.
        cause: LossCause,
    },
    /// Announces that the chain filled the grid.
    SessionWon {
        /// Final score.
        score: u32,
    },
    /// Reports that an advance was requested on an unconfigured or finished session.
    AdvanceRejected,
}

/// Read-only view into the dense occupancy grid.
#[derive(Clone, Copy, Debug)]
pub struct OccupancyView<'a> {
    cells: &'a [bool],
    grid: GridModel,
}

impl<'a> OccupancyView<'a> {
    /// Captures a new occupancy view backed by the provided row-major slice.
    #[must_use]
    pub fn new(cells: &'a [bool], grid: GridModel) -> Self {
        Self { cells, grid }
    }

    /// Grid described by the view.
    #[must_use]
    pub const fn grid(&self) -> GridModel {
        self.grid
    }

    /// Reports whether the cell is inside the grid and not covered by the chain.
    #[must_use]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.grid
            .index_of(cell)
            .and_then(|index| self.cells.get(index).copied())
            .map_or(false, |occupied| !occupied)
    }

    /// Number of cells covered by the chain.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|occupied| **occupied).count()
    }

    /// Enumerates free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + 'a {
        let grid = self.grid;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupied)| !**occupied)
            .filter_map(move |(index, _)| grid.cell_at(index))
    }
}

/// Lifecycle state of a session as seen by collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The session accepts further ticks.
    InProgress,
    /// The session ended in a loss.
    Lost,
    /// The session ended with the grid filled.
    Won,
}

impl From<TickResult> for SessionOutcome {
    fn from(result: TickResult) -> Self {
        match result {
            TickResult::Continue => Self::InProgress,
            TickResult::Lost => Self::Lost,
            TickResult::Won => Self::Won,
        }
    }
}

/// Summary handed to the scoring and persistence collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Number of collectables consumed.
    pub score: u32,
    /// Tier the session was classified into.
    pub tier: DifficultyTier,
    /// Moves per second derived from the configuration.
    pub effective_speed: u32,
    /// Current lifecycle state.
    pub outcome: SessionOutcome,
    /// Number of ticks applied since configuration or reset.
    pub ticks: u64,
}

/// Best score per difficulty tier.
///
/// The table is a plain value; loading and storing it belongs to the
/// persistence collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighscoreTable {
    very_easy: u32,
    easy: u32,
    medium: u32,
    hard: u32,
    very_hard: u32,
    ultimate: u32,
}

impl HighscoreTable {
    /// Best score recorded for the tier.
    #[must_use]
    pub const fn best(&self, tier: DifficultyTier) -> u32 {
        match tier {
            DifficultyTier::VeryEasy => self.very_easy,
            DifficultyTier::Easy => self.easy,
            DifficultyTier::Medium => self.medium,
            DifficultyTier::Hard => self.hard,
            DifficultyTier::VeryHard => self.very_hard,
            DifficultyTier::Ultimate => self.ultimate,
        }
    }

    /// Records the report, returning `true` when it beats the stored best.
    pub fn record(&mut self, report: &ScoreReport) -> bool {
        let slot = self.slot_mut(report.tier);
        if report.score > *slot {
            *slot = report.score;
            true
        } else {
            false
        }
    }

    fn slot_mut(&mut self, tier: DifficultyTier) -> &mut u32 {
        match tier {
            DifficultyTier::VeryEasy => &mut self.very_easy,
            DifficultyTier::Easy => &mut self.easy,
            DifficultyTier::Medium => &mut self.medium,
            DifficultyTier::Hard => &mut self.hard,
            DifficultyTier::VeryHard => &mut self.very_hard,
            DifficultyTier::Ultimate => &mut self.ultimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn wrap_mode_reenters_from_opposite_edge() {
        let grid = GridModel::new(4, 5, BoundaryMode::Wrap);
        assert_eq!(
            grid.wrap(Cell::new(2, 4), Direction::Right),
            (Cell::new(2, 0), false)
        );
        assert_eq!(
            grid.wrap(Cell::new(0, 1), Direction::Up),
            (Cell::new(3, 1), false)
        );
        assert_eq!(
            grid.wrap(Cell::new(3, 0), Direction::Down),
            (Cell::new(0, 0), false)
        );
        assert_eq!(
            grid.wrap(Cell::new(1, 0), Direction::Left),
            (Cell::new(1, 4), false)
        );
    }

    #[test]
    fn wrap_right_then_left_returns_to_origin() {
        let grid = GridModel::new(6, 6, BoundaryMode::Wrap);
        let origin = Cell::new(3, 5);
        let (across, _) = grid.wrap(origin, Direction::Right);
        let (back, crossed) = grid.wrap(across, Direction::Left);
        assert_eq!(back, origin);
        assert!(!crossed);
    }

    #[test]
    fn lethal_mode_clamps_and_flags_crossing() {
        let grid = GridModel::new(6, 6, BoundaryMode::Lethal);
        assert_eq!(
            grid.wrap(Cell::new(2, 5), Direction::Right),
            (Cell::new(2, 5), true)
        );
        assert_eq!(
            grid.wrap(Cell::new(0, 3), Direction::Up),
            (Cell::new(0, 3), true)
        );
        assert_eq!(
            grid.wrap(Cell::new(2, 4), Direction::Right),
            (Cell::new(2, 5), false)
        );
    }

    #[test]
    fn none_direction_stays_in_place() {
        let grid = GridModel::new(3, 3, BoundaryMode::Lethal);
        assert_eq!(
            grid.wrap(Cell::new(1, 1), Direction::None),
            (Cell::new(1, 1), false)
        );
    }

    #[test]
    fn index_and_cell_are_row_major() {
        let grid = GridModel::new(3, 4, BoundaryMode::Wrap);
        assert_eq!(grid.index_of(Cell::new(1, 2)), Some(6));
        assert_eq!(grid.cell_at(6), Some(Cell::new(1, 2)));
        assert_eq!(grid.index_of(Cell::new(3, 0)), None);
        assert_eq!(grid.cell_at(12), None);
    }

    #[test]
    fn validate_rejects_empty_grid() {
        let configuration = Configuration::new(0, 8, 3);
        assert_eq!(
            configuration.validate(),
            Err(ConfigurationError::EmptyGrid {
                rows: 0,
                columns: 8
            })
        );
    }

    #[test]
    fn validate_rejects_speed_above_maximum() {
        let configuration = Configuration::new(8, 8, 16);
        assert_eq!(
            configuration.validate(),
            Err(ConfigurationError::SpeedSettingOutOfRange { value: 16 })
        );
    }

    #[test]
    fn validate_rejects_start_outside_grid() {
        let configuration = Configuration::new(4, 4, 0).with_start_cell(Cell::new(4, 0));
        assert_eq!(
            configuration.validate(),
            Err(ConfigurationError::StartOutOfBounds {
                cell: Cell::new(4, 0)
            })
        );
    }

    #[test]
    fn start_defaults_to_grid_centre() {
        assert_eq!(Configuration::new(7, 10, 0).start(), Cell::new(3, 5));
    }

    #[test]
    fn occupancy_view_lists_free_cells_in_row_major_order() {
        let grid = GridModel::new(2, 2, BoundaryMode::Wrap);
        let cells = [true, false, false, true];
        let view = OccupancyView::new(&cells, grid);
        let free: Vec<Cell> = view.free_cells().collect();
        assert_eq!(free, vec![Cell::new(0, 1), Cell::new(1, 0)]);
        assert_eq!(view.occupied_count(), 2);
        assert!(!view.is_free(Cell::new(0, 0)));
        assert!(!view.is_free(Cell::new(5, 5)));
    }

    #[test]
    fn highscore_table_keeps_best_per_tier() {
        let mut table = HighscoreTable::default();
        let mut report = ScoreReport {
            score: 12,
            tier: DifficultyTier::Hard,
            effective_speed: 9,
            outcome: SessionOutcome::Lost,
            ticks: 140,
        };
        assert!(table.record(&report));
        report.score = 7;
        assert!(!table.record(&report));
        assert_eq!(table.best(DifficultyTier::Hard), 12);
        assert_eq!(table.best(DifficultyTier::Easy), 0);
    }

    #[test]
    fn highscore_table_round_trips_through_bincode() {
        let mut table = HighscoreTable::default();
        let _ = table.record(&ScoreReport {
            score: 4,
            tier: DifficultyTier::Medium,
            effective_speed: 6,
            outcome: SessionOutcome::Won,
            ticks: 20,
        });
        assert_round_trip(&table);
    }

    #[test]
    fn configuration_round_trips_through_bincode() {
        let configuration = Configuration::new(12, 9, 4)
            .with_boundary(BoundaryMode::Lethal)
            .with_spawn_policy(SpawnPolicy::Delayed)
            .with_start_cell(Cell::new(1, 1));
        assert_round_trip(&configuration);
    }

    #[test]
    fn configuration_without_start_cell_round_trips_through_bincode() {
        let configuration = Configuration::new(7, 5, 15);
        assert_eq!(configuration.start_cell, None);
        assert_round_trip(&configuration);
    }

    #[test]
    fn tiers_are_ordered_ascending() {
        assert!(DifficultyTier::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
