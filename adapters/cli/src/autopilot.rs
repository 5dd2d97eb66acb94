//! Greedy steering used when no move script is supplied.

use snake_grid_core::{BoundaryMode, Cell, Direction, GridModel, OccupancyView};

const CANDIDATES: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Chooses the heading for the next tick.
///
/// Only headings whose next cell is inside the grid and unoccupied are
/// considered; among those the one closest to `target` wins, ties resolved in
/// clockwise order starting from `Up`. The current heading is returned when no
/// safe step exists.
#[must_use]
pub(crate) fn steer(
    occupancy: &OccupancyView<'_>,
    head: Cell,
    heading: Direction,
    chain_length: usize,
    target: Option<Cell>,
) -> Direction {
    let grid = occupancy.grid();
    CANDIDATES
        .iter()
        .copied()
        .filter(|direction| chain_length <= 1 || *direction != heading.opposite())
        .filter_map(|direction| {
            let (next, crossed) = grid.wrap(head, direction);
            if crossed || !occupancy.is_free(next) {
                return None;
            }
            let cost = target.map_or(0, |target| distance(&grid, next, target));
            Some((cost, direction))
        })
        .min_by_key(|(cost, _)| *cost)
        .map_or(heading, |(_, direction)| direction)
}

fn distance(grid: &GridModel, from: Cell, to: Cell) -> u32 {
    let rows = from.row().abs_diff(to.row());
    let columns = from.column().abs_diff(to.column());
    match grid.boundary() {
        BoundaryMode::Lethal => rows + columns,
        BoundaryMode::Wrap => rows.min(grid.rows() - rows) + columns.min(grid.columns() - columns),
    }
}
