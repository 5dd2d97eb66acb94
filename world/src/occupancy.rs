//! Dense row-major occupancy grid mirroring the chain's cells.

use snake_grid_core::{BoundaryMode, Cell, GridModel, OccupancyView};

#[derive(Clone, Debug)]
pub(crate) struct OccupancyGrid {
    grid: GridModel,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub(crate) fn empty() -> Self {
        Self {
            grid: GridModel::new(0, 0, BoundaryMode::Wrap),
            cells: Vec::new(),
        }
    }

    pub(crate) fn new(grid: GridModel) -> Self {
        Self {
            grid,
            cells: vec![false; grid.cell_count()],
        }
    }

    pub(crate) fn is_occupied(&self, cell: Cell) -> bool {
        self.grid
            .index_of(cell)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(false)
    }

    pub(crate) fn occupy(&mut self, cell: Cell) {
        self.set(cell, true);
    }

    pub(crate) fn vacate(&mut self, cell: Cell) {
        self.set(cell, false);
    }

    pub(crate) fn view(&self) -> OccupancyView<'_> {
        OccupancyView::new(&self.cells, self.grid)
    }

    fn set(&mut self, cell: Cell, occupied: bool) {
        if let Some(index) = self.grid.index_of(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = occupied;
            }
        }
    }
}
