// grid.rs - Cell storage, generation advance and manual editing

use crate::adjacency::AdjacencyIndex;
use crate::cell::{Cell, CellObserver, NullObserver};
use crate::config::{GRID_CELLS, GRID_COLUMNS, GRID_ROWS, Position, in_bounds, index_of};
use crate::error::{LifeError, Result};

/// How a manual edit treats a cell that is already alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMode {
    /// Single click: alive -> dead, dead -> alive.
    Click,
    /// Drag-to-draw: only ever activates, so sweeping over live cells is a no-op.
    Drag,
}

/// Conway's rule: whether a cell in state `alive` with `live_neighbors`
/// changes state this generation.
pub fn should_flip(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => false,  // Survival
        (true, _)             => true,   // Under/overpopulation
        (false, 3)            => true,   // Birth
        (false, _)            => false,  // Stays dead
    }
}

/// The fixed 40x40 playing field.
///
/// Cells live in a dense row-major `Vec`; neighbor lookups go through the
/// [`AdjacencyIndex`] built alongside them. Every state change flows through
/// [`Cell::toggle`], which reports it to the installed [`CellObserver`].
pub struct SimulationGrid {
    cells: Vec<Cell>,
    adjacency: AdjacencyIndex,
    generation: u64,
    observer: Box<dyn CellObserver>,
}

impl SimulationGrid {
    pub fn new() -> Self {
        Self::with_observer(Box::new(NullObserver))
    }

    pub fn with_observer(observer: Box<dyn CellObserver>) -> Self {
        let mut cells = Vec::with_capacity(GRID_CELLS);
        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                cells.push(Cell::new(row, column));
            }
        }

        Self {
            cells,
            adjacency: AdjacencyIndex::new(),
            generation: 0,
            observer,
        }
    }

    /// Replaces the observer receiving cell notifications.
    pub fn set_observer(&mut self, observer: Box<dyn CellObserver>) {
        self.observer = observer;
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Generations advanced since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell> {
        Ok(&self.cells[Self::checked_index(row, column)?])
    }

    pub fn is_alive(&self, row: usize, column: usize) -> Result<bool> {
        self.cell(row, column).map(Cell::is_alive)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Positions of live cells, row-major.
    pub fn live_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.row(), cell.column()))
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn live_neighbor_count(&self, row: usize, column: usize) -> Result<usize> {
        Ok(self.live_neighbors_at(Self::checked_index(row, column)?))
    }

    /// Decide phase: marks every cell whose state changes this generation.
    ///
    /// Reads only `alive`, writes only `pending_flip`, so every decision sees
    /// the same pre-update snapshot regardless of iteration order.
    pub fn compute_next_states(&mut self) {
        for index in 0..self.cells.len() {
            let live = self.live_neighbors_at(index);
            let cell = &mut self.cells[index];
            if should_flip(cell.is_alive(), live) {
                cell.mark_flip();
            }
        }
    }

    /// Commit phase: toggles every marked cell. Returns how many flipped.
    pub fn commit_flips(&mut self) -> usize {
        let observer = self.observer.as_mut();
        let mut flipped = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_pending_flip()) {
            cell.toggle(observer);
            flipped += 1;
        }
        flipped
    }

    /// One full generation step. Returns how many cells changed.
    pub fn advance(&mut self) -> usize {
        self.compute_next_states();
        let flipped = self.commit_flips();
        self.generation += 1;
        log::debug!("generation {} ({flipped} cells changed)", self.generation);
        flipped
    }

    /// Manual edit at `(row, column)`. Returns whether the cell changed.
    pub fn toggle_at(&mut self, row: usize, column: usize, mode: ToggleMode) -> Result<bool> {
        let index = Self::checked_index(row, column)?;
        let cell = &mut self.cells[index];
        if mode == ToggleMode::Drag && cell.is_alive() {
            return Ok(false);
        }
        cell.toggle(self.observer.as_mut());
        Ok(true)
    }

    /// Kills every live cell and restarts the generation count.
    /// Returns how many cells were cleared.
    pub fn reset_all(&mut self) -> usize {
        let observer = self.observer.as_mut();
        let mut cleared = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_alive()) {
            cell.toggle(observer);
            cleared += 1;
        }
        self.generation = 0;
        cleared
    }

    fn checked_index(row: usize, column: usize) -> Result<usize> {
        if in_bounds(row, column) {
            Ok(index_of(row, column))
        } else {
            Err(LifeError::OutOfBounds { row, column })
        }
    }

    fn live_neighbors_at(&self, index: usize) -> usize {
        self.adjacency
            .neighbors_at(index)
            .iter()
            .filter(|&&(r, c)| self.cells[index_of(r, c)].is_alive())
            .count()
    }
}

impl Default for SimulationGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimulationGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationGrid")
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish_non_exhaustive()
    }
}

/// Renders the grid as text, `#` for live cells and `.` for dead ones.
impl std::fmt::Display for SimulationGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(GRID_COLUMNS) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
