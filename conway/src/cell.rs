// cell.rs - Single automaton unit and the renderer notification hook

/// Receives a notification every time a cell changes state.
///
/// The renderer implements this to recolor or repaint; the core never draws.
pub trait CellObserver {
    fn cell_changed(&mut self, row: usize, column: usize, alive: bool);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl CellObserver for NullObserver {
    fn cell_changed(&mut self, _row: usize, _column: usize, _alive: bool) {}
}

/// Observer that forwards notifications to `log` at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl CellObserver for LogObserver {
    fn cell_changed(&mut self, row: usize, column: usize, alive: bool) {
        log::trace!("cell ({row}, {column}) -> {}", if alive { "alive" } else { "dead" });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    alive: bool,
    pending_flip: bool,
}

impl Cell {
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Self { row, column, alive: false, pending_flip: false }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// True only between the decide and commit phases of one advance.
    pub fn is_pending_flip(&self) -> bool {
        self.pending_flip
    }

    pub(crate) fn mark_flip(&mut self) {
        self.pending_flip = true;
    }

    /// Flips the cell, clears any pending flip and notifies `observer`.
    pub fn toggle(&mut self, observer: &mut dyn CellObserver) {
        self.alive = !self.alive;
        self.pending_flip = false;
        observer.cell_changed(self.row, self.column, self.alive);
    }
}
