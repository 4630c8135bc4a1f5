// session.rs - Single entry point for the renderer/input surface

use crate::cell::CellObserver;
use crate::error::Result;
use crate::grid::{SimulationGrid, ToggleMode};
use crate::patterns::PresetLibrary;
use crate::playback::{PlaybackController, PlaybackState};

/// One simulation session: grid, presets and playback, driven by input
/// events and host timer ticks on a single thread.
#[derive(Debug)]
pub struct Session {
    grid: SimulationGrid,
    presets: PresetLibrary,
    playback: PlaybackController,
}

impl Session {
    pub fn new(presets: PresetLibrary) -> Self {
        Self::with_grid(SimulationGrid::new(), presets)
    }

    pub fn with_observer(presets: PresetLibrary, observer: Box<dyn CellObserver>) -> Self {
        Self::with_grid(SimulationGrid::with_observer(observer), presets)
    }

    fn with_grid(grid: SimulationGrid, presets: PresetLibrary) -> Self {
        Self {
            grid,
            presets,
            playback: PlaybackController::new(),
        }
    }

    pub fn grid(&self) -> &SimulationGrid {
        &self.grid
    }

    pub fn presets(&self) -> &PresetLibrary {
        &self.presets
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    /// Full toggle at the clicked cell. Ignored while running.
    pub fn handle_click(&mut self, row: usize, column: usize) -> Result<bool> {
        self.edit(row, column, ToggleMode::Click)
    }

    /// Activate-only edit for a drag entering a cell. Ignored while running.
    pub fn handle_drag_enter(&mut self, row: usize, column: usize) -> Result<bool> {
        self.edit(row, column, ToggleMode::Drag)
    }

    pub fn handle_play(&mut self) {
        self.playback.play();
    }

    pub fn handle_stop(&mut self) {
        self.playback.stop();
    }

    /// Advances one generation if stopped. Returns whether it did.
    pub fn handle_step(&mut self) -> bool {
        self.playback.step(&mut self.grid)
    }

    pub fn handle_reset(&mut self) {
        self.playback.reset(&mut self.grid);
    }

    pub fn handle_select_preset(&mut self, name: &str) -> Result<usize> {
        self.presets.apply_preset(&mut self.grid, name).inspect_err(|err| {
            log::warn!("preset selection failed: {err}");
        })
    }

    /// Host timer callback. Returns whether the grid advanced.
    pub fn on_tick(&mut self) -> bool {
        self.playback.on_tick(&mut self.grid)
    }

    fn edit(&mut self, row: usize, column: usize, mode: ToggleMode) -> Result<bool> {
        if self.playback.is_running() {
            log::debug!("{mode:?} at ({row}, {column}) ignored while running");
            return Ok(false);
        }
        self.grid.toggle_at(row, column, mode)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PresetLibrary::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[test]
    fn test_edits_only_while_stopped() {
        let mut session = Session::default();
        assert_eq!(session.handle_click(2, 2), Ok(true));
        assert_eq!(session.handle_drag_enter(2, 3), Ok(true));
        assert_eq!(session.handle_drag_enter(2, 3), Ok(false));

        session.handle_play();
        assert_eq!(session.handle_click(2, 2), Ok(false));
        assert_eq!(session.handle_drag_enter(9, 9), Ok(false));
        assert_eq!(session.grid().live_cells(), vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn test_click_out_of_bounds() {
        let mut session = Session::default();
        assert_eq!(
            session.handle_click(0, 40),
            Err(LifeError::OutOfBounds { row: 0, column: 40 })
        );
    }

    #[test]
    fn test_preset_then_run() {
        let mut session = Session::default();
        assert_eq!(session.handle_select_preset("Blinker"), Ok(3));

        assert!(!session.on_tick()); // Stopped: timer fires, nothing advances
        session.handle_play();
        assert!(session.on_tick());
        assert_eq!(session.grid().live_cells(), vec![(4, 6), (5, 6), (6, 6)]);

        assert!(!session.handle_step());
        session.handle_stop();
        assert!(session.handle_step());
        assert_eq!(session.grid().live_cells(), vec![(5, 5), (5, 6), (5, 7)]);
        assert_eq!(session.grid().generation(), 2);
    }

    #[test]
    fn test_unknown_preset_leaves_grid() {
        let mut session = Session::default();
        session.handle_click(1, 1).unwrap();
        assert!(matches!(
            session.handle_select_preset("Nope"),
            Err(LifeError::PresetNotFound(_))
        ));
        assert_eq!(session.grid().live_cells(), vec![(1, 1)]);
    }

    #[test]
    fn test_reset_in_either_state() {
        let mut session = Session::default();
        session.handle_select_preset("Pulsar").unwrap();
        session.handle_play();
        session.handle_reset();
        assert_eq!(session.grid().population(), 0);
        assert_eq!(session.state(), PlaybackState::Running);

        session.handle_reset();
        assert_eq!(session.grid().population(), 0);
    }
}
