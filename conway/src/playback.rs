// playback.rs - Run/stop state and the advances it drives

use crate::grid::SimulationGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Running,
}

/// Owns the run/stop flag. Stopping never cancels the host timer; a tick
/// that arrives while stopped is simply skipped.
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn play(&mut self) {
        if !self.is_running() {
            log::debug!("playback started");
        }
        self.state = PlaybackState::Running;
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            log::debug!("playback stopped");
        }
        self.state = PlaybackState::Stopped;
    }

    /// Advances once, only while stopped. Returns whether a step happened.
    pub fn step(&self, grid: &mut SimulationGrid) -> bool {
        if self.is_running() {
            log::debug!("step ignored while running");
            return false;
        }
        grid.advance();
        true
    }

    /// Clears the grid without touching the run state.
    pub fn reset(&self, grid: &mut SimulationGrid) {
        let cleared = grid.reset_all();
        log::debug!("reset cleared {cleared} cells");
    }

    /// Periodic tick from the host timer. Returns whether the grid advanced.
    pub fn on_tick(&self, grid: &mut SimulationGrid) -> bool {
        if !self.is_running() {
            return false;
        }
        grid.advance();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ToggleMode;

    fn blinker() -> SimulationGrid {
        let mut grid = SimulationGrid::new();
        for column in 5..8 {
            grid.toggle_at(5, column, ToggleMode::Drag).unwrap();
        }
        grid
    }

    #[test]
    fn test_initially_stopped() {
        let controller = PlaybackController::new();
        assert_eq!(controller.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_tick_only_advances_while_running() {
        let mut controller = PlaybackController::new();
        let mut grid = blinker();

        assert!(!controller.on_tick(&mut grid));
        assert_eq!(grid.generation(), 0);

        controller.play();
        assert!(controller.on_tick(&mut grid));
        assert!(controller.on_tick(&mut grid));
        assert_eq!(grid.generation(), 2);

        controller.stop();
        assert!(!controller.on_tick(&mut grid));
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_step_ignored_while_running() {
        let mut controller = PlaybackController::new();
        let mut grid = blinker();

        assert!(controller.step(&mut grid));
        assert_eq!(grid.live_cells(), vec![(4, 6), (5, 6), (6, 6)]);

        controller.play();
        assert!(!controller.step(&mut grid));
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn test_reset_keeps_run_state() {
        let mut controller = PlaybackController::new();
        let mut grid = blinker();

        controller.play();
        controller.reset(&mut grid);
        assert_eq!(grid.population(), 0);
        assert_eq!(controller.state(), PlaybackState::Running);

        controller.stop();
        controller.reset(&mut grid);
        assert_eq!(controller.state(), PlaybackState::Stopped);
    }
}
