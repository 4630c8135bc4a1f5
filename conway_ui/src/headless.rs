// headless.rs - Windowless runner driven by a tokio interval

use std::time::Duration;

use conway::{LogObserver, Session, TICK_INTERVAL};
use tokio::time::{self, MissedTickBehavior};

use crate::settings::Settings;

pub const DEFAULT_TICKS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessOptions {
    pub preset: Option<String>,
    pub ticks: u32,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self { preset: None, ticks: DEFAULT_TICKS }
    }
}

/// Fires `ticks` timer callbacks at `period` on the current task.
/// Returns how many of them advanced the grid.
pub async fn drive(session: &mut Session, ticks: u32, period: Duration) -> u32 {
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut advanced = 0;
    for _ in 0..ticks {
        interval.tick().await;
        if session.on_tick() {
            advanced += 1;
        }
    }
    advanced
}

/// Runs the simulation without a window and returns the final board as text.
pub fn run(options: &HeadlessOptions, settings: &Settings) -> Result<String, Box<dyn std::error::Error>> {
    let mut session = Session::with_observer(settings.preset_library(), Box::new(LogObserver));
    if let Some(name) = &options.preset {
        session.handle_select_preset(name)?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    session.handle_play();
    let advanced = runtime.block_on(drive(&mut session, options.ticks, TICK_INTERVAL));
    session.handle_stop();

    log::info!(
        "headless run finished: {advanced} generations, population {}",
        session.grid().population()
    );
    Ok(session.grid().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_drive_advances_while_running() {
        let mut session = Session::default();
        session.handle_select_preset("Blinker").unwrap();
        session.handle_play();

        assert_eq!(drive(&mut session, 3, TICK_INTERVAL).await, 3);
        assert_eq!(session.grid().generation(), 3);
        assert_eq!(session.grid().live_cells(), vec![(4, 6), (5, 6), (6, 6)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drive_skips_while_stopped() {
        let mut session = Session::default();
        session.handle_select_preset("Glider").unwrap();

        assert_eq!(drive(&mut session, 5, TICK_INTERVAL).await, 0);
        assert_eq!(session.grid().generation(), 0);
    }

    #[test]
    fn test_run_unknown_preset() {
        let options = HeadlessOptions { preset: Some("Nope".into()), ticks: 1 };
        let err = run(&options, &Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown preset: Nope");
    }

    #[test]
    fn test_run_block_is_stable() {
        let options = HeadlessOptions { preset: Some("Block".into()), ticks: 2 };
        let board = run(&options, &Settings::default()).unwrap();
        assert_eq!(board.matches('#').count(), 4);
        assert_eq!(board.lines().nth(30).map(|l| &l[5..7]), Some("##"));
    }
}
