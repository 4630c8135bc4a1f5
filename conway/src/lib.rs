//! Simulation core for Conway's Game of Life on a fixed 40x40 grid.
//!
//! The grid has no wraparound: neighborhoods are clipped at the edges. Each
//! generation is computed in two phases, a read-only decide pass over every
//! cell followed by a commit pass, so no cell ever sees a partially updated
//! neighbor.
//!
//! ```
//! use conway::Session;
//!
//! let mut session = Session::default();
//! session.handle_select_preset("Blinker").unwrap();
//! session.handle_step();
//! assert_eq!(session.grid().live_cells(), vec![(4, 6), (5, 6), (6, 6)]);
//! ```
//!
//! Rendering is left to the host, which installs a [`CellObserver`] and
//! forwards input to [`Session`].

pub mod adjacency;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod playback;
pub mod session;
pub mod ticker;

pub use adjacency::AdjacencyIndex;
pub use cell::{Cell, CellObserver, LogObserver, NullObserver};
pub use config::{GRID_COLUMNS, GRID_ROWS, Position, TICK_INTERVAL};
pub use error::{LifeError, Result};
pub use grid::{SimulationGrid, ToggleMode};
pub use patterns::{PATTERNS, Pattern, Preset, PresetLibrary};
pub use playback::{PlaybackController, PlaybackState};
pub use session::Session;
pub use ticker::Ticker;
