// patterns.rs - Named presets stamped onto the grid at absolute positions

use crate::config::{Position, in_bounds};
use crate::error::{LifeError, Result};
use crate::grid::{SimulationGrid, ToggleMode};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(5, 5), (5, 6), (5, 7)],
    },
    Pattern {
        name: "Block",
        cells: &[(30, 5), (30, 6), (31, 5), (31, 6)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Toad",
        cells: &[(10, 21), (10, 22), (10, 23), (11, 20), (11, 21), (11, 22)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (13, 15), (13, 16), (13, 17), (13, 21), (13, 22), (13, 23),
            (15, 13), (15, 18), (15, 20), (15, 25),
            (16, 13), (16, 18), (16, 20), (16, 25),
            (17, 13), (17, 18), (17, 20), (17, 25),
            (18, 15), (18, 16), (18, 17), (18, 21), (18, 22), (18, 23),
            // Bottom half (mirrored)
            (20, 15), (20, 16), (20, 17), (20, 21), (20, 22), (20, 23),
            (21, 13), (21, 18), (21, 20), (21, 25),
            (22, 13), (22, 18), (22, 20), (22, 25),
            (23, 13), (23, 18), (23, 20), (23, 25),
            (25, 15), (25, 16), (25, 17), (25, 21), (25, 22), (25, 23),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(20, 20), (20, 21), (19, 21), (21, 20), (21, 19)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
];

/// A named preset owned by a [`PresetLibrary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub cells: Vec<Position>,
}

/// Presets by name, kept in registration order for menus.
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
}

impl PresetLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// A library holding every built-in [`PATTERNS`] entry.
    pub fn builtin() -> Self {
        let presets = PATTERNS
            .iter()
            .map(|pattern| Preset {
                name: pattern.name.to_string(),
                cells: pattern.cells.to_vec(),
            })
            .collect();
        Self { presets }
    }

    /// Registers `cells` under `name`, replacing any preset of that name.
    ///
    /// Fails with [`LifeError::OutOfBounds`] on the first coordinate outside
    /// the grid, in which case nothing is registered.
    pub fn insert(&mut self, name: impl Into<String>, cells: Vec<Position>) -> Result<()> {
        if let Some(&(row, column)) = cells.iter().find(|&&(r, c)| !in_bounds(r, c)) {
            return Err(LifeError::OutOfBounds { row, column });
        }

        let preset = Preset { name: name.into(), cells };
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Activates every dead cell listed by preset `name`; live cells are left
    /// alone. Returns how many cells were switched on.
    pub fn apply_preset(&self, grid: &mut SimulationGrid, name: &str) -> Result<usize> {
        let preset = self
            .get(name)
            .ok_or_else(|| LifeError::PresetNotFound(name.to_string()))?;

        if let Some(&(row, column)) = preset.cells.iter().find(|&&(r, c)| !in_bounds(r, c)) {
            return Err(LifeError::OutOfBounds { row, column });
        }

        let mut activated = 0;
        for &(row, column) in &preset.cells {
            if grid.toggle_at(row, column, ToggleMode::Drag)? {
                activated += 1;
            }
        }
        log::info!("applied preset {name:?} ({activated} cells activated)");
        Ok(activated)
    }
}
