//! Presentation settings
//!
//! Loaded once at startup from an optional JSON file. Simulation constants
//! (grid size, tick interval) are compile-time and not configurable here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use conway::{Position, PresetLibrary};
use serde::{Deserialize, Serialize};

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "CONWAY_SETTINGS";
/// Settings file looked up in the working directory when the variable is unset.
pub const DEFAULT_SETTINGS_FILE: &str = "conway.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fill for live cells (sRGB)
    pub live_color: [u8; 3],
    /// Fill for dead cells (sRGB)
    pub dead_color: [u8; 3],
    /// Side of one cell in points
    pub cell_size: f32,
    /// Extra presets by name, absolute (row, column) coordinates
    pub presets: BTreeMap<String, Vec<Position>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
            cell_size: 18.0,
            presets: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Path from `CONWAY_SETTINGS`, else `conway.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Loads settings, falling back to defaults when the file is missing or
    /// malformed.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("failed to read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&text) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("invalid settings in {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(text)?;
        if !(settings.cell_size.is_finite() && settings.cell_size >= 2.0) {
            log::warn!("cell_size {} too small, using default", settings.cell_size);
            settings.cell_size = Self::default().cell_size;
        }
        Ok(settings)
    }

    /// Built-in presets plus the configured ones. Presets with coordinates
    /// outside the grid are skipped with a warning.
    pub fn preset_library(&self) -> PresetLibrary {
        let mut library = PresetLibrary::builtin();
        for (name, cells) in &self.presets {
            match library.insert(name.clone(), cells.clone()) {
                Ok(()) => log::info!("registered preset {name:?} ({} cells)", cells.len()),
                Err(e) => log::warn!("skipping preset {name:?}: {e}"),
            }
        }
        library
    }
}
