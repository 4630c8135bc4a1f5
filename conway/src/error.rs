//! Error types for the simulation core.

use thiserror::Error;

/// Errors surfaced by grid lookups, edits and preset selection.
///
/// Every operation that can fail checks its input before touching any cell,
/// so an `Err` always leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A position outside the grid was addressed directly.
    #[error("position ({row}, {column}) is outside the grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// No preset is registered under the requested name.
    #[error("unknown preset: {0}")]
    PresetNotFound(String),
}

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LifeError::OutOfBounds { row: 40, column: 2 };
        assert_eq!(err.to_string(), "position (40, 2) is outside the grid");

        let err = LifeError::PresetNotFound("Spaceship".into());
        assert_eq!(err.to_string(), "unknown preset: Spaceship");
    }
}
