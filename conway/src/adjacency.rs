// adjacency.rs - Precomputed Moore neighborhoods, clipped at the grid edges

use crate::config::{GRID_COLUMNS, GRID_ROWS, Position, in_bounds, index_of};
use crate::error::{LifeError, Result};

/// Static map from every cell to its in-bounds Moore neighbors.
///
/// There is no wraparound: a corner cell has 3 neighbors, an edge cell 5 and
/// an interior cell 8.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    neighbors: Vec<Vec<Position>>, // Row-major, one entry per cell
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        let mut neighbors = Vec::with_capacity(GRID_ROWS * GRID_COLUMNS);

        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                let mut list = Vec::with_capacity(8);
                // 3x3 block around (row, column), clipped to the grid
                for r in row.saturating_sub(1)..=row + 1 {
                    for c in column.saturating_sub(1)..=column + 1 {
                        if (r, c) != (row, column) && in_bounds(r, c) {
                            list.push((r, c));
                        }
                    }
                }
                neighbors.push(list);
            }
        }

        Self { neighbors }
    }

    /// In-bounds neighbors of `(row, column)`, row-major order.
    pub fn neighbors_of(&self, row: usize, column: usize) -> Result<&[Position]> {
        if !in_bounds(row, column) {
            return Err(LifeError::OutOfBounds { row, column });
        }
        Ok(&self.neighbors[index_of(row, column)])
    }

    pub(crate) fn neighbors_at(&self, index: usize) -> &[Position] {
        &self.neighbors[index]
    }
}

impl Default for AdjacencyIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(index: &AdjacencyIndex, row: usize, column: usize) -> usize {
        index.neighbors_of(row, column).map(|n| n.len()).unwrap_or(0)
    }

    #[test]
    fn test_corner_edge_interior_counts() {
        let index = AdjacencyIndex::new();
        assert_eq!(count(&index, 0, 0), 3);
        assert_eq!(count(&index, 0, GRID_COLUMNS - 1), 3);
        assert_eq!(count(&index, GRID_ROWS - 1, 0), 3);
        assert_eq!(count(&index, GRID_ROWS - 1, GRID_COLUMNS - 1), 3);

        assert_eq!(count(&index, 0, 10), 5);
        assert_eq!(count(&index, 17, 0), 5);
        assert_eq!(count(&index, GRID_ROWS - 1, 20), 5);
        assert_eq!(count(&index, 5, GRID_COLUMNS - 1), 5);

        assert_eq!(count(&index, 1, 1), 8);
        assert_eq!(count(&index, 20, 20), 8);
    }

    #[test]
    fn test_corner_neighbors_are_exact() {
        let index = AdjacencyIndex::new();
        assert_eq!(index.neighbors_of(0, 0), Ok(&[(0, 1), (1, 0), (1, 1)][..]));
    }

    #[test]
    fn test_relation_is_symmetric() {
        let index = AdjacencyIndex::new();
        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                for &(r, c) in index.neighbors_of(row, column).unwrap() {
                    assert!(index.neighbors_of(r, c).unwrap().contains(&(row, column)));
                }
            }
        }
    }

    #[test]
    fn test_out_of_bounds_query() {
        let index = AdjacencyIndex::new();
        assert_eq!(
            index.neighbors_of(GRID_ROWS, 0),
            Err(LifeError::OutOfBounds { row: GRID_ROWS, column: 0 })
        );
    }
}
