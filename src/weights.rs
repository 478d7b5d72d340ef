//! Explicit edge-weight storage.

use serde::{Deserialize, Serialize};

/// An explicit weight table for `size` nodes.
///
/// `FullMatrix` keeps every ordered pair and may be asymmetric. The two
/// triangular formats store each unordered pair once, without the diagonal,
/// and always report `0` for `w[i, i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeWeights {
    /// Row-major `size * size` values.
    FullMatrix { size: usize, values: Vec<i64> },
    /// Rows of the strict lower triangle: `w[1,0], w[2,0], w[2,1], w[3,0], ...`
    LowerRow { size: usize, values: Vec<i64> },
    /// Columns of the strict lower triangle: `w[1,0], w[2,0], ..., w[n-1,0], w[2,1], ...`
    LowerCol { size: usize, values: Vec<i64> },
}

impl EdgeWeights {
    /// Create a zeroed full matrix.
    pub fn full_matrix(size: usize) -> Self {
        EdgeWeights::FullMatrix {
            size,
            values: vec![0; size * size],
        }
    }

    /// Create a zeroed lower-row triangle.
    pub fn lower_row(size: usize) -> Self {
        EdgeWeights::LowerRow {
            size,
            values: vec![0; triangle_len(size)],
        }
    }

    /// Create a zeroed lower-column triangle.
    pub fn lower_col(size: usize) -> Self {
        EdgeWeights::LowerCol {
            size,
            values: vec![0; triangle_len(size)],
        }
    }

    /// Build a full matrix from nested rows.
    ///
    /// Returns `None` if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<i64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(EdgeWeights::FullMatrix {
            size,
            values: rows.iter().flatten().copied().collect(),
        })
    }

    /// Number of nodes covered by the table.
    pub fn size(&self) -> usize {
        match self {
            EdgeWeights::FullMatrix { size, .. }
            | EdgeWeights::LowerRow { size, .. }
            | EdgeWeights::LowerCol { size, .. } => *size,
        }
    }

    /// Whether the stored value count matches the declared size.
    pub fn is_consistent(&self) -> bool {
        match self {
            EdgeWeights::FullMatrix { size, values } => values.len() == size * size,
            EdgeWeights::LowerRow { size, values } | EdgeWeights::LowerCol { size, values } => {
                values.len() == triangle_len(*size)
            }
        }
    }

    /// Weight of the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        match self {
            EdgeWeights::FullMatrix { size, values } => {
                assert!(from < *size && to < *size, "edge ({from}, {to}) out of bounds");
                values[from * size + to]
            }
            EdgeWeights::LowerRow { size, values } => {
                if from == to {
                    return 0;
                }
                values[lower_row_index(*size, from, to)]
            }
            EdgeWeights::LowerCol { size, values } => {
                if from == to {
                    return 0;
                }
                values[lower_col_index(*size, from, to)]
            }
        }
    }

    /// Set the weight of the edge `from -> to`.
    ///
    /// Triangular formats set both directions at once and ignore the diagonal.
    pub fn set(&mut self, from: usize, to: usize, weight: i64) {
        match self {
            EdgeWeights::FullMatrix { size, values } => {
                assert!(from < *size && to < *size, "edge ({from}, {to}) out of bounds");
                values[from * *size + to] = weight;
            }
            EdgeWeights::LowerRow { size, values } => {
                if from != to {
                    values[lower_row_index(*size, from, to)] = weight;
                }
            }
            EdgeWeights::LowerCol { size, values } => {
                if from != to {
                    values[lower_col_index(*size, from, to)] = weight;
                }
            }
        }
    }
}

fn triangle_len(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

fn lower_row_index(size: usize, from: usize, to: usize) -> usize {
    assert!(from < size && to < size, "edge ({from}, {to}) out of bounds");
    let (row, col) = if from > to { (from, to) } else { (to, from) };
    row * (row - 1) / 2 + col
}

fn lower_col_index(size: usize, from: usize, to: usize) -> usize {
    assert!(from < size && to < size, "edge ({from}, {to}) out of bounds");
    let (row, col) = if from > to { (from, to) } else { (to, from) };
    // Column `col` starts after (size - 1) + ... + (size - col) entries; its
    // first stored row is `col + 1`.
    col * (2 * size - col - 1) / 2 + (row - col - 1)
}
