//! SimilarityMatrix: a dense N×N table of precomputed pairwise scores.
//!
//! `score(i, j)` is the similarity of item `i` to item `j`, where positions
//! follow the catalog ordering. The engine only ever reads row `i` for a
//! query at position `i`, so symmetry is not required or checked.
//!
//! Storage is a `smartcore` `DenseMatrix<f64>`; rows are read through the
//! `get_row(i).iterator(0)` access pattern.
//!
//! # Examples
//!
//! ```
//! use simspace::matrix::SimilarityMatrix;
//!
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.4],
//!     vec![0.4, 1.0],
//! ]).unwrap();
//!
//! assert_eq!(matrix.nitems(), 2);
//! assert_eq!(matrix.score(0, 1), 0.4);
//! ```

use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{Result, SimspaceError};

/// Dense N×N similarity scores with the item count alongside.
#[derive(Clone, Debug)]
pub struct SimilarityMatrix {
    matrix: DenseMatrix<f64>,
    nitems: usize,
}

impl SimilarityMatrix {
    /// Builds from row vectors, one row per item in catalog order.
    ///
    /// # Errors
    ///
    /// `SimspaceError::DataCorrupt` when the input is empty, a row length
    /// differs from the row count (the matrix must be square), or the
    /// backing matrix cannot be assembled.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nitems = rows.len();
        if nitems == 0 {
            return Err(SimspaceError::DataCorrupt {
                message: "similarity matrix is empty".to_string(),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != nitems {
                return Err(SimspaceError::DataCorrupt {
                    message: format!(
                        "similarity matrix must be square: row {i} has {} scores, expected {nitems}",
                        row.len()
                    ),
                });
            }
        }

        let matrix = DenseMatrix::from_2d_vec(&rows)
            .map_err(|e| SimspaceError::DataCorrupt { message: e.to_string() })?;

        Ok(Self { matrix, nitems })
    }

    /// Number of items (rows and columns).
    #[inline]
    pub fn nitems(&self) -> usize {
        self.nitems
    }

    /// Scores of item `query` against every item, in column order.
    ///
    /// # Panics
    ///
    /// Panics if `query >= nitems()`; callers validate positions first.
    #[inline]
    pub fn row(&self, query: usize) -> Vec<f64> {
        assert!(query < self.nitems, "row index out of bounds");
        self.matrix.get_row(query).iterator(0).copied().collect()
    }

    /// Single score lookup.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= nitems()`.
    #[inline]
    pub fn score(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.nitems && j < self.nitems, "score index out of bounds");
        *self.matrix.get((i, j))
    }
}
