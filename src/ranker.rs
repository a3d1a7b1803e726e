//! Top-K neighbor ranking over a single similarity-matrix row.
//!
//! The ranking is a pure function of its inputs: enumerate the query's row,
//! stable-sort descending by score (equal scores keep ascending column
//! order), drop the first ranked entry, take `k`. The dropped entry is
//! assumed to be the query itself — its self-score is expected to be the
//! row maximum — but this is not verified: a row whose maximum sits on a
//! different column leaks the query position into the result while the
//! actual top neighbor is dropped. That behavior is intentional and pinned
//! by a regression test.
//!
//! # Examples
//!
//! ```
//! use simspace::matrix::SimilarityMatrix;
//! use simspace::ranker::rank_neighbors;
//!
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.9, 0.2],
//!     vec![0.9, 1.0, 0.3],
//!     vec![0.2, 0.3, 1.0],
//! ]).unwrap();
//!
//! let ranked = rank_neighbors(&matrix, 0, 2).unwrap();
//! let positions: Vec<usize> = ranked.iter().map(|&(p, _)| p).collect();
//! assert_eq!(positions, vec![1, 2]);
//! ```

use log::trace;
use rayon::prelude::*;

use crate::error::{Result, SimspaceError};
use crate::matrix::SimilarityMatrix;

/// Ranks the neighbors of the item at `query`, best first.
///
/// Returns at most `k` `(position, score)` pairs with non-increasing
/// scores; fewer than `k` when the matrix holds fewer than `k + 1` items.
/// `k = 0` returns an empty vector.
///
/// # Errors
///
/// `SimspaceError::PositionOutOfRange` when `query` is not a valid row.
///
/// # Panics
///
/// Panics if the row contains NaN scores.
pub fn rank_neighbors(
    matrix: &SimilarityMatrix,
    query: usize,
    k: usize,
) -> Result<Vec<(usize, f64)>> {
    let nitems = matrix.nitems();
    if query >= nitems {
        return Err(SimspaceError::PositionOutOfRange { position: query, len: nitems });
    }

    let mut scored: Vec<(usize, f64)> =
        matrix.row(query).into_iter().enumerate().collect();

    // stable sort: equal scores keep ascending column order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    trace!(
        "ranked {} candidates for query {}, taking {} after self-skip",
        scored.len(),
        query,
        k.min(nitems.saturating_sub(1))
    );

    // the first ranked entry is assumed to be the query itself and is
    // dropped unconditionally
    Ok(scored.into_iter().skip(1).take(k).collect())
}

/// Ranks many query positions concurrently.
///
/// Per-query semantics are identical to [`rank_neighbors`]; the output
/// order matches the input order. Fails when any position is invalid.
pub fn rank_neighbors_batch(
    matrix: &SimilarityMatrix,
    queries: &[usize],
    k: usize,
) -> Result<Vec<Vec<(usize, f64)>>> {
    queries
        .par_iter()
        .map(|&query| rank_neighbors(matrix, query, k))
        .collect()
}
