//! Load catalog and similarity matrix from local text files.
//!
//! File formats:
//! - catalog: one title per line, blank lines ignored;
//! - matrix: one row per line, comma-separated `f64` values.
//!
//! [`load_pair`] is the intended entry point: it returns both halves as an
//! atomic, internally consistent pair or fails before the engine ever sees
//! them. Load once at startup and pass the pair to
//! [`RecommenderBuilder::build`](crate::recommender::RecommenderBuilder::build);
//! the data is immutable afterwards, so there is nothing to cache or
//! invalidate.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Result, SimspaceError};
use crate::matrix::SimilarityMatrix;

/// Loads a catalog file: one title per line.
///
/// # Errors
///
/// `SimspaceError::DataUnavailable` when the file cannot be read;
/// `SimspaceError::DataCorrupt` when it contains no titles.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    info!("Loading catalog from {}", path.display());

    let contents = read_file(path)?;
    let titles: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if titles.is_empty() {
        return Err(SimspaceError::DataCorrupt {
            message: format!("catalog file {} contains no titles", path.display()),
        });
    }

    debug!("Loaded {} titles", titles.len());
    Ok(Catalog::from_titles(titles))
}

/// Loads a similarity matrix file: comma-separated rows.
///
/// # Errors
///
/// `SimspaceError::DataUnavailable` when the file cannot be read;
/// `SimspaceError::DataCorrupt` when a value does not parse or the rows do
/// not form a square matrix. The message names the offending line.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<SimilarityMatrix> {
    let path = path.as_ref();
    info!("Loading similarity matrix from {}", path.display());

    let contents = read_file(path)?;
    let mut rows = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .map(|token| token.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|e| SimspaceError::DataCorrupt {
                message: format!(
                    "{} line {}: {e}: {line:?}",
                    path.display(),
                    lineno + 1
                ),
            })?;
        rows.push(row);
    }

    debug!("Parsed {} matrix rows", rows.len());
    SimilarityMatrix::from_rows(rows)
}

/// Loads catalog and matrix together as a validated pair.
///
/// # Errors
///
/// Everything [`load_catalog`] and [`load_matrix`] raise, plus
/// `SimspaceError::DataCorrupt` when the two halves disagree on the item
/// count.
pub fn load_pair(
    catalog_path: impl AsRef<Path>,
    matrix_path: impl AsRef<Path>,
) -> Result<(Catalog, SimilarityMatrix)> {
    let catalog = load_catalog(catalog_path)?;
    let matrix = load_matrix(matrix_path)?;

    if catalog.len() != matrix.nitems() {
        return Err(SimspaceError::DataCorrupt {
            message: format!(
                "catalog has {} titles but similarity matrix is {n}x{n}",
                catalog.len(),
                n = matrix.nitems()
            ),
        });
    }

    info!("Loaded consistent pair of {} items", catalog.len());
    Ok((catalog, matrix))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SimspaceError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
