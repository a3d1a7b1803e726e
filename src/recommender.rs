//! Recommender: title-level orchestration over catalog + matrix.
//!
//! Composes the two leaf components: a title is resolved to its position
//! through the catalog, the ranker produces the top-K neighbor positions,
//! and those are mapped back to titles. A missing title is an expected
//! runtime event and yields an empty result instead of an error; a
//! position that cannot be mapped back is an integrity defect and fails
//! the request.
//!
//! # Examples
//!
//! ```
//! use simspace::catalog::Catalog;
//! use simspace::matrix::SimilarityMatrix;
//! use simspace::recommender::RecommenderBuilder;
//!
//! let catalog = Catalog::from_titles(vec!["A".into(), "B".into(), "C".into()]);
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.9, 0.2],
//!     vec![0.9, 1.0, 0.3],
//!     vec![0.2, 0.3, 1.0],
//! ]).unwrap();
//!
//! let recommender = RecommenderBuilder::new()
//!     .with_top_k(2)
//!     .build(catalog, matrix)
//!     .unwrap();
//!
//! assert_eq!(recommender.recommend_by_title("A").unwrap(), vec!["B", "C"]);
//! assert!(recommender.recommend_by_title("missing").unwrap().is_empty());
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Result, SimspaceError};
use crate::matrix::SimilarityMatrix;
use crate::ranker;

/// Neighbors returned per title query when not overridden.
pub const DEFAULT_TOP_K: usize = 5;

/// Tunable recommendation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommenderParams {
    /// Neighbors returned by `recommend_by_title`.
    pub top_k: usize,
}

impl Default for RecommenderParams {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

/// Builder for [`Recommender`].
///
/// Validates that the catalog and the matrix agree on the item count
/// before handing out a recommender; afterwards every catalog position is
/// a valid matrix row and vice versa.
pub struct RecommenderBuilder {
    params: RecommenderParams,
}

impl Default for RecommenderBuilder {
    fn default() -> Self {
        debug!("Creating RecommenderBuilder with default parameters");
        Self { params: RecommenderParams::default() }
    }
}

impl RecommenderBuilder {
    pub fn new() -> Self {
        info!("Initializing new RecommenderBuilder");
        Self::default()
    }

    /// Number of neighbors returned per title query (default 5).
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        info!("Setting top_k: {}", top_k);
        self.params.top_k = top_k;
        self
    }

    /// Builds the recommender from an externally loaded, immutable pair.
    ///
    /// # Errors
    ///
    /// `SimspaceError::DataCorrupt` when the catalog length and the matrix
    /// dimension disagree; the pair is rejected whole, nothing is
    /// partially initialized.
    pub fn build(
        self,
        catalog: Catalog,
        matrix: SimilarityMatrix,
    ) -> Result<Recommender> {
        info!(
            "Building Recommender over {} catalog items, top_k={}",
            catalog.len(),
            self.params.top_k
        );

        if catalog.len() != matrix.nitems() {
            return Err(SimspaceError::DataCorrupt {
                message: format!(
                    "catalog has {} titles but similarity matrix is {n}x{n}",
                    catalog.len(),
                    n = matrix.nitems()
                ),
            });
        }
        debug!("Catalog and matrix agree on {} items", catalog.len());

        Ok(Recommender { catalog, matrix, params: self.params })
    }
}

/// Read-only query engine over a validated catalog/matrix pair.
///
/// Holds no mutable state between calls; a shared reference can serve
/// concurrent queries without locking.
#[derive(Clone, Debug)]
pub struct Recommender {
    catalog: Catalog,
    matrix: SimilarityMatrix,
    params: RecommenderParams,
}

impl Recommender {
    /// The catalog backing this recommender.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active parameters.
    #[inline]
    pub fn params(&self) -> &RecommenderParams {
        &self.params
    }

    /// Positional entry point: ranked `(position, score)` neighbors of the
    /// item at `position`.
    ///
    /// # Errors
    ///
    /// `SimspaceError::PositionOutOfRange` when `position` is not a valid
    /// matrix row.
    pub fn recommend(&self, position: usize, k: usize) -> Result<Vec<(usize, f64)>> {
        ranker::rank_neighbors(&self.matrix, position, k)
    }

    /// Top-`top_k` neighbor titles of the item carrying `title`.
    ///
    /// An unknown title returns an empty vector — a user-facing lookup is
    /// expected to miss — while integrity failures deeper in the stack
    /// propagate as errors.
    pub fn recommend_by_title(&self, title: &str) -> Result<Vec<String>> {
        let position = match self.catalog.index_of(title) {
            Ok(position) => position,
            Err(SimspaceError::TitleNotFound { .. }) => {
                warn!("Title not in catalog: {:?}", title);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };
        debug!("Resolved {:?} to position {}", title, position);

        let ranked = ranker::rank_neighbors(&self.matrix, position, self.params.top_k)?;
        ranked
            .into_iter()
            .map(|(position, _)| self.catalog.title_at(position).map(str::to_string))
            .collect()
    }
}
