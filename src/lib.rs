//! simspace: top-K similarity ranking over a precomputed similarity matrix.
//!
//! Given a catalog of titled items and an N×N table of pairwise similarity
//! scores computed offline, simspace answers one question deterministically:
//! which K items are most similar to this one? The crate is split into two
//! leaf components and two layers on top:
//!
//! - [`catalog::Catalog`]: ordered titles with stable 0-based positions,
//!   lookups in both directions.
//! - [`matrix::SimilarityMatrix`]: the dense score table, read one row per
//!   query.
//! - [`ranker`]: the pure ranking function — stable descending sort over a
//!   row, self-entry skipped, top K kept.
//! - [`recommender::Recommender`]: title-in, titles-out orchestration with
//!   builder-based configuration.
//!
//! [`loader`] reads both halves from local text files and hands them over
//! as a validated pair; the engine itself never touches I/O.
//!
//! All query paths are read-only over immutable data: a built
//! [`recommender::Recommender`] can serve concurrent callers without any
//! locking.
//!
//! # Examples
//!
//! ```
//! use simspace::catalog::Catalog;
//! use simspace::matrix::SimilarityMatrix;
//! use simspace::recommender::RecommenderBuilder;
//!
//! let catalog = Catalog::from_titles(vec![
//!     "Solaris".to_string(),
//!     "Stalker".to_string(),
//!     "Mirror".to_string(),
//! ]);
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.8, 0.3],
//!     vec![0.8, 1.0, 0.5],
//!     vec![0.3, 0.5, 1.0],
//! ]).unwrap();
//!
//! let recommender = RecommenderBuilder::new()
//!     .with_top_k(2)
//!     .build(catalog, matrix)
//!     .unwrap();
//!
//! let similar = recommender.recommend_by_title("Solaris").unwrap();
//! assert_eq!(similar, vec!["Stalker", "Mirror"]);
//! ```

pub mod catalog;
pub mod error;
pub mod loader;
pub mod matrix;
pub mod ranker;
pub mod recommender;

#[cfg(test)]
mod tests;
