//! Error taxonomy for catalog lookups, ranking, and data loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the simspace crate.
///
/// Lookup misses (`TitleNotFound`) are expected at runtime and are recovered
/// at the recommender boundary. The remaining variants indicate defective
/// input data and fail the current request.
#[derive(Debug, Error)]
pub enum SimspaceError {
    /// No catalog item carries this exact title.
    #[error("title not found in catalog: {title:?}")]
    TitleNotFound {
        /// The title as queried, case preserved.
        title: String,
    },

    /// Position outside `[0, len)`; a catalog/matrix size mismatch upstream.
    #[error("position {position} out of range for {len} items")]
    PositionOutOfRange { position: usize, len: usize },

    /// A data file could not be read at all.
    #[error("data unavailable at {}: {source}", .path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Data was read but failed validation.
    #[error("corrupt data: {message}")]
    DataCorrupt { message: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimspaceError>;
