//! Error types for search and selection

use encore_core::CoreError;
use thiserror::Error;

/// Search errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `select` was called without a search awaiting a selection
    #[error("No prior search to select from")]
    NoPriorSearch,

    /// 1-based selection index outside the last result list
    #[error("Selection {index} out of range ({len} results)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Catalog error (malformed comparison query, stale handle)
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
