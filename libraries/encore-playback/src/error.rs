//! Error types for playback management

use crate::types::SourceKind;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Nothing is loaded
    #[error("No source loaded")]
    NoSourceLoaded,

    /// Action only applies to another kind of source
    #[error("Action requires a {expected} source, but a {actual} is loaded")]
    WrongSourceKind {
        expected: SourceKind,
        actual: SourceKind,
    },

    /// Playlist or podcast with nothing to play
    #[error("Collection is empty: {0}")]
    EmptyCollection(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
