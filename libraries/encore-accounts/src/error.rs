//! Error types for account operations

use encore_core::CoreError;
use encore_playback::PlaybackError;
use encore_search::SearchError;
use thiserror::Error;

/// Account and registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// No account with this name
    #[error("The username {0} doesn't exist.")]
    UnknownUser(String),

    /// Account name already registered
    #[error("The username {0} is already taken.")]
    UsernameTaken(String),

    /// Selected entry has nothing to play
    #[error("{0} has nothing to play.")]
    NotPlayable(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// Result type for account operations
pub type Result<T> = std::result::Result<T, AccountError>;
