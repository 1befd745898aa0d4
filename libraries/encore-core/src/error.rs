/// Core error types for Encore
use crate::types::{AlbumId, ArtistId, PlaylistId, PodcastId, TrackId};
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Encore
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A comparison query was not `<N`, `>N` or `N`
    #[error("Invalid comparison query: {0:?}")]
    InvalidQuery(String),

    /// Track handle does not address the track table
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist handle does not address the playlist table
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Podcast handle does not address the podcast table
    #[error("Podcast not found: {0}")]
    PodcastNotFound(PodcastId),

    /// Artist handle does not address the artist table
    #[error("Artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// Album handle does not address the album table
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Collection has nothing to play
    #[error("Collection is empty: {0}")]
    EmptyCollection(String),
}

impl CoreError {
    /// Create an invalid query error
    pub fn invalid_query(query: impl Into<String>) -> Self {
        Self::InvalidQuery(query.into())
    }

    /// Create a user not found error
    pub fn user_not_found(name: impl Into<String>) -> Self {
        Self::UserNotFound(name.into())
    }
}
