/// Handle types for catalog entities
///
/// Handles are stable indices into the catalog tables. Entities are never
/// removed from a table, so a handle stays valid for the catalog's lifetime.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(usize);

impl TrackId {
    /// Create a handle from a table index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the table index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track#{}", self.0)
    }
}

/// Playlist handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(usize);

impl PlaylistId {
    /// Create a handle from a table index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the table index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playlist#{}", self.0)
    }
}

/// Podcast handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PodcastId(usize);

impl PodcastId {
    /// Create a handle from a table index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the table index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PodcastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "podcast#{}", self.0)
    }
}

/// Artist handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(usize);

impl ArtistId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artist#{}", self.0)
    }
}

/// Album handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(usize);

impl AlbumId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "album#{}", self.0)
    }
}
