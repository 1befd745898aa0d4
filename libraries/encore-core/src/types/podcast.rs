/// Podcast domain types
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Podcast episode, owned by its podcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub name: String,
    pub duration: Duration,
    pub description: String,
}

impl Episode {
    pub fn new(name: impl Into<String>, duration: Duration, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration,
            description: description.into(),
        }
    }
}

/// Podcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    /// Podcast name, also the bookmark key
    pub name: String,

    /// Owner username
    pub owner: String,

    /// Episodes in playback order
    pub episodes: Vec<Episode>,
}

impl Podcast {
    pub fn new(name: impl Into<String>, owner: impl Into<String>, episodes: Vec<Episode>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            episodes,
        }
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}
