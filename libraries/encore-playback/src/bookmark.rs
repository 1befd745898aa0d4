//! Podcast bookmarks
//!
//! When a podcast stops being the loaded source its position is saved under
//! the podcast name; loading the same podcast later resumes from there.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Saved podcast position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastBookmark {
    /// Podcast name (lookup key, exact match)
    pub name: String,

    /// Episode index
    pub index: usize,

    /// Time left in that episode
    pub remaining: Duration,
}

/// At most one bookmark per podcast name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkTable {
    bookmarks: Vec<PodcastBookmark>,
}

impl BookmarkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a bookmark, replacing any with the same name
    pub fn save(&mut self, bookmark: PodcastBookmark) {
        self.bookmarks.retain(|existing| existing.name != bookmark.name);
        self.bookmarks.push(bookmark);
    }

    pub fn get(&self, name: &str) -> Option<&PodcastBookmark> {
        self.bookmarks.iter().find(|bookmark| bookmark.name == name)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
