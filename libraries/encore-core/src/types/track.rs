/// Track domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Song in the catalog
///
/// The catalog owns every track; playlists only hold `TrackId` handles, so a
/// like registered through any playlist lands on this single instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub name: String,

    /// Full length of the track
    pub duration: Duration,

    /// Album name
    pub album: String,

    /// Free-form tags (e.g. `#rock`, `#90s`)
    pub tags: Vec<String>,

    /// Lyrics text
    pub lyrics: String,

    /// Genre
    pub genre: String,

    /// Release year
    pub release_year: i32,

    /// Artist name
    pub artist: String,

    /// Number of users that currently like this track
    pub likes: u32,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            album: String::new(),
            tags: Vec::new(),
            lyrics: String::new(),
            genre: String::new(),
            release_year: 0,
            artist: String::new(),
            likes: 0,
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_lyrics(mut self, lyrics: impl Into<String>) -> Self {
        self.lyrics = lyrics.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// Register one more like
    pub fn like(&mut self) {
        self.likes += 1;
    }

    /// Withdraw a like (never drops below zero)
    pub fn dislike(&mut self) {
        self.likes = self.likes.saturating_sub(1);
    }

    /// Every queried tag must be present, ignoring case and order
    pub fn has_all_tags(&self, wanted: &[String]) -> bool {
        wanted.iter().all(|tag| {
            self.tags
                .iter()
                .any(|own| own.to_lowercase() == tag.to_lowercase())
        })
    }
}
