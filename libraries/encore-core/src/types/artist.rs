/// Artist domain types
use super::{AlbumId, TrackId};
use serde::{Deserialize, Serialize};

/// Album released by an artist
///
/// The album's songs live in the catalog track table like any other track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,

    /// Releasing artist's username
    pub owner: String,

    pub release_year: i32,
    pub description: String,

    /// Track handles in album order
    pub tracks: Vec<TrackId>,
}

impl Album {
    /// Create an album with no tracks yet
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            release_year: 0,
            description: String::new(),
            tracks: Vec::new(),
        }
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Event announced on an artist page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub description: String,
    /// Date as given by the artist
    pub date: String,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            date: date.into(),
        }
    }
}

/// Artist page: released albums and announced events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist username
    pub name: String,

    /// Albums in release order
    pub albums: Vec<AlbumId>,

    /// Events in announcement order
    pub events: Vec<Event>,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            albums: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Announce `event` unless one with the same name exists
    pub fn add_event(&mut self, event: Event) -> bool {
        if self.events.iter().any(|existing| existing.name == event.name) {
            return false;
        }
        self.events.push(event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_unique_per_artist() {
        let mut artist = Artist::new("Queen");
        assert!(artist.add_event(Event::new("Live Aid", "Wembley", "13-07-1985")));
        assert!(!artist.add_event(Event::new("Live Aid", "again", "14-07-1985")));
        assert_eq!(artist.events.len(), 1);
    }

    #[test]
    fn album_builders() {
        let album = Album::new("Innuendo", "Queen")
            .with_release_year(1991)
            .with_description("last album");
        assert_eq!(album.release_year, 1991);
        assert!(album.is_empty());
    }
}
