//! Library entries and their match predicates
//!
//! `LibraryEntry` is a borrowed view of one catalog item. Which predicates an
//! entry answers is spelled out per variant in [`LibraryEntry::matches`]; the
//! match is exhaustive so adding a variant forces a decision for every
//! predicate.

use crate::query::Comparison;
use crate::types::{Artist, ArtistId, Playlist, PlaylistId, Podcast, PodcastId, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of catalog item, also the search type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A single song
    #[serde(rename = "song")]
    Track,

    /// A user playlist
    Playlist,

    /// A podcast
    Podcast,

    /// An artist page
    Artist,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Track => "song",
            Self::Playlist => "playlist",
            Self::Podcast => "podcast",
            Self::Artist => "artist",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "song" => Ok(Self::Track),
            "playlist" => Ok(Self::Playlist),
            "podcast" => Ok(Self::Podcast),
            "artist" => Ok(Self::Artist),
            other => Err(crate::CoreError::invalid_query(other)),
        }
    }
}

/// Owned handle to a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryRef {
    Track(TrackId),
    Playlist(PlaylistId),
    Podcast(PodcastId),
    Artist(ArtistId),
}

impl EntryRef {
    pub fn kind(self) -> EntryKind {
        match self {
            Self::Track(_) => EntryKind::Track,
            Self::Playlist(_) => EntryKind::Playlist,
            Self::Podcast(_) => EntryKind::Podcast,
            Self::Artist(_) => EntryKind::Artist,
        }
    }
}

/// One filter criterion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive name prefix
    Name(String),

    /// Case-insensitive album equality
    Album(String),

    /// Every tag present, case-insensitive, any order
    Tags(Vec<String>),

    /// Case-insensitive lyrics substring
    Lyrics(String),

    /// Case-insensitive genre equality
    Genre(String),

    /// Release year comparison
    ReleaseYear(Comparison),

    /// Case-insensitive artist equality
    Artist(String),

    /// Exact owner username
    Owner(String),

    /// Follower count comparison
    Followers(Comparison),

    /// Entry may be listed for this user
    VisibleTo(String),
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Borrowed view of a catalog item
#[derive(Debug, Clone, Copy)]
pub enum LibraryEntry<'a> {
    Track { id: TrackId, track: &'a Track },
    Playlist { id: PlaylistId, playlist: &'a Playlist },
    Podcast { id: PodcastId, podcast: &'a Podcast },
    Artist { id: ArtistId, artist: &'a Artist },
}

impl<'a> LibraryEntry<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Track { track, .. } => &track.name,
            Self::Playlist { playlist, .. } => &playlist.name,
            Self::Podcast { podcast, .. } => &podcast.name,
            Self::Artist { artist, .. } => &artist.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.handle().kind()
    }

    pub fn handle(&self) -> EntryRef {
        match self {
            Self::Track { id, .. } => EntryRef::Track(*id),
            Self::Playlist { id, .. } => EntryRef::Playlist(*id),
            Self::Podcast { id, .. } => EntryRef::Podcast(*id),
            Self::Artist { id, .. } => EntryRef::Artist(*id),
        }
    }

    /// Number of playable items (1 for a track, none for an artist page)
    pub fn len(&self) -> usize {
        match self {
            Self::Track { .. } => 1,
            Self::Playlist { playlist, .. } => playlist.len(),
            Self::Podcast { podcast, .. } => podcast.len(),
            Self::Artist { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate one predicate against this entry
    pub fn matches(&self, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::Name(prefix) => self
                .name()
                .to_lowercase()
                .starts_with(&prefix.to_lowercase()),

            Predicate::Album(album) => match self {
                Self::Track { track, .. } => eq_ignore_case(&track.album, album),
                Self::Playlist { .. } | Self::Podcast { .. } | Self::Artist { .. } => false,
            },

            Predicate::Tags(tags) => match self {
                Self::Track { track, .. } => track.has_all_tags(tags),
                Self::Playlist { .. } | Self::Podcast { .. } | Self::Artist { .. } => false,
            },

            Predicate::Lyrics(fragment) => match self {
                Self::Track { track, .. } => track
                    .lyrics
                    .to_lowercase()
                    .contains(&fragment.to_lowercase()),
                Self::Playlist { .. } | Self::Podcast { .. } | Self::Artist { .. } => false,
            },

            Predicate::Genre(genre) => match self {
                Self::Track { track, .. } => eq_ignore_case(&track.genre, genre),
                Self::Playlist { .. } | Self::Podcast { .. } | Self::Artist { .. } => false,
            },

            Predicate::ReleaseYear(query) => match self {
                Self::Track { track, .. } => query.test(i64::from(track.release_year)),
                Self::Playlist { .. } | Self::Podcast { .. } | Self::Artist { .. } => false,
            },

            Predicate::Artist(artist) => match self {
                Self::Track { track, .. } => eq_ignore_case(&track.artist, artist),
                Self::Playlist { .. } | Self::Podcast { .. } | Self::Artist { .. } => false,
            },

            Predicate::Owner(owner) => match self {
                Self::Track { .. } | Self::Artist { .. } => false,
                Self::Playlist { playlist, .. } => playlist.owner == *owner,
                Self::Podcast { podcast, .. } => podcast.owner == *owner,
            },

            Predicate::Followers(query) => match self {
                Self::Playlist { playlist, .. } => query.test(i64::from(playlist.followers)),
                Self::Track { .. } | Self::Podcast { .. } | Self::Artist { .. } => false,
            },

            // Only playlists carry a visibility; everything else is listed for everyone.
            Predicate::VisibleTo(user) => match self {
                Self::Playlist { playlist, .. } => playlist.is_visible_to(user),
                Self::Track { .. } | Self::Podcast { .. } | Self::Artist { .. } => true,
            },
        }
    }
}
