/// Playlist domain types
use super::TrackId;
use serde::{Deserialize, Serialize};

/// Playlist visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Listed for every user
    #[default]
    Public,

    /// Listed for the owner only
    Private,
}

impl Visibility {
    /// The other visibility
    pub fn toggled(self) -> Self {
        match self {
            Self::Public => Self::Private,
            Self::Private => Self::Public,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// User playlist
///
/// Tracks are referenced by handle; the catalog owns the tracks themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name (unique per owner, not globally)
    pub name: String,

    /// Owner username
    pub owner: String,

    /// Track handles in playback order
    pub tracks: Vec<TrackId>,

    /// Visibility
    pub visibility: Visibility,

    /// Number of users following this playlist
    pub followers: u32,

    /// Clock timestamp at which the playlist was created
    pub created_at: i64,
}

impl Playlist {
    /// Create a new empty public playlist
    pub fn new(name: impl Into<String>, owner: impl Into<String>, created_at: i64) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            tracks: Vec::new(),
            visibility: Visibility::Public,
            followers: 0,
            created_at,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track: TrackId) -> bool {
        self.tracks.contains(&track)
    }

    pub fn add_track(&mut self, track: TrackId) {
        self.tracks.push(track);
    }

    /// Remove the first occurrence of `track`; returns whether it was present
    pub fn remove_track(&mut self, track: TrackId) -> bool {
        match self.tracks.iter().position(|&t| t == track) {
            Some(position) => {
                self.tracks.remove(position);
                true
            }
            None => false,
        }
    }

    /// Flip between public and private, returning the new visibility
    pub fn switch_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    pub fn follow(&mut self) {
        self.followers += 1;
    }

    /// Drop a follower (never drops below zero)
    pub fn unfollow(&mut self) {
        self.followers = self.followers.saturating_sub(1);
    }

    /// Public playlists are visible to everyone, private ones to their owner
    pub fn is_visible_to(&self, user: &str) -> bool {
        match self.visibility {
            Visibility::Public => true,
            Visibility::Private => self.owner == user,
        }
    }
}
