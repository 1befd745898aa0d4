//! Core types for playback management

use encore_core::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One playable item
///
/// Resolved from the catalog when a source is loaded, so playback never has
/// to reach back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Catalog track this item plays (`None` for podcast episodes)
    pub track: Option<TrackId>,

    /// Display name
    pub title: String,

    /// Full length
    pub duration: Duration,
}

impl QueueItem {
    /// Item backed by a catalog track
    pub fn track(id: TrackId, title: impl Into<String>, duration: Duration) -> Self {
        Self {
            track: Some(id),
            title: title.into(),
            duration,
        }
    }

    /// Podcast episode
    pub fn episode(title: impl Into<String>, duration: Duration) -> Self {
        Self {
            track: None,
            title: title.into(),
            duration,
        }
    }
}

/// What a load request asks the engine to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackContent {
    /// One track on its own
    Single(QueueItem),

    /// A playlist, in playlist order
    Playlist { name: String, items: Vec<QueueItem> },

    /// A podcast, resumable through bookmarks keyed by `name`
    Podcast { name: String, items: Vec<QueueItem> },
}

impl PlaybackContent {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Single(_) => SourceKind::SingleTrack,
            Self::Playlist { .. } => SourceKind::Playlist,
            Self::Podcast { .. } => SourceKind::Podcast,
        }
    }
}

/// Category of the loaded source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    SingleTrack,
    Playlist,
    Podcast,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SingleTrack => "song",
            Self::Playlist => "playlist",
            Self::Podcast => "podcast",
        })
    }
}

/// Repeat mode
///
/// Single tracks cycle Off → Once → Infinite, collections cycle
/// Off → All → Current Song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the source runs out
    #[default]
    #[serde(rename = "No Repeat")]
    NoRepeat,

    /// Replay the track one more time, then fall back to `NoRepeat`
    #[serde(rename = "Repeat Once")]
    RepeatOnce,

    /// Loop the whole collection
    #[serde(rename = "Repeat All")]
    RepeatAll,

    /// Loop the single track forever
    #[serde(rename = "Repeat Infinite")]
    RepeatInfinite,

    /// Loop the current item of a collection
    #[serde(rename = "Repeat Current Song")]
    RepeatCurrentSong,
}

impl RepeatMode {
    /// Next mode in the cycle for a source of `kind`
    pub fn cycled(self, kind: SourceKind) -> Self {
        match self {
            Self::NoRepeat => match kind {
                SourceKind::SingleTrack => Self::RepeatOnce,
                SourceKind::Playlist | SourceKind::Podcast => Self::RepeatAll,
            },
            Self::RepeatOnce => Self::RepeatInfinite,
            Self::RepeatAll => Self::RepeatCurrentSong,
            Self::RepeatInfinite | Self::RepeatCurrentSong => Self::NoRepeat,
        }
    }

    /// Whether advancing restarts the current item instead of moving on
    pub fn restarts_current(self) -> bool {
        matches!(
            self,
            Self::RepeatOnce | Self::RepeatInfinite | Self::RepeatCurrentSong
        )
    }

    /// Lower-case label used in user messages ("repeat all")
    pub fn label(self) -> &'static str {
        match self {
            Self::NoRepeat => "no repeat",
            Self::RepeatOnce => "repeat once",
            Self::RepeatAll => "repeat all",
            Self::RepeatInfinite => "repeat infinite",
            Self::RepeatCurrentSong => "repeat current song",
        }
    }
}

/// Snapshot of the engine for status output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStats {
    /// Current item name, empty when idle
    pub name: String,

    /// Seconds left on the current item
    pub remained_time: u64,

    pub repeat: RepeatMode,

    pub shuffle: bool,

    pub paused: bool,
}

/// Configuration for the playback engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Podcast forward/backward step (default: 90s)
    pub skip_step: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_step: Duration::from_secs(90),
        }
    }
}
