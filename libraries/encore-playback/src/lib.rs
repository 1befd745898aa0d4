//! Encore - Playback
//!
//! Deterministic, time-driven playback state for one user.
//!
//! This crate provides:
//! - Three source kinds (single track, playlist, podcast)
//! - Repeat modes whose cycle depends on the source kind
//! - Seeded shuffle orders (same seed, same order)
//! - Podcast bookmarks that survive switching to another source
//! - Podcast forward/backward skips
//! - Simulated time (`tick`) instead of a real audio clock
//!
//! # Architecture
//!
//! Items are resolved from the catalog before they are loaded, so the engine
//! never touches the catalog and only depends on `encore-core` for track
//! handles.
//!
//! # Example: Playing a Playlist
//!
//! ```rust
//! use encore_playback::{PlaybackContent, PlaybackEngine, QueueItem};
//! use std::time::Duration;
//!
//! let mut engine = PlaybackEngine::default();
//! engine
//!     .load(PlaybackContent::Playlist {
//!         name: "Road Trip".to_string(),
//!         items: vec![
//!             QueueItem::episode("Intro", Duration::from_secs(60)),
//!             QueueItem::episode("Main", Duration::from_secs(240)),
//!         ],
//!     })
//!     .unwrap();
//!
//! // Loading leaves the engine paused
//! engine.toggle_pause().unwrap();
//! engine.tick(Duration::from_secs(100));
//!
//! let stats = engine.stats();
//! assert_eq!(stats.name, "Main");
//! assert_eq!(stats.remained_time, 200);
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use encore_playback::{PlaybackContent, PlaybackEngine, QueueItem, RepeatMode};
//! use std::time::Duration;
//!
//! let mut engine = PlaybackEngine::default();
//! let items = (0..5)
//!     .map(|i| QueueItem::episode(format!("Track {}", i), Duration::from_secs(30)))
//!     .collect();
//! engine
//!     .load(PlaybackContent::Playlist { name: "Mix".to_string(), items })
//!     .unwrap();
//!
//! assert_eq!(engine.toggle_shuffle(Some(42)), Ok(true));
//! assert_eq!(engine.cycle_repeat(), Ok(RepeatMode::RepeatAll));
//! ```

mod bookmark;
mod engine;
mod error;
mod shuffle;
mod source;
pub mod types;

// Public exports
pub use bookmark::{BookmarkTable, PodcastBookmark};
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use shuffle::ShuffleOrder;
pub use source::PlaybackSource;
pub use types::{
    PlaybackConfig, PlaybackContent, PlaybackStats, QueueItem, RepeatMode, SourceKind,
};
