//! Encore Core
//!
//! Catalog types, match predicates, and error handling shared by every Encore
//! crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Episode`, `Playlist`, `Podcast`, `Artist`, `Album`, `Event`
//! - **Handles**: `TrackId`, `PlaylistId`, `PodcastId`, `ArtistId`, `AlbumId` (stable indices into the catalog tables)
//! - **Library entries**: `LibraryEntry`, a tagged union with an explicit predicate table
//! - **Catalog**: the explicitly owned store that search and accounts borrow from
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use encore_core::{Catalog, EntryKind, Predicate, Track};
//! use std::time::Duration;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_track(Track::new("Bar", Duration::from_secs(200)).with_genre("pop"));
//! catalog.add_track(Track::new("Baz", Duration::from_secs(180)).with_genre("rock"));
//!
//! let pop: Vec<_> = catalog
//!     .entries(EntryKind::Track)
//!     .into_iter()
//!     .filter(|entry| entry.matches(&Predicate::Genre("POP".into())))
//!     .collect();
//!
//! assert_eq!(pop.len(), 1);
//! assert_eq!(pop[0].name(), "Bar");
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod entry;
pub mod error;
pub mod query;
pub mod types;

pub use catalog::Catalog;
pub use entry::{EntryKind, EntryRef, LibraryEntry, Predicate};
pub use error::{CoreError, Result};
pub use query::Comparison;
pub use types::{
    Album, AlbumId, Artist, ArtistId, Episode, Event, Playlist, PlaylistId, Podcast, PodcastId,
    Track, TrackId, Visibility,
};
