//! Encore - Accounts
//!
//! Users of the service and the shared state they act on.
//!
//! Each [`Account`] owns one playback engine and one search session; artist
//! accounts also publish albums and events on their catalog page. The
//! [`Registry`] owns the catalog, the accounts and the global clock, and
//! answers the catalog-wide statistics.
//!
//! # Example
//!
//! ```rust
//! use encore_accounts::Registry;
//! use encore_core::{Catalog, EntryKind, Track};
//! use encore_playback::PlaybackConfig;
//! use encore_search::FilterSet;
//! use std::time::Duration;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_track(Track::new("Intro", Duration::from_secs(120)));
//!
//! let mut registry = Registry::new(catalog, PlaybackConfig::default());
//! registry.add_user("alice").unwrap();
//!
//! let message = registry
//!     .with_account("alice", |account, catalog| {
//!         account.search(catalog, &FilterSet::default(), EntryKind::Track);
//!         account.select(1);
//!         account.load(catalog)
//!     })
//!     .unwrap();
//! assert_eq!(message, "Playback loaded successfully.");
//!
//! registry.advance_clock(20);
//! let stats = registry.with_account("alice", |account, _| account.status()).unwrap();
//! assert_eq!(stats.remained_time, 100);
//! ```

mod account;
mod error;
mod registry;

pub use account::{Account, AccountKind, AlbumSummary, Page, PlaylistSummary, SearchReport};
pub use error::{AccountError, Result};
pub use registry::{Registry, TOP_LIMIT};
