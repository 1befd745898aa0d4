//! Encore Search
//!
//! Resolves user queries against the catalog and remembers what was found so a
//! later selection can pick one entry to load.
//!
//! This crate provides:
//! - [`FilterSet`]: the optional criteria of one search
//! - [`filter_entries`]: the ordered predicate pipeline with its hard result cap
//! - [`SelectionSession`]: per-user search/select state
//!
//! # Example
//!
//! ```rust
//! use encore_core::{Catalog, EntryKind, Track};
//! use encore_search::{FilterSet, SelectionSession};
//! use std::time::Duration;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_track(Track::new("Bar", Duration::from_secs(200)).with_genre("pop"));
//! catalog.add_track(Track::new("Baz", Duration::from_secs(180)).with_genre("rock"));
//! catalog.add_track(Track::new("Qux", Duration::from_secs(150)).with_genre("pop"));
//!
//! let mut session = SelectionSession::new("alice");
//! let filters = FilterSet {
//!     name: Some("Ba".into()),
//!     genre: Some("pop".into()),
//!     ..FilterSet::default()
//! };
//!
//! let names = session.search(&catalog, &filters, EntryKind::Track).unwrap();
//! assert_eq!(names, vec!["Bar"]);
//!
//! let picked = session.select(1).unwrap();
//! assert_eq!(picked.name, "Bar");
//! ```

mod error;
mod filter;
mod session;

pub use error::{Result, SearchError};
pub use filter::{filter, filter_entries, FilterSet, MAX_RESULTS};
pub use session::{SearchHit, SelectionSession};
