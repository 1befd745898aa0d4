//! Stateless predicate pipeline
//!
//! Filters apply in a fixed order per entry kind, each narrowing the previous
//! result while preserving catalog order. The surviving list is cut to
//! [`MAX_RESULTS`]; there is no paging.

use crate::error::Result;
use encore_core::{Comparison, EntryKind, LibraryEntry, Predicate};
use serde::{Deserialize, Serialize};

/// Hard cap on search results
pub const MAX_RESULTS: usize = 5;

/// Optional criteria of one search
///
/// Absent fields do not filter. Fields that do not apply to the searched kind
/// (e.g. `genre` for podcasts) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    pub name: Option<String>,
    pub album: Option<String>,
    pub tags: Option<Vec<String>>,
    pub lyrics: Option<String>,
    pub genre: Option<String>,
    /// `<N`, `>N` or `N`
    pub release_year: Option<String>,
    pub artist: Option<String>,
    pub owner: Option<String>,
    /// `<N`, `>N` or `N`
    pub followers: Option<String>,
}

impl FilterSet {
    /// Build the predicate sequence for `kind` in its declared order
    ///
    /// Comparison queries are parsed here, so a malformed one fails before any
    /// entry is inspected. Playlist searches start with the visibility check
    /// for `viewer`.
    pub fn predicates(&self, kind: EntryKind, viewer: &str) -> Result<Vec<Predicate>> {
        let mut predicates = Vec::new();

        match kind {
            EntryKind::Track => {
                push_text(&mut predicates, &self.name, Predicate::Name);
                push_text(&mut predicates, &self.album, Predicate::Album);
                if let Some(tags) = &self.tags {
                    predicates.push(Predicate::Tags(tags.clone()));
                }
                push_text(&mut predicates, &self.lyrics, Predicate::Lyrics);
                push_text(&mut predicates, &self.genre, Predicate::Genre);
                if let Some(year) = &self.release_year {
                    predicates.push(Predicate::ReleaseYear(Comparison::parse(year)?));
                }
                push_text(&mut predicates, &self.artist, Predicate::Artist);
            }
            EntryKind::Playlist => {
                predicates.push(Predicate::VisibleTo(viewer.to_string()));
                push_text(&mut predicates, &self.name, Predicate::Name);
                push_text(&mut predicates, &self.owner, Predicate::Owner);
                if let Some(followers) = &self.followers {
                    predicates.push(Predicate::Followers(Comparison::parse(followers)?));
                }
            }
            EntryKind::Podcast => {
                push_text(&mut predicates, &self.name, Predicate::Name);
                push_text(&mut predicates, &self.owner, Predicate::Owner);
            }
            EntryKind::Artist => {
                push_text(&mut predicates, &self.name, Predicate::Name);
            }
        }

        Ok(predicates)
    }
}

fn push_text(
    predicates: &mut Vec<Predicate>,
    value: &Option<String>,
    make: impl FnOnce(String) -> Predicate,
) {
    if let Some(value) = value {
        predicates.push(make(value.clone()));
    }
}

/// Keep the entries matching one predicate, preserving order
pub fn filter<'a>(entries: Vec<LibraryEntry<'a>>, predicate: &Predicate) -> Vec<LibraryEntry<'a>> {
    entries
        .into_iter()
        .filter(|entry| entry.matches(predicate))
        .collect()
}

/// Apply every predicate in sequence, then cut to [`MAX_RESULTS`]
pub fn filter_entries<'a>(
    entries: Vec<LibraryEntry<'a>>,
    predicates: &[Predicate],
) -> Vec<LibraryEntry<'a>> {
    let mut entries = predicates
        .iter()
        .fold(entries, |remaining, predicate| filter(remaining, predicate));
    entries.truncate(MAX_RESULTS);
    entries
}
