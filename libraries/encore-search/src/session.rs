//! Per-user search/select state
//!
//! A search stores its hits and arms the session for exactly one `select`.
//! Whatever the outcome, `select` consumes the hits.

use crate::error::{Result, SearchError};
use crate::filter::{filter_entries, FilterSet};
use encore_core::{Catalog, EntryKind, EntryRef};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One search result: the handle to load plus its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub entry: EntryRef,
    pub name: String,
}

impl SearchHit {
    pub fn kind(&self) -> EntryKind {
        self.entry.kind()
    }
}

/// Search bar state for one user
#[derive(Debug, Clone)]
pub struct SelectionSession {
    /// User the playlist visibility check runs for
    viewer: String,

    /// Hits of the last search, at most `MAX_RESULTS`
    results: Vec<SearchHit>,

    /// Kind searched last
    last_search_type: Option<EntryKind>,

    /// Entry picked by the last successful `select`
    last_selected: Option<SearchHit>,

    /// Set by `search`, cleared by `select`
    awaiting_selection: bool,
}

impl SelectionSession {
    /// Create an idle session for `viewer`
    pub fn new(viewer: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
            results: Vec::new(),
            last_search_type: None,
            last_selected: None,
            awaiting_selection: false,
        }
    }

    /// Run a search and remember its hits
    ///
    /// Returns the names of the hits in result order. On error (malformed
    /// comparison query) the session is left untouched.
    pub fn search(
        &mut self,
        catalog: &Catalog,
        filters: &FilterSet,
        kind: EntryKind,
    ) -> Result<Vec<String>> {
        let predicates = filters.predicates(kind, &self.viewer)?;
        let hits: Vec<SearchHit> = filter_entries(catalog.entries(kind), &predicates)
            .into_iter()
            .map(|entry| SearchHit {
                entry: entry.handle(),
                name: entry.name().to_string(),
            })
            .collect();

        debug!(
            "{} searched {} with {} predicates: {} hits",
            self.viewer,
            kind,
            predicates.len(),
            hits.len()
        );

        let names = hits.iter().map(|hit| hit.name.clone()).collect();
        self.results = hits;
        self.last_search_type = Some(kind);
        self.last_selected = None;
        self.awaiting_selection = true;
        Ok(names)
    }

    /// Record a search of a type nothing is listed under
    ///
    /// The session is armed over an empty result list, so the next `select`
    /// is out of range.
    pub fn search_unsupported(&mut self, search_type: &str) {
        debug!("{} searched unsupported type {:?}", self.viewer, search_type);
        self.results.clear();
        self.last_search_type = None;
        self.last_selected = None;
        self.awaiting_selection = true;
    }

    /// Pick a hit of the last search by 1-based index
    pub fn select(&mut self, index: usize) -> Result<SearchHit> {
        if !self.awaiting_selection {
            return Err(SearchError::NoPriorSearch);
        }
        self.awaiting_selection = false;

        let results = std::mem::take(&mut self.results);
        let len = results.len();
        let hit = index
            .checked_sub(1)
            .and_then(|position| results.into_iter().nth(position))
            .ok_or(SearchError::IndexOutOfRange { index, len })?;

        debug!("{} selected {:?}", self.viewer, hit.name);
        self.last_selected = Some(hit.clone());
        Ok(hit)
    }

    /// Forget the last selection and search type
    pub fn clear_selection(&mut self) {
        self.last_selected = None;
        self.last_search_type = None;
    }

    pub fn last_selected(&self) -> Option<&SearchHit> {
        self.last_selected.as_ref()
    }

    pub fn last_search_type(&self) -> Option<EntryKind> {
        self.last_search_type
    }

    /// Hits still waiting for a selection
    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn is_awaiting_selection(&self) -> bool {
        self.awaiting_selection
    }

    pub fn viewer(&self) -> &str {
        &self.viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_core::{Track, TrackId};
    use std::time::Duration;

    fn abc_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for name in ["A", "B", "C"] {
            catalog.add_track(Track::new(name, Duration::from_secs(60)));
        }
        catalog
    }

    #[test]
    fn select_returns_hit_and_consumes_results() {
        let catalog = abc_catalog();
        let mut session = SelectionSession::new("alice");

        let names = session
            .search(&catalog, &FilterSet::default(), EntryKind::Track)
            .unwrap();
        assert_eq!(names, vec!["A", "B", "C"]);

        let hit = session.select(2).unwrap();
        assert_eq!(hit.name, "B");
        assert_eq!(hit.entry, EntryRef::Track(TrackId::new(1)));
        assert!(session.results().is_empty());
        assert_eq!(session.last_selected(), Some(&hit));

        assert_eq!(session.select(1), Err(SearchError::NoPriorSearch));
    }

    #[test]
    fn select_before_any_search_fails() {
        let mut session = SelectionSession::new("alice");
        assert_eq!(session.select(1), Err(SearchError::NoPriorSearch));
    }

    #[test]
    fn out_of_range_select_clears_results() {
        let catalog = abc_catalog();
        let mut session = SelectionSession::new("alice");
        session
            .search(&catalog, &FilterSet::default(), EntryKind::Track)
            .unwrap();

        assert_eq!(
            session.select(4),
            Err(SearchError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert!(session.results().is_empty());
        assert!(session.last_selected().is_none());
        assert_eq!(session.select(1), Err(SearchError::NoPriorSearch));
    }

    #[test]
    fn index_zero_is_out_of_range() {
        let catalog = abc_catalog();
        let mut session = SelectionSession::new("alice");
        session
            .search(&catalog, &FilterSet::default(), EntryKind::Track)
            .unwrap();

        assert_eq!(
            session.select(0),
            Err(SearchError::IndexOutOfRange { index: 0, len: 3 })
        );
    }

    #[test]
    fn new_search_clears_previous_selection() {
        let catalog = abc_catalog();
        let mut session = SelectionSession::new("alice");
        session
            .search(&catalog, &FilterSet::default(), EntryKind::Track)
            .unwrap();
        session.select(1).unwrap();

        session
            .search(&catalog, &FilterSet::default(), EntryKind::Podcast)
            .unwrap();
        assert!(session.last_selected().is_none());
        assert_eq!(session.last_search_type(), Some(EntryKind::Podcast));
        assert!(session.is_awaiting_selection());
    }

    #[test]
    fn unsupported_search_replaces_pending_results() {
        let catalog = abc_catalog();
        let mut session = SelectionSession::new("alice");
        session
            .search(&catalog, &FilterSet::default(), EntryKind::Track)
            .unwrap();

        session.search_unsupported("album");
        assert!(session.results().is_empty());
        assert!(session.is_awaiting_selection());
        assert_eq!(session.last_search_type(), None);
        assert_eq!(
            session.select(1),
            Err(SearchError::IndexOutOfRange { index: 1, len: 0 })
        );
    }

    #[test]
    fn failed_search_leaves_state_untouched() {
        let catalog = abc_catalog();
        let mut session = SelectionSession::new("alice");
        session
            .search(&catalog, &FilterSet::default(), EntryKind::Track)
            .unwrap();

        let bad = FilterSet {
            release_year: Some("soon".into()),
            ..FilterSet::default()
        };
        assert!(session.search(&catalog, &bad, EntryKind::Track).is_err());
        assert_eq!(session.results().len(), 3);
        assert!(session.is_awaiting_selection());
    }
}
