//! What is currently loaded
//!
//! A `PlaybackSource` owns the resolved items of one load together with the
//! position bookkeeping: current index, shuffled position, time left on the
//! current item, and the optional shuffle order.

use crate::bookmark::PodcastBookmark;
use crate::error::{PlaybackError, Result};
use crate::shuffle::ShuffleOrder;
use crate::types::{PlaybackContent, QueueItem, RepeatMode, SourceKind};
use std::time::Duration;

/// Loaded source
///
/// Invariant: `items` is never empty and `index < items.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSource {
    kind: SourceKind,

    /// Playlist or podcast name (`None` for a single track)
    collection: Option<String>,

    items: Vec<QueueItem>,

    /// Position in `items`
    index: usize,

    /// Position in `shuffle_order` (only meaningful while shuffled)
    shuffled_index: usize,

    /// Time left on the current item
    remaining: Duration,

    shuffle_order: Option<ShuffleOrder>,
}

impl PlaybackSource {
    /// Build a source from a load request
    ///
    /// A bookmark restores index and remaining time for podcasts; it is ignored
    /// for other kinds and when it no longer addresses an episode.
    pub fn new(content: PlaybackContent, bookmark: Option<&PodcastBookmark>) -> Result<Self> {
        let kind = content.kind();
        let (collection, items) = match content {
            PlaybackContent::Single(item) => (None, vec![item]),
            PlaybackContent::Playlist { name, items } | PlaybackContent::Podcast { name, items } => {
                if items.is_empty() {
                    return Err(PlaybackError::EmptyCollection(name));
                }
                (Some(name), items)
            }
        };

        let resume = bookmark.filter(|b| kind == SourceKind::Podcast && b.index < items.len());
        let (index, remaining) = match resume {
            Some(b) => (b.index, b.remaining),
            None => (0, items[0].duration),
        };

        Ok(Self {
            kind,
            collection,
            items,
            index,
            shuffled_index: 0,
            remaining,
            shuffle_order: None,
        })
    }

    // ===== Accessors =====

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn collection_name(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    pub fn current(&self) -> &QueueItem {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn shuffled_index(&self) -> usize {
        self.shuffled_index
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn shuffle_order(&self) -> Option<&ShuffleOrder> {
        self.shuffle_order.as_ref()
    }

    /// Bookmark for the current position (podcasts only)
    pub fn bookmark(&self) -> Option<PodcastBookmark> {
        match (self.kind, &self.collection) {
            (SourceKind::Podcast, Some(name)) => Some(PodcastBookmark {
                name: name.clone(),
                index: self.index,
                remaining: self.remaining,
            }),
            _ => None,
        }
    }

    // ===== Navigation =====

    /// Move past the current item
    ///
    /// Returns `true` when the source ran out and playback must pause.
    pub fn advance(&mut self, repeat: RepeatMode, shuffle: bool) -> bool {
        if self.kind == SourceKind::SingleTrack {
            if repeat == RepeatMode::NoRepeat {
                return self.exhaust();
            }
            self.restart();
            return false;
        }

        match repeat {
            RepeatMode::RepeatOnce | RepeatMode::RepeatInfinite | RepeatMode::RepeatCurrentSong => {
                self.restart();
                false
            }
            RepeatMode::NoRepeat => {
                if let Some(len) = self.active_order(shuffle).map(ShuffleOrder::len) {
                    if self.shuffled_index + 1 >= len {
                        return self.exhaust();
                    }
                    let position = self.shuffled_index + 1;
                    self.jump_shuffled(position);
                } else {
                    if self.index + 1 >= self.items.len() {
                        return self.exhaust();
                    }
                    self.jump(self.index + 1);
                }
                false
            }
            RepeatMode::RepeatAll => {
                if let Some(len) = self.active_order(shuffle).map(ShuffleOrder::len) {
                    let position = (self.shuffled_index + 1) % len;
                    self.jump_shuffled(position);
                } else {
                    self.jump((self.index + 1) % self.items.len());
                }
                false
            }
        }
    }

    /// Go back
    ///
    /// An item that has started playing is restarted; only an untouched item
    /// steps back one position, stopping at the first.
    pub fn retreat(&mut self, shuffle: bool) {
        if self.kind == SourceKind::SingleTrack || self.remaining != self.current().duration {
            self.restart();
            return;
        }

        if self.active_order(shuffle).is_some() {
            let position = self.shuffled_index.saturating_sub(1);
            self.jump_shuffled(position);
        } else {
            self.jump(self.index.saturating_sub(1));
        }
    }

    /// Shift the remaining time by `delta_secs`
    ///
    /// A negative delta moves forward in the item (less time left), a positive
    /// one rewinds (more time left). Rewinding past the item's full length
    /// moves on to the next item with nothing left on it; going past the end
    /// clamps to zero.
    pub fn skip(&mut self, delta_secs: i64) {
        let delta = Duration::from_secs(delta_secs.unsigned_abs());
        let shifted = if delta_secs >= 0 {
            self.remaining + delta
        } else {
            self.remaining.saturating_sub(delta)
        };

        if shifted > self.current().duration {
            // The last item has no successor; it simply ends.
            if self.index + 1 < self.items.len() {
                self.index += 1;
            }
            self.remaining = Duration::ZERO;
        } else {
            self.remaining = shifted;
        }
    }

    // ===== Shuffle =====

    /// Replace the shuffle order with the permutation for `seed`
    pub fn generate_shuffle_order(&mut self, seed: u64) {
        self.shuffle_order = Some(ShuffleOrder::generate(self.items.len(), seed));
    }

    /// Point the shuffled position at the current index
    pub fn sync_shuffle_position(&mut self) {
        if let Some(position) = self
            .shuffle_order
            .as_ref()
            .and_then(|order| order.position_of(self.index))
        {
            self.shuffled_index = position;
        }
    }

    // ===== Internal =====

    fn active_order(&self, shuffle: bool) -> Option<&ShuffleOrder> {
        self.shuffle_order
            .as_ref()
            .filter(|order| shuffle && order.len() == self.items.len())
    }

    fn restart(&mut self) {
        self.remaining = self.current().duration;
    }

    fn exhaust(&mut self) -> bool {
        self.remaining = Duration::ZERO;
        true
    }

    fn jump(&mut self, index: usize) {
        self.index = index;
        self.restart();
    }

    fn jump_shuffled(&mut self, position: usize) {
        if let Some(index) = self.shuffle_order.as_ref().and_then(|o| o.get(position)) {
            self.shuffled_index = position;
            self.jump(index);
        }
    }
}
