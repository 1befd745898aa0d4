//! Playback engine - top-level state machine
//!
//! Owns the loaded source plus the pause, repeat and shuffle state, and the
//! podcast bookmark table that outlives individual loads.

use crate::{
    bookmark::{BookmarkTable, PodcastBookmark},
    error::{PlaybackError, Result},
    source::PlaybackSource,
    types::{PlaybackConfig, PlaybackContent, PlaybackStats, QueueItem, RepeatMode, SourceKind},
};
use std::time::Duration;
use tracing::debug;

/// Central playback state for one user
///
/// Initial state is idle: nothing loaded, paused, `NoRepeat`, shuffle off.
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    config: PlaybackConfig,
    source: Option<PlaybackSource>,
    repeat: RepeatMode,
    shuffle: bool,
    paused: bool,
    bookmarks: BookmarkTable,
}

impl PlaybackEngine {
    /// Create an idle engine
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            source: None,
            repeat: RepeatMode::NoRepeat,
            shuffle: false,
            paused: true,
            bookmarks: BookmarkTable::new(),
        }
    }

    // ===== Loading =====

    /// Replace the loaded source
    ///
    /// An interrupted podcast is bookmarked first, so reloading the podcast
    /// that is playing resumes where it was. The new source starts paused with
    /// repeat and shuffle reset. An empty collection is rejected without
    /// touching any state.
    pub fn load(&mut self, content: PlaybackContent) -> Result<()> {
        if let PlaybackContent::Playlist { name, items } | PlaybackContent::Podcast { name, items } =
            &content
        {
            if items.is_empty() {
                return Err(PlaybackError::EmptyCollection(name.clone()));
            }
        }

        self.bookmark_current();

        let bookmark = match &content {
            PlaybackContent::Podcast { name, .. } => self.bookmarks.get(name),
            PlaybackContent::Single(_) | PlaybackContent::Playlist { .. } => None,
        };
        if let Some(b) = bookmark {
            debug!("Resuming {:?} at episode {} ({:?} left)", b.name, b.index, b.remaining);
        }
        let source = PlaybackSource::new(content, bookmark)?;

        debug!("Loaded {} {:?}", source.kind(), source.current().title);
        self.source = Some(source);
        self.repeat = RepeatMode::NoRepeat;
        self.shuffle = false;
        self.paused = true;
        Ok(())
    }

    /// Unload the source and return to idle
    ///
    /// A podcast is bookmarked before it is dropped.
    pub fn stop(&mut self) {
        self.bookmark_current();
        if self.source.take().is_some() {
            debug!("Playback stopped");
        }
        self.repeat = RepeatMode::NoRepeat;
        self.shuffle = false;
        self.paused = true;
    }

    fn bookmark_current(&mut self) {
        if let Some(bookmark) = self.source.as_ref().and_then(PlaybackSource::bookmark) {
            debug!(
                "Bookmarking {:?} at episode {} ({:?} left)",
                bookmark.name, bookmark.index, bookmark.remaining
            );
            self.bookmarks.save(bookmark);
        }
    }

    // ===== Playback Control =====

    /// Flip between paused and playing; returns the new paused flag
    pub fn toggle_pause(&mut self) -> Result<bool> {
        self.loaded()?;
        self.paused = !self.paused;
        Ok(self.paused)
    }

    /// Toggle shuffle; returns the new shuffle flag
    ///
    /// A seed regenerates the shuffle order whatever the source kind. Only a
    /// playlist actually flips the flag; turning it on aligns the shuffled
    /// position with the current item.
    pub fn toggle_shuffle(&mut self, seed: Option<u64>) -> Result<bool> {
        let source = self.source.as_mut().ok_or(PlaybackError::NoSourceLoaded)?;

        if let Some(seed) = seed {
            debug!("Generating shuffle order with seed {}", seed);
            source.generate_shuffle_order(seed);
        }

        if source.kind() == SourceKind::Playlist {
            self.shuffle = !self.shuffle;
            if self.shuffle {
                source.sync_shuffle_position();
            }
        }

        Ok(self.shuffle)
    }

    /// Advance to the next repeat mode for the loaded kind
    pub fn cycle_repeat(&mut self) -> Result<RepeatMode> {
        let kind = self.loaded()?.kind();
        self.repeat = self.repeat.cycled(kind);
        Ok(self.repeat)
    }

    /// Skip to the next item
    ///
    /// `RepeatOnce` is spent by this call. A source that ran out is stopped.
    pub fn next(&mut self) -> Result<()> {
        let source = self.source.as_mut().ok_or(PlaybackError::NoSourceLoaded)?;
        self.paused = source.advance(self.repeat, self.shuffle);
        let finished = self.paused && source.remaining().is_zero();

        if self.repeat == RepeatMode::RepeatOnce {
            self.repeat = RepeatMode::NoRepeat;
        }
        if finished {
            self.stop();
        }
        Ok(())
    }

    /// Go back to the previous item (or restart the current one) and play
    pub fn previous(&mut self) -> Result<()> {
        let source = self.source.as_mut().ok_or(PlaybackError::NoSourceLoaded)?;
        source.retreat(self.shuffle);
        self.paused = false;
        Ok(())
    }

    /// Jump ahead in a podcast episode by the configured step
    pub fn skip_forward(&mut self) -> Result<()> {
        let step = self.skip_step_secs();
        self.skip_podcast(-step)
    }

    /// Rewind a podcast episode by the configured step
    pub fn skip_backward(&mut self) -> Result<()> {
        let step = self.skip_step_secs();
        self.skip_podcast(step)
    }

    fn skip_step_secs(&self) -> i64 {
        i64::try_from(self.config.skip_step.as_secs()).unwrap_or(i64::MAX)
    }

    fn skip_podcast(&mut self, delta_secs: i64) -> Result<()> {
        let source = self.source.as_mut().ok_or(PlaybackError::NoSourceLoaded)?;
        if source.kind() != SourceKind::Podcast {
            return Err(PlaybackError::WrongSourceKind {
                expected: SourceKind::Podcast,
                actual: source.kind(),
            });
        }
        source.skip(delta_secs);
        self.paused = false;
        Ok(())
    }

    // ===== Time =====

    /// Let `elapsed` time pass
    ///
    /// Whole items are consumed while the elapsed time covers what is left of
    /// them; the remainder is played into the final item. Running out of items
    /// pauses (and stops) playback and discards the rest of the time.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }

        let mut elapsed = elapsed;
        while let Some(remaining) = self.source.as_ref().map(PlaybackSource::remaining) {
            if elapsed < remaining {
                break;
            }
            elapsed -= remaining;
            if self.next().is_err() || self.paused {
                return;
            }
            // Zero-length items under a repeat mode would never consume time.
            if remaining.is_zero() && self.current_remaining().is_zero() {
                break;
            }
        }

        if let Some(source) = self.source.as_mut() {
            let played = i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX);
            source.skip(-played);
        }
    }

    // ===== Status =====

    /// Snapshot for status output; an engine with nothing loaded is reset first
    pub fn stats(&mut self) -> PlaybackStats {
        let current = self
            .source
            .as_ref()
            .map(|source| (source.current().title.clone(), source.remaining()));

        let (name, remaining) = match current {
            Some(current) => current,
            None => {
                self.stop();
                (String::new(), Duration::ZERO)
            }
        };

        PlaybackStats {
            name,
            remained_time: remaining.as_secs(),
            repeat: self.repeat,
            shuffle: self.shuffle,
            paused: self.paused,
        }
    }

    fn loaded(&self) -> Result<&PlaybackSource> {
        self.source.as_ref().ok_or(PlaybackError::NoSourceLoaded)
    }

    fn current_remaining(&self) -> Duration {
        self.source
            .as_ref()
            .map_or(Duration::ZERO, PlaybackSource::remaining)
    }

    // ===== Getters =====

    pub fn source(&self) -> Option<&PlaybackSource> {
        self.source.as_ref()
    }

    pub fn current_item(&self) -> Option<&QueueItem> {
        self.source.as_ref().map(PlaybackSource::current)
    }

    pub fn source_kind(&self) -> Option<SourceKind> {
        self.source.as_ref().map(PlaybackSource::kind)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn bookmark(&self, podcast: &str) -> Option<&PodcastBookmark> {
        self.bookmarks.get(podcast)
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
