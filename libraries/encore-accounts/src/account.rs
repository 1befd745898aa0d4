//! One user of the service
//!
//! An account pairs a playback engine with a search session and keeps the
//! user's own playlists, likes and follows. Artist accounts also own an
//! artist page in the catalog. Every operation answers with the message shown
//! to the user; failures never escape as panics.

use crate::error::{AccountError, Result};
use encore_core::{
    Album, ArtistId, Catalog, EntryKind, EntryRef, Event, PlaylistId, Track, TrackId, Visibility,
};
use encore_playback::{
    PlaybackConfig, PlaybackContent, PlaybackEngine, PlaybackError, PlaybackStats, QueueItem,
    SourceKind,
};
use encore_search::{FilterSet, SearchError, SelectionSession};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// Genres counted by `preferred_genre`, in tie-break order
const KNOWN_GENRES: [&str; 3] = ["pop", "rock", "rap"];

/// Outcome of a search command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub message: String,
    pub results: Vec<String>,
}

/// Owned playlist as listed by `show_playlists`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub name: String,
    pub songs: Vec<String>,
    pub visibility: Visibility,
    pub followers: u32,
}

/// Album as listed by `show_albums`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub name: String,
    pub songs: Vec<String>,
}

/// Kind of account, from the `type` field of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Listener
    #[default]
    User,

    /// Listener with an artist page
    Artist,
}

impl AccountKind {
    /// Read a user record's type; anything but `artist` is a plain user
    pub fn from_type(label: Option<&str>) -> Self {
        match label {
            Some("artist") => Self::Artist,
            _ => Self::User,
        }
    }
}

/// Page an account is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Own likes and follows
    #[default]
    Home,

    /// An artist's albums and events
    Artist(ArtistId),
}

#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    engine: PlaybackEngine,
    session: SelectionSession,
    playlists: Vec<PlaylistId>,
    liked: Vec<TrackId>,
    followed: Vec<PlaylistId>,
    online: bool,

    /// Own artist page, for artist accounts
    artist: Option<ArtistId>,

    page: Page,
}

impl Account {
    /// Create an online account with nothing loaded
    pub fn new(name: impl Into<String>, playback: PlaybackConfig) -> Self {
        let name = name.into();
        Self {
            session: SelectionSession::new(name.clone()),
            name,
            engine: PlaybackEngine::new(playback),
            playlists: Vec::new(),
            liked: Vec::new(),
            followed: Vec::new(),
            online: true,
            artist: None,
            page: Page::Home,
        }
    }

    /// Create an artist account publishing on page `artist`
    pub fn artist(name: impl Into<String>, artist: ArtistId, playback: PlaybackConfig) -> Self {
        Self {
            artist: Some(artist),
            ..Self::new(name, playback)
        }
    }

    // ===== Search =====

    /// Search the catalog, dropping the current selection and playback
    pub fn search(&mut self, catalog: &Catalog, filters: &FilterSet, kind: EntryKind) -> SearchReport {
        if !self.online {
            return SearchReport {
                message: self.offline_message(),
                results: Vec::new(),
            };
        }

        self.session.clear_selection();
        self.engine.stop();

        match self.session.search(catalog, filters, kind) {
            Ok(results) => SearchReport {
                message: format!("Search returned {} results", results.len()),
                results,
            },
            Err(err) => SearchReport {
                message: err.to_string(),
                results: Vec::new(),
            },
        }
    }

    /// Search a type nothing is listed under
    ///
    /// Playback stops and the selection is dropped as for any search; the
    /// next selection is out of range.
    pub fn search_unsupported(&mut self, search_type: &str) -> SearchReport {
        if !self.online {
            return SearchReport {
                message: self.offline_message(),
                results: Vec::new(),
            };
        }

        self.session.clear_selection();
        self.engine.stop();
        self.session.search_unsupported(search_type);
        SearchReport {
            message: "Search returned 0 results".to_string(),
            results: Vec::new(),
        }
    }

    /// Pick a result of the last search (1-based)
    ///
    /// Selecting an artist opens their page instead of arming a load.
    pub fn select(&mut self, index: usize) -> String {
        match self.session.select(index) {
            Ok(hit) => match hit.entry {
                EntryRef::Artist(artist) => {
                    self.session.clear_selection();
                    self.page = Page::Artist(artist);
                    format!("Successfully selected {}'s page.", hit.name)
                }
                _ => format!("Successfully selected {}.", hit.name),
            },
            Err(SearchError::NoPriorSearch) => {
                "Please conduct a search before making a selection.".to_string()
            }
            Err(_) => "The selected ID is too high.".to_string(),
        }
    }

    // ===== Playback =====

    /// Load the selected entry and start playing it
    pub fn load(&mut self, catalog: &Catalog) -> String {
        let Some(hit) = self.session.last_selected() else {
            return "Please select a source before attempting to load.".to_string();
        };

        let content = match resolve(catalog, hit.entry) {
            Ok(content) => content,
            Err(err) => return err.to_string(),
        };

        match self.engine.load(content) {
            Ok(()) => {}
            Err(PlaybackError::EmptyCollection(_)) => {
                return "You can't load an empty audio collection!".to_string()
            }
            Err(err) => return err.to_string(),
        }

        self.session.clear_selection();
        match self.engine.toggle_pause() {
            Ok(_) => "Playback loaded successfully.".to_string(),
            Err(err) => err.to_string(),
        }
    }

    pub fn play_pause(&mut self) -> String {
        match self.engine.toggle_pause() {
            Ok(true) => "Playback paused successfully.".to_string(),
            Ok(false) => "Playback resumed successfully.".to_string(),
            Err(_) => {
                "Please load a source before attempting to pause or resume playback.".to_string()
            }
        }
    }

    pub fn repeat(&mut self) -> String {
        match self.engine.cycle_repeat() {
            Ok(mode) => format!("Repeat mode changed to {}.", mode.label()),
            Err(_) => "Please load a source before setting the repeat status.".to_string(),
        }
    }

    /// Toggle shuffle on a loaded playlist
    pub fn shuffle(&mut self, seed: Option<u64>) -> String {
        match self.engine.source_kind() {
            None => return "Please load a source before using the shuffle function.".to_string(),
            Some(SourceKind::Playlist) => {}
            Some(_) => return "The loaded source is not a playlist.".to_string(),
        }

        match self.engine.toggle_shuffle(seed) {
            Ok(true) => "Shuffle function activated successfully.".to_string(),
            Ok(false) => "Shuffle function deactivated successfully.".to_string(),
            Err(err) => err.to_string(),
        }
    }

    pub fn forward(&mut self) -> String {
        match self.engine.skip_forward() {
            Ok(()) => "Skipped forward successfully.".to_string(),
            Err(PlaybackError::WrongSourceKind { .. }) => {
                "The loaded source is not a podcast.".to_string()
            }
            Err(_) => "Please load a source before attempting to forward.".to_string(),
        }
    }

    pub fn backward(&mut self) -> String {
        match self.engine.skip_backward() {
            Ok(()) => "Rewound successfully.".to_string(),
            Err(PlaybackError::WrongSourceKind { .. }) => {
                "The loaded source is not a podcast.".to_string()
            }
            Err(_) => "Please select a source before rewinding.".to_string(),
        }
    }

    pub fn next(&mut self) -> String {
        const NOTHING_LOADED: &str = "Please load a source before skipping to the next track.";

        if self.engine.next().is_err() {
            return NOTHING_LOADED.to_string();
        }
        match self.engine.current_item() {
            Some(item) => format!(
                "Skipped to next track successfully. The current track is {}.",
                item.title
            ),
            None => NOTHING_LOADED.to_string(),
        }
    }

    pub fn prev(&mut self) -> String {
        if self.engine.previous().is_err() {
            return "Please load a source before returning to the previous track.".to_string();
        }
        let title = self
            .engine
            .current_item()
            .map(|item| item.title.as_str())
            .unwrap_or_default();
        format!(
            "Returned to previous track successfully. The current track is {}.",
            title
        )
    }

    /// Playback snapshot for the status command
    pub fn status(&mut self) -> PlaybackStats {
        self.engine.stats()
    }

    /// Let simulated time pass; offline accounts are frozen
    pub fn advance(&mut self, elapsed: Duration) {
        if self.online {
            self.engine.tick(elapsed);
        }
    }

    // ===== Likes =====

    /// Like or unlike the track that is playing
    pub fn like(&mut self, catalog: &mut Catalog) -> String {
        if !self.online {
            return self.offline_message();
        }

        let Some(kind) = self.engine.source_kind() else {
            return "Please load a source before liking or unliking.".to_string();
        };
        if kind == SourceKind::Podcast {
            return "Loaded source is not a song.".to_string();
        }
        let Some(id) = self.engine.current_item().and_then(|item| item.track) else {
            return "Loaded source is not a song.".to_string();
        };

        match self.toggle_like(catalog, id) {
            Ok(true) => "Like registered successfully.".to_string(),
            Ok(false) => "Unlike registered successfully.".to_string(),
            Err(err) => err.to_string(),
        }
    }

    fn toggle_like(&mut self, catalog: &mut Catalog, id: TrackId) -> Result<bool> {
        let track = catalog.track_mut(id)?;
        if let Some(position) = self.liked.iter().position(|&liked| liked == id) {
            self.liked.remove(position);
            track.dislike();
            debug!("{} unliked {:?}", self.name, track.name);
            Ok(false)
        } else {
            self.liked.push(id);
            track.like();
            debug!("{} liked {:?}", self.name, track.name);
            Ok(true)
        }
    }

    /// Names of liked tracks, oldest like first
    pub fn show_preferred_songs(&self, catalog: &Catalog) -> Vec<String> {
        self.liked
            .iter()
            .filter_map(|&id| catalog.track(id).ok())
            .map(|track| track.name.clone())
            .collect()
    }

    /// Most liked of pop, rock and rap; the genre reaching the top count first wins ties
    pub fn preferred_genre(&self, catalog: &Catalog) -> String {
        let mut counts = [0usize; KNOWN_GENRES.len()];
        let mut best = None;
        let mut best_count = 0;

        for track in self.liked.iter().filter_map(|&id| catalog.track(id).ok()) {
            if let Some(genre) = KNOWN_GENRES.iter().position(|&g| g == track.genre) {
                counts[genre] += 1;
                if counts[genre] > best_count {
                    best_count = counts[genre];
                    best = Some(genre);
                }
            }
        }

        let genre = best.map_or("unknown", |genre| KNOWN_GENRES[genre]);
        format!("This user's preferred genre is {}.", genre)
    }

    // ===== Playlists =====

    /// Create an empty public playlist owned by this account
    pub fn create_playlist(&mut self, catalog: &mut Catalog, name: &str, timestamp: i64) -> String {
        let taken = self
            .owned_playlists(catalog)
            .any(|(_, playlist)| playlist.name == name);
        if taken {
            return "A playlist with the same name already exists.".to_string();
        }

        let id = catalog.add_playlist(encore_core::Playlist::new(name, self.name.clone(), timestamp));
        self.playlists.push(id);
        "Playlist created successfully.".to_string()
    }

    /// Add the playing track to owned playlist `number` (1-based), or remove it
    pub fn add_remove_in_playlist(&mut self, catalog: &mut Catalog, number: usize) -> String {
        let Some(kind) = self.engine.source_kind() else {
            return "Please load a source before adding to or removing from the playlist."
                .to_string();
        };
        if kind == SourceKind::Podcast {
            return "The loaded source is not a song.".to_string();
        }
        let Some(id) = self.owned(number) else {
            return "The specified playlist does not exist.".to_string();
        };
        let Some(track) = self.engine.current_item().and_then(|item| item.track) else {
            return "The loaded source is not a song.".to_string();
        };

        match catalog.playlist_mut(id) {
            Ok(playlist) => {
                if playlist.remove_track(track) {
                    "Successfully removed from playlist.".to_string()
                } else {
                    playlist.add_track(track);
                    "Successfully added to playlist.".to_string()
                }
            }
            Err(err) => err.to_string(),
        }
    }

    /// Flip visibility of owned playlist `number` (1-based)
    pub fn switch_visibility(&mut self, catalog: &mut Catalog, number: usize) -> String {
        let Some(id) = self.owned(number) else {
            return "The specified playlist ID is too high.".to_string();
        };

        match catalog.playlist_mut(id) {
            Ok(playlist) => format!(
                "Visibility status updated successfully to {}.",
                playlist.switch_visibility().as_str()
            ),
            Err(err) => err.to_string(),
        }
    }

    pub fn show_playlists(&self, catalog: &Catalog) -> Vec<PlaylistSummary> {
        self.owned_playlists(catalog)
            .map(|(id, playlist)| PlaylistSummary {
                name: playlist.name.clone(),
                songs: catalog
                    .playlist_tracks(id)
                    .map(|tracks| tracks.into_iter().map(|(_, t)| t.name.clone()).collect())
                    .unwrap_or_default(),
                visibility: playlist.visibility,
                followers: playlist.followers,
            })
            .collect()
    }

    /// Follow or unfollow the selected playlist
    pub fn follow(&mut self, catalog: &mut Catalog) -> String {
        let Some(hit) = self.session.last_selected() else {
            return "Please select a source before following or unfollowing.".to_string();
        };
        let EntryRef::Playlist(id) = hit.entry else {
            return "The selected source is not a playlist.".to_string();
        };

        match self.toggle_follow(catalog, id) {
            Ok(message) => message.to_string(),
            Err(err) => err.to_string(),
        }
    }

    fn toggle_follow(&mut self, catalog: &mut Catalog, id: PlaylistId) -> Result<&'static str> {
        let playlist = catalog.playlist_mut(id)?;
        if playlist.owner == self.name {
            return Ok("You cannot follow or unfollow your own playlist.");
        }

        if let Some(position) = self.followed.iter().position(|&followed| followed == id) {
            self.followed.remove(position);
            playlist.unfollow();
            Ok("Playlist unfollowed successfully.")
        } else {
            self.followed.push(id);
            playlist.follow();
            Ok("Playlist followed successfully.")
        }
    }

    // ===== Artist page =====

    /// Release an album whose songs join the catalog
    pub fn add_album(
        &mut self,
        catalog: &mut Catalog,
        album: Album,
        tracks: Vec<Track>,
    ) -> String {
        let Some(artist) = self.artist else {
            return format!("{} is not an artist.", self.name);
        };

        let taken = catalog
            .artist_albums(artist)
            .map(|albums| albums.iter().any(|existing| existing.name == album.name))
            .unwrap_or(false);
        if taken {
            return format!("{} has another album with the same name.", self.name);
        }

        if has_repeated_names(&tracks) {
            return format!("{} has the same song at least twice in this album.", self.name);
        }

        match catalog.add_album(artist, album, tracks) {
            Ok(_) => format!("{} has added new album successfully.", self.name),
            Err(err) => err.to_string(),
        }
    }

    /// Announce an event on the artist page
    pub fn add_event(&mut self, catalog: &mut Catalog, event: Event) -> String {
        let Some(artist) = self.artist else {
            return format!("{} is not an artist.", self.name);
        };

        match catalog.artist_mut(artist) {
            Ok(page) => {
                if page.add_event(event) {
                    format!("{} has added new event successfully.", self.name)
                } else {
                    format!("{} has another event with the same name.", self.name)
                }
            }
            Err(err) => err.to_string(),
        }
    }

    /// Own albums with their song names; empty for plain users
    pub fn show_albums(&self, catalog: &Catalog) -> Vec<AlbumSummary> {
        let Some(artist) = self.artist else {
            return Vec::new();
        };
        let Ok(page) = catalog.artist(artist) else {
            return Vec::new();
        };

        page.albums
            .iter()
            .filter_map(|&id| {
                let album = catalog.album(id).ok()?;
                let songs = catalog.album_tracks(id).ok()?;
                Some(AlbumSummary {
                    name: album.name.clone(),
                    songs: songs.into_iter().map(|(_, track)| track.name.clone()).collect(),
                })
            })
            .collect()
    }

    /// Render the page this account is looking at
    pub fn print_current_page(&self, catalog: &Catalog) -> String {
        match self.page {
            Page::Home => {
                let liked = self.show_preferred_songs(catalog);
                let followed: Vec<String> = self
                    .followed
                    .iter()
                    .filter_map(|&id| catalog.playlist(id).ok())
                    .map(|playlist| playlist.name.clone())
                    .collect();
                format!(
                    "Liked songs:\n\t{}\n\nFollowed playlists:\n\t{}",
                    bracketed(&liked),
                    bracketed(&followed)
                )
            }
            Page::Artist(artist) => match self.render_artist_page(catalog, artist) {
                Ok(page) => page,
                Err(err) => err.to_string(),
            },
        }
    }

    fn render_artist_page(&self, catalog: &Catalog, artist: ArtistId) -> Result<String> {
        let albums: Vec<String> = catalog
            .artist_albums(artist)?
            .into_iter()
            .map(|album| album.name.clone())
            .collect();
        let events: Vec<String> = catalog
            .artist(artist)?
            .events
            .iter()
            .map(|event| format!("{} - {}:\n\t{}", event.name, event.date, event.description))
            .collect();
        Ok(format!(
            "Albums:\n\t{}\n\nEvents:\n\t{}",
            bracketed(&albums),
            bracketed(&events)
        ))
    }

    fn owned(&self, number: usize) -> Option<PlaylistId> {
        number
            .checked_sub(1)
            .and_then(|index| self.playlists.get(index))
            .copied()
    }

    fn owned_playlists<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (PlaylistId, &'a encore_core::Playlist)> + 'a {
        self.playlists
            .iter()
            .filter_map(|&id| catalog.playlist(id).ok().map(|playlist| (id, playlist)))
    }

    // ===== Connection =====

    /// Go offline or back online
    pub fn switch_connection_status(&mut self) -> String {
        self.online = !self.online;
        debug!("{} is now {}", self.name, if self.online { "online" } else { "offline" });
        format!("{} has changed status successfully.", self.name)
    }

    fn offline_message(&self) -> String {
        format!("{} is offline.", self.name)
    }

    // ===== Getters =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn kind(&self) -> AccountKind {
        if self.artist.is_some() {
            AccountKind::Artist
        } else {
            AccountKind::User
        }
    }

    pub fn artist_page(&self) -> Option<ArtistId> {
        self.artist
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn session(&self) -> &SelectionSession {
        &self.session
    }

    pub fn liked_tracks(&self) -> &[TrackId] {
        &self.liked
    }

    pub fn followed_playlists(&self) -> &[PlaylistId] {
        &self.followed
    }
}

fn has_repeated_names(tracks: &[Track]) -> bool {
    let mut seen = HashSet::new();
    !tracks.iter().all(|track| seen.insert(track.name.as_str()))
}

fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// Resolve a selected entry into playable items
fn resolve(catalog: &Catalog, entry: EntryRef) -> Result<PlaybackContent> {
    Ok(match entry {
        EntryRef::Track(id) => {
            let track = catalog.track(id)?;
            PlaybackContent::Single(QueueItem::track(id, track.name.clone(), track.duration))
        }
        EntryRef::Playlist(id) => PlaybackContent::Playlist {
            name: catalog.playlist(id)?.name.clone(),
            items: catalog
                .playlist_tracks(id)?
                .into_iter()
                .map(|(track_id, track)| QueueItem::track(track_id, track.name.clone(), track.duration))
                .collect(),
        },
        EntryRef::Podcast(id) => {
            let podcast = catalog.podcast(id)?;
            PlaybackContent::Podcast {
                name: podcast.name.clone(),
                items: podcast
                    .episodes
                    .iter()
                    .map(|episode| QueueItem::episode(episode.name.clone(), episode.duration))
                    .collect(),
            }
        }
        EntryRef::Artist(id) => {
            return Err(AccountError::NotPlayable(catalog.artist(id)?.name.clone()));
        }
    })
}
