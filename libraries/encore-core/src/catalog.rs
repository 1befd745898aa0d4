//! Explicitly owned catalog of tracks, playlists, podcasts and artist pages
//!
//! Search and accounts borrow the catalog as a parameter instead of reaching
//! for a process-wide registry, so tests can fabricate their own.
//!
//! Playlists are listed grouped by owner, owners in registration order
//! (see [`Catalog::register_owner`]), each owner's playlists in creation
//! order. Playlists of owners never registered follow, in creation order.

use crate::entry::{EntryKind, EntryRef, LibraryEntry};
use crate::error::{CoreError, Result};
use crate::types::{
    Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Podcast, PodcastId, Track, TrackId,
};
use std::cmp::Reverse;
use tracing::debug;

/// Catalog tables
///
/// Entities are append-only; handles returned by the `add_*` methods stay
/// valid for the catalog's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    podcasts: Vec<Podcast>,
    artists: Vec<Artist>,
    albums: Vec<Album>,

    /// Playlist owners in registration order
    owners: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Tracks =====

    pub fn add_track(&mut self, track: Track) -> TrackId {
        self.tracks.push(track);
        TrackId::new(self.tracks.len() - 1)
    }

    pub fn track(&self, id: TrackId) -> Result<&Track> {
        self.tracks
            .get(id.index())
            .ok_or(CoreError::TrackNotFound(id))
    }

    pub fn track_mut(&mut self, id: TrackId) -> Result<&mut Track> {
        self.tracks
            .get_mut(id.index())
            .ok_or(CoreError::TrackNotFound(id))
    }

    pub fn tracks(&self) -> impl Iterator<Item = (TrackId, &Track)> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, track)| (TrackId::new(i), track))
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    // ===== Playlists =====

    pub fn add_playlist(&mut self, playlist: Playlist) -> PlaylistId {
        debug!("Adding playlist {:?} owned by {}", playlist.name, playlist.owner);
        self.playlists.push(playlist);
        PlaylistId::new(self.playlists.len() - 1)
    }

    pub fn playlist(&self, id: PlaylistId) -> Result<&Playlist> {
        self.playlists
            .get(id.index())
            .ok_or(CoreError::PlaylistNotFound(id))
    }

    pub fn playlist_mut(&mut self, id: PlaylistId) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(id.index())
            .ok_or(CoreError::PlaylistNotFound(id))
    }

    /// Playlists in listing order
    pub fn playlists(&self) -> impl Iterator<Item = (PlaylistId, &Playlist)> {
        let mut listed: Vec<(PlaylistId, &Playlist)> = self
            .playlists
            .iter()
            .enumerate()
            .map(|(i, playlist)| (PlaylistId::new(i), playlist))
            .collect();
        listed.sort_by_key(|(_, playlist)| self.owner_rank(&playlist.owner));
        listed.into_iter()
    }

    /// Record `owner` as the next owner in listing order
    ///
    /// Registering an owner twice keeps the first position.
    pub fn register_owner(&mut self, owner: impl Into<String>) {
        let owner = owner.into();
        if !self.owners.contains(&owner) {
            self.owners.push(owner);
        }
    }

    fn owner_rank(&self, owner: &str) -> usize {
        self.owners
            .iter()
            .position(|registered| registered == owner)
            .unwrap_or(self.owners.len())
    }

    /// Resolve a playlist's handles to catalog tracks, in playlist order
    pub fn playlist_tracks(&self, id: PlaylistId) -> Result<Vec<(TrackId, &Track)>> {
        self.playlist(id)?
            .tracks
            .iter()
            .map(|&track_id| self.track(track_id).map(|track| (track_id, track)))
            .collect()
    }

    // ===== Podcasts =====

    pub fn add_podcast(&mut self, podcast: Podcast) -> PodcastId {
        self.podcasts.push(podcast);
        PodcastId::new(self.podcasts.len() - 1)
    }

    pub fn podcast(&self, id: PodcastId) -> Result<&Podcast> {
        self.podcasts
            .get(id.index())
            .ok_or(CoreError::PodcastNotFound(id))
    }

    pub fn podcasts(&self) -> impl Iterator<Item = (PodcastId, &Podcast)> {
        self.podcasts
            .iter()
            .enumerate()
            .map(|(i, podcast)| (PodcastId::new(i), podcast))
    }

    pub fn podcast_count(&self) -> usize {
        self.podcasts.len()
    }

    // ===== Artists =====

    pub fn add_artist(&mut self, artist: Artist) -> ArtistId {
        debug!("Adding artist page {:?}", artist.name);
        self.artists.push(artist);
        ArtistId::new(self.artists.len() - 1)
    }

    pub fn artist(&self, id: ArtistId) -> Result<&Artist> {
        self.artists
            .get(id.index())
            .ok_or(CoreError::ArtistNotFound(id))
    }

    pub fn artist_mut(&mut self, id: ArtistId) -> Result<&mut Artist> {
        self.artists
            .get_mut(id.index())
            .ok_or(CoreError::ArtistNotFound(id))
    }

    pub fn artists(&self) -> impl Iterator<Item = (ArtistId, &Artist)> {
        self.artists
            .iter()
            .enumerate()
            .map(|(i, artist)| (ArtistId::new(i), artist))
    }

    // ===== Albums =====

    /// Release `album` on `artist`'s page
    ///
    /// `tracks` are appended to the track table, so they are searchable and
    /// likeable like any library song.
    pub fn add_album(
        &mut self,
        artist: ArtistId,
        mut album: Album,
        tracks: Vec<Track>,
    ) -> Result<AlbumId> {
        self.artist(artist)?;

        album.tracks = tracks.into_iter().map(|track| self.add_track(track)).collect();
        debug!(
            "Adding album {:?} by {} with {} tracks",
            album.name,
            album.owner,
            album.tracks.len()
        );
        self.albums.push(album);
        let id = AlbumId::new(self.albums.len() - 1);
        self.artist_mut(artist)?.albums.push(id);
        Ok(id)
    }

    pub fn album(&self, id: AlbumId) -> Result<&Album> {
        self.albums
            .get(id.index())
            .ok_or(CoreError::AlbumNotFound(id))
    }

    /// An artist's albums in release order
    pub fn artist_albums(&self, artist: ArtistId) -> Result<Vec<&Album>> {
        self.artist(artist)?
            .albums
            .iter()
            .map(|&id| self.album(id))
            .collect()
    }

    /// Resolve an album's handles to catalog tracks, in album order
    pub fn album_tracks(&self, id: AlbumId) -> Result<Vec<(TrackId, &Track)>> {
        self.album(id)?
            .tracks
            .iter()
            .map(|&track_id| self.track(track_id).map(|track| (track_id, track)))
            .collect()
    }

    // ===== Entries =====

    /// Borrow one entry by handle
    pub fn entry(&self, handle: EntryRef) -> Result<LibraryEntry<'_>> {
        Ok(match handle {
            EntryRef::Track(id) => LibraryEntry::Track { id, track: self.track(id)? },
            EntryRef::Playlist(id) => LibraryEntry::Playlist { id, playlist: self.playlist(id)? },
            EntryRef::Podcast(id) => LibraryEntry::Podcast { id, podcast: self.podcast(id)? },
            EntryRef::Artist(id) => LibraryEntry::Artist { id, artist: self.artist(id)? },
        })
    }

    /// Snapshot of every entry of one kind, in listing order
    pub fn entries(&self, kind: EntryKind) -> Vec<LibraryEntry<'_>> {
        match kind {
            EntryKind::Track => self
                .tracks()
                .map(|(id, track)| LibraryEntry::Track { id, track })
                .collect(),
            EntryKind::Playlist => self
                .playlists()
                .map(|(id, playlist)| LibraryEntry::Playlist { id, playlist })
                .collect(),
            EntryKind::Podcast => self
                .podcasts()
                .map(|(id, podcast)| LibraryEntry::Podcast { id, podcast })
                .collect(),
            EntryKind::Artist => self
                .artists()
                .map(|(id, artist)| LibraryEntry::Artist { id, artist })
                .collect(),
        }
    }

    // ===== Statistics =====

    /// Most liked track names; ties keep catalog order
    pub fn top_tracks(&self, limit: usize) -> Vec<String> {
        let mut ranked: Vec<&Track> = self.tracks.iter().collect();
        ranked.sort_by_key(|track| Reverse(track.likes));
        ranked
            .into_iter()
            .take(limit)
            .map(|track| track.name.clone())
            .collect()
    }

    /// Most followed playlist names; ties go to the older playlist, then listing order
    pub fn top_playlists(&self, limit: usize) -> Vec<String> {
        let mut ranked: Vec<&Playlist> = self.playlists().map(|(_, playlist)| playlist).collect();
        ranked.sort_by_key(|playlist| (Reverse(playlist.followers), playlist.created_at));
        ranked
            .into_iter()
            .take(limit)
            .map(|playlist| playlist.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Episode;
    use std::time::Duration;

    fn catalog_with_tracks(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for name in names {
            catalog.add_track(Track::new(*name, Duration::from_secs(100)));
        }
        catalog
    }

    #[test]
    fn handles_address_their_tables() {
        let mut catalog = catalog_with_tracks(&["A", "B"]);
        let podcast = catalog.add_podcast(Podcast::new(
            "Show",
            "host",
            vec![Episode::new("Ep", Duration::from_secs(5), "")],
        ));

        assert_eq!(catalog.track(TrackId::new(1)).unwrap().name, "B");
        assert_eq!(catalog.podcast(podcast).unwrap().name, "Show");
        assert_eq!(
            catalog.track(TrackId::new(9)),
            Err(CoreError::TrackNotFound(TrackId::new(9)))
        );
    }

    #[test]
    fn playlist_tracks_resolve_in_order() {
        let mut catalog = catalog_with_tracks(&["A", "B", "C"]);
        let mut playlist = Playlist::new("Mix", "alice", 0);
        playlist.add_track(TrackId::new(2));
        playlist.add_track(TrackId::new(0));
        let id = catalog.add_playlist(playlist);

        let names: Vec<&str> = catalog
            .playlist_tracks(id)
            .unwrap()
            .into_iter()
            .map(|(_, track)| track.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn likes_land_on_the_canonical_track() {
        let mut catalog = catalog_with_tracks(&["A"]);
        let mut first = Playlist::new("One", "alice", 0);
        first.add_track(TrackId::new(0));
        let mut second = Playlist::new("Two", "bob", 1);
        second.add_track(TrackId::new(0));
        let first = catalog.add_playlist(first);
        let second = catalog.add_playlist(second);

        catalog.track_mut(TrackId::new(0)).unwrap().like();

        assert_eq!(catalog.playlist_tracks(first).unwrap()[0].1.likes, 1);
        assert_eq!(catalog.playlist_tracks(second).unwrap()[0].1.likes, 1);
    }

    #[test]
    fn top_tracks_by_likes_with_stable_ties() {
        let mut catalog = catalog_with_tracks(&["A", "B", "C", "D", "E", "F"]);
        catalog.track_mut(TrackId::new(3)).unwrap().like();
        catalog.track_mut(TrackId::new(3)).unwrap().like();
        catalog.track_mut(TrackId::new(5)).unwrap().like();

        assert_eq!(catalog.top_tracks(5), vec!["D", "F", "A", "B", "C"]);
    }

    #[test]
    fn top_playlists_break_ties_by_age() {
        let mut catalog = Catalog::new();
        let newer = catalog.add_playlist(Playlist::new("Newer", "a", 20));
        catalog.add_playlist(Playlist::new("Older", "b", 10));
        let popular = catalog.add_playlist(Playlist::new("Popular", "c", 30));
        catalog.playlist_mut(popular).unwrap().follow();
        catalog.playlist_mut(newer).unwrap().follow();
        catalog.playlist_mut(popular).unwrap().follow();

        assert_eq!(catalog.top_playlists(5), vec!["Popular", "Newer", "Older"]);
    }

    #[test]
    fn playlists_list_by_owner_registration() {
        let mut catalog = Catalog::new();
        catalog.register_owner("alice");
        catalog.register_owner("bob");
        catalog.add_playlist(Playlist::new("Bob 1", "bob", 1));
        catalog.add_playlist(Playlist::new("Alice 1", "alice", 2));
        catalog.add_playlist(Playlist::new("Stray", "carol", 3));
        catalog.add_playlist(Playlist::new("Bob 2", "bob", 4));
        catalog.register_owner("alice");

        let names: Vec<&str> = catalog
            .entries(EntryKind::Playlist)
            .iter()
            .map(LibraryEntry::name)
            .collect();
        assert_eq!(names, vec!["Alice 1", "Bob 1", "Bob 2", "Stray"]);
    }

    #[test]
    fn playlists_created_together_rank_by_owner() {
        let mut catalog = Catalog::new();
        catalog.register_owner("alice");
        catalog.register_owner("bob");
        catalog.add_playlist(Playlist::new("Bob list", "bob", 5));
        catalog.add_playlist(Playlist::new("Alice list", "alice", 5));

        assert_eq!(catalog.top_playlists(5), vec!["Alice list", "Bob list"]);
    }

    #[test]
    fn album_tracks_join_the_track_table() {
        let mut catalog = catalog_with_tracks(&["A"]);
        let artist = catalog.add_artist(Artist::new("Queen"));
        let album = catalog
            .add_album(
                artist,
                Album::new("Innuendo", "Queen").with_release_year(1991),
                vec![
                    Track::new("Innuendo", Duration::from_secs(391)),
                    Track::new("The Show Must Go On", Duration::from_secs(263)),
                ],
            )
            .unwrap();

        assert_eq!(catalog.track_count(), 3);
        let names: Vec<&str> = catalog
            .album_tracks(album)
            .unwrap()
            .into_iter()
            .map(|(_, track)| track.name.as_str())
            .collect();
        assert_eq!(names, vec!["Innuendo", "The Show Must Go On"]);
        assert_eq!(catalog.artist_albums(artist).unwrap()[0].name, "Innuendo");
        assert_eq!(catalog.entries(EntryKind::Artist)[0].name(), "Queen");
    }

    #[test]
    fn album_for_unknown_artist_changes_nothing() {
        let mut catalog = Catalog::new();
        let missing = ArtistId::new(3);
        assert_eq!(
            catalog.add_album(
                missing,
                Album::new("Ghost", "nobody"),
                vec![Track::new("Boo", Duration::from_secs(1))],
            ),
            Err(CoreError::ArtistNotFound(missing))
        );
        assert_eq!(catalog.track_count(), 0);
    }

    #[test]
    fn entries_snapshot_preserves_catalog_order() {
        let catalog = catalog_with_tracks(&["X", "Y", "Z"]);
        let names: Vec<&str> = catalog
            .entries(EntryKind::Track)
            .iter()
            .map(LibraryEntry::name)
            .collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
        assert!(catalog.entries(EntryKind::Podcast).is_empty());
    }
}
