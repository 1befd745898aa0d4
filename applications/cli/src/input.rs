//! Input documents: the library and the command list

use encore_core::{Catalog, Episode, Podcast, Track};
use encore_search::FilterSet;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Library document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LibraryInput {
    pub songs: Vec<SongInput>,
    pub podcasts: Vec<PodcastInput>,
    pub users: Vec<UserInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SongInput {
    pub name: String,
    /// Seconds
    pub duration: u64,
    pub album: String,
    pub tags: Vec<String>,
    pub lyrics: String,
    pub genre: String,
    pub release_year: i32,
    pub artist: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EpisodeInput {
    pub name: String,
    /// Seconds
    pub duration: u64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PodcastInput {
    pub name: String,
    pub owner: String,
    pub episodes: Vec<EpisodeInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserInput {
    pub username: String,
    pub age: u32,
    pub city: String,
    /// `artist` for artist accounts
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl SongInput {
    pub fn to_track(&self) -> Track {
        Track::new(self.name.clone(), Duration::from_secs(self.duration))
            .with_album(self.album.clone())
            .with_tags(self.tags.iter().cloned())
            .with_lyrics(self.lyrics.clone())
            .with_genre(self.genre.clone())
            .with_release_year(self.release_year)
            .with_artist(self.artist.clone())
    }
}

impl LibraryInput {
    /// Build the catalog; tracks and podcasts keep document order
    pub fn to_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();

        for song in &self.songs {
            catalog.add_track(song.to_track());
        }

        for podcast in &self.podcasts {
            let episodes = podcast
                .episodes
                .iter()
                .map(|episode| {
                    Episode::new(
                        episode.name.clone(),
                        Duration::from_secs(episode.duration),
                        episode.description.clone(),
                    )
                })
                .collect();
            catalog.add_podcast(Podcast::new(podcast.name.clone(), podcast.owner.clone(), episodes));
        }

        catalog
    }
}

/// One entry of the command list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandInput {
    pub command: String,
    pub username: Option<String>,
    pub timestamp: i64,
    /// Search type for `search`, account type for `addUser`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub filters: Option<FilterSet>,
    pub item_number: Option<usize>,
    /// Any integer; negative seeds are reinterpreted as unsigned
    pub seed: Option<i64>,
    pub playlist_name: Option<String>,
    pub playlist_id: Option<usize>,
    /// Album or event name
    pub name: Option<String>,
    pub release_year: Option<i32>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub songs: Vec<SongInput>,
}

impl CommandInput {
    /// Shuffle seed as the engine takes it
    pub fn shuffle_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_library_document() {
        let json = r##"{
            "songs": [{
                "name": "Shape", "duration": 233, "album": "Divide",
                "tags": ["#pop"], "lyrics": "the club", "genre": "Pop",
                "releaseYear": 2017, "artist": "Ed"
            }],
            "podcasts": [{
                "name": "Talk", "owner": "host",
                "episodes": [{"name": "One", "duration": 1800, "description": "first"}]
            }],
            "users": [{"username": "alice", "age": 30, "city": "Oslo"}]
        }"##;

        let library: LibraryInput = serde_json::from_str(json).unwrap();
        let catalog = library.to_catalog();

        let (_, track) = catalog.tracks().next().unwrap();
        assert_eq!(track.release_year, 2017);
        assert_eq!(track.duration, Duration::from_secs(233));
        assert_eq!(catalog.podcast_count(), 1);
        assert_eq!(library.users[0].username, "alice");
    }

    #[test]
    fn parses_command_with_filters() {
        let json = r#"{
            "command": "search", "username": "alice", "timestamp": 10,
            "type": "song", "filters": {"name": "Sh", "releaseYear": ">2000"}
        }"#;

        let command: CommandInput = serde_json::from_str(json).unwrap();
        assert_eq!(command.kind.as_deref(), Some("song"));
        let filters = command.filters.unwrap();
        assert_eq!(filters.release_year.as_deref(), Some(">2000"));
        assert_eq!(command.item_number, None);
    }

    #[test]
    fn negative_seed_is_accepted() {
        let command: CommandInput = serde_json::from_str(
            r#"{"command": "shuffle", "username": "alice", "timestamp": 3, "seed": -1}"#,
        )
        .unwrap();
        assert_eq!(command.seed, Some(-1));
        assert_eq!(command.shuffle_seed(), Some(u64::MAX));
    }

    #[test]
    fn parses_album_command() {
        let json = r##"{
            "command": "addAlbum", "username": "queen", "timestamp": 4,
            "name": "Innuendo", "releaseYear": 1991, "description": "last",
            "songs": [{"name": "Headlong", "duration": 278, "tags": ["#rock"], "genre": "rock"}]
        }"##;

        let command: CommandInput = serde_json::from_str(json).unwrap();
        assert_eq!(command.name.as_deref(), Some("Innuendo"));
        assert_eq!(command.release_year, Some(1991));
        let track = command.songs[0].to_track();
        assert_eq!(track.duration, Duration::from_secs(278));
        assert_eq!(track.genre, "rock");
    }

    #[test]
    fn user_type_is_optional() {
        let users: Vec<UserInput> = serde_json::from_str(
            r#"[{"username": "alice"}, {"username": "queen", "type": "artist"}]"#,
        )
        .unwrap();
        assert_eq!(users[0].kind, None);
        assert_eq!(users[1].kind.as_deref(), Some("artist"));
    }
}
