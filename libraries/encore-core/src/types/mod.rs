mod artist;
mod ids;
mod playlist;
mod podcast;
mod track;

pub use artist::{Album, Artist, Event};
pub use ids::{AlbumId, ArtistId, PlaylistId, PodcastId, TrackId};
pub use playlist::{Playlist, Visibility};
pub use podcast::{Episode, Podcast};
pub use track::Track;
