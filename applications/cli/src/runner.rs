//! Command dispatch
//!
//! Every command first moves the registry clock to its timestamp, then runs
//! against the registry and produces at most one output record.

use crate::input::{CommandInput, LibraryInput, SongInput};
use crate::output::CommandOutput;
use encore_accounts::{Account, AccountKind, Registry};
use encore_core::{Album, Catalog, EntryKind, Event};
use encore_playback::PlaybackConfig;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Known commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Search,
    Select,
    Load,
    PlayPause,
    Repeat,
    Shuffle,
    Forward,
    Backward,
    Like,
    Next,
    Prev,
    CreatePlaylist,
    AddRemoveInPlaylist,
    SwitchVisibility,
    ShowPlaylists,
    Follow,
    Status,
    ShowPreferredSongs,
    GetPreferredGenre,
    GetTop5Songs,
    GetTop5Playlists,
    SwitchConnectionStatus,
    GetOnlineUsers,
    AddUser,
    AddAlbum,
    ShowAlbums,
    AddEvent,
    PrintCurrentPage,
}

impl Command {
    pub const ALL: [Command; 28] = [
        Self::Search,
        Self::Select,
        Self::Load,
        Self::PlayPause,
        Self::Repeat,
        Self::Shuffle,
        Self::Forward,
        Self::Backward,
        Self::Like,
        Self::Next,
        Self::Prev,
        Self::CreatePlaylist,
        Self::AddRemoveInPlaylist,
        Self::SwitchVisibility,
        Self::ShowPlaylists,
        Self::Follow,
        Self::Status,
        Self::ShowPreferredSongs,
        Self::GetPreferredGenre,
        Self::GetTop5Songs,
        Self::GetTop5Playlists,
        Self::SwitchConnectionStatus,
        Self::GetOnlineUsers,
        Self::AddUser,
        Self::AddAlbum,
        Self::ShowAlbums,
        Self::AddEvent,
        Self::PrintCurrentPage,
    ];

    /// Name used in the command list
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Select => "select",
            Self::Load => "load",
            Self::PlayPause => "playPause",
            Self::Repeat => "repeat",
            Self::Shuffle => "shuffle",
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Like => "like",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::CreatePlaylist => "createPlaylist",
            Self::AddRemoveInPlaylist => "addRemoveInPlaylist",
            Self::SwitchVisibility => "switchVisibility",
            Self::ShowPlaylists => "showPlaylists",
            Self::Follow => "follow",
            Self::Status => "status",
            Self::ShowPreferredSongs => "showPreferredSongs",
            Self::GetPreferredGenre => "getPreferredGenre",
            Self::GetTop5Songs => "getTop5Songs",
            Self::GetTop5Playlists => "getTop5Playlists",
            Self::SwitchConnectionStatus => "switchConnectionStatus",
            Self::GetOnlineUsers => "getOnlineUsers",
            Self::AddUser => "addUser",
            Self::AddAlbum => "addAlbum",
            Self::ShowAlbums => "showAlbums",
            Self::AddEvent => "addEvent",
            Self::PrintCurrentPage => "printCurrentPage",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Runs command lists against one registry
#[derive(Debug, Clone)]
pub struct Runner {
    registry: Registry,
}

impl Runner {
    /// Build the catalog and register the library's users
    pub fn new(library: &LibraryInput, playback: PlaybackConfig) -> Self {
        let mut registry = Registry::new(library.to_catalog(), playback);
        for user in &library.users {
            let kind = AccountKind::from_type(user.kind.as_deref());
            if let Err(err) = registry.add_account(&user.username, kind) {
                warn!("Skipping library user: {}", err);
            }
        }

        info!(
            "Library loaded: {} tracks, {} podcasts, {} users",
            registry.catalog().track_count(),
            registry.catalog().podcast_count(),
            registry.accounts().len()
        );
        Self { registry }
    }

    /// Execute `commands` in order and collect their outputs
    pub fn run(&mut self, commands: &[CommandInput]) -> Vec<CommandOutput> {
        commands
            .iter()
            .filter_map(|command| self.execute(command))
            .collect()
    }

    /// Execute one command; unknown commands produce no output
    pub fn execute(&mut self, input: &CommandInput) -> Option<CommandOutput> {
        self.registry.advance_clock(input.timestamp);

        let command = match input.command.parse::<Command>() {
            Ok(command) => command,
            Err(name) => {
                warn!("Skipping unknown command {:?} at {}", name, input.timestamp);
                return None;
            }
        };
        debug!("{} {:?} at {}", command, input.username, input.timestamp);

        let output = match command {
            Command::Search => self.for_user(input, |account, catalog, out| {
                search(account, catalog, input, out)
            }),
            Command::Select => self.for_user(input, |account, _, out| {
                out.with_message(account.select(input.item_number.unwrap_or(0)))
            }),
            Command::Load => {
                self.for_user(input, |account, catalog, out| out.with_message(account.load(catalog)))
            }
            Command::PlayPause => {
                self.for_user(input, |account, _, out| out.with_message(account.play_pause()))
            }
            Command::Repeat => {
                self.for_user(input, |account, _, out| out.with_message(account.repeat()))
            }
            Command::Shuffle => self.for_user(input, |account, _, out| {
                out.with_message(account.shuffle(input.shuffle_seed()))
            }),
            Command::Forward => {
                self.for_user(input, |account, _, out| out.with_message(account.forward()))
            }
            Command::Backward => {
                self.for_user(input, |account, _, out| out.with_message(account.backward()))
            }
            Command::Like => {
                self.for_user(input, |account, catalog, out| out.with_message(account.like(catalog)))
            }
            Command::Next => {
                self.for_user(input, |account, _, out| out.with_message(account.next()))
            }
            Command::Prev => {
                self.for_user(input, |account, _, out| out.with_message(account.prev()))
            }
            Command::CreatePlaylist => self.for_user(input, |account, catalog, out| {
                let name = input.playlist_name.as_deref().unwrap_or_default();
                out.with_message(account.create_playlist(catalog, name, input.timestamp))
            }),
            Command::AddRemoveInPlaylist => self.for_user(input, |account, catalog, out| {
                let id = input.playlist_id.unwrap_or(0);
                out.with_message(account.add_remove_in_playlist(catalog, id))
            }),
            Command::SwitchVisibility => self.for_user(input, |account, catalog, out| {
                let id = input.playlist_id.unwrap_or(0);
                out.with_message(account.switch_visibility(catalog, id))
            }),
            Command::ShowPlaylists => self.for_user(input, |account, catalog, out| {
                let playlists = serde_json::to_value(account.show_playlists(catalog));
                out.with_result(playlists.unwrap_or_default())
            }),
            Command::Follow => {
                self.for_user(input, |account, catalog, out| out.with_message(account.follow(catalog)))
            }
            Command::Status => {
                self.for_user(input, |account, _, out| out.with_stats(account.status()))
            }
            Command::ShowPreferredSongs => self.for_user(input, |account, catalog, out| {
                out.with_result(Value::from(account.show_preferred_songs(catalog)))
            }),
            Command::GetPreferredGenre => self.for_user(input, |account, catalog, out| {
                out.with_result(Value::from(account.preferred_genre(catalog)))
            }),
            Command::SwitchConnectionStatus => self.for_user(input, |account, _, out| {
                out.with_message(account.switch_connection_status())
            }),
            Command::GetTop5Songs => CommandOutput::new(command.as_str(), None, input.timestamp)
                .with_result(Value::from(self.registry.top_tracks())),
            Command::GetTop5Playlists => {
                CommandOutput::new(command.as_str(), None, input.timestamp)
                    .with_result(Value::from(self.registry.top_playlists()))
            }
            Command::GetOnlineUsers => CommandOutput::new(command.as_str(), None, input.timestamp)
                .with_result(Value::from(self.registry.online_users())),
            Command::AddUser => {
                let name = input.username.clone().unwrap_or_default();
                let kind = AccountKind::from_type(input.kind.as_deref());
                let message = self.registry.add_user_message(&name, kind);
                CommandOutput::new(command.as_str(), Some(name), input.timestamp)
                    .with_message(message)
            }
            Command::AddAlbum => self.for_user(input, |account, catalog, out| {
                let album = Album::new(
                    input.name.clone().unwrap_or_default(),
                    account.name().to_string(),
                )
                .with_release_year(input.release_year.unwrap_or_default())
                .with_description(input.description.clone().unwrap_or_default());
                let tracks = input.songs.iter().map(SongInput::to_track).collect();
                out.with_message(account.add_album(catalog, album, tracks))
            }),
            Command::ShowAlbums => self.for_user(input, |account, catalog, out| {
                let albums = serde_json::to_value(account.show_albums(catalog));
                out.with_result(albums.unwrap_or_default())
            }),
            Command::AddEvent => self.for_user(input, |account, catalog, out| {
                let event = Event::new(
                    input.name.clone().unwrap_or_default(),
                    input.description.clone().unwrap_or_default(),
                    input.date.clone().unwrap_or_default(),
                );
                out.with_message(account.add_event(catalog, event))
            }),
            Command::PrintCurrentPage => self.for_user(input, |account, catalog, out| {
                out.with_message(account.print_current_page(catalog))
            }),
        };

        Some(output)
    }

    /// Run a per-user command; an unknown user gets an error message instead
    fn for_user(
        &mut self,
        input: &CommandInput,
        f: impl FnOnce(&mut Account, &mut Catalog, CommandOutput) -> CommandOutput,
    ) -> CommandOutput {
        let name = input.username.clone().unwrap_or_default();
        let output = CommandOutput::new(input.command.clone(), Some(name.clone()), input.timestamp);

        let template = output.clone();
        match self
            .registry
            .with_account(&name, move |account, catalog| f(account, catalog, template))
        {
            Ok(output) => output,
            Err(err) => {
                warn!("{} for {:?}: {}", input.command, name, err);
                output.with_message(err.to_string())
            }
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

fn search(
    account: &mut Account,
    catalog: &Catalog,
    input: &CommandInput,
    out: CommandOutput,
) -> CommandOutput {
    let search_type = input.kind.as_deref().unwrap_or_default();
    let report = match search_type.parse::<EntryKind>() {
        Ok(kind) => {
            let filters = input.filters.clone().unwrap_or_default();
            account.search(catalog, &filters, kind)
        }
        Err(_) => {
            warn!("Unsupported search type {:?} for {}", search_type, account.name());
            account.search_unsupported(search_type)
        }
    };
    out.with_message(report.message).with_results(report.results)
}
