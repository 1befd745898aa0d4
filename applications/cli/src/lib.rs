//! Encore command runner
//!
//! Reads a library document and a command list, replays the commands against
//! a fresh registry and renders one JSON record per command.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod runner;

pub use config::CliConfig;
pub use error::{CliError, Result};
pub use input::{CommandInput, LibraryInput};
pub use output::CommandOutput;
pub use runner::{Command, Runner};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Counts reported by `encore check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibrarySummary {
    pub tracks: usize,
    pub podcasts: usize,
    pub episodes: usize,
    pub users: usize,
}

impl LibrarySummary {
    pub fn of(library: &LibraryInput) -> Self {
        Self {
            tracks: library.songs.len(),
            podcasts: library.podcasts.len(),
            episodes: library.podcasts.iter().map(|p| p.episodes.len()).sum(),
            users: library.users.len(),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::Input {
        path: path.display().to_string(),
        source,
    })
}

/// Read a library document
pub fn load_library(path: &Path) -> Result<LibraryInput> {
    read_json(path)
}

/// Read a command list
pub fn load_commands(path: &Path) -> Result<Vec<CommandInput>> {
    read_json(path)
}

/// Replay the command list at `commands` over the library at `library`
pub fn run(library: &Path, commands: &Path, config: &CliConfig) -> Result<Vec<CommandOutput>> {
    let library = load_library(library)?;
    let commands = load_commands(commands)?;

    let mut runner = Runner::new(&library, config.playback_config());
    Ok(runner.run(&commands))
}

/// Serialize output records
pub fn render(outputs: &[CommandOutput], pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(outputs)?
    } else {
        serde_json::to_string(outputs)?
    };
    Ok(text)
}
