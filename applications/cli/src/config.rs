/// Command runner configuration
use crate::error::{CliError, Result};
use encore_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "encore.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,

    #[serde(default = "default_output")]
    pub output: OutputSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Pretty-print the result JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Podcast forward/backward step in seconds
    #[serde(default = "default_skip_seconds")]
    pub skip_seconds: u64,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `encore.toml` is optional.
    /// `ENCORE_<SECTION>__<KEY>` variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with ENCORE_)
        settings = settings.add_source(
            config::Environment::with_prefix("ENCORE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playback.skip_seconds == 0 {
            return Err(CliError::Config(
                "playback.skip_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Engine settings for every account
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            skip_step: Duration::from_secs(self.playback.skip_seconds),
        }
    }
}

// Default values
fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "encore=info".to_string()
}

fn default_output() -> OutputSettings {
    OutputSettings {
        pretty: default_pretty(),
    }
}

fn default_pretty() -> bool {
    true
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        skip_seconds: default_skip_seconds(),
    }
}

fn default_skip_seconds() -> u64 {
    90
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            logging: default_logging(),
            output: default_output(),
            playback: default_playback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.playback_config(), PlaybackConfig::default());
        assert!(config.output.pretty);
    }

    #[test]
    fn zero_skip_step_is_rejected() {
        let mut config = CliConfig::default();
        config.playback.skip_seconds = 0;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[playback]\nskip_seconds = 30\n\n[output]\npretty = false").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.playback.skip_seconds, 30);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.filter, "encore=info");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CliConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
