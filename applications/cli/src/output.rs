//! Output records

use encore_playback::PlaybackStats;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer to one command
///
/// Only the fields a command produces are serialized.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CommandOutput {
    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    pub timestamp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Search hits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,

    /// Listing or statistic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PlaybackStats>,
}

impl CommandOutput {
    pub fn new(command: impl Into<String>, user: Option<String>, timestamp: i64) -> Self {
        Self {
            command: command.into(),
            user,
            timestamp,
            message: None,
            results: None,
            result: None,
            stats: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_results(mut self, results: Vec<String>) -> Self {
        self.results = Some(results);
        self
    }

    pub fn with_result(mut self, result: Value) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_stats(mut self, stats: PlaybackStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_playback::RepeatMode;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted() {
        let output = CommandOutput::new("getTop5Songs", None, 7).with_result(json!(["A", "B"]));

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"command": "getTop5Songs", "timestamp": 7, "result": ["A", "B"]})
        );
    }

    #[test]
    fn stats_use_display_names() {
        let output = CommandOutput::new("status", Some("alice".into()), 3).with_stats(PlaybackStats {
            name: "Song".into(),
            remained_time: 12,
            repeat: RepeatMode::RepeatOnce,
            shuffle: false,
            paused: false,
        });

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["user"], "alice");
        assert_eq!(
            value["stats"],
            json!({
                "name": "Song",
                "remainedTime": 12,
                "repeat": "Repeat Once",
                "shuffle": false,
                "paused": false
            })
        );
    }
}
