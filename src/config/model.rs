//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the community API would live. Never contacted by the stub backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Open on the phrase picked for today's date instead of the first one.
    #[serde(default)]
    pub start_on_phrase_of_the_day: bool,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            start_on_phrase_of_the_day: false,
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Base directory for relative phrase audio paths.
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
    /// Player program and arguments; the audio path is appended.
    #[serde(default = "default_player_command")]
    pub player_command: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            player_command: default_player_command(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// TOML file with `[[events]]` and `[[phrases]]`. Built-in content is
    /// used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

/// Diagnostic log settings. The TUI owns stdout, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_api_base_url() -> String {
    "https://your-backend-api.com".to_string()
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_tick_ms() -> u64 {
    250
}
fn default_audio_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_player_command() -> Vec<String> {
    vec![
        "ffplay".to_string(),
        "-nodisp".to_string(),
        "-autoexit".to_string(),
        "-loglevel".to_string(),
        "quiet".to_string(),
    ]
}
fn default_log_dir() -> String {
    "~/.local/share/phrasebook/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.backend.api_base_url, "https://your-backend-api.com");
        assert_eq!(cfg.ui.timestamp_format, "%H:%M");
        assert!(!cfg.ui.start_on_phrase_of_the_day);
        assert_eq!(cfg.audio.player_command[0], "ffplay");
        assert!(cfg.content.catalog_path.is_none());
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg = parse_config(
            r#"
            [ui]
            start_on_phrase_of_the_day = true

            [audio]
            player_command = ["mpv", "--no-video"]

            [content]
            catalog_path = "/etc/phrasebook/catalog.toml"

            [logging]
            enabled = false
            "#,
        )
        .unwrap();
        assert!(cfg.ui.start_on_phrase_of_the_day);
        assert_eq!(cfg.ui.tick_ms, 250);
        assert_eq!(cfg.audio.player_command, vec!["mpv", "--no-video"]);
        assert_eq!(cfg.audio.audio_dir, PathBuf::from("."));
        assert_eq!(
            cfg.content.catalog_path,
            Some(PathBuf::from("/etc/phrasebook/catalog.toml"))
        );
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/phrasebook/logs");
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(parse_config("[ui\n").is_err());
    }

    #[test]
    fn test_round_trip_serialize() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let cfg = parse_config(&text).unwrap();
        assert_eq!(cfg.ui.tick_ms, 250);
    }
}
