//! Fire-and-forget phrase audio playback.
//!
//! Each request spawns a background task that runs the configured external
//! player. The outcome comes back through the app event channel; nothing
//! awaits it and a failure is never retried. A player still running when the
//! runtime shuts down is killed with it.

use crate::app::event::{AppEvent, PhraseId, PlayId};
use crate::config::AudioConfig;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub struct AudioPlayer {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    command: Vec<String>,
    audio_dir: PathBuf,
}

impl AudioPlayer {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, config: &AudioConfig) -> Self {
        Self {
            event_tx,
            command: config.player_command.clone(),
            audio_dir: config.audio_dir.clone(),
        }
    }

    /// Start playing `source` in the background.
    pub fn play(&self, phrase_id: PhraseId, play_id: PlayId, source: &str) {
        let target = resolve_source(&self.audio_dir, source);
        let command = self.command.clone();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match run_player(&command, &target).await {
                Ok(()) => AppEvent::AudioFinished { phrase_id, play_id },
                Err(error) => AppEvent::AudioFailed {
                    phrase_id,
                    play_id,
                    error,
                },
            };
            let _ = tx.send(event);
        });
    }
}

/// Remote URLs pass through untouched; anything else is a path relative to
/// the audio directory.
pub fn resolve_source(audio_dir: &std::path::Path, source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        return source.to_string();
    }
    let path = PathBuf::from(source);
    if path.is_absolute() {
        return source.to_string();
    }
    audio_dir.join(path).display().to_string()
}

async fn run_player(command: &[String], target: &str) -> Result<(), String> {
    let Some((program, args)) = command.split_first() else {
        return Err("no audio player configured".to_string());
    };
    let is_remote = target.starts_with("http://") || target.starts_with("https://");
    if !is_remote && !std::path::Path::new(target).exists() {
        return Err(format!("audio file not found: {}", target));
    }

    debug!(%program, %target, "starting audio player");
    let status = Command::new(program)
        .args(args)
        .arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| format!("failed to start {}: {}", program, e))?;

    if status.success() {
        Ok(())
    } else {
        warn!(%program, %status, "audio player exited with failure");
        Err(format!("{} exited with {}", program, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn test_resolve_source() {
        let dir = Path::new("/srv/audio");
        assert_eq!(resolve_source(dir, "welcome.mp3"), "/srv/audio/welcome.mp3");
        assert_eq!(resolve_source(dir, "/tmp/x.mp3"), "/tmp/x.mp3");
        assert_eq!(
            resolve_source(dir, "https://example.org/a.mp3"),
            "https://example.org/a.mp3"
        );
    }

    #[tokio::test]
    async fn test_missing_file_reports_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let config = AudioConfig {
            audio_dir: PathBuf::from("/nonexistent-audio-dir"),
            player_command: vec!["true".to_string()],
        };
        let player = AudioPlayer::new(tx, &config);
        player.play(3, 7, "missing.mp3");

        match rx.recv().await {
            Some(AppEvent::AudioFailed {
                phrase_id,
                play_id,
                error,
            }) => {
                assert_eq!(phrase_id, 3);
                assert_eq!(play_id, 7);
                assert!(error.contains("not found"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dropped_playback_kills_player() {
        let marker =
            std::env::temp_dir().join(format!("phrasebook-player-{}", std::process::id()));
        let _ = std::fs::remove_file(&marker);
        // The target is passed to `sh` as $0 and ignored.
        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("sleep 1; touch '{}'", marker.display()),
        ];
        let target = std::env::temp_dir().display().to_string();

        let run = run_player(&command, &target);
        let timed_out = tokio::time::timeout(Duration::from_millis(200), run).await;
        assert!(timed_out.is_err());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let survived = marker.exists();
        let _ = std::fs::remove_file(&marker);
        assert!(!survived, "player kept running after playback was dropped");
    }

    #[tokio::test]
    async fn test_empty_command_reports_failure() {
        let result = run_player(&[], "https://example.org/a.mp3").await;
        assert!(result.is_err());
    }
}
