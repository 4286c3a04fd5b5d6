//! Event and phrase catalog.
//!
//! Content is loaded once at startup, either from the built-in seed or from a
//! TOML catalog file (`[[events]]` and `[[phrases]]` tables), and is read-only
//! afterwards.

pub mod model;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

pub use model::{Event, Phrase};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
}

impl Catalog {
    /// The seed content shipped with the application.
    pub fn builtin() -> Self {
        Self {
            events: vec![
                Event {
                    id: 1,
                    title: "Harvest Festival".into(),
                    date: "2023-10-15".into(),
                    description: "Annual celebration of the harvest season".into(),
                    location: "Town Square".into(),
                },
                Event {
                    id: 2,
                    title: "Winter Lights".into(),
                    date: "2023-12-20".into(),
                    description: "Festival of lights marking the winter solstice".into(),
                    location: "Throughout town".into(),
                },
            ],
            phrases: vec![
                Phrase {
                    id: 1,
                    phrase: "Welcome to our home".into(),
                    translation: "Ngiyanemukela kukhaya lethu".into(),
                    pronunciation: "Ngee-ya-neh-moo-keh-la koo-kha-ya leh-too".into(),
                    audio_url: Some("audio/welcome.mp3".into()),
                },
                Phrase {
                    id: 2,
                    phrase: "Thank you very much".into(),
                    translation: "Ngiyabonga kakhulu".into(),
                    pronunciation: "Ngee-ya-bon-ga ka-khoo-loo".into(),
                    audio_url: Some("audio/thanks.mp3".into()),
                },
                Phrase {
                    id: 3,
                    phrase: "How are you?".into(),
                    translation: "Unjani?".into(),
                    pronunciation: "Oon-ja-nee".into(),
                    audio_url: Some("audio/howareyou.mp3".into()),
                },
            ],
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(contents).with_context(|| "Failed to parse catalog file")?;
        catalog.check_dates();
        Ok(catalog)
    }

    /// Events whose date is not a real calendar date never match a cell.
    /// They are kept, but flagged in the log.
    fn check_dates(&self) {
        for event in &self.events {
            if NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").is_err() {
                warn!(event_id = event.id, date = %event.date, "event date is not a valid ISO date");
            }
        }
    }
}

/// Load the catalog from `path`, or fall back to the built-in seed when no
/// path is configured.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
    let catalog = Catalog::from_toml(&contents)?;
    info!(
        path = %path.display(),
        events = catalog.events.len(),
        phrases = catalog.phrases.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
