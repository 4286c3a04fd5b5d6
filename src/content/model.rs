//! Load-once content records shown by the calendar and the phrase viewer.

use serde::{Deserialize, Serialize};

/// A community calendar entry. `date` is kept as the ISO `YYYY-MM-DD` string
/// it was loaded with; calendar cells match on exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

/// A phrase with its translation, phonetic guide and optional recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: u32,
    pub phrase: String,
    pub translation: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub audio_url: Option<String>,
}
