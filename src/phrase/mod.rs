//! Phrase-of-the-day viewer: cursor arithmetic and audio playback.

pub mod audio;
pub mod navigator;

pub use navigator::{current, phrase_of_the_day, PhraseCursor};
