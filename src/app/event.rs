use crossterm::event::Event as CrosstermEvent;

pub type PhraseId = u32;
/// Increments with every playback request; later requests supersede earlier ones.
pub type PlayId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Audio playback finished normally
    AudioFinished { phrase_id: PhraseId, play_id: PlayId },
    /// Audio playback could not start or exited with an error
    AudioFailed {
        phrase_id: PhraseId,
        play_id: PlayId,
        error: String,
    },

    /// Tick for UI refresh
    Tick,
}
