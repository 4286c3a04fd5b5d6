use crate::app::event::{PhraseId, PlayId};
use crate::backend::{AuthMode, Contribution};
use std::path::PathBuf;

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    PlayAudio {
        phrase_id: PhraseId,
        play_id: PlayId,
        source: String,
    },
    UploadAudio { path: PathBuf },
    Authenticate { mode: AuthMode, email: String, password: String },
    SubmitContribution { contribution: Contribution },
    Search { query: String },
    Quit,
}
