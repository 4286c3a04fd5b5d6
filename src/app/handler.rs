use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::backend::AuthMode;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{error, info, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::AudioFinished { phrase_id, play_id } => {
            info!(phrase_id, play_id, "audio playback finished");
            state.finish_playback(play_id);
            vec![]
        }
        AppEvent::AudioFailed {
            phrase_id,
            play_id,
            error,
        } => {
            // Logged only; playback failures are not shown to the user.
            error!(phrase_id, play_id, %error, "audio playback failed");
            state.finish_playback(play_id);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.playing.is_some() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Modals capture all input while visible, notices first
    if state.active_notice().is_some() {
        return handle_notice_key(state, key);
    }
    if state.auth.visible {
        return handle_auth_key(state, key);
    }
    if state.upload.visible {
        return handle_upload_key(state, key);
    }

    match key.code {
        KeyCode::F(2) | KeyCode::F(3) if state.current_user.is_some() => return vec![],
        KeyCode::F(2) => {
            state.open_auth(AuthMode::Login);
            return vec![];
        }
        KeyCode::F(3) => {
            state.open_auth(AuthMode::Register);
            return vec![];
        }
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Calendar => handle_calendar_key(state, key),
        FocusPanel::Phrases => handle_phrase_key(state, key),
        FocusPanel::Search => handle_search_key(state, key),
        FocusPanel::Contribute => handle_contribute_key(state, key),
    }
}

fn handle_notice_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => state.dismiss_notice(),
        _ => {}
    }
    vec![]
}

fn handle_calendar_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Left => state.move_selected_day(-1),
        KeyCode::Right => state.move_selected_day(1),
        KeyCode::Up => state.move_selected_day(-7),
        KeyCode::Down => state.move_selected_day(7),
        KeyCode::PageUp | KeyCode::Char('p') | KeyCode::Char('<') => state.shift_month(-1),
        KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char('>') => state.shift_month(1),
        KeyCode::Char('t') => state.goto_today(),
        _ => {}
    }
    vec![]
}

fn handle_phrase_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Left | KeyCode::Char('h') => {
            state.prev_phrase();
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.next_phrase();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => play_current_phrase(state),
        KeyCode::Char('u') => {
            state.upload.visible = true;
            vec![]
        }
        _ => vec![],
    }
}

fn play_current_phrase(state: &mut AppState) -> Vec<Action> {
    let (phrase_id, text, audio_url) = match state.current_phrase() {
        Ok(p) => (p.id, p.phrase.clone(), p.audio_url.clone()),
        Err(e) => {
            warn!("nothing to play: {}", e);
            return vec![];
        }
    };
    match audio_url {
        Some(source) => {
            let play_id = state.start_playback(phrase_id);
            vec![Action::PlayAudio {
                phrase_id,
                play_id,
                source,
            }]
        }
        None => {
            state.info_notice("Audio", format!("Audio for: {}", text));
            vec![]
        }
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            let query = state.search.take_text().trim().to_string();
            if query.is_empty() {
                return vec![];
            }
            vec![Action::Search { query }]
        }
        KeyCode::Esc => {
            state.focus = FocusPanel::Calendar;
            vec![]
        }
        KeyCode::Up => {
            state.search.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.search.history_down();
            vec![]
        }
        _ => {
            edit_input(&mut state.search, key);
            vec![]
        }
    }
}

fn handle_contribute_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => return submit_contribution(state),
        KeyCode::Esc => {
            state.focus = FocusPanel::Calendar;
            return vec![];
        }
        _ => {}
    }

    let form = &mut state.contribution;
    match key.code {
        KeyCode::Up => form.field = form.field.prev(),
        KeyCode::Down => form.field = form.field.next(),
        KeyCode::Left if form.field == ContributionField::Kind => form.kind = form.kind.prev(),
        KeyCode::Right if form.field == ContributionField::Kind => form.kind = form.kind.next(),
        _ => {
            if let Some(input) = form.active_input() {
                edit_input(input, key);
            }
        }
    }
    vec![]
}

fn submit_contribution(state: &mut AppState) -> Vec<Action> {
    if state.current_user.is_none() {
        state.info_notice("Contribute", "Please sign in to contribute");
        let mode = state.auth.mode;
        state.open_auth(mode);
        return vec![];
    }
    let contribution = state.contribution.to_contribution();
    if contribution.title.is_empty() {
        state.contribution.field = ContributionField::Title;
        state.error_notice("Contribute", "Please give your contribution a title");
        return vec![];
    }
    vec![Action::SubmitContribution { contribution }]
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
        state.auth.mode = state.auth.mode.toggled();
        return vec![];
    }
    match key.code {
        KeyCode::Esc => state.close_auth(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => state.auth.switch_field(),
        KeyCode::Enter => {
            if state.auth.field == AuthField::Email && state.auth.password.text.is_empty() {
                state.auth.field = AuthField::Password;
                return vec![];
            }
            let password = std::mem::take(&mut state.auth.password.text);
            state.auth.password.clear();
            return vec![Action::Authenticate {
                mode: state.auth.mode,
                email: state.auth.email.text.trim().to_string(),
                password,
            }];
        }
        _ => edit_input(state.auth.active_input(), key),
    }
    vec![]
}

fn handle_upload_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.upload.visible = false;
            state.upload.path.clear();
        }
        KeyCode::Enter => {
            let path = state.upload.path.take_text().trim().to_string();
            state.upload.visible = false;
            if path.is_empty() {
                state.error_notice("Upload", "Please select an audio file first");
                return vec![];
            }
            return vec![Action::UploadAudio {
                path: crate::config::expand_home(&path),
            }];
        }
        _ => edit_input(&mut state.upload.path, key),
    }
    vec![]
}

/// Line-editing keys shared by every text field.
fn edit_input(input: &mut InputState, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                input.delete_word_back();
            } else {
                input.delete_back();
            }
        }
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => input.move_home(),
                    'e' => input.move_end(),
                    'w' => input.delete_word_back(),
                    'u' => input.clear(),
                    _ => {}
                }
            } else {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ContributionKind, User};
    use crate::calendar::CalendarCursor;
    use crate::config::AppConfig;
    use crate::content::Catalog;
    use std::path::PathBuf;

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default(), Catalog::builtin());
        state.set_calendar(CalendarCursor::new(2023, 11).unwrap());
        state.selected_day = 1;
        state
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        press_with(state, code, KeyModifiers::NONE)
    }

    fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = state();
        state.open_auth(AuthMode::Login);
        let actions = press_with(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_calendar_month_navigation() {
        let mut state = state();
        press(&mut state, KeyCode::PageDown);
        assert_eq!((state.calendar.year(), state.calendar.month()), (2024, 0));
        press(&mut state, KeyCode::Char('p'));
        press(&mut state, KeyCode::Char('p'));
        assert_eq!((state.calendar.year(), state.calendar.month()), (2023, 10));
    }

    #[test]
    fn test_calendar_day_selection() {
        let mut state = state();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.selected_date(), "2023-12-20");
        assert_eq!(state.selected_events()[0].title, "Winter Lights");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, FocusPanel::Phrases);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, FocusPanel::Calendar);
    }

    #[test]
    fn test_phrase_navigation_wraps() {
        let mut state = state();
        state.focus = FocusPanel::Phrases;
        press(&mut state, KeyCode::Left);
        assert_eq!(state.current_phrase().unwrap().id, 3);
        press(&mut state, KeyCode::Char('l'));
        assert_eq!(state.current_phrase().unwrap().id, 1);
    }

    #[test]
    fn test_play_audio_emits_action() {
        let mut state = state();
        state.focus = FocusPanel::Phrases;
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::PlayAudio {
                phrase_id: 1,
                play_id: 1,
                source: "audio/welcome.mp3".into()
            }]
        );
        assert_eq!(state.playing, Some(1));
    }

    #[test]
    fn test_replaying_keeps_indicator_until_latest_finishes() {
        let mut state = state();
        state.focus = FocusPanel::Phrases;
        let first = press(&mut state, KeyCode::Enter);
        let second = press(&mut state, KeyCode::Enter);
        let id_of = |actions: &[Action]| match actions {
            [Action::PlayAudio { play_id, .. }] => *play_id,
            other => panic!("unexpected actions: {:?}", other),
        };
        let (first, second) = (id_of(&first), id_of(&second));
        assert_ne!(first, second);

        handle_event(
            &mut state,
            AppEvent::AudioFinished {
                phrase_id: 1,
                play_id: first,
            },
        );
        assert_eq!(state.playing, Some(1));
        handle_event(
            &mut state,
            AppEvent::AudioFinished {
                phrase_id: 1,
                play_id: second,
            },
        );
        assert!(state.playing.is_none());
    }

    #[test]
    fn test_play_without_audio_shows_notice() {
        let mut state = state();
        state.phrases[0].audio_url = None;
        state.focus = FocusPanel::Phrases;
        assert!(press(&mut state, KeyCode::Char(' ')).is_empty());
        assert_eq!(
            state.active_notice().unwrap().body,
            "Audio for: Welcome to our home"
        );
        press(&mut state, KeyCode::Esc);
        assert!(state.active_notice().is_none());
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut state = state();
        state.phrases.clear();
        state.focus = FocusPanel::Phrases;
        assert!(press(&mut state, KeyCode::Right).is_empty());
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(state.playing.is_none());
    }

    #[test]
    fn test_audio_failure_is_silent() {
        let mut state = state();
        let play_id = state.start_playback(2);
        handle_event(
            &mut state,
            AppEvent::AudioFailed {
                phrase_id: 2,
                play_id,
                error: "boom".into(),
            },
        );
        assert!(state.playing.is_none());
        assert!(state.active_notice().is_none());
    }

    #[test]
    fn test_audio_finished_for_earlier_phrase_keeps_playing() {
        let mut state = state();
        let earlier = state.start_playback(1);
        let latest = state.start_playback(2);
        handle_event(
            &mut state,
            AppEvent::AudioFinished {
                phrase_id: 1,
                play_id: earlier,
            },
        );
        assert_eq!(state.playing, Some(2));
        handle_event(
            &mut state,
            AppEvent::AudioFinished {
                phrase_id: 2,
                play_id: latest,
            },
        );
        assert!(state.playing.is_none());
    }

    #[test]
    fn test_upload_requires_a_file() {
        let mut state = state();
        state.focus = FocusPanel::Phrases;
        press(&mut state, KeyCode::Char('u'));
        assert!(state.upload.visible);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(!state.upload.visible);
        assert_eq!(
            state.active_notice().unwrap().body,
            "Please select an audio file first"
        );
    }

    #[test]
    fn test_upload_emits_action() {
        let mut state = state();
        state.focus = FocusPanel::Phrases;
        press(&mut state, KeyCode::Char('u'));
        type_text(&mut state, "/tmp/clip.mp3");
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::UploadAudio {
                path: PathBuf::from("/tmp/clip.mp3")
            }]
        );
    }

    #[test]
    fn test_search_blank_is_noop() {
        let mut state = state();
        state.focus = FocusPanel::Search;
        type_text(&mut state, "   ");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        type_text(&mut state, " imbongi ");
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            vec![Action::Search {
                query: "imbongi".into()
            }]
        );
    }

    #[test]
    fn test_blank_search_is_not_remembered() {
        let mut state = state();
        state.focus = FocusPanel::Search;
        type_text(&mut state, "imbongi");
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "  ");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.search.history, vec!["imbongi".to_string()]);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.search.text, "imbongi");
    }

    #[test]
    fn test_search_typing_q_does_not_quit() {
        let mut state = state();
        state.focus = FocusPanel::Search;
        assert!(press(&mut state, KeyCode::Char('q')).is_empty());
        assert_eq!(state.search.text, "q");
    }

    #[test]
    fn test_auth_flow() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        assert!(state.auth.visible);
        assert_eq!(state.auth.mode, AuthMode::Login);

        press_with(&mut state, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(state.auth.mode, AuthMode::Register);
        assert_eq!(state.auth.submit_label(), "Register");
        assert_eq!(state.auth.switch_label(), "Sign in instead");

        type_text(&mut state, "zola@example.org");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.auth.field, AuthField::Password);
        type_text(&mut state, "pw");
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::Authenticate {
                mode: AuthMode::Register,
                email: "zola@example.org".into(),
                password: "pw".into(),
            }]
        );
        assert!(state.auth.password.text.is_empty());
        assert_eq!(state.auth.password.cursor, 0);
    }

    #[test]
    fn test_auth_keys_ignored_while_signed_in() {
        let mut state = state();
        state.current_user = Some(User {
            email: "a@b.c".into(),
            name: "a".into(),
            session_token: String::new(),
        });
        assert!(press(&mut state, KeyCode::F(2)).is_empty());
        assert!(!state.auth.visible);
        assert!(press(&mut state, KeyCode::F(3)).is_empty());
        assert!(!state.auth.visible);
    }

    #[test]
    fn test_auth_escape_closes() {
        let mut state = state();
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.auth.mode, AuthMode::Register);
        press(&mut state, KeyCode::Esc);
        assert!(!state.auth.visible);
    }

    #[test]
    fn test_contribution_requires_sign_in() {
        let mut state = state();
        state.focus = FocusPanel::Contribute;
        type_text(&mut state, "Song");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(
            state.active_notice().unwrap().body,
            "Please sign in to contribute"
        );
        assert!(state.auth.visible);
        assert_eq!(state.contribution.title.text, "Song");
    }

    #[test]
    fn test_contribution_submit() {
        let mut state = state();
        state.current_user = Some(User {
            email: "a@b.c".into(),
            name: "a".into(),
            session_token: String::new(),
        });
        state.focus = FocusPanel::Contribute;
        type_text(&mut state, "Harvest song");
        press(&mut state, KeyCode::Up);
        assert_eq!(state.contribution.field, ContributionField::Kind);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.contribution.kind, ContributionKind::Story);

        let actions = press(&mut state, KeyCode::Enter);
        match actions.as_slice() {
            [Action::SubmitContribution { contribution }] => {
                assert_eq!(contribution.title, "Harvest song");
                assert_eq!(contribution.kind, ContributionKind::Story);
                assert_eq!(contribution.image, None);
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_contribution_without_title() {
        let mut state = state();
        state.current_user = Some(User {
            email: "a@b.c".into(),
            name: "a".into(),
            session_token: String::new(),
        });
        state.focus = FocusPanel::Contribute;
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.active_notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn test_notice_blocks_other_keys() {
        let mut state = state();
        state.info_notice("Hello", "world");
        assert!(press(&mut state, KeyCode::Char('q')).is_empty());
        assert!(press(&mut state, KeyCode::PageDown).is_empty());
        assert_eq!(state.calendar.month(), 11);
        press(&mut state, KeyCode::Enter);
        assert!(state.active_notice().is_none());
    }

    #[test]
    fn test_q_quits_from_calendar() {
        let mut state = state();
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
    }
}
