use crate::app::event::{PhraseId, PlayId};
use crate::backend::{Ack, AuthMode, BackendError, Contribution, ContributionKind, User};
use crate::calendar::{advance_month, render_month, CalendarCursor, CalendarGrid};
use crate::config::AppConfig;
use crate::content::{Catalog, Event, Phrase};
use crate::error::CoreError;
use crate::phrase::{self, PhraseCursor};
use chrono::{Datelike, Local};
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal message the user has to dismiss.
#[derive(Debug, Clone)]
pub struct Notice {
    pub timestamp: String,
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Take the text out of the field, remembering non-blank entries in the
    /// history.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.history_index = None;
        if !text.trim().is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Display width of the text before the cursor, in chars.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthField {
    Email,
    Password,
}

#[derive(Debug)]
pub struct AuthForm {
    pub visible: bool,
    pub mode: AuthMode,
    pub field: AuthField,
    pub email: InputState,
    pub password: InputState,
}

impl AuthForm {
    fn new() -> Self {
        Self {
            visible: false,
            mode: AuthMode::Login,
            field: AuthField::Email,
            email: InputState::new(),
            password: InputState::new(),
        }
    }

    pub fn active_input(&mut self) -> &mut InputState {
        match self.field {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn switch_field(&mut self) {
        self.field = match self.field {
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Email,
        };
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Register",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "New to the archive?",
            AuthMode::Register => "Already have an account?",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Register instead",
            AuthMode::Register => "Sign in instead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContributionField {
    Kind,
    Title,
    Description,
    Image,
}

impl ContributionField {
    const ORDER: [ContributionField; 4] = [
        ContributionField::Kind,
        ContributionField::Title,
        ContributionField::Description,
        ContributionField::Image,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct ContributionForm {
    pub kind: ContributionKind,
    pub field: ContributionField,
    pub title: InputState,
    pub description: InputState,
    pub image: InputState,
}

impl ContributionForm {
    fn new() -> Self {
        Self {
            kind: ContributionKind::Event,
            field: ContributionField::Title,
            title: InputState::new(),
            description: InputState::new(),
            image: InputState::new(),
        }
    }

    /// The text input under the field cursor, if the field is a text input.
    pub fn active_input(&mut self) -> Option<&mut InputState> {
        match self.field {
            ContributionField::Kind => None,
            ContributionField::Title => Some(&mut self.title),
            ContributionField::Description => Some(&mut self.description),
            ContributionField::Image => Some(&mut self.image),
        }
    }

    pub fn to_contribution(&self) -> Contribution {
        let image = self.image.text.trim();
        Contribution {
            kind: self.kind,
            title: self.title.text.trim().to_string(),
            description: self.description.text.trim().to_string(),
            image: (!image.is_empty()).then(|| PathBuf::from(image)),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[derive(Debug, Default)]
pub struct UploadPrompt {
    pub visible: bool,
    pub path: InputState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Calendar,
    Phrases,
    Search,
    Contribute,
}

pub struct AppState {
    pub config: AppConfig,
    pub events: Vec<Event>,
    pub phrases: Vec<Phrase>,
    pub calendar: CalendarCursor,
    pub selected_day: u32,
    pub phrase: PhraseCursor,
    pub focus: FocusPanel,
    pub search: InputState,
    pub contribution: ContributionForm,
    pub auth: AuthForm,
    pub upload: UploadPrompt,
    pub notices: VecDeque<Notice>,
    pub current_user: Option<User>,
    pub playing: Option<PhraseId>,
    pub play_generation: PlayId,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let today = Local::now().date_naive();
        let phrase = if config.ui.start_on_phrase_of_the_day {
            phrase::phrase_of_the_day(today, catalog.phrases.len())
                .map(PhraseCursor::new)
                .unwrap_or_default()
        } else {
            PhraseCursor::default()
        };
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            events: catalog.events,
            phrases: catalog.phrases,
            calendar: CalendarCursor::today(),
            selected_day: today.day(),
            phrase,
            focus: FocusPanel::Calendar,
            search: InputState::new(),
            contribution: ContributionForm::new(),
            auth: AuthForm::new(),
            upload: UploadPrompt::default(),
            notices: VecDeque::new(),
            current_user: None,
            playing: None,
            play_generation: 0,
            should_quit: false,
            dirty: true,
            tick_count: 0,
            timestamp_format,
        }
    }

    // -- calendar --

    pub fn grid(&self) -> CalendarGrid<'_> {
        render_month(self.calendar, &self.events)
    }

    pub fn selected_date(&self) -> String {
        self.calendar.iso_date(self.selected_day)
    }

    pub fn selected_events(&self) -> Vec<&Event> {
        self.grid()
            .cell_for_day(self.selected_day)
            .map(|cell| cell.events.clone())
            .unwrap_or_default()
    }

    pub fn set_calendar(&mut self, cursor: CalendarCursor) {
        self.calendar = cursor;
        self.selected_day = self.selected_day.clamp(1, cursor.days_in_month());
        self.dirty = true;
    }

    pub fn shift_month(&mut self, delta: i32) {
        self.set_calendar(advance_month(self.calendar, delta));
    }

    pub fn goto_today(&mut self) {
        self.set_calendar(CalendarCursor::today());
        self.selected_day = Local::now().day();
    }

    /// Move the selected day, rolling into the neighbouring month at either
    /// edge. Stops on the first or last representable day.
    pub fn move_selected_day(&mut self, delta: i32) {
        let mut day = self.selected_day as i64 + i64::from(delta);
        while day < 1 {
            let prev = advance_month(self.calendar, -1);
            if prev == self.calendar {
                day = 1;
                break;
            }
            self.calendar = prev;
            day += i64::from(self.calendar.days_in_month());
        }
        while day > i64::from(self.calendar.days_in_month()) {
            let next = advance_month(self.calendar, 1);
            if next == self.calendar {
                day = i64::from(self.calendar.days_in_month());
                break;
            }
            day -= i64::from(self.calendar.days_in_month());
            self.calendar = next;
        }
        self.selected_day = day as u32;
        self.dirty = true;
    }

    // -- phrases --

    pub fn current_phrase(&self) -> Result<&Phrase, CoreError> {
        phrase::current(&self.phrases, self.phrase)
    }

    pub fn next_phrase(&mut self) {
        match self.phrase.next(self.phrases.len()) {
            Ok(cursor) => self.phrase = cursor,
            Err(e) => warn!("cannot advance phrase: {}", e),
        }
        self.dirty = true;
    }

    pub fn prev_phrase(&mut self) {
        match self.phrase.prev(self.phrases.len()) {
            Ok(cursor) => self.phrase = cursor,
            Err(e) => warn!("cannot go back a phrase: {}", e),
        }
        self.dirty = true;
    }

    /// Mark `phrase_id` as playing and return the id of this request.
    pub fn start_playback(&mut self, phrase_id: PhraseId) -> PlayId {
        self.play_generation = self.play_generation.wrapping_add(1);
        self.playing = Some(phrase_id);
        self.play_generation
    }

    /// Clear the playing indicator if `play_id` is the latest request.
    pub fn finish_playback(&mut self, play_id: PlayId) {
        if self.play_generation == play_id && self.playing.take().is_some() {
            self.dirty = true;
        }
    }

    // -- notices --

    fn notice(&mut self, title: &str, body: String, kind: NoticeKind) {
        self.notices.push_back(Notice {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            title: title.to_string(),
            body,
            kind,
        });
        self.dirty = true;
    }

    pub fn info_notice(&mut self, title: &str, body: impl Into<String>) {
        self.notice(title, body.into(), NoticeKind::Info);
    }

    pub fn error_notice(&mut self, title: &str, body: impl Into<String>) {
        self.notice(title, body.into(), NoticeKind::Error);
    }

    pub fn active_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
        self.dirty = true;
    }

    // -- auth --

    pub fn open_auth(&mut self, mode: AuthMode) {
        self.auth.mode = mode;
        self.auth.field = AuthField::Email;
        self.auth.visible = true;
        self.dirty = true;
    }

    pub fn close_auth(&mut self) {
        self.auth.visible = false;
        self.auth.password.clear();
        self.dirty = true;
    }

    pub fn complete_auth(&mut self, mode: AuthMode, result: Result<User, BackendError>) {
        match result {
            Ok(user) => {
                self.current_user = Some(user);
                self.close_auth();
                let what = match mode {
                    AuthMode::Login => "Login",
                    AuthMode::Register => "Registration",
                };
                self.info_notice(
                    "Welcome",
                    format!(
                        "{} successful!\n(In a real app, this would properly authenticate with your backend)",
                        what
                    ),
                );
            }
            Err(e) => self.error_notice("Sign in failed", e.to_string()),
        }
    }

    // -- contribution / upload / search results --

    pub fn complete_contribution(&mut self, result: Result<Ack, BackendError>) {
        match result {
            Ok(ack) => {
                self.contribution.reset();
                self.info_notice("Contribution", ack.message);
            }
            Err(e) => self.error_notice("Contribution", e.to_string()),
        }
    }

    pub fn complete_upload(&mut self, result: Result<Ack, BackendError>) {
        match result {
            Ok(ack) => self.info_notice("Upload", ack.message),
            Err(e) => self.error_notice("Upload", e.to_string()),
        }
    }

    pub fn complete_search(&mut self, result: Result<Ack, BackendError>) {
        match result {
            Ok(ack) => self.info_notice("Search", ack.message),
            Err(e) => self.error_notice("Search", e.to_string()),
        }
    }

    // -- focus / status --

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Calendar => FocusPanel::Phrases,
            FocusPanel::Phrases => FocusPanel::Search,
            FocusPanel::Search => FocusPanel::Contribute,
            FocusPanel::Contribute => FocusPanel::Calendar,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Calendar => FocusPanel::Contribute,
            FocusPanel::Phrases => FocusPanel::Calendar,
            FocusPanel::Search => FocusPanel::Phrases,
            FocusPanel::Contribute => FocusPanel::Search,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let mut s = match &self.current_user {
            Some(user) => format!("Signed in as {}", user.name),
            None => "Not signed in".to_string(),
        };
        s.push_str(&format!(" | Events: {} | Phrases: {}", self.events.len(), self.phrases.len()));
        if self.playing.is_some() {
            s.push_str(" | ♪ playing");
        }
        s
    }
}
