use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use crate::ui::{is_focused, panel_block};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const NOTES: [&str; 4] = ["♪", "♫", "♬", "♫"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = is_focused(state, FocusPanel::Phrases);
    let total = state.phrases.len();

    let phrase = match state.current_phrase() {
        Ok(phrase) => phrase,
        Err(_) => {
            let block = panel_block(" Phrase of the Day ".to_string(), focused);
            let empty = Paragraph::new(Span::styled(" No phrases loaded", Theme::muted())).block(block);
            frame.render_widget(empty, area);
            return;
        }
    };

    let title = format!(
        " Phrase of the Day ({}/{}) ",
        state.phrase.index() % total + 1,
        total
    );
    let block = panel_block(title, focused);

    let mut first = vec![Span::styled(phrase.phrase.clone(), Theme::phrase())];
    if state.playing == Some(phrase.id) {
        let note = NOTES[(state.tick_count / 2) as usize % NOTES.len()];
        first.push(Span::styled(format!("  {}", note), Theme::calendar_event()));
    }

    let mut lines = vec![
        Line::from(first),
        Line::from(vec![
            Span::styled("Translation: ", Theme::label()),
            Span::styled(phrase.translation.clone(), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Pronunciation: ", Theme::label()),
            Span::styled(phrase.pronunciation.clone(), Theme::text()),
        ]),
    ];

    if focused {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("←/→", Theme::key_hint()),
            Span::styled(" browse  ", Theme::muted()),
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" play  ", Theme::muted()),
            Span::styled("u", Theme::key_hint()),
            Span::styled(" upload audio", Theme::muted()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
