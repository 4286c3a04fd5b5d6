use crate::app::state::*;
use crate::ui::theme::Theme;
use crate::ui::{is_focused, panel_block};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = is_focused(state, FocusPanel::Search);
    let block = panel_block(" Search ".to_string(), focused).padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.search.text;

    if focused {
        // Prompt chevron + input text
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(input_text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Cursor offset: chevron "❯ " (2 chars)
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.search.cursor_column() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    } else if input_text.is_empty() {
        let hint = Paragraph::new(Span::styled("Search phrases and events…", Theme::muted()));
        frame.render_widget(hint, inner);
    } else {
        let paragraph = Paragraph::new(input_text.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
    }
}
