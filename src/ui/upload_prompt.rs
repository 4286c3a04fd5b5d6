use crate::app::state::AppState;
use crate::ui::layout::popup_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.upload.visible {
        return;
    }

    let popup = popup_area(frame.area(), 60, 20, 44, 6);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Upload Audio ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height < 3 {
        return;
    }

    let path = &state.upload.path;
    let lines = vec![
        Line::from(Span::styled(" Path to an audio file", Theme::label())),
        Line::from(vec![
            Span::styled(" ❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(path.text.as_str(), Theme::input_text()),
        ]),
        Line::from(vec![
            Span::styled(" Enter", Theme::key_hint()),
            Span::styled(" Upload  ", Theme::muted()),
            Span::styled("Esc", Theme::key_hint()),
            Span::styled(" Cancel", Theme::muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let x = (inner.x + 3 + path.cursor_column() as u16).min(inner.right().saturating_sub(1));
    frame.set_cursor_position((x, inner.y + 1));
}
