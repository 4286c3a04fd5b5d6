use crate::app::state::{AppState, AuthField};
use crate::ui::layout::popup_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let auth = &state.auth;
    if !auth.visible {
        return;
    }

    let popup = popup_area(frame.area(), 50, 40, 44, 11);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", auth.submit_label()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height < 7 || inner.width < 20 {
        return;
    }

    let field_style = |field: AuthField| {
        if auth.field == field {
            Theme::field_active()
        } else {
            Theme::label()
        }
    };
    let masked = "•".repeat(auth.password.text.chars().count());

    let lines = vec![
        Line::from(Span::styled(" Email", field_style(AuthField::Email))),
        Line::from(Span::styled(format!(" {}", auth.email.text), Theme::input_text())),
        Line::from(Span::styled(" Password", field_style(AuthField::Password))),
        Line::from(Span::styled(format!(" {}", masked), Theme::input_text())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter", Theme::key_hint()),
            Span::styled(format!(" {}  ", auth.submit_label()), Theme::text()),
            Span::styled("Esc", Theme::key_hint()),
            Span::styled(" Close", Theme::muted()),
        ]),
        Line::from(vec![
            Span::styled(format!(" {} ", auth.switch_prompt()), Theme::muted()),
            Span::styled("Ctrl+T", Theme::key_hint()),
            Span::styled(format!(" {}", auth.switch_label()), Theme::text()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let (row, col) = match auth.field {
        AuthField::Email => (1, auth.email.cursor_column()),
        AuthField::Password => (3, auth.password.cursor_column()),
    };
    let x = (inner.x + 1 + col as u16).min(inner.right().saturating_sub(1));
    frame.set_cursor_position((x, inner.y + row));
}
