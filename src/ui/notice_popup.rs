use crate::app::state::{AppState, NoticeKind};
use crate::ui::layout::popup_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(notice) = state.active_notice() else {
        return;
    };

    let popup = popup_area(frame.area(), 50, 30, 40, 8);
    frame.render_widget(Clear, popup);

    let accent = match notice.kind {
        NoticeKind::Info => Theme::notice_info(),
        NoticeKind::Error => Theme::notice_error(),
    };
    let queued = state.notices.len().saturating_sub(1);
    let title = if queued > 0 {
        format!(" {} · {} (+{}) ", notice.title, notice.timestamp, queued)
    } else {
        format!(" {} · {} ", notice.title, notice.timestamp)
    };

    let block = Block::default()
        .title(title)
        .title_style(accent.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(accent)
        .style(Style::default().bg(Theme::BG_SURFACE));

    let mut lines: Vec<Line> = notice
        .body
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Theme::text())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" OK", Theme::muted()),
    ]));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}
