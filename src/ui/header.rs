use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);

    let mut left = vec![
        Span::styled(" ◆ ", bg.fg(Theme::ACCENT_TEAL).add_modifier(Modifier::BOLD)),
        Span::styled("Phrasebook", bg.fg(Theme::TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled(" │ ", bg.fg(Theme::BORDER_DIM)),
        Span::styled(state.calendar.title(), bg.fg(Theme::TEXT_SECONDARY)),
    ];

    // Sign-in hints only while nobody is signed in
    let right: Vec<Span> = match &state.current_user {
        Some(user) => vec![
            Span::styled("● ", bg.fg(Theme::ACCENT_GREEN)),
            Span::styled(format!("{} ", user.name), bg.fg(Theme::TEXT_PRIMARY)),
        ],
        None => vec![
            Span::styled("F2", bg.fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)),
            Span::styled(" Sign in  ", bg.fg(Theme::TEXT_SECONDARY)),
            Span::styled("F3", bg.fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)),
            Span::styled(" Register ", bg.fg(Theme::TEXT_SECONDARY)),
        ],
    };

    let used: usize = left.iter().chain(right.iter()).map(|s| s.width()).sum();
    left.push(Span::styled(
        " ".repeat((area.width as usize).saturating_sub(used)),
        bg,
    ));
    left.extend(right);

    frame.render_widget(Paragraph::new(Line::from(left)).style(bg), area);
}
