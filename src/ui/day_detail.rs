use crate::app::state::AppState;
use crate::ui::panel_block;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block(format!(" Events · {} ", state.selected_date()), false);
    let events = state.selected_events();

    let mut lines: Vec<Line> = Vec::new();
    if events.is_empty() {
        lines.push(Line::from(Span::styled("No events on this day", Theme::muted())));
    }
    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            event.title.clone(),
            Theme::calendar_event().add_modifier(Modifier::BOLD),
        )));
        if !event.location.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("@ ", Theme::label()),
                Span::styled(event.location.clone(), Theme::text()),
            ]));
        }
        if !event.description.is_empty() {
            lines.push(Line::from(Span::styled(event.description.clone(), Theme::text())));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
