use crate::app::state::*;
use crate::ui::theme::Theme;
use crate::ui::{is_focused, panel_block};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const LABEL_WIDTH: u16 = 13;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = is_focused(state, FocusPanel::Contribute);
    let block = panel_block(" Contribute ".to_string(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &state.contribution;
    let active = |field: ContributionField| focused && form.field == field;
    let label = |text: &str, field: ContributionField| {
        let style = if active(field) { Theme::field_active() } else { Theme::label() };
        let marker = if active(field) { "› " } else { "  " };
        Span::styled(format!("{}{:<11}", marker, text), style)
    };

    let mut lines = vec![
        Line::from(vec![
            label("Type", ContributionField::Kind),
            Span::styled(
                if active(ContributionField::Kind) {
                    format!("◂ {} ▸", form.kind)
                } else {
                    form.kind.to_string()
                },
                Theme::text(),
            ),
        ]),
        Line::from(vec![
            label("Title", ContributionField::Title),
            Span::styled(form.title.text.as_str(), Theme::input_text()),
        ]),
        Line::from(vec![
            label("Description", ContributionField::Description),
            Span::styled(form.description.text.as_str(), Theme::input_text()),
        ]),
        Line::from(vec![
            label("Image", ContributionField::Image),
            Span::styled(form.image.text.as_str(), Theme::input_text()),
        ]),
    ];

    let footer = if state.current_user.is_none() {
        Line::from(vec![
            Span::styled("F2", Theme::key_hint()),
            Span::styled(" sign in to contribute", Theme::muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled("↑↓", Theme::key_hint()),
            Span::styled(" field  ", Theme::muted()),
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" submit", Theme::muted()),
        ])
    };
    lines.push(footer);

    frame.render_widget(Paragraph::new(lines), inner);

    if focused {
        let row = match form.field {
            ContributionField::Kind => None,
            ContributionField::Title => Some((1u16, &form.title)),
            ContributionField::Description => Some((2, &form.description)),
            ContributionField::Image => Some((3, &form.image)),
        };
        if let Some((row, input)) = row {
            let x = inner.x + LABEL_WIDTH + input.cursor_column() as u16;
            if row < inner.height {
                frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + row));
            }
        }
    }
}
