mod auth_modal;
mod calendar_view;
mod contribution_form;
mod day_detail;
mod header;
mod layout;
mod notice_popup;
mod phrase_panel;
mod search_box;
mod status_bar;
mod theme;
mod upload_prompt;

use crate::app::state::{AppState, FocusPanel};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    calendar_view::render(frame, app_layout.calendar, state);
    phrase_panel::render(frame, app_layout.phrase, state);
    day_detail::render(frame, app_layout.day_detail, state);
    contribution_form::render(frame, app_layout.contribution, state);
    search_box::render(frame, app_layout.search, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Popups draw over everything, the notice on top
    upload_prompt::render(frame, state);
    auth_modal::render(frame, state);
    notice_popup::render(frame, state);
}

/// Bordered panel block styled for its focus state.
fn panel_block(title: String, focused: bool) -> Block<'static> {
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };
    Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg)
}

fn is_focused(state: &AppState, panel: FocusPanel) -> bool {
    state.focus == panel
        && !state.auth.visible
        && !state.upload.visible
        && state.active_notice().is_none()
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`.
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with spaces to exactly `width` columns, truncating if needed.
pub(crate) fn pad_width(text: &str, width: usize) -> String {
    let fitted = fit_width(text, width);
    let pad = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(pad))
}
