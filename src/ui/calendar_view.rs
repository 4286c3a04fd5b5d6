use crate::app::state::{AppState, FocusPanel};
use crate::calendar::{CalendarCell, DAY_NAMES};
use crate::ui::theme::Theme;
use crate::ui::{fit_width, is_focused, pad_width, panel_block};
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = is_focused(state, FocusPanel::Calendar);
    let block = panel_block(format!(" {} ", state.calendar.title()), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 14 || inner.height < 3 {
        return;
    }

    let grid = state.grid();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let cell_w = (inner.width / 7) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(
        DAY_NAMES
            .iter()
            .map(|d| Span::styled(pad_width(d, cell_w), Theme::day_header()))
            .collect::<Vec<_>>(),
    ));

    let weeks: Vec<_> = grid.weeks().collect();
    let avail = (inner.height as usize).saturating_sub(2);
    let rows_per_week = (avail / weeks.len().max(1)).clamp(1, 4);

    for week in weeks {
        let mut numbers: Vec<Span> = Vec::new();
        let mut event_rows: Vec<Vec<Span>> = vec![Vec::new(); rows_per_week - 1];

        for cell in week {
            match cell {
                CalendarCell::Blank => {
                    numbers.push(Span::raw(" ".repeat(cell_w)));
                    for row in event_rows.iter_mut() {
                        row.push(Span::raw(" ".repeat(cell_w)));
                    }
                }
                CalendarCell::Day(day) => {
                    let style = if day.day == state.selected_day {
                        Theme::day_selected()
                    } else if day.date == today {
                        Theme::day_today()
                    } else {
                        Theme::day_number()
                    };
                    let marker = if day.events.is_empty() { " " } else { "•" };
                    numbers.push(Span::styled(format!("{:>2}", day.day), style));
                    numbers.push(Span::styled(
                        pad_width(marker, cell_w.saturating_sub(2)),
                        Theme::calendar_event(),
                    ));

                    let slots = event_rows.len();
                    for (i, row) in event_rows.iter_mut().enumerate() {
                        let text = match day.events.get(i) {
                            // Last slot summarises whatever does not fit
                            Some(_) if i + 1 == slots && day.events.len() > slots => {
                                format!("+{} more", day.events.len() - i)
                            }
                            Some(event) => event.title.clone(),
                            None => String::new(),
                        };
                        let text = fit_width(&text, cell_w.saturating_sub(1));
                        row.push(Span::styled(pad_width(&text, cell_w), Theme::calendar_event()));
                    }
                }
            }
        }

        lines.push(Line::from(numbers));
        lines.extend(event_rows.into_iter().map(Line::from));
    }

    if focused {
        lines.push(Line::from(vec![
            Span::styled("←↑↓→", Theme::key_hint()),
            Span::styled(" day  ", Theme::muted()),
            Span::styled("PgUp/PgDn", Theme::key_hint()),
            Span::styled(" month  ", Theme::muted()),
            Span::styled("t", Theme::key_hint()),
            Span::styled(" today", Theme::muted()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
