use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub calendar: Rect,
    pub phrase: Rect,
    pub day_detail: Rect,
    pub contribution: Rect,
    pub search: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | content | search | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Horizontal: calendar | gap | right column
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(58), Constraint::Min(32)])
        .split(main_chunks[1]);

    // Right column: phrase | selected day | contribution form
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Phrase of the day
            Constraint::Min(4),    // Selected day events
            Constraint::Length(8), // Contribution form
        ])
        .split(h_chunks[1]);

    AppLayout {
        header: main_chunks[0],
        calendar: h_chunks[0],
        phrase: right_chunks[0],
        day_detail: right_chunks[1],
        contribution: right_chunks[2],
        search: main_chunks[2],
        status_bar: main_chunks[3],
    }
}

/// Centered popup of the given percentage size, clamped to a minimum and to
/// the screen.
pub fn popup_area(area: Rect, pct_w: u16, pct_h: u16, min_w: u16, min_h: u16) -> Rect {
    let popup_w = (area.width * pct_w / 100)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let popup_h = (area.height * pct_h / 100)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_screen() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = compute_layout(area);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.search.height, 3);
        assert!(layout.calendar.width > layout.phrase.width);
        assert_eq!(layout.phrase.x, layout.contribution.x);
    }

    #[test]
    fn test_popup_area_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_area(area, 50, 50, 40, 10);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));

        let small = Rect::new(0, 0, 30, 8);
        let popup = popup_area(small, 50, 50, 40, 10);
        assert_eq!(popup.width, 26);
        assert_eq!(popup.height, 6);
    }
}
