use super::CalendarCursor;
use crate::content::Event;

/// A dated cell and the events that fall on it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub day: u32,
    pub date: String,
    pub events: Vec<&'a Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarCell<'a> {
    /// Padding before the 1st so day 1 lands under its weekday.
    Blank,
    Day(DayCell<'a>),
}

impl<'a> CalendarCell<'a> {
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            CalendarCell::Day(cell) => Some(cell),
            CalendarCell::Blank => None,
        }
    }
}

/// One month laid out Sunday-first, row-major, seven cells per week.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid<'a> {
    pub cursor: CalendarCursor,
    pub cells: Vec<CalendarCell<'a>>,
}

impl<'a> CalendarGrid<'a> {
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, CalendarCell::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter_map(CalendarCell::as_day)
    }

    pub fn cell_for_day(&self, day: u32) -> Option<&DayCell<'a>> {
        self.days().find(|c| c.day == day)
    }

    /// Cells chunked into weeks; the last week may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell<'a>]> {
        self.cells.chunks(7)
    }
}

/// Lay out the cursor's month and attach every event whose date string
/// equals the cell's ISO date.
pub fn render_month<'a>(cursor: CalendarCursor, events: &'a [Event]) -> CalendarGrid<'a> {
    let blanks = cursor.first_weekday() as usize;
    let days = cursor.days_in_month();

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_with(|| CalendarCell::Blank).take(blanks));

    for day in 1..=days {
        let date = cursor.iso_date(day);
        let events = events.iter().filter(|e| e.date == date).collect();
        cells.push(CalendarCell::Day(DayCell { day, date, events }));
    }

    CalendarGrid { cursor, cells }
}
