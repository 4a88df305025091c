//! Day-grid month calendar math and the sponsor-to-event mapping.
//!
//! The month view always shows six full weeks starting on the Sunday on or
//! before the first of the month, so every range handed to the event source
//! spans exactly [`GRID_DAYS`] days.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::{CalendarEvent, Sponsor, DATE_FORMAT};

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_DAYS: u64 = (DAYS_PER_WEEK * GRID_WEEKS) as u64;

pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Half-open date range `[start, end)` currently visible in the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VisibleRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Six-week grid covering the month that contains `date`.
    pub fn month_grid(date: NaiveDate) -> Self {
        let first = first_of_month(date);
        let lead = u64::from(first.weekday().num_days_from_sunday());
        let start = first - Days::new(lead);
        Self {
            start,
            end: start + Days::new(GRID_DAYS),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day < end)
    }

    /// Days of the range grouped into rows of seven.
    pub fn weeks(&self) -> Vec<Vec<NaiveDate>> {
        self.days()
            .collect::<Vec<_>>()
            .chunks(DAYS_PER_WEEK)
            .map(<[NaiveDate]>::to_vec)
            .collect()
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from the month of `date`.
/// Falls back to the current month when the result leaves chrono's range.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

pub fn to_calendar_events(sponsors: Vec<Sponsor>) -> Vec<CalendarEvent> {
    sponsors.into_iter().map(CalendarEvent::from).collect()
}

pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> impl Iterator<Item = &CalendarEvent> {
    events.iter().filter(move |event| event.start == day)
}

// ============================================================================
// Request ordering
// ============================================================================

/// Ticket identifying one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic counter that lets only the newest request update the view.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Issues a ticket for a new request, superseding all earlier tickets.
    pub fn issue(&mut self) -> RequestTicket {
        self.current += 1;
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.current
    }
}
