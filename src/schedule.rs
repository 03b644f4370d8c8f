//! Week window and time grid computation.
//!
//! The schedule view shows a Monday-aligned 7-day window crossed with a fixed
//! sequence of hourly slot labels. Everything here is a pure function of the
//! reference date and the appointment collection, so the grid can be tested
//! without a terminal.

use chrono::{Datelike, Days, NaiveDate};
use lazy_static::lazy_static;

use crate::constants::schedule::{DAY_START_HOUR, SLOT_COUNT, WEEK_LENGTH};
use crate::model::Appointment;

lazy_static! {
    /// The fixed display slots: "09:00" through "20:00" inclusive.
    ///
    /// A static constant of the view, not derived from appointments or
    /// business-hours configuration.
    pub static ref TIME_SLOTS: Vec<String> = (0..SLOT_COUNT)
        .map(|i| format!("{:02}:00", DAY_START_HOUR + i as u32))
        .collect();
}

/// The Monday-aligned 7-day span shown in the grid.
///
/// Derived from the reference date and recomputed on every change; never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// The window containing `reference`: starts on the Monday on or before
    /// it (ISO week, Monday-first).
    #[must_use]
    pub fn containing(reference: NaiveDate) -> Self {
        let back = u64::from(reference.weekday().num_days_from_monday());
        // num_days_from_monday is at most 6, the subtraction cannot leave the
        // supported date range for any displayable date.
        let start = reference
            .checked_sub_days(Days::new(back))
            .unwrap_or(reference);
        Self { start }
    }

    /// Monday of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// The 7 consecutive dates, Monday through Sunday.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..WEEK_LENGTH as u64)
            .filter_map(|i| self.start.checked_add_days(Days::new(i)))
            .collect()
    }

    /// Whether `date` falls inside this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start
            && self
                .start
                .checked_add_days(Days::new(WEEK_LENGTH as u64))
                .is_some_and(|end| date < end)
    }
}

/// Shift a reference date one week forward.
#[must_use]
pub fn next_week(reference: NaiveDate) -> NaiveDate {
    reference
        .checked_add_days(Days::new(WEEK_LENGTH as u64))
        .unwrap_or(reference)
}

/// Shift a reference date one week back.
#[must_use]
pub fn previous_week(reference: NaiveDate) -> NaiveDate {
    reference
        .checked_sub_days(Days::new(WEEK_LENGTH as u64))
        .unwrap_or(reference)
}

/// The appointment occupying the (day, slot) cell, if any.
///
/// Matches on both the calendar date and the slot label. Multiple bookings in
/// one cell are not reconciled; the first match surfaces.
#[must_use]
pub fn appointment_at<'a>(
    appointments: &'a [Appointment],
    day: NaiveDate,
    slot: &str,
) -> Option<&'a Appointment> {
    appointments
        .iter()
        .find(|a| a.date == day && a.time == slot)
}
