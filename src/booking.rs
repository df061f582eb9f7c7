//! Slot availability for the booking form.
//!
//! A time is offerable on a date when the date is not in the past, the day is
//! not closed by an admin, the time is in the open slot list, and no appointment
//! that still holds its slot was booked at that time. Nothing here locks: the
//! check and the insert that follows it are separate queries.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use validator::ValidationError;

use crate::models::{Appointment, AvailableDay, AvailableTimeSlot};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Daily slots offered when no time slot has been configured.
pub const DEFAULT_TIME_SLOTS: [&str; 9] = [
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// Parse a zero-padded `YYYY-MM-DD` date.
pub fn parse_booking_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse a zero-padded 24h `HH:MM` time.
pub fn parse_booking_time(value: &str) -> Option<NaiveTime> {
    if value.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    match parse_booking_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date_format")
            .with_message("date must be formatted as YYYY-MM-DD".into())),
    }
}

pub fn validate_time(value: &str) -> Result<(), ValidationError> {
    match parse_booking_time(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("time_format")
            .with_message("time must be formatted as HH:MM".into())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub is_open: bool,
    pub slots: Vec<String>,
}

impl Availability {
    fn closed() -> Self {
        Self {
            is_open: false,
            slots: Vec::new(),
        }
    }
}

/// Times still bookable on `date`.
///
/// `day` is the admin row for that date, if any; a date without a row is open.
/// `slots` is the whole configured slot table; when it is empty the
/// [`DEFAULT_TIME_SLOTS`] apply. `booked` may contain appointments for other
/// dates, they are ignored.
pub fn offerable_slots(
    date: NaiveDate,
    today: NaiveDate,
    day: Option<&AvailableDay>,
    slots: &[AvailableTimeSlot],
    booked: &[Appointment],
) -> Availability {
    if date < today {
        return Availability::closed();
    }
    if day.is_some_and(|d| !d.is_available) {
        return Availability::closed();
    }

    let date_key = date.format(DATE_FORMAT).to_string();
    let taken: HashSet<&str> = booked
        .iter()
        .filter(|a| a.date == date_key && a.status.holds_slot())
        .map(|a| a.time.as_str())
        .collect();

    let mut candidates: Vec<String> = if slots.is_empty() {
        DEFAULT_TIME_SLOTS.iter().map(|t| t.to_string()).collect()
    } else {
        slots
            .iter()
            .filter(|s| s.is_available)
            .map(|s| s.time.clone())
            .collect()
    };
    // HH:MM is zero padded, so lexical order is chronological.
    candidates.sort();
    candidates.dedup();

    let slots = candidates
        .into_iter()
        .filter(|t| !taken.contains(t.as_str()))
        .collect();

    Availability {
        is_open: true,
        slots,
    }
}

/// The salon's current calendar date, in server local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
