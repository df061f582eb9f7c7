use chrono::{NaiveDate, Utc};
use salon_booking_api::{
    booking::{DEFAULT_TIME_SLOTS, offerable_slots, parse_booking_date, parse_booking_time},
    models::{Appointment, AppointmentStatus, AvailableDay, AvailableTimeSlot},
};

fn date(s: &str) -> NaiveDate {
    parse_booking_date(s).expect("valid date")
}

fn slot(id: i32, time: &str, is_available: bool) -> AvailableTimeSlot {
    AvailableTimeSlot {
        id,
        time: time.into(),
        is_available,
    }
}

fn day(date: &str, is_available: bool) -> AvailableDay {
    AvailableDay {
        id: 1,
        date: date.into(),
        is_available,
    }
}

fn booked(date: &str, time: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: 1,
        service_id: 1,
        stylist_id: None,
        first_name: "Ana".into(),
        last_name: "Diaz".into(),
        email: "ana@example.com".into(),
        phone: "555-0100".into(),
        date: date.into(),
        time: time.into(),
        comments: None,
        status,
        created_at: Utc::now(),
    }
}

#[test]
fn past_dates_are_closed() {
    let result = offerable_slots(
        date("2024-05-09"),
        date("2024-05-10"),
        None,
        &[slot(1, "10:00", true)],
        &[],
    );
    assert!(!result.is_open);
    assert!(result.slots.is_empty());
}

#[test]
fn today_is_still_bookable() {
    let today = date("2024-05-10");
    let result = offerable_slots(today, today, None, &[slot(1, "10:00", true)], &[]);
    assert!(result.is_open);
    assert_eq!(result.slots, vec!["10:00"]);
}

#[test]
fn closed_day_offers_nothing() {
    let result = offerable_slots(
        date("2024-05-12"),
        date("2024-05-10"),
        Some(&day("2024-05-12", false)),
        &[slot(1, "10:00", true)],
        &[],
    );
    assert!(!result.is_open);
    assert!(result.slots.is_empty());
}

#[test]
fn day_without_row_is_open() {
    let result = offerable_slots(
        date("2024-05-12"),
        date("2024-05-10"),
        None,
        &[slot(1, "11:00", true), slot(2, "09:00", true)],
        &[],
    );
    assert!(result.is_open);
    assert_eq!(result.slots, vec!["09:00", "11:00"]);
}

#[test]
fn disabled_and_booked_slots_are_removed() {
    let target = "2024-05-12";
    let slots = [
        slot(1, "10:00", true),
        slot(2, "11:00", true),
        slot(3, "12:00", false),
        slot(4, "13:00", true),
    ];
    let appointments = [
        booked(target, "11:00", AppointmentStatus::Confirmed),
        booked(target, "13:00", AppointmentStatus::Cancelled),
        booked("2024-05-13", "10:00", AppointmentStatus::Pending),
    ];

    let result = offerable_slots(
        date(target),
        date("2024-05-10"),
        Some(&day(target, true)),
        &slots,
        &appointments,
    );

    assert!(result.is_open);
    assert_eq!(result.slots, vec!["10:00", "13:00"]);
}

#[test]
fn empty_slot_table_falls_back_to_defaults() {
    let target = "2024-05-12";
    let result = offerable_slots(
        date(target),
        date("2024-05-10"),
        None,
        &[],
        &[booked(target, "10:00", AppointmentStatus::Pending)],
    );

    let expected: Vec<String> = DEFAULT_TIME_SLOTS
        .iter()
        .filter(|t| **t != "10:00")
        .map(|t| t.to_string())
        .collect();
    assert_eq!(result.slots, expected);
}

#[test]
fn all_slots_disabled_means_open_but_empty() {
    let result = offerable_slots(
        date("2024-05-12"),
        date("2024-05-10"),
        None,
        &[slot(1, "10:00", false)],
        &[],
    );
    assert!(result.is_open);
    assert!(result.slots.is_empty());
}

#[test]
fn dates_and_times_must_be_zero_padded() {
    assert!(parse_booking_date("2024-05-12").is_some());
    assert!(parse_booking_date("2024-5-12").is_none());
    assert!(parse_booking_date("2024-02-30").is_none());
    assert!(parse_booking_date("12/05/2024").is_none());

    assert!(parse_booking_time("09:30").is_some());
    assert!(parse_booking_time("9:30").is_none());
    assert!(parse_booking_time("24:00").is_none());
    assert!(parse_booking_time("09:30:00").is_none());
}

#[test]
fn status_parses_lowercase_names_only() {
    assert_eq!(
        "confirmed".parse::<AppointmentStatus>(),
        Ok(AppointmentStatus::Confirmed)
    );
    assert!("Confirmed".parse::<AppointmentStatus>().is_err());
    assert_eq!(AppointmentStatus::default(), AppointmentStatus::Pending);
    assert!(!AppointmentStatus::Cancelled.holds_slot());
    assert!(AppointmentStatus::Completed.holds_slot());
    assert_eq!(
        serde_json::to_value(AppointmentStatus::Cancelled).expect("serialize"),
        serde_json::json!("cancelled")
    );
}
