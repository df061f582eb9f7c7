use chrono::{Datelike, NaiveDate, Weekday};
use salon_booking_api::services::seed_service::{sample_days, sample_time_slots};

#[test]
fn sample_slots_close_the_lunch_hour() {
    let slots = sample_time_slots();
    assert_eq!(slots.len(), 11);
    assert_eq!(slots.first().map(|s| s.0.as_str()), Some("09:00"));
    assert_eq!(slots.last().map(|s| s.0.as_str()), Some("19:00"));

    let closed: Vec<&str> = slots
        .iter()
        .filter(|(_, open)| !open)
        .map(|(time, _)| time.as_str())
        .collect();
    assert_eq!(closed, vec!["13:00"]);
}

#[test]
fn sample_days_close_sundays() {
    // 2024-05-06 is a Monday.
    let start = NaiveDate::from_ymd_opt(2024, 5, 6).expect("date");
    assert_eq!(start.weekday(), Weekday::Mon);

    let days = sample_days(start, 14);
    assert_eq!(days.len(), 14);
    assert_eq!(days[0].0, "2024-05-06");
    assert_eq!(days[13].0, "2024-05-19");

    let closed: Vec<&str> = days
        .iter()
        .filter(|(_, open)| !open)
        .map(|(date, _)| date.as_str())
        .collect();
    assert_eq!(closed, vec!["2024-05-12", "2024-05-19"]);
}
