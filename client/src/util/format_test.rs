use super::*;
use time::macros::date;

#[test]
fn format_date_renders_short_month() {
    assert_eq!(format_date("2025-03-14"), "Mar 14, 2025");
    assert_eq!(format_date("2025-12-01"), "Dec 1, 2025");
}

#[test]
fn format_date_passes_through_garbage() {
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(format_date(""), "");
}

#[test]
fn parse_iso_date_rejects_impossible_dates() {
    assert_eq!(parse_iso_date("2024-02-29"), Some(date!(2024 - 02 - 29)));
    assert_eq!(parse_iso_date("2025-02-29"), None);
    assert_eq!(parse_iso_date("14/03/2025"), None);
}

#[test]
fn due_status_buckets() {
    let today = date!(2025 - 03 - 10);
    assert_eq!(due_status("2025-03-09", today), DueStatus::Overdue);
    assert_eq!(due_status("2025-03-10", today), DueStatus::DueSoon);
    assert_eq!(due_status("2025-03-13", today), DueStatus::DueSoon);
    assert_eq!(due_status("2025-03-14", today), DueStatus::Upcoming);
    assert_eq!(due_status("", today), DueStatus::NoDate);
}

#[test]
fn percent_class_thresholds() {
    assert_eq!(percent_class(100), "high");
    assert_eq!(percent_class(80), "high");
    assert_eq!(percent_class(79), "mid");
    assert_eq!(percent_class(50), "mid");
    assert_eq!(percent_class(49), "low");
}

#[test]
fn initials_takes_first_two_words() {
    assert_eq!(initials("amara okafor"), "AO");
    assert_eq!(initials("Mary Ann Evans"), "MA");
    assert_eq!(initials("Plato"), "P");
    assert_eq!(initials("   "), "");
}

#[test]
fn pluralize_handles_one() {
    assert_eq!(pluralize(1, "lesson", "lessons"), "1 lesson");
    assert_eq!(pluralize(0, "lesson", "lessons"), "0 lessons");
}

#[test]
fn today_is_a_real_date() {
    assert!(today().year() >= 2024);
}
