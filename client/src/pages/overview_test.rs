use super::*;

#[test]
fn greeting_by_time_of_day() {
    assert_eq!(greeting(5), "Good morning");
    assert_eq!(greeting(11), "Good morning");
    assert_eq!(greeting(12), "Good afternoon");
    assert_eq!(greeting(17), "Good afternoon");
    assert_eq!(greeting(18), "Good evening");
    assert_eq!(greeting(0), "Good evening");
}

#[test]
fn current_hour_is_in_range() {
    assert!(current_hour() < 24);
}
