#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_accepts_outside_browser() {
    assert!(confirm("Delete lesson?"));
}

#[test]
fn notify_is_callable_outside_browser() {
    notify("Course published");
}
