use super::*;

#[test]
fn welcome_message_names_the_email() {
    let message = welcome_message("t@school.edu");
    assert!(message.starts_with("Welcome back, t@school.edu!"));
    assert!(message.contains("demo"));
}
