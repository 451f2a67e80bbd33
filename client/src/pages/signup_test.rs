use super::*;

#[test]
fn account_created_message_mentions_institution_when_present() {
    let request = SignupRequest {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@school.edu".to_owned(),
        institution: Some("Open University".to_owned()),
    };
    assert_eq!(account_created_message(&request), "Account created for Ada Lovelace at Open University.");
}

#[test]
fn account_created_message_without_institution() {
    let request = SignupRequest { full_name: "Ada".to_owned(), email: "a@b.c".to_owned(), institution: None };
    assert_eq!(account_created_message(&request), "Account created for Ada.");
}

#[test]
fn confirm_hint_waits_for_input() {
    let form = SignupForm { password: "abcdefgh".to_owned(), ..SignupForm::default() };
    assert_eq!(confirm_hint(&form), None);
}

#[test]
fn confirm_hint_flags_mismatch_and_clears_on_match() {
    let mut form = SignupForm {
        password: "abcdefgh".to_owned(),
        confirm_password: "abcd".to_owned(),
        ..SignupForm::default()
    };
    assert_eq!(confirm_hint(&form), Some("Passwords do not match yet."));
    form.confirm_password = "abcdefgh".to_owned();
    assert_eq!(confirm_hint(&form), None);
}
