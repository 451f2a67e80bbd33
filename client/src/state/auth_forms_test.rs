use super::*;

fn signup() -> SignupForm {
    SignupForm {
        full_name: " Ada Lovelace ".to_owned(),
        email: "Ada@School.edu".to_owned(),
        password: "analytical".to_owned(),
        confirm_password: "analytical".to_owned(),
        institution: "  ".to_owned(),
        accept_terms: true,
    }
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_trims_and_lowercases_email() {
    let form = LoginForm { email: "  T@Example.COM ".to_owned(), password: "pw".to_owned(), remember_me: false };
    assert_eq!(form.validate(), Ok("t@example.com".to_owned()));
}

#[test]
fn login_requires_email_then_password() {
    let form = LoginForm::default();
    assert_eq!(form.validate(), Err(FormError::MissingEmail));
    let form = LoginForm { email: "a@b.c".to_owned(), ..LoginForm::default() };
    assert_eq!(form.validate(), Err(FormError::MissingPassword));
}

#[test]
fn login_rejects_malformed_email() {
    for email in ["plain", "@school.edu", "teacher@", "a@b@c"] {
        let form = LoginForm { email: email.to_owned(), password: "pw".to_owned(), remember_me: true };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail), "email = {email:?}");
    }
}

// =============================================================
// SignupForm
// =============================================================

#[test]
fn signup_accepts_valid_form() {
    let request = signup().validate().unwrap();
    assert_eq!(request.full_name, "Ada Lovelace");
    assert_eq!(request.email, "ada@school.edu");
    assert_eq!(request.institution, None);
}

#[test]
fn signup_keeps_institution_when_present() {
    let form = SignupForm { institution: " Open University ".to_owned(), ..signup() };
    assert_eq!(form.validate().unwrap().institution.as_deref(), Some("Open University"));
}

#[test]
fn signup_requires_matching_passwords() {
    let form = SignupForm { confirm_password: "analytica1".to_owned(), ..signup() };
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
}

#[test]
fn signup_enforces_minimum_password_length() {
    let form = SignupForm { password: "short".to_owned(), confirm_password: "short".to_owned(), ..signup() };
    assert_eq!(form.validate(), Err(FormError::PasswordTooShort { min: MIN_PASSWORD_LEN }));
}

#[test]
fn signup_requires_terms() {
    let form = SignupForm { accept_terms: false, ..signup() };
    assert_eq!(form.validate(), Err(FormError::TermsNotAccepted));
}

#[test]
fn signup_requires_name_first() {
    let form = SignupForm { full_name: String::new(), email: String::new(), ..signup() };
    assert_eq!(form.validate(), Err(FormError::MissingName));
}
