//! Login and signup form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no session backend: a valid submit is logged and acknowledged
//! with a placeholder alert before routing to the dashboard. Validation here
//! is the only gate.

#[cfg(test)]
#[path = "auth_forms_test.rs"]
mod auth_forms_test;

use crate::state::course::FormError;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// Validate input, returning the normalized email on success.
    pub fn validate(&self) -> Result<String, FormError> {
        let email = validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(email)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub institution: String,
    pub accept_terms: bool,
}

/// Accepted signup with trimmed identity fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub institution: Option<String>,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, FormError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort { min: MIN_PASSWORD_LEN });
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.accept_terms {
            return Err(FormError::TermsNotAccepted);
        }
        let institution = Some(self.institution.trim().to_owned()).filter(|i| !i.is_empty());
        Ok(SignupRequest { full_name: full_name.to_owned(), email, institution })
    }
}

fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email.to_ascii_lowercase())
        }
        _ => Err(FormError::InvalidEmail),
    }
}
