//! Teacher signup page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Same stub contract as login: validation is the only gate, and an accepted
//! form is logged, alerted, and routed to the dashboard.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth_forms::{MIN_PASSWORD_LEN, SignupForm, SignupRequest};
use crate::state::course::FormError;
use crate::util::alert;
use crate::util::redirect::install_redirect;

fn account_created_message(request: &SignupRequest) -> String {
    match &request.institution {
        Some(institution) => format!("Account created for {} at {institution}.", request.full_name),
        None => format!("Account created for {}.", request.full_name),
    }
}

/// Live hint under the confirm field; `None` once both entries agree.
fn confirm_hint(form: &SignupForm) -> Option<&'static str> {
    if form.confirm_password.is_empty() || form.password == form.confirm_password {
        None
    } else {
        Some("Passwords do not match yet.")
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(None::<FormError>);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(SignupForm::validate) {
            Ok(request) => {
                error.set(None);
                leptos::logging::log!(
                    "signup submitted: name={} email={} institution={:?}",
                    request.full_name,
                    request.email,
                    request.institution
                );
                alert::notify(&account_created_message(&request));
                redirect.set(Some("/".to_owned()));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           autocomplete: &'static str,
                           read: fn(&SignupForm) -> String,
                           write: fn(&mut SignupForm, String)| {
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="field__input"
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || form.with(read)
                    on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <div class="auth-card__brand">
                    <span class="auth-card__logo" aria-hidden="true">"🎓"</span>
                    <h1>"Create your account"</h1>
                </div>
                <p class="auth-card__subtitle">"Start building courses for your students"</p>
                <form class="auth-form" on:submit=on_submit>
                    {text_field("Full name", "text", "name", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {text_field("Email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field(
                        "Institution (optional)",
                        "text",
                        "organization",
                        |f| f.institution.clone(),
                        |f, v| f.institution = v,
                    )}
                    <div class="field-row">
                        {text_field("Password", "password", "new-password", |f| f.password.clone(), |f, v| f.password = v)}
                        {text_field(
                            "Confirm password",
                            "password",
                            "new-password",
                            |f| f.confirm_password.clone(),
                            |f, v| f.confirm_password = v,
                        )}
                    </div>
                    <p class="field__hint">{format!("At least {MIN_PASSWORD_LEN} characters.")}</p>
                    <Show when=move || form.with(|f| confirm_hint(f).is_some())>
                        <p class="field__hint field__hint--warn">
                            {move || form.with(|f| confirm_hint(f).unwrap_or_default())}
                        </p>
                    </Show>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                        />
                        "I agree to the terms of service"
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error" role="alert">
                            {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit">
                        "Create account"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
