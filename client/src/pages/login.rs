//! Teacher login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! No credentials are checked. A submit that passes form validation is
//! logged (without the password), acknowledged with a placeholder alert, and
//! routed to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth_forms::LoginForm;
use crate::state::course::FormError;
use crate::util::alert;
use crate::util::redirect::install_redirect;

fn welcome_message(email: &str) -> String {
    format!("Welcome back, {email}! Sign-in is a demo, so no account was checked.")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let error = RwSignal::new(None::<FormError>);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(LoginForm::validate) {
            Ok(email) => {
                error.set(None);
                let remember_me = form.with_untracked(|f| f.remember_me);
                leptos::logging::log!("login submitted: email={email} remember_me={remember_me}");
                alert::notify(&welcome_message(&email));
                redirect.set(Some("/".to_owned()));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__brand">
                    <span class="auth-card__logo" aria-hidden="true">"🎓"</span>
                    <h1>"TeachDesk"</h1>
                </div>
                <p class="auth-card__subtitle">"Sign in to manage your courses"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@school.edu"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <div class="auth-form__row">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.remember_me)
                                on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <a
                            class="auth-form__link"
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                alert::notify("Password reset is not available in this demo.");
                            }
                        >
                            "Forgot password?"
                        </a>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error" role="alert">
                            {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit">
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "New to TeachDesk? "
                    <A href="/signup">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
