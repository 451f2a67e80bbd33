//! Profile and preference settings. Saving is a logged stub.

use leptos::prelude::*;

use crate::state::mock::{TEACHER_EMAIL, TEACHER_NAME};
use crate::state::nav::ShellState;
use crate::util::alert;
use crate::util::theme::{self, Theme};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let name = RwSignal::new(TEACHER_NAME.to_owned());
    let email = RwSignal::new(TEACHER_EMAIL.to_owned());
    let email_notifications = RwSignal::new(true);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!(
            "profile save requested: name={} email={} notifications={}",
            name.get_untracked(),
            email.get_untracked(),
            email_notifications.get_untracked()
        );
        alert::notify("Profile saved.");
    };

    view! {
        <div class="page">
            <form class="panel settings-form" on:submit=on_save>
                <h2 class="panel__title">"Profile"</h2>
                <label class="field">
                    <span class="field__label">"Display name"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="field__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || email_notifications.get()
                        on:change=move |ev| email_notifications.set(event_target_checked(&ev))
                    />
                    "Email me when students submit assignments"
                </label>
                <button class="btn btn--primary" type="submit">
                    "Save changes"
                </button>
            </form>
            <section class="panel">
                <h2 class="panel__title">"Appearance"</h2>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || shell.with(|s| s.dark_mode)
                        on:change=move |ev| {
                            let dark = event_target_checked(&ev);
                            theme::store(Theme::from_dark(dark));
                            shell.update(|s| s.dark_mode = dark);
                        }
                    />
                    "Dark mode"
                </label>
            </section>
        </div>
    }
}
