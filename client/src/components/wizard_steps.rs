//! Step indicator and progress bar for the course-creation wizard.

use leptos::prelude::*;

use crate::state::wizard::{CourseWizard, WizardStep};

/// Clickable step list. Steps past the furthest visited one are disabled.
#[component]
pub fn WizardSteps(#[prop(into)] wizard: Signal<CourseWizard>, on_select: Callback<WizardStep>) -> impl IntoView {
    let position = Memo::new(move |_| wizard.with(|w| (w.step, w.furthest)));
    let progress = Memo::new(move |_| wizard.with(CourseWizard::progress_percent));

    view! {
        <ol class="wizard-steps">
            {WizardStep::ALL
                .into_iter()
                .map(|step| {
                    view! {
                        <li
                            class="wizard-steps__item"
                            class:wizard-steps__item--active=move || position.get().0 == step
                            class:wizard-steps__item--done=move || step.is_done_at(position.get().0)
                        >
                            <button
                                type="button"
                                class="wizard-steps__button"
                                disabled=move || step.is_locked_at(position.get().1)
                                on:click=move |_| on_select.run(step)
                            >
                                <span class="wizard-steps__index">{step.index() + 1}</span>
                                <span class="wizard-steps__label">{step.label()}</span>
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
        <div class="wizard-progress" aria-hidden="true">
            <div class="wizard-progress__bar" style:width=move || format!("{}%", progress.get())></div>
        </div>
    }
}
