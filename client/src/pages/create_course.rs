//! Course-creation wizard page.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `RwSignal<CourseWizard>`. Step one edits the details
//! draft directly; the curriculum and assignment steps reuse the workspace
//! panels from the course detail page, pointed at the wizard's embedded
//! workspace. Publishing adds the course to the session catalog and returns
//! to the course list.

#[cfg(test)]
#[path = "create_course_test.rs"]
mod create_course_test;

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::assignment_panel::AssignmentPanel;
use crate::components::lesson_panel::LessonPanel;
use crate::components::wizard_steps::WizardSteps;
use crate::state::catalog::CatalogState;
use crate::state::course::CourseLevel;
use crate::state::ids::next_id;
use crate::state::wizard::{CourseWizard, DetailsEdit, MAX_WEEKS, MIN_WEEKS, WizardStep};
use crate::state::workspace::{CourseWorkspace, WorkspaceAction};
use crate::util::alert;
use crate::util::format::pluralize;
use crate::util::redirect::install_redirect;

const CATEGORIES: [&str; 7] = [
    "Programming",
    "Computer Science",
    "Design",
    "Mathematics",
    "Science",
    "Languages",
    "Business",
];

fn included(on: bool) -> &'static str {
    if on { "Included" } else { "Not included" }
}

/// Label/value pairs summarizing the details step on the review screen.
fn review_rows(wizard: &CourseWizard) -> Vec<(&'static str, String)> {
    let details = &wizard.details;
    let or_unset = |raw: &str| {
        let trimmed = raw.trim();
        if trimmed.is_empty() { "Not set".to_owned() } else { trimmed.to_owned() }
    };
    let category = details.category.trim();
    let duration = details.validate().map_or_else(
        |_| "Not set".to_owned(),
        |weeks| pluralize(usize::try_from(weeks).unwrap_or_default(), "week", "weeks"),
    );
    vec![
        ("Title", or_unset(&details.title)),
        ("Description", or_unset(&details.description)),
        ("Category", if category.is_empty() { "General".to_owned() } else { category.to_owned() }),
        ("Level", details.level.label().to_owned()),
        ("Duration", duration),
        ("Study materials", included(details.include_study_materials).to_owned()),
        ("Media links", included(details.include_media_links).to_owned()),
    ]
}

#[component]
pub fn CreateCoursePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let wizard = RwSignal::new(CourseWizard::default());
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let error = Memo::new(move |_| wizard.with(|w| w.error.as_ref().map(ToString::to_string)));
    let content = Signal::derive(move || wizard.with(|w| w.content.clone()));

    let on_select = Callback::new(move |target: WizardStep| {
        if let Some(Err(err)) = wizard.try_update(|w| w.go_to(target)) {
            warn!("wizard jump to {target:?} refused: {err}");
        }
    });
    let dispatch = Callback::new(move |action: WorkspaceAction| {
        if let Some(Err(err)) = wizard.try_update(|w| w.content.apply(action)) {
            warn!("wizard content action refused: {err}");
        }
    });

    let on_next = move |_| {
        if let Some(Err(err)) = wizard.try_update(CourseWizard::next) {
            log!("wizard stayed on {:?}: {err}", step.get_untracked());
        }
    };
    let on_publish = move |_| match wizard.try_update(|w| w.publish(next_id("course"))) {
        Some(Ok((course, content))) => {
            log!(
                "course published: id={} title={} lessons={} assignments={}",
                course.id,
                course.title,
                course.lesson_count,
                course.assignment_count
            );
            alert::notify(&format!("\"{}\" has been published.", course.title));
            catalog.update(|c| c.publish(course, content));
            redirect.set(Some("/courses".to_owned()));
        }
        Some(Err(err)) => warn!("publish refused: {err}"),
        None => {}
    };

    view! {
        <div class="page wizard">
            <WizardSteps wizard=wizard on_select=on_select/>
            {move || match step.get() {
                WizardStep::Details => view! { <DetailsStep wizard=wizard/> }.into_any(),
                WizardStep::Curriculum => view! { <LessonPanel workspace=content dispatch=dispatch/> }.into_any(),
                WizardStep::Assignments => {
                    view! { <AssignmentPanel workspace=content dispatch=dispatch/> }.into_any()
                }
                WizardStep::Review => view! { <ReviewStep wizard=wizard content=content on_select=on_select/> }.into_any(),
            }}
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <footer class="wizard__footer">
                <button
                    class="btn btn--ghost"
                    type="button"
                    disabled=move || !wizard.with(CourseWizard::can_go_back)
                    on:click=move |_| wizard.update(CourseWizard::back)
                >
                    "Back"
                </button>
                <span class="wizard__spacer"></span>
                <Show
                    when=move || step.get() == WizardStep::Review
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" type="button" on:click=on_next>
                                "Next"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" type="button" on:click=on_publish>
                        "Publish course"
                    </button>
                </Show>
            </footer>
        </div>
    }
}

#[component]
fn DetailsStep(wizard: RwSignal<CourseWizard>) -> impl IntoView {
    let edit = move |e: DetailsEdit| wizard.update(|w| w.edit_details(e));
    let text = move |read: fn(&CourseWizard) -> String| move || wizard.with(read);

    view! {
        <section class="panel">
            <h2 class="panel__title">"Course details"</h2>
            <label class="field">
                <span class="field__label">"Course title"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="e.g. Introduction to Rust"
                    prop:value=text(|w| w.details.title.clone())
                    on:input=move |ev| edit(DetailsEdit::Title(event_target_value(&ev)))
                />
            </label>
            <label class="field">
                <span class="field__label">"Description"</span>
                <textarea
                    class="field__input"
                    rows="3"
                    prop:value=text(|w| w.details.description.clone())
                    on:input=move |ev| edit(DetailsEdit::Description(event_target_value(&ev)))
                ></textarea>
            </label>
            <div class="field-row">
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        class="field__input"
                        prop:value=text(|w| w.details.category.clone())
                        on:change=move |ev| edit(DetailsEdit::Category(event_target_value(&ev)))
                    >
                        <option value="">"Select a category"</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Level"</span>
                    <select
                        class="field__input"
                        prop:value=text(|w| w.details.level.label().to_owned())
                        on:change=move |ev| edit(DetailsEdit::Level(CourseLevel::from_label(&event_target_value(&ev))))
                    >
                        {CourseLevel::ALL
                            .into_iter()
                            .map(|level| view! { <option value=level.label()>{level.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Number of weeks"</span>
                    <input
                        class="field__input"
                        type="number"
                        min=MIN_WEEKS.to_string()
                        max=MAX_WEEKS.to_string()
                        prop:value=text(|w| w.details.weeks.clone())
                        on:input=move |ev| edit(DetailsEdit::Weeks(event_target_value(&ev)))
                    />
                </label>
            </div>
            <label class="field">
                <span class="field__label">"Course outline"</span>
                <textarea
                    class="field__input"
                    rows="6"
                    placeholder="Paste a rough outline: topics, modules, or weekly goals."
                    prop:value=text(|w| w.details.outline.clone())
                    on:input=move |ev| edit(DetailsEdit::Outline(event_target_value(&ev)))
                ></textarea>
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.details.include_study_materials)
                    on:change=move |ev| edit(DetailsEdit::StudyMaterials(event_target_checked(&ev)))
                />
                "Include study materials"
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.details.include_media_links)
                    on:change=move |ev| edit(DetailsEdit::MediaLinks(event_target_checked(&ev)))
                />
                "Include media links"
            </label>
        </section>
    }
}

#[component]
fn ReviewStep(
    wizard: RwSignal<CourseWizard>,
    #[prop(into)] content: Signal<CourseWorkspace>,
    on_select: Callback<WizardStep>,
) -> impl IntoView {
    let rows = Memo::new(move |_| wizard.with(review_rows));
    let lesson_titles = Memo::new(move |_| content.with(|ws| ws.lessons.iter().map(|l| l.title.clone()).collect::<Vec<_>>()));
    let assignment_titles =
        Memo::new(move |_| content.with(|ws| ws.assignments.iter().map(|a| a.title.clone()).collect::<Vec<_>>()));

    let section = move |title: &'static str, target: WizardStep, items: Memo<Vec<String>>, noun: (&'static str, &'static str)| {
        view! {
            <section class="panel review">
                <header class="panel__header">
                    <h2 class="panel__title">{title}</h2>
                    <span class="panel__count">{move || items.with(|i| pluralize(i.len(), noun.0, noun.1))}</span>
                    <span class="panel__spacer"></span>
                    <button class="btn btn--ghost" type="button" on:click=move |_| on_select.run(target)>
                        "Edit"
                    </button>
                </header>
                <ol class="review__list">
                    {move || items.get().into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
                </ol>
            </section>
        }
    };

    view! {
        <section class="panel review">
            <header class="panel__header">
                <h2 class="panel__title">"Course details"</h2>
                <span class="panel__spacer"></span>
                <button class="btn btn--ghost" type="button" on:click=move |_| on_select.run(WizardStep::Details)>
                    "Edit"
                </button>
            </header>
            <dl class="review__details">
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect::<Vec<_>>()
                }}
            </dl>
        </section>
        {section("Curriculum", WizardStep::Curriculum, lesson_titles, ("lesson", "lessons"))}
        {section("Assignments", WizardStep::Assignments, assignment_titles, ("assignment", "assignments"))}
    }
}
