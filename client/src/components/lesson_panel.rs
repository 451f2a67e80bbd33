//! Lessons section: header action, add form, and list.
//!
//! ARCHITECTURE
//! ============
//! Used by both the course detail page and the creation wizard. The caller
//! owns the workspace signal and decides how actions are applied.

use leptos::prelude::*;

use crate::components::lesson_form::LessonForm;
use crate::components::lesson_list::LessonList;
use crate::state::workspace::{CourseWorkspace, WorkspaceAction};
use crate::util::format::pluralize;

#[component]
pub fn LessonPanel(
    #[prop(into)] workspace: Signal<CourseWorkspace>,
    dispatch: Callback<WorkspaceAction>,
) -> impl IntoView {
    let form_open = Memo::new(move |_| workspace.with(|ws| ws.lesson_form.is_some()));
    let count = Memo::new(move |_| workspace.with(|ws| ws.lessons.len()));

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">"Lessons"</h2>
                <span class="panel__count">{move || pluralize(count.get(), "lesson", "lessons")}</span>
                <span class="panel__spacer"></span>
                <Show when=move || !form_open.get()>
                    <button class="btn btn--primary" on:click=move |_| dispatch.run(WorkspaceAction::OpenLessonForm)>
                        "+ Add lesson"
                    </button>
                </Show>
            </header>
            <Show when=move || form_open.get()>
                <LessonForm workspace=workspace dispatch=dispatch/>
            </Show>
            <LessonList workspace=workspace dispatch=dispatch/>
        </section>
    }
}
