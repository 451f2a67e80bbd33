//! Assignments section: header action, add form, and list.

use leptos::prelude::*;

use crate::components::assignment_form::AssignmentForm;
use crate::components::assignment_list::AssignmentList;
use crate::state::workspace::{CourseWorkspace, WorkspaceAction};
use crate::util::format::pluralize;

#[component]
pub fn AssignmentPanel(
    #[prop(into)] workspace: Signal<CourseWorkspace>,
    dispatch: Callback<WorkspaceAction>,
) -> impl IntoView {
    let form_open = Memo::new(move |_| workspace.with(|ws| ws.assignment_form.is_some()));
    let count = Memo::new(move |_| workspace.with(|ws| ws.assignments.len()));

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">"Assignments"</h2>
                <span class="panel__count">
                    {move || pluralize(count.get(), "assignment", "assignments")}
                </span>
                <span class="panel__spacer"></span>
                <Show when=move || !form_open.get()>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| dispatch.run(WorkspaceAction::OpenAssignmentForm)
                    >
                        "+ Add assignment"
                    </button>
                </Show>
            </header>
            <Show when=move || form_open.get()>
                <AssignmentForm workspace=workspace dispatch=dispatch/>
            </Show>
            <AssignmentList workspace=workspace dispatch=dispatch/>
        </section>
    }
}
