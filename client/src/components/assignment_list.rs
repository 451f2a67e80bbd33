//! Assignment cards with due-date status and delete.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::state::course::Assignment;
use crate::state::workspace::{CourseWorkspace, WorkspaceAction};
use crate::util::alert;
use crate::util::format::{due_status, format_date, today};

#[component]
pub fn AssignmentList(
    #[prop(into)] workspace: Signal<CourseWorkspace>,
    dispatch: Callback<WorkspaceAction>,
) -> impl IntoView {
    let assignments = Memo::new(move |_| workspace.with(|ws| ws.assignments.clone()));

    view! {
        <Show
            when=move || assignments.with(|a| !a.is_empty())
            fallback=|| {
                view! {
                    <EmptyState
                        icon="📝"
                        title="No assignments yet"
                        message="Create an assignment to give students graded work."
                    />
                }
            }
        >
            <div class="assignment-list">
                {move || {
                    let today = today();
                    assignments
                        .get()
                        .into_iter()
                        .map(|assignment| {
                            let status = due_status(&assignment.due_date, today);
                            view! {
                                <AssignmentCard
                                    assignment=assignment
                                    status_label=status.label()
                                    status_class=status.css_modifier()
                                    dispatch=dispatch
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}

#[component]
fn AssignmentCard(
    assignment: Assignment,
    status_label: &'static str,
    status_class: &'static str,
    dispatch: Callback<WorkspaceAction>,
) -> impl IntoView {
    let Assignment { id, title, description, due_date, max_marks } = assignment;
    let confirm_text = format!("Delete assignment \"{title}\"? This cannot be undone.");
    let on_remove = move |_| {
        if alert::confirm(&confirm_text) {
            dispatch.run(WorkspaceAction::RemoveAssignment(id.clone()));
        }
    };
    let has_description = !description.is_empty();
    let due_text = if due_date.is_empty() { "No due date".to_owned() } else { format!("Due {}", format_date(&due_date)) };

    view! {
        <article class="assignment-card">
            <header class="assignment-card__header">
                <h3 class="assignment-card__title">{title}</h3>
                <span class=format!("badge badge--due-{status_class}")>{status_label}</span>
                <button class="btn btn--icon btn--danger" title="Delete assignment" on:click=on_remove>
                    "🗑"
                </button>
            </header>
            <Show when=move || has_description>
                <p class="assignment-card__description">{description.clone()}</p>
            </Show>
            <footer class="assignment-card__meta">
                <span>"📅 " {due_text}</span>
                <span>"🏆 " {max_marks} " marks"</span>
            </footer>
        </article>
    }
}
