//! Lesson rows with expand/collapse and delete.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::state::course::{Lesson, MaterialKind};
use crate::state::workspace::{CourseWorkspace, WorkspaceAction};
use crate::util::alert;

#[component]
pub fn LessonList(
    #[prop(into)] workspace: Signal<CourseWorkspace>,
    dispatch: Callback<WorkspaceAction>,
) -> impl IntoView {
    // Only rebuild rows when lessons or the expanded row change, not on
    // every keystroke in an open form.
    let rows = Memo::new(move |_| workspace.with(|ws| (ws.lessons.clone(), ws.expanded_lesson.clone())));

    view! {
        <Show
            when=move || rows.with(|(lessons, _)| !lessons.is_empty())
            fallback=|| {
                view! {
                    <EmptyState
                        icon="📚"
                        title="No lessons yet"
                        message="Add a lesson to start building the curriculum."
                    />
                }
            }
        >
            <ol class="lesson-list">
                {move || {
                    rows.with(|(lessons, expanded)| {
                        lessons
                            .iter()
                            .enumerate()
                            .map(|(i, lesson)| {
                                let is_expanded = expanded.as_deref() == Some(lesson.id.as_str());
                                view! {
                                    <LessonRow
                                        position=i + 1
                                        lesson=lesson.clone()
                                        expanded=is_expanded
                                        dispatch=dispatch
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </ol>
        </Show>
    }
}

#[component]
fn LessonRow(position: usize, lesson: Lesson, expanded: bool, dispatch: Callback<WorkspaceAction>) -> impl IntoView {
    let toggle_id = lesson.id.clone();
    let remove_id = lesson.id.clone();
    let remove_title = lesson.title.clone();
    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if alert::confirm(&format!("Delete lesson \"{remove_title}\"? This cannot be undone.")) {
            dispatch.run(WorkspaceAction::RemoveLesson(remove_id.clone()));
        }
    };
    let has_description = !lesson.description.is_empty();

    view! {
        <li class="lesson-row" class:lesson-row--expanded=expanded>
            <div
                class="lesson-row__summary"
                role="button"
                aria-expanded=expanded.to_string()
                on:click=move |_| dispatch.run(WorkspaceAction::ToggleLesson(toggle_id.clone()))
            >
                <span class="lesson-row__position">{position}</span>
                <span class="lesson-row__icon" title=lesson.material.label()>{lesson.material.icon()}</span>
                <span class="lesson-row__title">{lesson.title.clone()}</span>
                <span class="lesson-row__chevron" aria-hidden="true">{if expanded { "▾" } else { "▸" }}</span>
                <button class="btn btn--icon btn--danger" title="Delete lesson" on:click=on_remove>
                    "🗑"
                </button>
            </div>
            <Show when=move || expanded>
                <div class="lesson-row__details">
                    <p class="lesson-row__description">
                        {if has_description { lesson.description.clone() } else { "No description.".to_owned() }}
                    </p>
                    <MaterialLine kind=lesson.material reference=lesson.material_ref.clone()/>
                </div>
            </Show>
        </li>
    }
}

#[component]
fn MaterialLine(kind: MaterialKind, reference: Option<String>) -> impl IntoView {
    match (kind, reference) {
        (MaterialKind::Unset, _) => view! { <p class="lesson-row__material">"No material attached."</p> }.into_any(),
        (kind, Some(reference)) if reference.starts_with("http://") || reference.starts_with("https://") => view! {
            <p class="lesson-row__material">
                {kind.icon()} " " {kind.label()} ": "
                <a href=reference.clone() target="_blank" rel="noopener noreferrer">{reference.clone()}</a>
            </p>
        }
        .into_any(),
        (kind, Some(reference)) => view! {
            <p class="lesson-row__material">{kind.icon()} " " {kind.label()} ": " {reference}</p>
        }
        .into_any(),
        (kind, None) => view! {
            <p class="lesson-row__material">{kind.icon()} " " {kind.label()} " (no reference yet)"</p>
        }
        .into_any(),
    }
}
