//! Add-assignment form bound to the open draft of a [`CourseWorkspace`].

use leptos::prelude::*;

use crate::state::course::{AssignmentDraft, AssignmentEdit, DEFAULT_MAX_MARKS};
use crate::state::workspace::{CourseWorkspace, WorkspaceAction};

#[component]
pub fn AssignmentForm(
    #[prop(into)] workspace: Signal<CourseWorkspace>,
    dispatch: Callback<WorkspaceAction>,
) -> impl IntoView {
    let draft = Memo::new(move |_| workspace.with(|ws| ws.assignment_form.clone().unwrap_or_default()));
    let field = move |read: fn(&AssignmentDraft) -> String| move || draft.with(read);
    let edit = move |e: AssignmentEdit| dispatch.run(WorkspaceAction::EditAssignment(e));

    view! {
        <form
            class="entity-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                dispatch.run(WorkspaceAction::SubmitAssignment);
            }
        >
            <h3 class="entity-form__title">"New assignment"</h3>
            <label class="field">
                <span class="field__label">"Assignment title"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="e.g. Build a responsive landing page"
                    prop:value=field(|d| d.title.clone())
                    on:input=move |ev| edit(AssignmentEdit::Title(event_target_value(&ev)))
                />
            </label>
            <label class="field">
                <span class="field__label">"Instructions"</span>
                <textarea
                    class="field__input field__input--area"
                    rows="3"
                    placeholder="Describe the task and how it will be graded."
                    prop:value=field(|d| d.description.clone())
                    on:input=move |ev| edit(AssignmentEdit::Description(event_target_value(&ev)))
                ></textarea>
            </label>
            <div class="field-row">
                <label class="field">
                    <span class="field__label">"Due date"</span>
                    <input
                        class="field__input"
                        type="date"
                        prop:value=field(|d| d.due_date.clone())
                        on:input=move |ev| edit(AssignmentEdit::DueDate(event_target_value(&ev)))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Maximum marks"</span>
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        placeholder=DEFAULT_MAX_MARKS.to_string()
                        prop:value=field(|d| d.max_marks.clone())
                        on:input=move |ev| edit(AssignmentEdit::MaxMarks(event_target_value(&ev)))
                    />
                </label>
            </div>
            <Show when=move || draft.with(|d| d.error.is_some())>
                <p class="form-error" role="alert">
                    {move || draft.with(|d| d.error.as_ref().map(ToString::to_string).unwrap_or_default())}
                </p>
            </Show>
            <div class="entity-form__actions">
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| dispatch.run(WorkspaceAction::CancelAssignmentForm)
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary">
                    "Add assignment"
                </button>
            </div>
        </form>
    }
}
