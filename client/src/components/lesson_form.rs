//! Add-lesson form bound to the open draft of a [`CourseWorkspace`].

use leptos::prelude::*;

use crate::state::course::{LessonDraft, LessonEdit, MaterialKind};
use crate::state::workspace::{CourseWorkspace, WorkspaceAction};

#[component]
pub fn LessonForm(
    #[prop(into)] workspace: Signal<CourseWorkspace>,
    dispatch: Callback<WorkspaceAction>,
) -> impl IntoView {
    let draft = Memo::new(move |_| workspace.with(|ws| ws.lesson_form.clone().unwrap_or_default()));
    let field = move |read: fn(&LessonDraft) -> String| move || draft.with(read);
    let edit = move |e: LessonEdit| dispatch.run(WorkspaceAction::EditLesson(e));
    let material = move || draft.with(|d| d.material);

    view! {
        <form
            class="entity-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                dispatch.run(WorkspaceAction::SubmitLesson);
            }
        >
            <h3 class="entity-form__title">"New lesson"</h3>
            <label class="field">
                <span class="field__label">"Lesson title"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="e.g. Introduction to CSS Grid"
                    prop:value=field(|d| d.title.clone())
                    on:input=move |ev| edit(LessonEdit::Title(event_target_value(&ev)))
                />
            </label>
            <label class="field">
                <span class="field__label">"Description"</span>
                <textarea
                    class="field__input field__input--area"
                    rows="3"
                    placeholder="What will students learn?"
                    prop:value=field(|d| d.description.clone())
                    on:input=move |ev| edit(LessonEdit::Description(event_target_value(&ev)))
                ></textarea>
            </label>
            <div class="field-row">
                <label class="field">
                    <span class="field__label">"Material type"</span>
                    <select
                        class="field__input"
                        prop:value=move || material().as_value()
                        on:change=move |ev| {
                            edit(LessonEdit::Material(MaterialKind::from_value(&event_target_value(&ev))));
                        }
                    >
                        {MaterialKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option value=kind.as_value()>{kind.icon()} " " {kind.label()}</option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || material() != MaterialKind::Unset>
                    <label class="field field--grow">
                        <span class="field__label">"Material reference"</span>
                        <input
                            class="field__input"
                            type="text"
                            placeholder=move || material().reference_hint()
                            prop:value=field(|d| d.material_ref.clone())
                            on:input=move |ev| edit(LessonEdit::MaterialRef(event_target_value(&ev)))
                        />
                    </label>
                </Show>
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
                    on:click=move |_| dispatch.run(WorkspaceAction::CancelLessonForm)
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary">
                    "Add lesson"
                </button>
            </div>
        </form>
    }
}
