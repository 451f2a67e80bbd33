//! Course workspace: header, tab strip, and the active tab's panel.

#[cfg(test)]
#[path = "course_detail_test.rs"]
mod course_detail_test;

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::assignment_panel::AssignmentPanel;
use crate::components::empty_state::EmptyState;
use crate::components::lesson_panel::LessonPanel;
use crate::components::quiz_table::QuizTable;
use crate::components::student_table::StudentTable;
use crate::state::catalog::CatalogState;
use crate::state::course::{CourseStatus, CourseSummary};
use crate::state::mock;
use crate::state::workspace::{CourseWorkspace, WorkspaceAction, WorkspaceCounts, WorkspaceTab};
use crate::util::format::pluralize;

fn badge_count(counts: &WorkspaceCounts, tab: WorkspaceTab) -> usize {
    match tab {
        WorkspaceTab::Lessons => counts.lessons,
        WorkspaceTab::Assignments => counts.assignments,
        WorkspaceTab::Quizzes => counts.quizzes,
        WorkspaceTab::Students => counts.students,
    }
}

/// Workspace seeded from the catalog's content for `course_id`, with the
/// read-only quiz and student counts from the mock tables.
fn seed_workspace(catalog: &CatalogState, course_id: &str) -> CourseWorkspace {
    let mut ws = CourseWorkspace::from_content(catalog.content_for(course_id));
    ws.quiz_count = mock::quizzes_for(course_id).len();
    ws.student_count = mock::students_for(course_id).len();
    ws
}

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let params = use_params_map();
    let course = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        catalog.with_untracked(|c| c.find(&id).cloned())
    });

    move || match course.get() {
        Some(course) => view! { <CourseWorkspaceView course=course/> }.into_any(),
        None => view! {
            <EmptyState
                icon="🔍"
                title="Course not found"
                message="This course does not exist or has been removed."
            >
                <A href="/courses" attr:class="btn btn--primary">"Back to courses"</A>
            </EmptyState>
        }
        .into_any(),
    }
}

#[component]
fn CourseWorkspaceView(course: CourseSummary) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let workspace = RwSignal::new(catalog.with_untracked(|c| seed_workspace(c, &course.id)));
    let quizzes = mock::quizzes_for(&course.id);
    let students = mock::students_for(&course.id);

    // Committed lesson and assignment changes are written back so the
    // course cards stay in step with the workspace.
    let course_id = course.id.clone();
    let dispatch = Callback::new(move |action: WorkspaceAction| {
        let changes_content = action.changes_content();
        match workspace.try_update(|ws| ws.apply(action)) {
            Some(Ok(())) if changes_content => {
                let content = workspace.with_untracked(CourseWorkspace::content);
                catalog.update(|c| {
                    c.save_content(&course_id, content);
                });
            }
            Some(Err(err)) => warn!("workspace action refused: {err}"),
            _ => {}
        }
    });

    let tab = Memo::new(move |_| workspace.with(|ws| ws.tab));
    let counts = Memo::new(move |_| workspace.with(CourseWorkspace::counts));
    let published = course.status == CourseStatus::Published;

    view! {
        <div class="page">
            <header class="course-header">
                <div class="course-header__crumbs">
                    <A href="/courses">"Courses"</A>
                    " / "
                    <span>{course.title.clone()}</span>
                </div>
                <div class="course-header__title-row">
                    <h2 class="course-header__title">{course.title.clone()}</h2>
                    <span class="badge" class:badge--success=published class:badge--muted=!published>
                        {course.status.label()}
                    </span>
                </div>
                <p class="course-header__description">{course.description.clone()}</p>
                <div class="course-header__meta">
                    <span>{course.category.clone()}</span>
                    <span>{course.level.label()}</span>
                    <span>{pluralize(usize::try_from(course.weeks).unwrap_or_default(), "week", "weeks")}</span>
                </div>
            </header>
            <nav class="tabs" role="tablist">
                {WorkspaceTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                role="tab"
                                aria-selected=move || (tab.get() == t).to_string()
                                on:click=move |_| dispatch.run(WorkspaceAction::SelectTab(t))
                            >
                                {t.label()}
                                <span class="tabs__badge">{move || counts.with(|c| badge_count(c, t))}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            {move || match tab.get() {
                WorkspaceTab::Lessons => view! { <LessonPanel workspace=workspace dispatch=dispatch/> }.into_any(),
                WorkspaceTab::Assignments => {
                    view! { <AssignmentPanel workspace=workspace dispatch=dispatch/> }.into_any()
                }
                WorkspaceTab::Quizzes => view! { <QuizTable quizzes=quizzes.clone()/> }.into_any(),
                WorkspaceTab::Students => view! { <StudentTable students=students.clone()/> }.into_any(),
            }}
        </div>
    }
}
