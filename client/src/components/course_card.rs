//! Course summary card linking to the course workspace.
//!
//! DESIGN
//! ======
//! Shared by the overview's recent list and the full course list so both
//! present status, level, and counts identically.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::course::{CourseStatus, CourseSummary};
use crate::util::format::pluralize;

#[component]
pub fn CourseCard(course: CourseSummary, #[prop(optional)] compact: bool) -> impl IntoView {
    let href = format!("/courses/{}", course.id);
    let published = course.status == CourseStatus::Published;
    let lessons = pluralize(course.lesson_count as usize, "lesson", "lessons");
    let students = pluralize(course.student_count as usize, "student", "students");

    view! {
        <article class="course-card" class:course-card--compact=compact>
            <div class="course-card__header">
                <span class="course-card__category">{course.category}</span>
                <span
                    class="badge"
                    class:badge--success=published
                    class:badge--muted=!published
                >
                    {course.status.label()}
                </span>
            </div>
            <h3 class="course-card__title">
                <A href=href.clone()>{course.title}</A>
            </h3>
            <Show when=move || !compact>
                <p class="course-card__description">{course.description.clone()}</p>
            </Show>
            <div class="course-card__meta">
                <span>"📚 " {lessons}</span>
                <span>"👥 " {students}</span>
                <span>"🎯 " {course.level.label()}</span>
            </div>
            <A href=href attr:class="btn btn--ghost course-card__open">"Open course"</A>
        </article>
    }
}
