//! Course list with a status filter.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::course_card::CourseCard;
use crate::components::empty_state::EmptyState;
use crate::state::catalog::CatalogState;
use crate::state::course::CourseStatus;

const FILTERS: [(&str, Option<CourseStatus>); 3] = [
    ("All", None),
    ("Published", Some(CourseStatus::Published)),
    ("Drafts", Some(CourseStatus::Draft)),
];

fn filter_label(filter: Option<CourseStatus>) -> &'static str {
    FILTERS.iter().find(|(_, f)| *f == filter).map_or("All", |(label, _)| label)
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let filter = RwSignal::new(None::<CourseStatus>);
    let visible = Memo::new(move |_| catalog.with(|c| c.filtered(filter.get())));

    view! {
        <div class="page">
            <header class="page__section-header">
                <div class="segmented" role="tablist">
                    {FILTERS
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <button
                                    class="segmented__option"
                                    class:segmented__option--active=move || filter.get() == value
                                    role="tab"
                                    on:click=move |_| filter.set(value)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <A href="/courses/new" attr:class="btn btn--primary">"+ New course"</A>
            </header>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || {
                    view! {
                        <EmptyState
                            icon="🔍"
                            title="No courses match"
                            message="Try another filter or create a new course."
                        >
                            <p class="empty-state__filter">{move || format!("Filter: {}", filter_label(filter.get()))}</p>
                        </EmptyState>
                    }
                }
            >
                <div class="course-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|course| view! { <CourseCard course=course/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
