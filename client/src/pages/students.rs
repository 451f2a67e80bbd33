//! Cross-course student roster.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::components::student_table::StudentTable;
use crate::state::catalog::CatalogState;
use crate::state::course::{CourseSummary, EnrolledStudent};
use crate::state::mock;

/// Every enrollment across `courses`, paired with its course title.
fn roster(courses: &[CourseSummary]) -> Vec<(String, EnrolledStudent)> {
    courses
        .iter()
        .flat_map(|course| {
            mock::students_for(&course.id)
                .into_iter()
                .map(|student| (course.title.clone(), student))
        })
        .collect()
}

fn average_progress(rows: &[(String, EnrolledStudent)]) -> u8 {
    if rows.is_empty() {
        return 0;
    }
    let total: usize = rows.iter().map(|(_, s)| usize::from(s.progress)).sum();
    u8::try_from(total / rows.len()).unwrap_or(100)
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let rows = Memo::new(move |_| catalog.with(|c| roster(&c.courses)));

    view! {
        <div class="page">
            <section class="stat-grid">
                {move || {
                    let rows = rows.get();
                    view! {
                        <StatCard label="Enrollments" value=rows.len().to_string() icon="👥"/>
                        <StatCard label="Average progress" value=format!("{}%", average_progress(&rows)) icon="📈"/>
                    }
                }}
            </section>
            <section class="page__section">
                {move || {
                    let (titles, students): (Vec<String>, Vec<EnrolledStudent>) = rows.get().into_iter().unzip();
                    view! { <StudentTable students=students course_titles=titles/> }
                }}
            </section>
        </div>
    }
}
