//! Dashboard overview page: headline stats, recent courses, quick actions.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::course_card::CourseCard;
use crate::components::empty_state::EmptyState;
use crate::components::stat_card::StatCard;
use crate::state::catalog::CatalogState;
use crate::state::mock::{DashboardStats, TEACHER_NAME};

const RECENT_LIMIT: usize = 3;

/// Salutation by local hour of day.
fn greeting(hour: u8) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

fn current_hour() -> u8 {
    #[cfg(feature = "hydrate")]
    {
        u8::try_from(js_sys::Date::new_0().get_hours()).unwrap_or(12)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().hour()
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let stats = Memo::new(move |_| catalog.with(|c| DashboardStats::from_courses(&c.courses)));
    let recent = Memo::new(move |_| catalog.with(|c| c.recent(RECENT_LIMIT)));

    view! {
        <div class="page">
            <section class="page__intro">
                <h2>{format!("{}, {TEACHER_NAME}", greeting(current_hour()))}</h2>
                <p>"Here is what is happening across your courses."</p>
            </section>
            <section class="stat-grid">
                {move || {
                    let s = stats.get();
                    view! {
                        <StatCard label="Total courses" value=s.total_courses.to_string() icon="📚"/>
                        <StatCard
                            label="Published"
                            value=s.published_courses.to_string()
                            icon="✅"
                            hint=format!("{} in draft", s.total_courses - s.published_courses)
                        />
                        <StatCard label="Students enrolled" value=s.total_students.to_string() icon="👥"/>
                        <StatCard label="Avg. lessons per course" value=format!("{:.1}", s.avg_lessons) icon="🧩"/>
                    }
                }}
            </section>
            <section class="page__section">
                <header class="page__section-header">
                    <h2>"Recent courses"</h2>
                    <A href="/courses" attr:class="btn btn--ghost">"View all"</A>
                </header>
                <Show
                    when=move || recent.with(|r| !r.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                icon="📚"
                                title="No courses yet"
                                message="Create your first course to see it here."
                            />
                        }
                    }
                >
                    <div class="course-grid">
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|course| view! { <CourseCard course=course compact=true/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
            <section class="page__section">
                <h2>"Quick actions"</h2>
                <div class="quick-actions">
                    <A href="/courses/new" attr:class="quick-action">
                        <span class="quick-action__icon">"➕"</span>
                        <span>"Create a course"</span>
                    </A>
                    <A href="/students" attr:class="quick-action">
                        <span class="quick-action__icon">"👥"</span>
                        <span>"Review student progress"</span>
                    </A>
                    <A href="/settings" attr:class="quick-action">
                        <span class="quick-action__icon">"⚙"</span>
                        <span>"Update your profile"</span>
                    </A>
                </div>
            </section>
        </div>
    }
}
