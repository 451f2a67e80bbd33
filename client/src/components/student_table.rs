//! Read-only enrollment table with progress and grade bars.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::state::course::EnrolledStudent;
use crate::util::format::{format_date, initials, percent_class};

/// Roster table. `course_titles`, when given, adds a course column with one
/// title per row.
#[component]
pub fn StudentTable(
    students: Vec<EnrolledStudent>,
    #[prop(optional)] course_titles: Option<Vec<String>>,
) -> impl IntoView {
    if students.is_empty() {
        return view! {
            <EmptyState icon="👥" title="No students enrolled" message="Enrolled students will appear here."/>
        }
        .into_any();
    }
    let show_course = course_titles.is_some();
    let titles = course_titles.unwrap_or_default();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Student"</th>
                    {show_course.then(|| view! { <th>"Course"</th> })}
                    <th>"Progress"</th>
                    <th>"Grade"</th>
                    <th>"Last active"</th>
                </tr>
            </thead>
            <tbody>
                {students
                    .into_iter()
                    .enumerate()
                    .map(|(i, student)| {
                        let course = titles.get(i).cloned();
                        view! {
                            <tr>
                                <td>
                                    <div class="student-cell">
                                        <span class="avatar avatar--small">{initials(&student.name)}</span>
                                        <div class="student-cell__text">
                                            <span class="student-cell__name">{student.name.clone()}</span>
                                            <span class="student-cell__email">{student.email.clone()}</span>
                                        </div>
                                    </div>
                                </td>
                                {show_course.then(|| view! { <td>{course.unwrap_or_default()}</td> })}
                                <td><PercentBar value=student.progress/></td>
                                <td><PercentBar value=student.grade/></td>
                                <td>{format_date(&student.last_active)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn PercentBar(value: u8) -> impl IntoView {
    view! {
        <div class="percent-bar">
            <div class=format!("percent-bar__track percent-bar__track--{}", percent_class(value))>
                <div class="percent-bar__fill" style:width=format!("{value}%")></div>
            </div>
            <span class="percent-bar__value">{format!("{value}%")}</span>
        </div>
    }
}
