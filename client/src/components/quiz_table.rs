//! Read-only quiz table for the course detail page.

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::state::course::Quiz;

#[component]
pub fn QuizTable(quizzes: Vec<Quiz>) -> impl IntoView {
    if quizzes.is_empty() {
        return view! {
            <EmptyState icon="❓" title="No quizzes" message="Quizzes for this course will appear here."/>
        }
        .into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Quiz"</th>
                    <th class="data-table__num">"Questions"</th>
                    <th class="data-table__num">"Duration"</th>
                    <th class="data-table__num">"Attempts"</th>
                </tr>
            </thead>
            <tbody>
                {quizzes
                    .into_iter()
                    .map(|quiz| {
                        view! {
                            <tr>
                                <td>{quiz.title}</td>
                                <td class="data-table__num">{quiz.question_count}</td>
                                <td class="data-table__num">{format!("{} min", quiz.duration_minutes)}</td>
                                <td class="data-table__num">{quiz.attempts}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
