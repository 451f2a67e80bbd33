//! Headline number card for the dashboard overview.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: String,
    icon: &'static str,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
            <div class="stat-card__body">
                <span class="stat-card__value">{value}</span>
                <span class="stat-card__label">{label}</span>
                {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
            </div>
        </div>
    }
}
