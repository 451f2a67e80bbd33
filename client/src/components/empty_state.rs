//! Placeholder panel for empty lists and missing records.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    message: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state__icon" aria-hidden="true">{icon}</span>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__message">{message}</p>
            {children.map(|c| c())}
        </div>
    }
}
