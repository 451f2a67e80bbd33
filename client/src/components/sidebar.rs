//! Dashboard navigation sidebar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::mock::{TEACHER_EMAIL, TEACHER_NAME};
use crate::state::nav::{NavSection, ShellState};
use crate::util::format::initials;

/// Sidebar with one link per [`NavSection`]; `section` marks the active one.
#[component]
pub fn Sidebar(#[prop(into)] section: Signal<Option<NavSection>>) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let collapsed = move || shell.with(|s| s.sidebar_collapsed);

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"🎓"</span>
                <Show when=move || !collapsed()>
                    <span class="sidebar__name">"TeachDesk"</span>
                </Show>
            </div>
            <nav class="sidebar__nav" aria-label="Main">
                {NavSection::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <A href=item.href() attr:class="sidebar__link">
                                <span
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || section.get() == Some(item)
                                    title=item.label()
                                >
                                    <span class="sidebar__icon" aria-hidden="true">{item.icon()}</span>
                                    <Show when=move || !collapsed()>
                                        <span class="sidebar__label">{item.label()}</span>
                                    </Show>
                                </span>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__profile">
                <span class="avatar">{initials(TEACHER_NAME)}</span>
                <Show when=move || !collapsed()>
                    <div class="sidebar__profile-text">
                        <span class="sidebar__profile-name">{TEACHER_NAME}</span>
                        <span class="sidebar__profile-email">{TEACHER_EMAIL}</span>
                    </div>
                </Show>
            </div>
        </aside>
    }
}
