//! Dashboard shell: sidebar, top bar, and the routed page outlet.
//!
//! ARCHITECTURE
//! ============
//! Parent route for every authenticated-looking screen. The active sidebar
//! item is derived from the router location, and shell chrome resets on each
//! navigation.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::components::top_bar::TopBar;
use crate::state::nav::{NavSection, ShellState};

#[component]
pub fn DashboardShell() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let location = use_location();
    let section = Memo::new(move |_| location.pathname.with(|path| NavSection::from_path(path)));

    Effect::new(move || {
        location.pathname.track();
        shell.update(ShellState::on_navigate);
    });

    view! {
        <div class="shell" class:shell--collapsed=move || shell.with(|s| s.sidebar_collapsed)>
            <Sidebar section=section/>
            <div class="shell__main">
                <TopBar section=section/>
                <main class="shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
