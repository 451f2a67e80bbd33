//! Top bar with page title, sidebar toggle, theme toggle, and profile menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::mock::TEACHER_NAME;
use crate::state::nav::{NavSection, ShellState};
use crate::util::alert;
use crate::util::format::initials;
use crate::util::redirect::install_redirect;
use crate::util::theme::{self, Theme};

#[component]
pub fn TopBar(#[prop(into)] section: Signal<Option<NavSection>>) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let theme_now = move || Theme::from_dark(shell.with(|s| s.dark_mode));
    let on_toggle_theme = move |_| {
        let next = Theme::from_dark(!shell.with_untracked(|s| s.dark_mode));
        theme::store(next);
        shell.update(|s| s.dark_mode = next == Theme::Dark);
    };

    let on_logout = move |_| {
        leptos::logging::log!("logout requested by {TEACHER_NAME}");
        shell.update(|s| s.profile_menu_open = false);
        alert::notify("You have been signed out.");
        redirect.set(Some("/login".to_owned()));
    };

    view! {
        <header class="top-bar">
            <button
                class="btn btn--icon top-bar__menu"
                title="Toggle sidebar"
                aria-label="Toggle sidebar"
                on:click=move |_| shell.update(ShellState::toggle_sidebar)
            >
                "☰"
            </button>
            <h1 class="top-bar__title">
                {move || section.get().map_or("Dashboard", NavSection::label)}
            </h1>
            <span class="top-bar__spacer"></span>
            <button class="btn btn--icon" title="Toggle dark mode" on:click=on_toggle_theme>
                {move || theme_now().toggle_icon()}
            </button>
            <div class="top-bar__profile">
                <button
                    class="avatar avatar--button"
                    aria-haspopup="menu"
                    on:click=move |_| shell.update(ShellState::toggle_profile_menu)
                >
                    {initials(TEACHER_NAME)}
                </button>
                <Show when=move || shell.with(|s| s.profile_menu_open)>
                    <div class="menu" role="menu">
                        <A href="/settings" attr:class="menu__item">
                            "Profile & settings"
                        </A>
                        <button class="menu__item menu__item--danger" role="menuitem" on:click=on_logout>
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
