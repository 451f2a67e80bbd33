//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::{
    course_detail::CourseDetailPage, courses::CoursesPage, create_course::CreateCoursePage, login::LoginPage,
    overview::OverviewPage, settings::SettingsPage, shell::DashboardShell, signup::SignupPage,
    students::StudentsPage,
};
use crate::state::{catalog::CatalogState, nav::ShellState};
use crate::util::theme::{self, Theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shell and catalog contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shell = RwSignal::new(ShellState::default());
    let catalog = RwSignal::new(CatalogState::default());
    provide_context(shell);
    provide_context(catalog);

    // Effects only run in the browser, so SSR always renders the light theme.
    Effect::new(move || {
        let preferred = theme::load();
        theme::store(preferred);
        shell.update(|s| s.dark_mode = preferred == Theme::Dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/teachdesk.css"/>
        <Title text="TeachDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("") view=DashboardShell>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=(StaticSegment("courses"), StaticSegment("new")) view=CreateCoursePage/>
                    <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailPage/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
