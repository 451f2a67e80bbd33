//! Dashboard shell navigation state.
//!
//! DESIGN
//! ======
//! The router owns the active screen; this module only maps locations to
//! sidebar sections and keeps shell chrome flags (collapsed sidebar, profile
//! menu, theme) out of page state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Overview,
    Courses,
    CreateCourse,
    Students,
    Settings,
}

impl NavSection {
    pub const ALL: [NavSection; 5] =
        [Self::Overview, Self::Courses, Self::CreateCourse, Self::Students, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Courses => "My Courses",
            Self::CreateCourse => "Create Course",
            Self::Students => "Students",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Overview => "🏠",
            Self::Courses => "📚",
            Self::CreateCourse => "➕",
            Self::Students => "👥",
            Self::Settings => "⚙",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Courses => "/courses",
            Self::CreateCourse => "/courses/new",
            Self::Students => "/students",
            Self::Settings => "/settings",
        }
    }

    /// Section to highlight for a router path. The longest matching href
    /// wins, so `/courses/new` is `CreateCourse` while `/courses/abc` stays
    /// under `Courses`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Self::Overview);
        }
        Self::ALL
            .into_iter()
            .filter(|section| section.href() != "/")
            .filter(|section| {
                let href = section.href();
                path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
            })
            .max_by_key(|section| section.href().len())
    }
}

/// Shell chrome flags shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_collapsed: bool,
    pub profile_menu_open: bool,
    pub dark_mode: bool,
}

impl ShellState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    /// Called on every route change.
    pub fn on_navigate(&mut self) {
        self.profile_menu_open = false;
    }
}
