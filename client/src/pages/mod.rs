//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Everything except login and signup renders inside
//! [`shell::DashboardShell`].

pub mod course_detail;
pub mod courses;
pub mod create_course;
pub mod login;
pub mod overview;
pub mod settings;
pub mod shell;
pub mod signup;
pub mod students;
