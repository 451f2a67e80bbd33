//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and course content. Shell pieces read
//! shared state from Leptos context; workspace panels take their state as a
//! signal plus a dispatch callback so the detail page and the creation wizard
//! can drive them alike.

pub mod assignment_form;
pub mod assignment_list;
pub mod assignment_panel;
pub mod course_card;
pub mod empty_state;
pub mod lesson_form;
pub mod lesson_list;
pub mod lesson_panel;
pub mod quiz_table;
pub mod sidebar;
pub mod stat_card;
pub mod student_table;
pub mod top_bar;
pub mod wizard_steps;
