//! Client application state.
//!
//! DESIGN
//! ======
//! Plain structs with methods and no framework types, so every transition is
//! unit-testable without a reactive runtime. Pages wrap them in `RwSignal`s
//! and share the long-lived ones through context.

pub mod auth_forms;
pub mod catalog;
pub mod course;
pub mod ids;
pub mod mock;
pub mod nav;
pub mod wizard;
pub mod workspace;
