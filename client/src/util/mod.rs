//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (alerts, storage, navigation)
//! and display formatting from page and component logic.

pub mod alert;
pub mod format;
pub mod redirect;
pub mod theme;
