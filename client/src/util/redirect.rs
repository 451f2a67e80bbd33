//! Deferred navigation driven by a signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Event handlers and nested views request navigation by writing a path into
//! a signal; a single effect owned by the page performs it. This keeps the
//! router's navigate closure out of child views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Navigate to whatever path is written into `target`, then clear it.
pub fn install_redirect<F>(target: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
