//! Placeholder alerts and confirmations for stubbed actions.
//!
//! TRADE-OFFS
//! ==========
//! Browser dialogs only exist under `hydrate`. During SSR and in tests
//! `notify` only logs and `confirm` answers yes, so stubbed flows stay
//! deterministic.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Log `message` and show it in a browser alert.
pub fn notify(message: &str) {
    leptos::logging::log!("[notify] {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("[confirm] {message}");
        true
    }
}
