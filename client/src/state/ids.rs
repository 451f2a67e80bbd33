//! Timestamp-derived identifiers for in-session entities.
//!
//! Lessons and assignments only live for one browser session, so ids are
//! plain `"{prefix}-{millis}"` strings. Issuance is monotonic: a request in
//! the same millisecond as the previous one gets `last + 1`, keeping list
//! membership unique even on a double submit.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use std::cell::Cell;

thread_local! {
    static LAST_ISSUED: Cell<u64> = const { Cell::new(0) };
}

/// Issue the next id for `prefix` using the current wall clock.
pub fn next_id(prefix: &str) -> String {
    next_id_at(prefix, now_millis())
}

/// Issue the next id as if the clock read `millis`.
pub fn next_id_at(prefix: &str, millis: u64) -> String {
    let stamp = LAST_ISSUED.with(|last| {
        let stamp = if millis > last.get() { millis } else { last.get() + 1 };
        last.set(stamp);
        stamp
    });
    format!("{prefix}-{stamp}")
}

fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = js_sys::Date::now() as u64;
        millis
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
