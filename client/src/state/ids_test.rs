use super::*;

fn stamp_of(id: &str) -> u64 {
    id.rsplit('-').next().and_then(|s| s.parse().ok()).unwrap()
}

#[test]
fn next_id_uses_prefix_and_clock() {
    let id = next_id_at("lesson", 9_000_000_000_000);
    assert!(id.starts_with("lesson-"));
    assert!(stamp_of(&id) >= 9_000_000_000_000);
}

#[test]
fn same_millisecond_bumps_past_last_issued() {
    let first = next_id_at("lesson", 10_000_000_000_000);
    let second = next_id_at("lesson", 10_000_000_000_000);
    assert_ne!(first, second);
    assert_eq!(stamp_of(&second), stamp_of(&first) + 1);
}

#[test]
fn clock_going_backwards_still_yields_fresh_ids() {
    let first = next_id_at("assignment", 11_000_000_000_000);
    let second = next_id_at("assignment", 5);
    assert!(stamp_of(&second) > stamp_of(&first));
}

#[test]
fn wall_clock_ids_are_unique() {
    let ids: Vec<String> = (0..50).map(|_| next_id("x")).collect();
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}
