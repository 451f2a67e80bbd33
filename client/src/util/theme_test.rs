#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_defaults_to_light_outside_browser() {
    assert_eq!(load(), Theme::Light);
}

#[test]
fn from_dark_maps_flag() {
    assert_eq!(Theme::from_dark(true), Theme::Dark);
    assert_eq!(Theme::from_dark(false), Theme::Light);
}

#[test]
fn store_is_callable_outside_browser() {
    store(Theme::Dark);
    assert_eq!(Theme::Dark.as_attr(), "dark");
}
