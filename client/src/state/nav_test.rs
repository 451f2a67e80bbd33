use super::*;

#[test]
fn from_path_maps_root_to_overview() {
    assert_eq!(NavSection::from_path("/"), Some(NavSection::Overview));
    assert_eq!(NavSection::from_path(""), Some(NavSection::Overview));
}

#[test]
fn from_path_prefers_longest_href() {
    assert_eq!(NavSection::from_path("/courses/new"), Some(NavSection::CreateCourse));
    assert_eq!(NavSection::from_path("/courses/course-1"), Some(NavSection::Courses));
    assert_eq!(NavSection::from_path("/courses"), Some(NavSection::Courses));
    assert_eq!(NavSection::from_path("/courses/"), Some(NavSection::Courses));
}

#[test]
fn from_path_ignores_query_and_fragment() {
    assert_eq!(NavSection::from_path("/students?sort=grade"), Some(NavSection::Students));
    assert_eq!(NavSection::from_path("/settings#theme"), Some(NavSection::Settings));
}

#[test]
fn from_path_requires_segment_boundary() {
    assert_eq!(NavSection::from_path("/coursesx"), None);
    assert_eq!(NavSection::from_path("/login"), None);
}

#[test]
fn every_section_maps_back_from_its_href() {
    for section in NavSection::ALL {
        assert_eq!(NavSection::from_path(section.href()), Some(section));
    }
}

#[test]
fn shell_state_defaults_expanded_and_closed() {
    let shell = ShellState::default();
    assert!(!shell.sidebar_collapsed);
    assert!(!shell.profile_menu_open);
    assert!(!shell.dark_mode);
}

#[test]
fn navigate_closes_profile_menu_but_keeps_sidebar() {
    let mut shell = ShellState::default();
    shell.toggle_sidebar();
    shell.toggle_profile_menu();
    shell.on_navigate();
    assert!(shell.sidebar_collapsed);
    assert!(!shell.profile_menu_open);
}
