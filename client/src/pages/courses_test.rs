use super::*;

#[test]
fn filter_label_matches_filters() {
    assert_eq!(filter_label(None), "All");
    assert_eq!(filter_label(Some(CourseStatus::Published)), "Published");
    assert_eq!(filter_label(Some(CourseStatus::Draft)), "Drafts");
}
