use super::*;

fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
    rows.iter()
        .find(|(l, _)| *l == label)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("missing row {label}"))
}

#[test]
fn review_rows_for_blank_details() {
    let rows = review_rows(&CourseWizard::default());
    assert_eq!(value(&rows, "Title"), "Not set");
    assert_eq!(value(&rows, "Category"), "General");
    assert_eq!(value(&rows, "Level"), "Beginner");
    // Weeks only render once the details validate.
    assert_eq!(value(&rows, "Duration"), "Not set");
    assert_eq!(value(&rows, "Study materials"), "Included");
}

#[test]
fn review_rows_reflect_edits() {
    let mut wizard = CourseWizard::default();
    wizard.edit_details(DetailsEdit::Title(" Rust 101 ".to_owned()));
    wizard.edit_details(DetailsEdit::Category("Programming".to_owned()));
    wizard.edit_details(DetailsEdit::Weeks("1".to_owned()));
    wizard.edit_details(DetailsEdit::MediaLinks(false));

    let rows = review_rows(&wizard);

    assert_eq!(value(&rows, "Title"), "Rust 101");
    assert_eq!(value(&rows, "Category"), "Programming");
    assert_eq!(value(&rows, "Duration"), "1 week");
    assert_eq!(value(&rows, "Media links"), "Not included");
}

#[test]
fn categories_are_unique() {
    for (i, a) in CATEGORIES.iter().enumerate() {
        assert!(!CATEGORIES[i + 1..].contains(a));
    }
}
