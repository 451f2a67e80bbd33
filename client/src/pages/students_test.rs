use super::*;

#[test]
fn roster_pairs_students_with_course_titles() {
    let courses = mock::courses();
    let rows = roster(&courses);
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].0, "Introduction to Web Development");
    assert_eq!(rows[0].1.name, "Amara Okafor");
    assert!(rows.iter().any(|(title, _)| title == "Data Structures & Algorithms"));
}

#[test]
fn average_progress_of_empty_roster_is_zero() {
    assert_eq!(average_progress(&[]), 0);
}

#[test]
fn average_progress_floors() {
    let rows = roster(&mock::courses());
    // (92 + 75 + 58 + 34 + 81 + 66) / 6 = 67.67
    assert_eq!(average_progress(&rows), 67);
}
