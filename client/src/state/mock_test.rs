use super::*;

#[test]
fn mock_course_ids_are_unique() {
    let courses = courses();
    let mut ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), courses.len());
}

#[test]
fn seed_lessons_have_unique_ids_across_courses() {
    let lessons: Vec<_> = courses().iter().flat_map(|c| lessons_for(&c.id)).collect();
    let mut ids: Vec<&str> = lessons.iter().map(|l| l.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), lessons.len());
}

#[test]
fn unknown_course_has_empty_tables() {
    assert!(lessons_for("nope").is_empty());
    assert!(assignments_for("nope").is_empty());
    assert!(quizzes_for("nope").is_empty());
    assert!(students_for("nope").is_empty());
}

#[test]
fn seed_assignments_have_valid_due_dates() {
    for course in courses() {
        for assignment in assignments_for(&course.id) {
            assert!(
                crate::util::format::parse_iso_date(&assignment.due_date).is_some(),
                "{}",
                assignment.id
            );
        }
    }
}

#[test]
fn stats_from_mock_courses() {
    let stats = DashboardStats::from_courses(&courses());
    assert_eq!(stats.total_courses, 3);
    assert_eq!(stats.published_courses, 2);
    assert_eq!(stats.total_students, 6);
    assert!((stats.avg_lessons - 7.0 / 3.0).abs() < 1e-9);
}

#[test]
fn stats_from_no_courses_is_zeroed() {
    assert_eq!(DashboardStats::from_courses(&[]), DashboardStats::default());
}

#[test]
fn course_counts_match_seed_tables() {
    for course in courses() {
        let content = content_for(&course.id);
        assert_eq!(course.lesson_count as usize, content.lessons.len(), "{}", course.id);
        assert_eq!(course.assignment_count as usize, content.assignments.len(), "{}", course.id);
        assert_eq!(course.student_count as usize, students_for(&course.id).len(), "{}", course.id);
    }
}
