use super::*;
use crate::state::course::{AssignmentEdit, LessonEdit};
use crate::state::wizard::{CourseWizard, DetailsEdit};

#[test]
fn badge_count_reads_matching_total() {
    let counts = WorkspaceCounts { lessons: 3, assignments: 2, quizzes: 1, students: 4 };
    assert_eq!(badge_count(&counts, WorkspaceTab::Lessons), 3);
    assert_eq!(badge_count(&counts, WorkspaceTab::Assignments), 2);
    assert_eq!(badge_count(&counts, WorkspaceTab::Quizzes), 1);
    assert_eq!(badge_count(&counts, WorkspaceTab::Students), 4);
}

#[test]
fn seed_workspace_loads_catalog_rows() {
    let ws = seed_workspace(&CatalogState::default(), "course-1");
    assert_eq!(ws.tab, WorkspaceTab::Lessons);
    assert_eq!(
        ws.counts(),
        WorkspaceCounts { lessons: 3, assignments: 2, quizzes: 3, students: 4 }
    );
}

#[test]
fn seed_workspace_for_unknown_course_is_empty() {
    let ws = seed_workspace(&CatalogState::default(), "course-99");
    assert_eq!(ws.counts(), WorkspaceCounts::default());
}

#[test]
fn course_cards_agree_with_detail_workspace() {
    let catalog = CatalogState::default();
    for course in &catalog.courses {
        let counts = seed_workspace(&catalog, &course.id).counts();
        assert_eq!(counts.lessons, course.lesson_count as usize, "{}", course.id);
        assert_eq!(counts.assignments, course.assignment_count as usize, "{}", course.id);
        assert_eq!(counts.students, course.student_count as usize, "{}", course.id);
    }
}

#[test]
fn published_wizard_course_opens_with_its_content() {
    let mut wizard = CourseWizard::default();
    wizard.edit_details(DetailsEdit::Title("Rust 101".to_owned()));
    wizard.next().unwrap();
    wizard.content.apply(WorkspaceAction::OpenLessonForm).unwrap();
    wizard.content.apply(WorkspaceAction::EditLesson(LessonEdit::Title("Ownership".to_owned()))).unwrap();
    wizard.content.apply(WorkspaceAction::SubmitLesson).unwrap();
    wizard.next().unwrap();
    wizard.content.apply(WorkspaceAction::OpenAssignmentForm).unwrap();
    wizard
        .content
        .apply(WorkspaceAction::EditAssignment(AssignmentEdit::Title("Borrow checker lab".to_owned())))
        .unwrap();
    wizard.content.apply(WorkspaceAction::SubmitAssignment).unwrap();
    wizard.next().unwrap();

    let (summary, content) = wizard.publish("course-rust".to_owned()).unwrap();
    let mut catalog = CatalogState::default();
    catalog.publish(summary.clone(), content);

    let ws = seed_workspace(&catalog, &summary.id);
    assert_eq!(ws.lessons.len(), summary.lesson_count as usize);
    assert_eq!(ws.assignments.len(), summary.assignment_count as usize);
    assert_eq!(ws.lessons[0].title, "Ownership");
    assert_eq!(ws.assignments[0].title, "Borrow checker lab");
    assert_eq!(catalog.find("course-rust").map(|c| c.lesson_count), Some(1));
}

#[test]
fn saved_workspace_changes_update_the_course_card() {
    let mut catalog = CatalogState::default();
    let mut ws = seed_workspace(&catalog, "course-2");
    assert!(ws.remove_lesson("course-2-lesson-1"));

    assert!(catalog.save_content("course-2", ws.content()));

    assert_eq!(catalog.find("course-2").map(|c| c.lesson_count), Some(1));
    assert_eq!(seed_workspace(&catalog, "course-2").lessons.len(), 1);
}
