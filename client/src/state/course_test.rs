use super::*;

// =============================================================
// MaterialKind
// =============================================================

#[test]
fn material_kind_default_is_unset() {
    assert_eq!(MaterialKind::default(), MaterialKind::Unset);
}

#[test]
fn material_kind_value_round_trips_through_select() {
    for kind in MaterialKind::ALL {
        assert_eq!(MaterialKind::from_value(kind.as_value()), kind);
    }
}

#[test]
fn material_kind_from_value_is_lenient() {
    assert_eq!(MaterialKind::from_value(" PDF "), MaterialKind::Pdf);
    assert_eq!(MaterialKind::from_value("slides"), MaterialKind::Unset);
}

#[test]
fn material_kind_icons_are_distinct() {
    let icons: Vec<&str> = MaterialKind::ALL.iter().map(|k| k.icon()).collect();
    for (i, a) in icons.iter().enumerate() {
        for b in &icons[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// LessonDraft
// =============================================================

#[test]
fn lesson_build_trims_fields() {
    let draft = LessonDraft {
        title: "  Intro to HTML  ".to_owned(),
        description: " Tags and structure ".to_owned(),
        ..LessonDraft::default()
    };
    let lesson = draft.build("lesson-1".to_owned()).unwrap();
    assert_eq!(lesson.id, "lesson-1");
    assert_eq!(lesson.title, "Intro to HTML");
    assert_eq!(lesson.description, "Tags and structure");
    assert_eq!(lesson.material, MaterialKind::Unset);
    assert_eq!(lesson.material_ref, None);
}

#[test]
fn lesson_build_rejects_blank_title() {
    let draft = LessonDraft { title: "   ".to_owned(), ..LessonDraft::default() };
    assert_eq!(draft.build("x".to_owned()), Err(FormError::MissingTitle));
}

#[test]
fn lesson_build_drops_reference_when_material_unset() {
    let draft = LessonDraft {
        title: "CSS".to_owned(),
        material: MaterialKind::Unset,
        material_ref: "leftover.pdf".to_owned(),
        ..LessonDraft::default()
    };
    assert_eq!(draft.build("x".to_owned()).unwrap().material_ref, None);
}

#[test]
fn lesson_build_keeps_reference_for_video() {
    let draft = LessonDraft {
        title: "Flexbox".to_owned(),
        material: MaterialKind::Video,
        material_ref: " https://example.com/flex ".to_owned(),
        ..LessonDraft::default()
    };
    let lesson = draft.build("x".to_owned()).unwrap();
    assert_eq!(lesson.material, MaterialKind::Video);
    assert_eq!(lesson.material_ref.as_deref(), Some("https://example.com/flex"));
}

#[test]
fn lesson_edit_clears_previous_error() {
    let mut draft = LessonDraft { error: Some(FormError::MissingTitle), ..LessonDraft::default() };
    draft.apply(LessonEdit::Title("Grid".to_owned()));
    assert_eq!(draft.title, "Grid");
    assert_eq!(draft.error, None);
}

// =============================================================
// AssignmentDraft
// =============================================================

fn assignment_draft(title: &str, due: &str, marks: &str) -> AssignmentDraft {
    AssignmentDraft {
        title: title.to_owned(),
        due_date: due.to_owned(),
        max_marks: marks.to_owned(),
        ..AssignmentDraft::default()
    }
}

#[test]
fn assignment_build_defaults_blank_marks() {
    let assignment = assignment_draft("Portfolio", "", "").build("a-1".to_owned()).unwrap();
    assert_eq!(assignment.max_marks, DEFAULT_MAX_MARKS);
    assert_eq!(assignment.due_date, "");
}

#[test]
fn assignment_build_parses_marks_and_date() {
    let assignment = assignment_draft("Portfolio", "2025-03-14", " 50 ").build("a-1".to_owned()).unwrap();
    assert_eq!(assignment.max_marks, 50);
    assert_eq!(assignment.due_date, "2025-03-14");
}

#[test]
fn assignment_build_rejects_bad_marks() {
    assert_eq!(assignment_draft("P", "", "abc").build("a".to_owned()), Err(FormError::InvalidMarks));
    assert_eq!(assignment_draft("P", "", "0").build("a".to_owned()), Err(FormError::InvalidMarks));
    assert_eq!(assignment_draft("P", "", "-5").build("a".to_owned()), Err(FormError::InvalidMarks));
    assert_eq!(assignment_draft("P", "", "+5").build("a".to_owned()), Err(FormError::InvalidMarks));
    assert_eq!(assignment_draft("P", "", "5 0").build("a".to_owned()), Err(FormError::InvalidMarks));
}

#[test]
fn assignment_build_rejects_bad_date() {
    assert_eq!(
        assignment_draft("P", "2025-02-30", "10").build("a".to_owned()),
        Err(FormError::InvalidDueDate)
    );
    assert_eq!(
        assignment_draft("P", "next week", "10").build("a".to_owned()),
        Err(FormError::InvalidDueDate)
    );
}

#[test]
fn assignment_build_checks_title_first() {
    assert_eq!(assignment_draft("", "bad", "bad").build("a".to_owned()), Err(FormError::MissingTitle));
}

// =============================================================
// FormError / CourseLevel
// =============================================================

#[test]
fn form_error_messages_are_user_facing() {
    assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match.");
    assert_eq!(
        FormError::PasswordTooShort { min: 8 }.to_string(),
        "Password must be at least 8 characters."
    );
    assert_eq!(
        FormError::InvalidWeeks { min: 1, max: 52 }.to_string(),
        "Number of weeks must be between 1 and 52."
    );
}

#[test]
fn course_level_from_label_falls_back_to_beginner() {
    assert_eq!(CourseLevel::from_label("advanced"), CourseLevel::Advanced);
    assert_eq!(CourseLevel::from_label("expert"), CourseLevel::Beginner);
}

// =============================================================
// CourseContent
// =============================================================

#[test]
fn course_content_counts_entities() {
    let content = CourseContent {
        lessons: vec![LessonDraft { title: "Intro".to_owned(), ..LessonDraft::default() }.build("l-1".to_owned()).unwrap()],
        assignments: Vec::new(),
    };
    assert_eq!(content.lesson_count(), 1);
    assert_eq!(content.assignment_count(), 0);
    assert_eq!(CourseContent::default().lesson_count(), 0);
}
