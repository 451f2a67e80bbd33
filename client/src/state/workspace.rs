//! Course workspace view state: tabs, add forms, and expanded rows.
//!
//! DESIGN
//! ======
//! The workspace owns both the entity lists of one course and the transient
//! editing flags layered over them. All mutations go through
//! [`CourseWorkspace::apply`], so the detail page and the creation wizard
//! drive the same transitions from the same components.
//!
//! Transient state never outlives the surface it was opened on: switching
//! tabs discards open forms and collapses the expanded lesson.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use crate::state::course::{
    Assignment, AssignmentDraft, AssignmentEdit, CourseContent, FormError, Lesson, LessonDraft, LessonEdit,
};
use crate::state::ids::next_id;

/// Sub-screen of the course detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkspaceTab {
    #[default]
    Lessons,
    Assignments,
    Quizzes,
    Students,
}

impl WorkspaceTab {
    pub const ALL: [WorkspaceTab; 4] = [Self::Lessons, Self::Assignments, Self::Quizzes, Self::Students];

    pub fn label(self) -> &'static str {
        match self {
            Self::Lessons => "Lessons",
            Self::Assignments => "Assignments",
            Self::Quizzes => "Quizzes",
            Self::Students => "Students",
        }
    }
}

/// Every transition the workspace accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkspaceAction {
    SelectTab(WorkspaceTab),
    OpenLessonForm,
    CancelLessonForm,
    EditLesson(LessonEdit),
    SubmitLesson,
    OpenAssignmentForm,
    CancelAssignmentForm,
    EditAssignment(AssignmentEdit),
    SubmitAssignment,
    ToggleLesson(String),
    RemoveLesson(String),
    RemoveAssignment(String),
}

impl WorkspaceAction {
    /// Whether a successful apply can change the committed lesson or
    /// assignment lists.
    pub fn changes_content(&self) -> bool {
        matches!(
            self,
            Self::SubmitLesson | Self::SubmitAssignment | Self::RemoveLesson(_) | Self::RemoveAssignment(_)
        )
    }
}

/// Entity totals for tab badges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceCounts {
    pub lessons: usize,
    pub assignments: usize,
    pub quizzes: usize,
    pub students: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseWorkspace {
    pub tab: WorkspaceTab,
    pub lessons: Vec<Lesson>,
    pub assignments: Vec<Assignment>,
    pub lesson_form: Option<LessonDraft>,
    pub assignment_form: Option<AssignmentDraft>,
    pub expanded_lesson: Option<String>,
    /// Read-only row counts supplied by the page for badge display.
    pub quiz_count: usize,
    pub student_count: usize,
}

impl CourseWorkspace {
    pub fn new(lessons: Vec<Lesson>, assignments: Vec<Assignment>) -> Self {
        Self { lessons, assignments, ..Self::default() }
    }

    pub fn from_content(content: CourseContent) -> Self {
        Self::new(content.lessons, content.assignments)
    }

    /// Committed lists, without any transient state.
    pub fn content(&self) -> CourseContent {
        CourseContent { lessons: self.lessons.clone(), assignments: self.assignments.clone() }
    }

    /// Apply one transition. Only submits can fail.
    pub fn apply(&mut self, action: WorkspaceAction) -> Result<(), FormError> {
        match action {
            WorkspaceAction::SelectTab(tab) => self.select_tab(tab),
            WorkspaceAction::OpenLessonForm => self.open_lesson_form(),
            WorkspaceAction::CancelLessonForm => self.lesson_form = None,
            WorkspaceAction::EditLesson(edit) => {
                if let Some(draft) = self.lesson_form.as_mut() {
                    draft.apply(edit);
                }
            }
            WorkspaceAction::SubmitLesson => return self.submit_lesson(next_id("lesson")),
            WorkspaceAction::OpenAssignmentForm => self.open_assignment_form(),
            WorkspaceAction::CancelAssignmentForm => self.assignment_form = None,
            WorkspaceAction::EditAssignment(edit) => {
                if let Some(draft) = self.assignment_form.as_mut() {
                    draft.apply(edit);
                }
            }
            WorkspaceAction::SubmitAssignment => return self.submit_assignment(next_id("assignment")),
            WorkspaceAction::ToggleLesson(id) => self.toggle_lesson(&id),
            WorkspaceAction::RemoveLesson(id) => {
                self.remove_lesson(&id);
            }
            WorkspaceAction::RemoveAssignment(id) => {
                self.remove_assignment(&id);
            }
        }
        Ok(())
    }

    pub fn select_tab(&mut self, tab: WorkspaceTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.discard_transient();
    }

    /// Drop open forms and collapse rows, keeping committed entities.
    pub fn discard_transient(&mut self) {
        self.lesson_form = None;
        self.assignment_form = None;
        self.expanded_lesson = None;
    }

    pub fn open_lesson_form(&mut self) {
        self.lesson_form.get_or_insert_with(LessonDraft::default);
    }

    pub fn open_assignment_form(&mut self) {
        self.assignment_form.get_or_insert_with(AssignmentDraft::default);
    }

    /// Commit the open lesson draft under `id`. A failed build leaves the
    /// form open with the error recorded on the draft.
    pub fn submit_lesson(&mut self, id: String) -> Result<(), FormError> {
        let draft = self.lesson_form.as_mut().ok_or(FormError::NoOpenForm)?;
        match draft.build(id) {
            Ok(lesson) => {
                self.lessons.retain(|l| l.id != lesson.id);
                self.lessons.push(lesson);
                self.lesson_form = None;
                Ok(())
            }
            Err(err) => {
                draft.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn submit_assignment(&mut self, id: String) -> Result<(), FormError> {
        let draft = self.assignment_form.as_mut().ok_or(FormError::NoOpenForm)?;
        match draft.build(id) {
            Ok(assignment) => {
                self.assignments.retain(|a| a.id != assignment.id);
                self.assignments.push(assignment);
                self.assignment_form = None;
                Ok(())
            }
            Err(err) => {
                draft.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn toggle_lesson(&mut self, id: &str) {
        if self.expanded_lesson.as_deref() == Some(id) {
            self.expanded_lesson = None;
        } else if self.lessons.iter().any(|l| l.id == id) {
            self.expanded_lesson = Some(id.to_owned());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_lesson.as_deref() == Some(id)
    }

    pub fn remove_lesson(&mut self, id: &str) -> bool {
        let before = self.lessons.len();
        self.lessons.retain(|l| l.id != id);
        if self.expanded_lesson.as_deref() == Some(id) {
            self.expanded_lesson = None;
        }
        self.lessons.len() != before
    }

    pub fn remove_assignment(&mut self, id: &str) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != id);
        self.assignments.len() != before
    }

    pub fn counts(&self) -> WorkspaceCounts {
        WorkspaceCounts {
            lessons: self.lessons.len(),
            assignments: self.assignments.len(),
            quizzes: self.quiz_count,
            students: self.student_count,
        }
    }
}
