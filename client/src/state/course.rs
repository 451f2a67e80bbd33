//! Course entities and the form drafts that produce them.
//!
//! DESIGN
//! ======
//! Entities are plain in-memory view models. Each editable entity has a draft
//! type holding raw form text; `build` is the only path from a draft to an
//! entity, so every form rule lives here rather than in the views.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use crate::util::format::parse_iso_date;

/// Marks used when the max-marks field is left blank.
pub const DEFAULT_MAX_MARKS: u32 = 100;

/// Every rule a dashboard form can fail, with the text shown inline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required.")]
    MissingTitle,
    #[error("Maximum marks must be a positive whole number.")]
    InvalidMarks,
    #[error("Due date must be a valid date (YYYY-MM-DD).")]
    InvalidDueDate,
    #[error("No form is open.")]
    NoOpenForm,
    #[error("Enter your email address.")]
    MissingEmail,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Enter your password.")]
    MissingPassword,
    #[error("Enter your full name.")]
    MissingName,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Accept the terms to continue.")]
    TermsNotAccepted,
    #[error("Course title is required.")]
    MissingCourseTitle,
    #[error("Number of weeks must be between {min} and {max}.")]
    InvalidWeeks { min: u32, max: u32 },
    #[error("Finish the earlier steps first.")]
    StepLocked,
    #[error("Review the course before publishing.")]
    NotReviewed,
}

/// Kind of study material attached to a lesson.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaterialKind {
    #[default]
    Unset,
    Pdf,
    Video,
    Link,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 4] = [Self::Unset, Self::Pdf, Self::Video, Self::Link];

    pub fn label(self) -> &'static str {
        match self {
            Self::Unset => "No material",
            Self::Pdf => "PDF document",
            Self::Video => "Video",
            Self::Link => "External link",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Unset => "📝",
            Self::Pdf => "📄",
            Self::Video => "🎬",
            Self::Link => "🔗",
        }
    }

    /// Value used in `<select>` options.
    pub fn as_value(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Pdf => "pdf",
            Self::Video => "video",
            Self::Link => "link",
        }
    }

    /// Inverse of [`MaterialKind::as_value`]; unknown values map to `Unset`.
    pub fn from_value(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "video" => Self::Video,
            "link" => Self::Link,
            _ => Self::Unset,
        }
    }

    /// Placeholder for the reference input, which differs per kind.
    pub fn reference_hint(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Pdf => "handout.pdf",
            Self::Video => "https://youtube.com/watch?v=...",
            Self::Link => "https://...",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub material: MaterialKind,
    pub material_ref: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date `YYYY-MM-DD`, or empty when no due date was set.
    pub due_date: String,
    pub max_marks: u32,
}

/// Read-only quiz row shown on the course detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub title: String,
    pub question_count: u32,
    pub duration_minutes: u32,
    pub attempts: u32,
}

/// Read-only enrollment row shown on the course detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrolledStudent {
    pub name: String,
    pub email: String,
    pub progress: u8,
    pub grade: u8,
    pub last_active: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn from_label(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(raw.trim()))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CourseStatus {
    #[default]
    Draft,
    Published,
}

impl CourseStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }
}

/// Course card data for the overview and course list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub weeks: u32,
    pub student_count: u32,
    pub lesson_count: u32,
    pub assignment_count: u32,
    pub status: CourseStatus,
}

/// Lessons and assignments authored for one course.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseContent {
    pub lessons: Vec<Lesson>,
    pub assignments: Vec<Assignment>,
}

impl CourseContent {
    pub fn lesson_count(&self) -> u32 {
        u32::try_from(self.lessons.len()).unwrap_or(u32::MAX)
    }

    pub fn assignment_count(&self) -> u32 {
        u32::try_from(self.assignments.len()).unwrap_or(u32::MAX)
    }
}

/// Raw add-lesson form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonDraft {
    pub title: String,
    pub description: String,
    pub material: MaterialKind,
    pub material_ref: String,
    /// Last failed submit, cleared on the next edit.
    pub error: Option<FormError>,
}

/// A single field change in the add-lesson form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonEdit {
    Title(String),
    Description(String),
    Material(MaterialKind),
    MaterialRef(String),
}

impl LessonDraft {
    pub fn apply(&mut self, edit: LessonEdit) {
        match edit {
            LessonEdit::Title(v) => self.title = v,
            LessonEdit::Description(v) => self.description = v,
            LessonEdit::Material(kind) => self.material = kind,
            LessonEdit::MaterialRef(v) => self.material_ref = v,
        }
        self.error = None;
    }

    pub fn build(&self, id: String) -> Result<Lesson, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let material_ref = match self.material {
            MaterialKind::Unset => None,
            _ => Some(self.material_ref.trim().to_owned()).filter(|r| !r.is_empty()),
        };
        Ok(Lesson {
            id,
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            material: self.material,
            material_ref,
        })
    }
}

/// Raw add-assignment form input. Marks stay text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub max_marks: String,
    pub error: Option<FormError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignmentEdit {
    Title(String),
    Description(String),
    DueDate(String),
    MaxMarks(String),
}

impl AssignmentDraft {
    pub fn apply(&mut self, edit: AssignmentEdit) {
        match edit {
            AssignmentEdit::Title(v) => self.title = v,
            AssignmentEdit::Description(v) => self.description = v,
            AssignmentEdit::DueDate(v) => self.due_date = v,
            AssignmentEdit::MaxMarks(v) => self.max_marks = v,
        }
        self.error = None;
    }

    pub fn build(&self, id: String) -> Result<Assignment, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let due_date = self.due_date.trim();
        if !due_date.is_empty() && parse_iso_date(due_date).is_none() {
            return Err(FormError::InvalidDueDate);
        }
        let marks = self.max_marks.trim();
        let max_marks = if marks.is_empty() {
            DEFAULT_MAX_MARKS
        } else {
            // Digits only: `parse` alone would accept a leading `+`.
            Some(marks)
                .filter(|m| m.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|m| m.parse::<u32>().ok())
                .filter(|m| *m > 0)
                .ok_or(FormError::InvalidMarks)?
        };
        Ok(Assignment {
            id,
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            due_date: due_date.to_owned(),
            max_marks,
        })
    }
}
