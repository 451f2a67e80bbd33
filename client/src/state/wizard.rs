//! Course-creation wizard state.
//!
//! DESIGN
//! ======
//! The wizard is a linear step machine over a details draft plus an embedded
//! [`CourseWorkspace`] holding the lessons and assignments authored so far.
//! Steps only advance through `next`, which validates; `back` and `go_to`
//! move freely among visited steps. Any step change discards open add forms.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::state::course::{CourseContent, CourseLevel, CourseStatus, CourseSummary, FormError};
use crate::state::workspace::CourseWorkspace;

pub const MIN_WEEKS: u32 = 1;
pub const MAX_WEEKS: u32 = 52;
pub const DEFAULT_WEEKS: u32 = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    Details,
    Curriculum,
    Assignments,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [Self::Details, Self::Curriculum, Self::Assignments, Self::Review];

    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Course Details",
            Self::Curriculum => "Curriculum",
            Self::Assignments => "Assignments",
            Self::Review => "Review & Publish",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Details => 0,
            Self::Curriculum => 1,
            Self::Assignments => 2,
            Self::Review => 3,
        }
    }

    /// Already passed when `current` is the active step.
    pub fn is_done_at(self, current: WizardStep) -> bool {
        self < current
    }

    /// Not yet reachable when `furthest` is the furthest visited step.
    pub fn is_locked_at(self, furthest: WizardStep) -> bool {
        self > furthest
    }

    fn following(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn preceding(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// First-step form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailsDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    /// Raw number-of-weeks input.
    pub weeks: String,
    /// Rough outline pasted by the teacher.
    pub outline: String,
    pub include_study_materials: bool,
    pub include_media_links: bool,
}

impl Default for CourseDetailsDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            level: CourseLevel::Beginner,
            weeks: DEFAULT_WEEKS.to_string(),
            outline: String::new(),
            include_study_materials: true,
            include_media_links: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsEdit {
    Title(String),
    Description(String),
    Category(String),
    Level(CourseLevel),
    Weeks(String),
    Outline(String),
    StudyMaterials(bool),
    MediaLinks(bool),
}

impl CourseDetailsDraft {
    pub fn apply(&mut self, edit: DetailsEdit) {
        match edit {
            DetailsEdit::Title(v) => self.title = v,
            DetailsEdit::Description(v) => self.description = v,
            DetailsEdit::Category(v) => self.category = v,
            DetailsEdit::Level(level) => self.level = level,
            DetailsEdit::Weeks(v) => self.weeks = v,
            DetailsEdit::Outline(v) => self.outline = v,
            DetailsEdit::StudyMaterials(on) => self.include_study_materials = on,
            DetailsEdit::MediaLinks(on) => self.include_media_links = on,
        }
    }

    /// Check the step-one rules, returning the parsed week count.
    pub fn validate(&self) -> Result<u32, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingCourseTitle);
        }
        self.weeks
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|w| (MIN_WEEKS..=MAX_WEEKS).contains(w))
            .ok_or(FormError::InvalidWeeks { min: MIN_WEEKS, max: MAX_WEEKS })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseWizard {
    pub step: WizardStep,
    /// Furthest step reached; `go_to` may jump anywhere up to it.
    pub furthest: WizardStep,
    pub details: CourseDetailsDraft,
    pub content: CourseWorkspace,
    /// Error from the last refused `next` or `publish`.
    pub error: Option<FormError>,
}

impl CourseWizard {
    pub fn edit_details(&mut self, edit: DetailsEdit) {
        self.details.apply(edit);
        self.error = None;
    }

    pub fn next(&mut self) -> Result<(), FormError> {
        if self.step == WizardStep::Details {
            if let Err(err) = self.details.validate() {
                self.error = Some(err.clone());
                return Err(err);
            }
        }
        if let Some(next) = self.step.following() {
            self.move_to(next);
            self.furthest = self.furthest.max(next);
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if let Some(prev) = self.step.preceding() {
            self.move_to(prev);
        }
    }

    pub fn go_to(&mut self, step: WizardStep) -> Result<(), FormError> {
        if step > self.furthest {
            return Err(FormError::StepLocked);
        }
        self.move_to(step);
        Ok(())
    }

    fn move_to(&mut self, step: WizardStep) {
        if step != self.step {
            self.content.discard_transient();
        }
        self.step = step;
        self.error = None;
    }

    pub fn can_go_back(&self) -> bool {
        self.step != WizardStep::Details
    }

    /// Share of steps completed, for the progress bar.
    pub fn progress_percent(&self) -> u8 {
        let done = self.step.index() + 1;
        let total = WizardStep::ALL.len();
        u8::try_from(done * 100 / total).unwrap_or(100)
    }

    /// Produce the summary and content that a real backend would persist.
    pub fn publish(&mut self, id: String) -> Result<(CourseSummary, CourseContent), FormError> {
        if self.step != WizardStep::Review {
            self.error = Some(FormError::NotReviewed);
            return Err(FormError::NotReviewed);
        }
        let weeks = match self.details.validate() {
            Ok(weeks) => weeks,
            Err(err) => {
                self.error = Some(err.clone());
                return Err(err);
            }
        };
        let content = self.content.content();
        let category = self.details.category.trim();
        let summary = CourseSummary {
            id,
            title: self.details.title.trim().to_owned(),
            description: self.details.description.trim().to_owned(),
            category: if category.is_empty() { "General".to_owned() } else { category.to_owned() },
            level: self.details.level,
            weeks,
            student_count: 0,
            lesson_count: content.lesson_count(),
            assignment_count: content.assignment_count(),
            status: CourseStatus::Published,
        };
        Ok((summary, content))
    }
}
