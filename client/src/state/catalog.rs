//! Session course catalog shared through context.
//!
//! DESIGN
//! ======
//! Seeded from the mock tables and extended by the creation wizard. Each
//! course keeps its summary card and its authored lessons and assignments;
//! the summary counts are always derived from that content. Nothing is
//! persisted: a reload returns to the seed.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use crate::state::course::{CourseContent, CourseStatus, CourseSummary};
use crate::state::mock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    pub courses: Vec<CourseSummary>,
    content: HashMap<String, CourseContent>,
}

impl Default for CatalogState {
    fn default() -> Self {
        let courses = mock::courses();
        let content = courses.iter().map(|c| (c.id.clone(), mock::content_for(&c.id))).collect();
        Self { courses, content }
    }
}

impl CatalogState {
    pub fn find(&self, id: &str) -> Option<&CourseSummary> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Insert or replace by id; new courses go to the front of the list.
    pub fn upsert(&mut self, course: CourseSummary) {
        if let Some(existing) = self.courses.iter_mut().find(|c| c.id == course.id) {
            *existing = course;
        } else {
            self.courses.insert(0, course);
        }
    }

    /// Add a course together with its authored content.
    pub fn publish(&mut self, mut course: CourseSummary, content: CourseContent) {
        course.lesson_count = content.lesson_count();
        course.assignment_count = content.assignment_count();
        self.content.insert(course.id.clone(), content);
        self.upsert(course);
    }

    /// Lessons and assignments of `id`; empty for unknown courses.
    pub fn content_for(&self, id: &str) -> CourseContent {
        self.content.get(id).cloned().unwrap_or_default()
    }

    /// Replace the content of a known course and refresh its card counts.
    /// Returns false when `id` is not in the catalog.
    pub fn save_content(&mut self, id: &str, content: CourseContent) -> bool {
        let Some(course) = self.courses.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        course.lesson_count = content.lesson_count();
        course.assignment_count = content.assignment_count();
        self.content.insert(id.to_owned(), content);
        true
    }

    pub fn recent(&self, limit: usize) -> Vec<CourseSummary> {
        self.courses.iter().take(limit).cloned().collect()
    }

    pub fn filtered(&self, status: Option<CourseStatus>) -> Vec<CourseSummary> {
        self.courses
            .iter()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect()
    }
}
