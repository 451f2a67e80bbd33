//! Deterministic mock tables backing the dashboard screens.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::state::course::{
    Assignment, CourseContent, CourseLevel, CourseStatus, CourseSummary, EnrolledStudent, Lesson, MaterialKind,
    Quiz,
};

/// Signed-in teacher shown in the shell. There is no session behind it.
pub const TEACHER_NAME: &str = "Dr. Sarah Johnson";
pub const TEACHER_EMAIL: &str = "sarah.johnson@example.edu";

fn course(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    level: CourseLevel,
    weeks: u32,
    status: CourseStatus,
) -> CourseSummary {
    // Card counts come from the same tables that seed the detail page.
    let content = content_for(id);
    CourseSummary {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        level,
        weeks,
        student_count: u32::try_from(students_for(id).len()).unwrap_or(u32::MAX),
        lesson_count: content.lesson_count(),
        assignment_count: content.assignment_count(),
        status,
    }
}

pub fn courses() -> Vec<CourseSummary> {
    vec![
        course(
            "course-1",
            "Introduction to Web Development",
            "HTML, CSS and JavaScript from first principles to a deployed portfolio site.",
            "Programming",
            CourseLevel::Beginner,
            10,
            CourseStatus::Published,
        ),
        course(
            "course-2",
            "Data Structures & Algorithms",
            "Arrays through graphs, with complexity analysis and weekly problem sets.",
            "Computer Science",
            CourseLevel::Intermediate,
            12,
            CourseStatus::Published,
        ),
        course(
            "course-3",
            "UI/UX Design Fundamentals",
            "Research, wireframing, prototyping and usability testing.",
            "Design",
            CourseLevel::Beginner,
            6,
            CourseStatus::Draft,
        ),
    ]
}

fn lesson(id: &str, title: &str, description: &str, material: MaterialKind, material_ref: Option<&str>) -> Lesson {
    Lesson {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        material,
        material_ref: material_ref.map(str::to_owned),
    }
}

/// Seed lessons for a course detail page. Unknown courses start empty.
pub fn lessons_for(course_id: &str) -> Vec<Lesson> {
    match course_id {
        "course-1" => vec![
            lesson(
                "course-1-lesson-1",
                "How the Web Works",
                "Clients, servers, DNS and the request/response cycle.",
                MaterialKind::Video,
                Some("https://example.com/videos/how-the-web-works"),
            ),
            lesson(
                "course-1-lesson-2",
                "HTML Document Structure",
                "Semantic elements, forms and accessibility basics.",
                MaterialKind::Pdf,
                Some("html-structure.pdf"),
            ),
            lesson(
                "course-1-lesson-3",
                "Styling with CSS",
                "Selectors, the box model, flexbox and grid.",
                MaterialKind::Link,
                Some("https://developer.mozilla.org/docs/Web/CSS"),
            ),
        ],
        "course-2" => vec![
            lesson(
                "course-2-lesson-1",
                "Big-O Notation",
                "Reasoning about growth rates and worst cases.",
                MaterialKind::Pdf,
                Some("big-o-cheatsheet.pdf"),
            ),
            lesson(
                "course-2-lesson-2",
                "Linked Lists",
                "Singly and doubly linked lists, sentinels and iteration.",
                MaterialKind::Unset,
                None,
            ),
        ],
        "course-3" => vec![
            lesson(
                "course-3-lesson-1",
                "Design Thinking",
                "Empathize, define, ideate, prototype and test.",
                MaterialKind::Video,
                Some("https://example.com/videos/design-thinking"),
            ),
            lesson(
                "course-3-lesson-2",
                "Wireframing",
                "Low-fidelity layouts before visual design.",
                MaterialKind::Link,
                Some("https://example.com/guides/wireframing"),
            ),
        ],
        _ => Vec::new(),
    }
}

fn assignment(id: &str, title: &str, description: &str, due_date: &str, max_marks: u32) -> Assignment {
    Assignment {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        due_date: due_date.to_owned(),
        max_marks,
    }
}

pub fn assignments_for(course_id: &str) -> Vec<Assignment> {
    match course_id {
        "course-1" => vec![
            assignment(
                "course-1-assignment-1",
                "Personal Landing Page",
                "Build a single page introducing yourself using semantic HTML.",
                "2025-03-14",
                50,
            ),
            assignment(
                "course-1-assignment-2",
                "Responsive Layout",
                "Make the landing page responsive down to 320px.",
                "2025-04-02",
                100,
            ),
        ],
        "course-2" => vec![assignment(
            "course-2-assignment-1",
            "Implement a Stack",
            "Array-backed stack with push, pop and peek plus tests.",
            "2025-03-21",
            40,
        )],
        "course-3" => vec![assignment(
            "course-3-assignment-1",
            "User Interview Report",
            "Interview three users and summarize the pain points.",
            "2025-04-10",
            30,
        )],
        _ => Vec::new(),
    }
}

/// Seed lessons and assignments for `course_id`.
pub fn content_for(course_id: &str) -> CourseContent {
    CourseContent { lessons: lessons_for(course_id), assignments: assignments_for(course_id) }
}

fn quiz(title: &str, question_count: u32, duration_minutes: u32, attempts: u32) -> Quiz {
    Quiz { title: title.to_owned(), question_count, duration_minutes, attempts }
}

pub fn quizzes_for(course_id: &str) -> Vec<Quiz> {
    match course_id {
        "course-1" => vec![
            quiz("HTML Basics", 10, 15, 38),
            quiz("CSS Selectors", 12, 20, 31),
            quiz("JavaScript Fundamentals", 15, 30, 22),
        ],
        "course-2" => vec![quiz("Complexity Check", 8, 10, 27)],
        _ => Vec::new(),
    }
}

fn student(name: &str, email: &str, progress: u8, grade: u8, last_active: &str) -> EnrolledStudent {
    EnrolledStudent {
        name: name.to_owned(),
        email: email.to_owned(),
        progress,
        grade,
        last_active: last_active.to_owned(),
    }
}

pub fn students_for(course_id: &str) -> Vec<EnrolledStudent> {
    match course_id {
        "course-1" => vec![
            student("Amara Okafor", "amara.okafor@example.edu", 92, 88, "2025-03-10"),
            student("Liam Chen", "liam.chen@example.edu", 75, 81, "2025-03-09"),
            student("Sofia Martins", "sofia.martins@example.edu", 58, 64, "2025-03-04"),
            student("Noah Williams", "noah.williams@example.edu", 34, 47, "2025-02-26"),
        ],
        "course-2" => vec![
            student("Priya Sharma", "priya.sharma@example.edu", 81, 90, "2025-03-11"),
            student("Ethan Brown", "ethan.brown@example.edu", 66, 72, "2025-03-07"),
        ],
        _ => Vec::new(),
    }
}

/// Headline numbers for the overview stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_courses: usize,
    pub published_courses: usize,
    pub total_students: u32,
    pub avg_lessons: f64,
}

impl DashboardStats {
    pub fn from_courses(courses: &[CourseSummary]) -> Self {
        let total_courses = courses.len();
        let published_courses = courses.iter().filter(|c| c.status == CourseStatus::Published).count();
        let total_students = courses.iter().map(|c| c.student_count).sum();
        let total_lessons: u32 = courses.iter().map(|c| c.lesson_count).sum();
        let avg_lessons = if total_courses == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = total_courses as f64;
            f64::from(total_lessons) / count
        };
        Self { total_courses, published_courses, total_students, avg_lessons }
    }
}
