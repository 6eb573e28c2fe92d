//! Request and input validation.
//!
//! Two entry points:
//! - [`check_request`] validates one student's ranked request against the
//!   registries, stopping at the first violation. The manager calls it
//!   before touching any state.
//! - [`validate_input`] checks a whole [`EnrollmentInput`] and reports every
//!   problem at once:
//!   - Duplicate course names and student ids
//!   - Request sizes outside `1..=MAX_CHOICES`
//!   - References to undefined courses
//!   - Courses repeated within one request

use crate::error::RequestViolation;
use crate::models::{CourseRegistry, EnrollmentInput, StudentRegistry, MAX_CHOICES};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same key.
    DuplicateId,
    /// A request lists too few or too many courses.
    RequestSize,
    /// A request references a course that doesn't exist.
    InvalidCourseReference,
    /// A request lists the same course twice.
    RepeatedChoice,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a single enrollment request.
///
/// Checks, in order:
/// 1. Between 1 and `MAX_CHOICES` courses
/// 2. The student is loaded
/// 3. Every course is defined
/// 4. No course appears twice
/// 5. The student has not submitted before
pub fn check_request(
    students: &StudentRegistry,
    courses: &CourseRegistry,
    student_id: &str,
    selected: &[String],
) -> Result<(), RequestViolation> {
    if selected.is_empty() || selected.len() > MAX_CHOICES {
        return Err(RequestViolation::CountOutOfRange {
            count: selected.len(),
        });
    }

    let student = students
        .get(student_id)
        .map_err(|_| RequestViolation::UnknownStudent(student_id.to_string()))?;

    if let Some(unknown) = selected.iter().find(|c| !courses.contains(c)) {
        return Err(RequestViolation::UnknownCourse(unknown.clone()));
    }

    if let Some(repeated) = first_repeated(selected) {
        return Err(RequestViolation::DuplicateCourse(repeated.to_string()));
    }

    if student.has_requests() {
        return Err(RequestViolation::AlreadySubmitted(student_id.to_string()));
    }

    Ok(())
}

/// Validates a bundled enrollment input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &EnrollmentInput) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_names = HashSet::new();
    for offer in &input.courses {
        if !course_names.insert(offer.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course name: {}", offer.name),
            ));
        }
    }

    let mut student_ids = HashSet::new();
    for student in &input.students {
        if !student_ids.insert(student.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", student.id),
            ));
        }
    }

    // Requests (an empty list means the student never submitted)
    for student in &input.students {
        if student.requests.is_empty() {
            continue;
        }

        if student.requests.len() > MAX_CHOICES {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestSize,
                format!(
                    "Student '{}' requests {} courses, at most {} allowed",
                    student.id,
                    student.requests.len(),
                    MAX_CHOICES
                ),
            ));
        }

        for course in &student.requests {
            if !course_names.contains(course.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidCourseReference,
                    format!(
                        "Student '{}' requests unknown course '{}'",
                        student.id, course
                    ),
                ));
            }
        }

        if let Some(repeated) = first_repeated(&student.requests) {
            errors.push(ValidationError::new(
                ValidationErrorKind::RepeatedChoice,
                format!(
                    "Student '{}' selects course '{}' more than once",
                    student.id, repeated
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn first_repeated(selected: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    selected
        .iter()
        .find(|c| !seen.insert(c.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registries() -> (StudentRegistry, CourseRegistry) {
        let mut students = StudentRegistry::new();
        students.load("s1", 25.0).unwrap();
        let mut courses = CourseRegistry::new();
        for name in ["A", "B", "C", "D"] {
            courses.define(name, 1).unwrap();
        }
        (students, courses)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_request() {
        let (students, courses) = registries();
        assert!(check_request(&students, &courses, "s1", &names(&["A", "B", "C"])).is_ok());
    }

    #[test]
    fn test_count_bounds() {
        let (students, courses) = registries();
        assert_eq!(
            check_request(&students, &courses, "s1", &[]),
            Err(RequestViolation::CountOutOfRange { count: 0 })
        );
        assert_eq!(
            check_request(&students, &courses, "s1", &names(&["A", "B", "C", "D"])),
            Err(RequestViolation::CountOutOfRange { count: 4 })
        );
    }

    #[test]
    fn test_check_order() {
        let (students, courses) = registries();
        // Count is checked before the student id
        assert!(matches!(
            check_request(&students, &courses, "ghost", &[]),
            Err(RequestViolation::CountOutOfRange { .. })
        ));
        // Student id is checked before course names
        assert_eq!(
            check_request(&students, &courses, "ghost", &names(&["Z"])),
            Err(RequestViolation::UnknownStudent("ghost".into()))
        );
    }

    #[test]
    fn test_unknown_course() {
        let (students, courses) = registries();
        assert_eq!(
            check_request(&students, &courses, "s1", &names(&["A", "Z"])),
            Err(RequestViolation::UnknownCourse("Z".into()))
        );
    }

    #[test]
    fn test_repeated_course() {
        let (students, courses) = registries();
        assert_eq!(
            check_request(&students, &courses, "s1", &names(&["A", "B", "A"])),
            Err(RequestViolation::DuplicateCourse("A".into()))
        );
    }

    #[test]
    fn test_already_submitted() {
        let (mut students, courses) = registries();
        students.set_requests("s1", names(&["A"])).unwrap();
        assert_eq!(
            check_request(&students, &courses, "s1", &names(&["B"])),
            Err(RequestViolation::AlreadySubmitted("s1".into()))
        );
    }

    #[test]
    fn test_valid_input() {
        let input = EnrollmentInput::new()
            .with_course("A", 1)
            .with_course("B", 1)
            .with_request("s1", 90.0, ["A", "B"])
            .with_student("s2", 80.0);
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_input_duplicates() {
        let input = EnrollmentInput::new()
            .with_course("A", 1)
            .with_course("A", 2)
            .with_student("s1", 90.0)
            .with_student("s1", 80.0);

        let errors = validate_input(&input).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
                .count(),
            2
        );
        assert!(errors.iter().any(|e| e.message.contains("course")));
        assert!(errors.iter().any(|e| e.message.contains("student")));
    }

    #[test]
    fn test_input_multiple_errors() {
        let input = EnrollmentInput::new()
            .with_course("A", 1)
            .with_request("s1", 90.0, ["A", "X", "A", "Y"]);

        let errors = validate_input(&input).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RequestSize));
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidCourseReference)
                .count(),
            2
        );
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RepeatedChoice));
    }
}
