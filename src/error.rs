//! Error types for registry, request, and allocation operations.
//!
//! Every failure is scoped to the call that produced it: the manager's
//! state is left unchanged whenever an error is returned.

use std::fmt;

use thiserror::Error;

/// Result type for elective operations.
pub type Result<T> = std::result::Result<T, ElectiveError>;

/// The kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A course offer.
    Course,
    /// A student record.
    Student,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Course => f.write_str("course"),
            EntityKind::Student => f.write_str("student"),
        }
    }
}

/// Errors returned by the elective manager and its registries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElectiveError {
    /// An enrollment request failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(RequestViolation),

    /// A course or student with the same key already exists.
    #[error("duplicate {kind} '{key}'")]
    Duplicate {
        /// Record kind.
        kind: EntityKind,
        /// Offending key.
        key: String,
    },

    /// Lookup of an unknown course or student.
    #[error("{kind} '{key}' not found")]
    NotFound {
        /// Record kind.
        kind: EntityKind,
        /// Missing key.
        key: String,
    },

    /// The allocation pass has already run.
    #[error("allocation has already been performed")]
    AlreadyAllocated,

    /// A rate was requested over an empty student population.
    #[error("no students loaded")]
    NoStudents,

    /// A choice rank outside `1..=MAX_CHOICES`.
    #[error("rank {0} is out of range")]
    InvalidRank(usize),
}

impl ElectiveError {
    pub(crate) fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            key: key.into(),
        }
    }
}

/// Why an enrollment request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestViolation {
    /// Number of selected courses is not in `1..=MAX_CHOICES`.
    #[error("{count} courses selected, expected between 1 and 3")]
    CountOutOfRange {
        /// Number of courses submitted.
        count: usize,
    },
    /// The student id is not loaded.
    #[error("unknown student '{0}'")]
    UnknownStudent(String),
    /// A selected course is not defined.
    #[error("unknown course '{0}'")]
    UnknownCourse(String),
    /// The same course appears twice in one request.
    #[error("course '{0}' selected more than once")]
    DuplicateCourse(String),
    /// The student already has a request on file.
    #[error("student '{0}' has already submitted a request")]
    AlreadySubmitted(String),
}

impl From<RequestViolation> for ElectiveError {
    fn from(violation: RequestViolation) -> Self {
        Self::InvalidRequest(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ElectiveError::duplicate(EntityKind::Course, "Math");
        assert_eq!(e.to_string(), "duplicate course 'Math'");

        let e = ElectiveError::not_found(EntityKind::Student, "s9");
        assert_eq!(e.to_string(), "student 's9' not found");

        let e: ElectiveError = RequestViolation::CountOutOfRange { count: 4 }.into();
        assert_eq!(
            e.to_string(),
            "invalid request: 4 courses selected, expected between 1 and 3"
        );
    }
}
