//! Bundled enrollment input.
//!
//! An `EnrollmentInput` carries course offers, students, and their ranked
//! requests as plain data, so callers can build or deserialize a whole
//! allocation problem and hand it over in one step.

use serde::{Deserialize, Serialize};

/// A course offer with its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOffer {
    /// Course name.
    pub name: String,
    /// Available seats.
    pub capacity: usize,
}

/// A student with an optional ranked request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student id.
    pub id: String,
    /// Grade average.
    pub average: f64,
    /// Requested course names in rank order. Empty = no request submitted.
    #[serde(default)]
    pub requests: Vec<String>,
}

/// Input container for an allocation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentInput {
    /// Course offers.
    #[serde(default)]
    pub courses: Vec<CourseOffer>,
    /// Students and their requests.
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

impl EnrollmentInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course offer.
    pub fn with_course(mut self, name: impl Into<String>, capacity: usize) -> Self {
        self.courses.push(CourseOffer {
            name: name.into(),
            capacity,
        });
        self
    }

    /// Adds a student without a request.
    pub fn with_student(mut self, id: impl Into<String>, average: f64) -> Self {
        self.students.push(StudentRecord {
            id: id.into(),
            average,
            requests: Vec::new(),
        });
        self
    }

    /// Adds a student with a ranked request.
    pub fn with_request<I, S>(mut self, id: impl Into<String>, average: f64, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.students.push(StudentRecord {
            id: id.into(),
            average,
            requests: courses.into_iter().map(Into::into).collect(),
        });
        self
    }
}
