//! Student model and registry.
//!
//! A student carries a grade average (the sole allocation priority key),
//! a ranked list of requested course names, and at most one assignment.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ElectiveError, EntityKind, Result};

/// Maximum number of courses in one request.
pub const MAX_CHOICES: usize = 3;

/// A student taking part in the allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student id.
    pub id: String,
    /// Grade average (higher = earlier in the allocation pass).
    pub average: f64,
    /// Requested course names; position 0 is the first choice.
    requests: Vec<String>,
    /// Assigned course name, once allocated.
    assignment: Option<String>,
}

impl Student {
    /// Creates a student with no requests and no assignment.
    pub fn new(id: impl Into<String>, average: f64) -> Self {
        Self {
            id: id.into(),
            average,
            requests: Vec::new(),
            assignment: None,
        }
    }

    /// Requested course names in rank order.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    /// Whether a request has been recorded.
    pub fn has_requests(&self) -> bool {
        !self.requests.is_empty()
    }

    /// The assigned course, if any.
    pub fn assignment(&self) -> Option<&str> {
        self.assignment.as_deref()
    }

    /// Whether the student holds a seat.
    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    /// 1-based rank of `course` in this student's request list.
    pub fn rank_of(&self, course: &str) -> Option<usize> {
        self.requests
            .iter()
            .position(|c| c == course)
            .map(|idx| idx + 1)
    }

    /// Rank at which the student was assigned.
    pub fn assigned_rank(&self) -> Option<usize> {
        self.assignment().and_then(|c| self.rank_of(c))
    }

    /// Whether the student was assigned exactly their `rank`-th choice.
    pub fn is_assigned_at(&self, rank: usize) -> bool {
        self.assigned_rank() == Some(rank)
    }
}

/// All loaded students, iterated in load order.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: Vec<Student>,
    index: HashMap<String, usize>,
}

impl StudentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a new student.
    ///
    /// # Errors
    /// [`ElectiveError::Duplicate`] if the id is already loaded.
    pub fn load(&mut self, id: impl Into<String>, average: f64) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(ElectiveError::duplicate(EntityKind::Student, id));
        }
        self.index.insert(id.clone(), self.students.len());
        self.students.push(Student::new(id, average));
        Ok(())
    }

    /// Looks up a student by id.
    pub fn get(&self, id: &str) -> Result<&Student> {
        self.index
            .get(id)
            .map(|&idx| &self.students[idx])
            .ok_or_else(|| ElectiveError::not_found(EntityKind::Student, id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Student> {
        match self.index.get(id) {
            Some(&idx) => Ok(&mut self.students[idx]),
            None => Err(ElectiveError::not_found(EntityKind::Student, id)),
        }
    }

    /// Whether a student with this id is loaded.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All ids, in load order.
    pub fn list_ids(&self) -> Vec<String> {
        self.students.iter().map(|s| s.id.clone()).collect()
    }

    /// Ids with `lo <= average <= hi`, in load order.
    pub fn list_ids_in_range(&self, lo: f64, hi: f64) -> Vec<String> {
        self.students
            .iter()
            .filter(|s| s.average >= lo && s.average <= hi)
            .map(|s| s.id.clone())
            .collect()
    }

    /// Iterates students in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether no student is loaded.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Records a validated request. Callers validate first.
    pub(crate) fn set_requests(&mut self, id: &str, courses: Vec<String>) -> Result<()> {
        self.get_mut(id)?.requests = courses;
        Ok(())
    }

    /// Records the assignment chosen by the allocation pass.
    pub(crate) fn assign(&mut self, id: &str, course: &str) -> Result<()> {
        self.get_mut(id)?.assignment = Some(course.to_string());
        Ok(())
    }
}
