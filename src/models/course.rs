//! Course model and registry.
//!
//! A course has a fixed capacity and a roster of enrolled student ids.
//! The roster is only grown by the allocation pass, which checks
//! [`Course::has_room`] before every enrollment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ElectiveError, EntityKind, Result};

/// An elective course offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course name.
    pub name: String,
    /// Maximum number of enrolled students.
    pub capacity: usize,
    /// Enrolled student ids, in enrollment order.
    roster: Vec<String>,
}

impl Course {
    /// Creates a course with an empty roster.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity,
            roster: Vec::new(),
        }
    }

    /// Whether another student fits.
    pub fn has_room(&self) -> bool {
        self.roster.len() < self.capacity
    }

    /// Enrolled student ids, in enrollment order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Number of enrolled students.
    pub fn enrolled_count(&self) -> usize {
        self.roster.len()
    }

    /// Free seats left.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.roster.len())
    }

    /// Fraction of seats taken (0.0 for a zero-capacity course).
    pub fn fill_rate(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.roster.len() as f64 / self.capacity as f64
        }
    }

    /// Whether the given student is on the roster.
    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.roster.iter().any(|s| s == student_id)
    }

    fn enroll(&mut self, student_id: impl Into<String>) {
        self.roster.push(student_id.into());
    }
}

/// All defined courses, keyed and iterated by name.
#[derive(Debug, Clone, Default)]
pub struct CourseRegistry {
    courses: BTreeMap<String, Course>,
}

impl CourseRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new course.
    ///
    /// # Errors
    /// [`ElectiveError::Duplicate`] if the name is already defined. The
    /// existing course is left untouched.
    pub fn define(&mut self, name: impl Into<String>, capacity: usize) -> Result<()> {
        let name = name.into();
        if self.courses.contains_key(&name) {
            return Err(ElectiveError::duplicate(EntityKind::Course, name));
        }
        self.courses.insert(name.clone(), Course::new(name, capacity));
        Ok(())
    }

    /// Looks up a course by name.
    pub fn get(&self, name: &str) -> Result<&Course> {
        self.courses
            .get(name)
            .ok_or_else(|| ElectiveError::not_found(EntityKind::Course, name))
    }

    /// Whether a course with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.courses.contains_key(name)
    }

    /// Whether the named course has a free seat.
    pub fn has_room(&self, name: &str) -> Result<bool> {
        self.get(name).map(Course::has_room)
    }

    /// Appends a student to the named course's roster.
    ///
    /// No capacity check is made here; callers must confirm
    /// [`has_room`](Self::has_room) and enroll each student at most once.
    pub fn enroll(&mut self, name: &str, student_id: impl Into<String>) -> Result<()> {
        let course = self
            .courses
            .get_mut(name)
            .ok_or_else(|| ElectiveError::not_found(EntityKind::Course, name))?;
        course.enroll(student_id);
        Ok(())
    }

    /// Course names in ascending lexical order.
    pub fn list_names(&self) -> Vec<String> {
        self.courses.keys().cloned().collect()
    }

    /// Iterates courses in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Sum of all capacities.
    pub fn total_capacity(&self) -> usize {
        self.courses.values().map(|c| c.capacity).sum()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether no course is defined.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_list_sorted() {
        let mut reg = CourseRegistry::new();
        reg.define("Physics", 2).unwrap();
        reg.define("Art", 1).unwrap();
        reg.define("Math", 3).unwrap();

        assert_eq!(reg.list_names(), vec!["Art", "Math", "Physics"]);
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.total_capacity(), 6);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut reg = CourseRegistry::new();
        reg.define("Math", 3).unwrap();
        let err = reg.define("Math", 10).unwrap_err();
        assert_eq!(
            err,
            ElectiveError::Duplicate {
                kind: EntityKind::Course,
                key: "Math".into()
            }
        );
        assert_eq!(reg.get("Math").unwrap().capacity, 3);
    }

    #[test]
    fn test_has_room_and_enroll() {
        let mut reg = CourseRegistry::new();
        reg.define("Math", 1).unwrap();
        assert!(reg.has_room("Math").unwrap());

        reg.enroll("Math", "s1").unwrap();
        assert!(!reg.has_room("Math").unwrap());

        let course = reg.get("Math").unwrap();
        assert_eq!(course.roster(), &["s1".to_string()]);
        assert!(course.is_enrolled("s1"));
        assert_eq!(course.remaining(), 0);
        assert!((course.fill_rate() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_capacity_never_has_room() {
        let course = Course::new("Closed", 0);
        assert!(!course.has_room());
        assert!((course.fill_rate() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_course() {
        let mut reg = CourseRegistry::new();
        assert!(matches!(
            reg.has_room("Nope"),
            Err(ElectiveError::NotFound {
                kind: EntityKind::Course,
                ..
            })
        ));
        assert!(reg.enroll("Nope", "s1").is_err());
        assert!(reg.get("Nope").is_err());
    }
}
