//! Reporting queries on [`ElectiveManager`].

use std::collections::BTreeMap;

use crate::allocation::{sort_by_priority, ElectiveManager};
use crate::error::{ElectiveError, Result};
use crate::models::MAX_CHOICES;

/// Number of students choosing a course at rank 1, 2, and 3.
pub type RankCounts = [usize; MAX_CHOICES];

impl ElectiveManager {
    /// Request tallies per course, keyed by course name.
    ///
    /// Courses nobody requested report `[0, 0, 0]`.
    pub fn request_counts(&self) -> BTreeMap<String, RankCounts> {
        let mut counts: BTreeMap<String, RankCounts> = self
            .courses()
            .iter()
            .map(|c| (c.name.clone(), [0; MAX_CHOICES]))
            .collect();

        for student in self.students().iter() {
            for (idx, course) in student.requests().iter().enumerate() {
                if let Some(slot) = counts.get_mut(course) {
                    slot[idx] += 1;
                }
            }
        }

        counts
    }

    /// Enrolled student ids per course, highest average first.
    ///
    /// Equal averages follow the configured tie-break.
    pub fn assignments(&self) -> BTreeMap<String, Vec<String>> {
        let tie_break = self.config().tie_break;
        self.courses()
            .iter()
            .map(|course| {
                let enrolled = course
                    .roster()
                    .iter()
                    .filter_map(|id| self.students().get(id).ok());
                let ids = sort_by_priority(enrolled, tie_break)
                    .into_iter()
                    .map(|s| s.id.clone())
                    .collect();
                (course.name.clone(), ids)
            })
            .collect()
    }

    /// Fraction of all loaded students assigned exactly their `rank`-th choice.
    ///
    /// # Errors
    /// - [`ElectiveError::InvalidRank`] unless `1 <= rank <= MAX_CHOICES`.
    /// - [`ElectiveError::NoStudents`] when no student is loaded.
    pub fn success_rate(&self, rank: usize) -> Result<f64> {
        if rank == 0 || rank > MAX_CHOICES {
            return Err(ElectiveError::InvalidRank(rank));
        }
        let total = self.students().len();
        if total == 0 {
            return Err(ElectiveError::NoStudents);
        }

        let hits = self
            .students()
            .iter()
            .filter(|s| s.is_assigned_at(rank))
            .count();
        Ok(hits as f64 / total as f64)
    }

    /// Ids of students without an assignment, in load order.
    pub fn unassigned(&self) -> Vec<String> {
        self.students()
            .iter()
            .filter(|s| !s.is_assigned())
            .map(|s| s.id.clone())
            .collect()
    }
}
