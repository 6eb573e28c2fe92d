//! Allocation quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned | Students holding a seat |
//! | Unassigned | Students without a seat (including those with no request) |
//! | Without request | Students who never submitted |
//! | Success rate by rank | Fraction of all students assigned their k-th choice |
//! | Fill rate | Enrolled / capacity per course, and overall |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::allocation::ElectiveManager;
use crate::models::MAX_CHOICES;

/// Allocation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationKpi {
    /// Loaded students.
    pub total_students: usize,
    /// Students holding a seat.
    pub assigned: usize,
    /// Students without a seat.
    pub unassigned: usize,
    /// Students who never submitted a request.
    pub without_request: usize,
    /// Success rate per rank; index 0 is the first choice.
    pub success_rate_by_rank: [f64; MAX_CHOICES],
    /// Per-course fill rate (0.0..1.0).
    pub fill_rate_by_course: BTreeMap<String, f64>,
    /// Enrolled seats over total capacity (0.0 when there is no capacity).
    pub overall_fill_rate: f64,
}

impl AllocationKpi {
    /// Computes KPIs from the manager's current state.
    ///
    /// Rates over an empty population are reported as 0.0.
    pub fn calculate(manager: &ElectiveManager) -> Self {
        let students = manager.students();
        let total_students = students.len();

        let mut assigned = 0;
        let mut without_request = 0;
        let mut hits_by_rank = [0usize; MAX_CHOICES];

        for student in students.iter() {
            if !student.has_requests() {
                without_request += 1;
            }
            if let Some(rank) = student.assigned_rank() {
                assigned += 1;
                hits_by_rank[rank - 1] += 1;
            }
        }

        let mut success_rate_by_rank = [0.0; MAX_CHOICES];
        if total_students > 0 {
            for (rate, hits) in success_rate_by_rank.iter_mut().zip(hits_by_rank) {
                *rate = hits as f64 / total_students as f64;
            }
        }

        let courses = manager.courses();
        let fill_rate_by_course = courses
            .iter()
            .map(|c| (c.name.clone(), c.fill_rate()))
            .collect();

        let capacity = courses.total_capacity();
        let enrolled: usize = courses.iter().map(|c| c.enrolled_count()).sum();
        let overall_fill_rate = if capacity == 0 {
            0.0
        } else {
            enrolled as f64 / capacity as f64
        };

        Self {
            total_students,
            assigned,
            unassigned: total_students - assigned,
            without_request,
            success_rate_by_rank,
            fill_rate_by_course,
            overall_fill_rate,
        }
    }

    /// Whether the allocation meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_first_choice_rate: f64, max_unassigned: usize) -> bool {
        self.success_rate_by_rank[0] >= min_first_choice_rate && self.unassigned <= max_unassigned
    }
}
