//! Elective course allocation for the U-Engine ecosystem.
//!
//! Assigns students to elective courses from ranked preferences, per-course
//! capacity, and a single global priority key (grade average). The
//! assignment is deterministic, never exceeds capacity, and gives each
//! student at most one seat.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Student`, their registries, and
//!   the bundled `EnrollmentInput`
//! - **`validation`**: Request checks and whole-input integrity checks
//! - **`allocation`**: `ElectiveManager` and the greedy priority pass
//! - **`reporting`**: Request tallies, assignments, success rates, KPIs
//! - **`notify`**: Listener contract for request and assignment events
//! - **`config`**: Tie-breaking policy
//! - **`error`**: Typed errors
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//!   (priority dispatching)
//! - Abdulkadiroğlu & Sönmez (2003), "School Choice: A Mechanism Design
//!   Approach" (serial dictatorship)

pub mod allocation;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod reporting;
pub mod validation;

pub use allocation::ElectiveManager;
pub use config::{AllocationConfig, TieBreak};
pub use error::{ElectiveError, RequestViolation, Result};
