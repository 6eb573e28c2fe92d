//! Read-only reports over the allocation state.
//!
//! Queries never mutate the manager. They can be called at any time but
//! only describe a final outcome after [`ElectiveManager::allocate`].
//!
//! # Queries
//!
//! | Query | Result |
//! |-------|--------|
//! | `request_counts` | Per course, students choosing it at rank 1, 2, 3 |
//! | `assignments` | Per course, enrolled ids by descending average |
//! | `success_rate(k)` | Fraction of all students assigned their k-th choice |
//! | `unassigned` | Ids of students without a seat |
//!
//! [`AllocationKpi`] bundles these into a serializable summary.
//!
//! [`ElectiveManager::allocate`]: crate::allocation::ElectiveManager::allocate

mod kpi;
mod queries;

pub use kpi::AllocationKpi;
pub use queries::RankCounts;
