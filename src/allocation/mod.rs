//! Greedy priority-driven seat allocation.
//!
//! # Algorithm
//!
//! 1. Order students with a request by grade average, highest first.
//! 2. For each student in that order, scan the request in rank order.
//! 3. Enroll the student in the first course that still has room.
//! 4. Students whose courses are all full stay unassigned.
//!
//! Seats are consumed greedily and irrevocably: there is no backtracking
//! and the pass runs exactly once. Outcomes depend only on the priority
//! order, each student's ranking, and the capacities. The result is not a
//! stable matching and is not Pareto-optimal in general.
//!
//! # Complexity
//! O(n log n + n * k) where n = students, k = choices per student.

mod manager;
mod priority;

pub use manager::ElectiveManager;
pub use priority::sort_by_priority;
