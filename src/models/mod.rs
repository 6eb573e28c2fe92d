//! Enrollment domain models.
//!
//! Courses and students are kept in owned registries keyed by name and id.
//! Students refer to courses by name; courses refer to enrolled students by
//! id. Neither side owns the other.
//!
//! | u-elective | u-schedule analogue |
//! |------------|---------------------|
//! | Course | Resource (capacity) |
//! | Student | Task (priority) |
//! | Request | ResourceRequirement candidates |
//! | Roster | Schedule assignments |

mod course;
mod input;
mod student;

pub use course::{Course, CourseRegistry};
pub use input::{CourseOffer, EnrollmentInput, StudentRecord};
pub use student::{Student, StudentRegistry, MAX_CHOICES};
