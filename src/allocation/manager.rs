//! The elective manager: registries, request intake, and the allocation pass.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use super::priority::sort_by_priority;
use crate::config::AllocationConfig;
use crate::error::{ElectiveError, Result};
use crate::models::{Course, CourseRegistry, EnrollmentInput, Student, StudentRegistry};
use crate::notify::{EnrollmentListener, Listeners};
use crate::validation::check_request;

/// Owns the course and student registries and runs the allocation.
///
/// Lifecycle: define courses and load students, submit requests, call
/// [`allocate`](Self::allocate) once, then read the reporting queries.
/// Requests are refused after allocation and a second allocation is
/// rejected with [`ElectiveError::AlreadyAllocated`].
///
/// # Example
///
/// ```
/// use u_elective::allocation::ElectiveManager;
///
/// let mut manager = ElectiveManager::new();
/// manager.define_course("A", 1).unwrap();
/// manager.define_course("B", 1).unwrap();
/// manager.load_student("s1", 90.0).unwrap();
/// manager.load_student("s2", 80.0).unwrap();
/// manager.submit("s1", ["A", "B"]).unwrap();
/// manager.submit("s2", ["A", "B"]).unwrap();
///
/// let unassigned = manager.allocate().unwrap();
/// assert_eq!(unassigned, 0);
/// assert_eq!(manager.student("s2").unwrap().assignment(), Some("B"));
/// ```
#[derive(Debug, Default)]
pub struct ElectiveManager {
    courses: CourseRegistry,
    students: StudentRegistry,
    listeners: Listeners,
    config: AllocationConfig,
    allocated: bool,
}

impl ElectiveManager {
    /// Creates an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allocation configuration.
    pub fn with_config(mut self, config: AllocationConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a manager from a bundled input.
    ///
    /// Courses are defined first, then students loaded, then non-empty
    /// requests submitted in input order. Stops at the first error.
    pub fn from_input(input: &EnrollmentInput, config: AllocationConfig) -> Result<Self> {
        let mut manager = Self::new().with_config(config);
        for offer in &input.courses {
            manager.define_course(offer.name.as_str(), offer.capacity)?;
        }
        for record in &input.students {
            manager.load_student(record.id.as_str(), record.average)?;
        }
        for record in input.students.iter().filter(|r| !r.requests.is_empty()) {
            manager.submit(&record.id, record.requests.iter().cloned())?;
        }
        Ok(manager)
    }

    /// The active configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Registers a notification listener.
    pub fn add_listener(&mut self, listener: Arc<dyn EnrollmentListener>) {
        self.listeners.add(listener);
    }

    /// Defines a new course offer.
    pub fn define_course(&mut self, name: impl Into<String>, capacity: usize) -> Result<()> {
        let name = name.into();
        self.courses.define(name.as_str(), capacity)?;
        debug!(course = %name, capacity, "course defined");
        Ok(())
    }

    /// Loads a student record.
    pub fn load_student(&mut self, id: impl Into<String>, average: f64) -> Result<()> {
        let id = id.into();
        self.students.load(id.as_str(), average)?;
        debug!(student = %id, average, "student loaded");
        Ok(())
    }

    /// Course registry.
    pub fn courses(&self) -> &CourseRegistry {
        &self.courses
    }

    /// Student registry.
    pub fn students(&self) -> &StudentRegistry {
        &self.students
    }

    /// Looks up a course by name.
    pub fn course(&self, name: &str) -> Result<&Course> {
        self.courses.get(name)
    }

    /// Looks up a student by id.
    pub fn student(&self, id: &str) -> Result<&Student> {
        self.students.get(id)
    }

    /// Course names in ascending order.
    pub fn list_courses(&self) -> Vec<String> {
        self.courses.list_names()
    }

    /// Student ids in load order.
    pub fn list_students(&self) -> Vec<String> {
        self.students.list_ids()
    }

    /// Student ids with `lo <= average <= hi`.
    pub fn list_students_in_range(&self, lo: f64, hi: f64) -> Vec<String> {
        self.students.list_ids_in_range(lo, hi)
    }

    /// Records a student's ranked course request.
    ///
    /// The request is validated in full before anything is stored; on
    /// success every listener receives `request_received` and the number of
    /// courses submitted is returned.
    ///
    /// # Errors
    /// - [`ElectiveError::InvalidRequest`] for a bad course count, unknown
    ///   student, unknown or repeated course, or a second submission.
    /// - [`ElectiveError::AlreadyAllocated`] once the pass has run.
    pub fn submit<I, S>(&mut self, student_id: &str, courses: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.allocated {
            warn!(student = %student_id, "request submitted after allocation");
            return Err(ElectiveError::AlreadyAllocated);
        }

        let selected: Vec<String> = courses.into_iter().map(Into::into).collect();
        if let Err(violation) = check_request(&self.students, &self.courses, student_id, &selected)
        {
            warn!(student = %student_id, reason = %violation, "request rejected");
            return Err(violation.into());
        }

        let count = selected.len();
        self.students.set_requests(student_id, selected)?;
        debug!(student = %student_id, count, "request accepted");
        self.listeners.request_received(student_id);
        Ok(count)
    }

    /// Whether the allocation pass has run.
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    /// Runs the allocation pass.
    ///
    /// Students with a request are visited by descending grade average;
    /// each takes the first course in their ranking that still has room.
    /// Every assignment is announced to the listeners in visiting order.
    ///
    /// # Returns
    /// The number of students left without a seat, including students who
    /// never submitted a request.
    ///
    /// # Errors
    /// [`ElectiveError::AlreadyAllocated`] on a second call; nothing changes.
    pub fn allocate(&mut self) -> Result<usize> {
        if self.allocated {
            warn!("allocation requested twice");
            return Err(ElectiveError::AlreadyAllocated);
        }
        self.allocated = true;

        let order: Vec<String> = sort_by_priority(
            self.students.iter().filter(|s| s.has_requests()),
            self.config.tie_break,
        )
        .into_iter()
        .map(|s| s.id.clone())
        .collect();

        let mut assigned = 0usize;
        for student_id in &order {
            let requests = self.students.get(student_id)?.requests().to_vec();

            let mut seat = None;
            for course in &requests {
                if self.courses.has_room(course)? {
                    seat = Some(course);
                    break;
                }
            }

            match seat {
                Some(course) => {
                    self.courses.enroll(course, student_id.as_str())?;
                    self.students.assign(student_id, course)?;
                    trace!(student = %student_id, course = %course, "seat assigned");
                    self.listeners.assignment_made(student_id, course);
                    assigned += 1;
                }
                None => trace!(student = %student_id, "no requested course has room"),
            }
        }

        let unassigned = self.students.len() - assigned;
        info!(
            considered = order.len(),
            assigned, unassigned, "allocation complete"
        );
        Ok(unassigned)
    }
}
