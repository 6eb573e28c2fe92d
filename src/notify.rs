//! Enrollment notifications.
//!
//! The manager announces two events to registered listeners:
//! a request was accepted, and a seat was assigned. Listeners are invoked
//! synchronously, in registration order, before the triggering call returns.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use u_elective::allocation::ElectiveManager;
//! use u_elective::notify::{EnrollmentEvent, EventRecorder};
//!
//! let recorder = Arc::new(EventRecorder::new());
//! let mut manager = ElectiveManager::new();
//! manager.add_listener(recorder.clone());
//!
//! manager.define_course("A", 1).unwrap();
//! manager.load_student("s1", 27.0).unwrap();
//! manager.submit("s1", ["A"]).unwrap();
//!
//! assert_eq!(recorder.events(), vec![EnrollmentEvent::RequestReceived("s1".into())]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// An event announced by the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentEvent {
    /// A student's request was accepted.
    RequestReceived(String),
    /// A student was given a seat in a course.
    AssignmentMade {
        /// Student id.
        student: String,
        /// Course name.
        course: String,
    },
}

/// Receives enrollment notifications.
///
/// Both callbacks default to no-ops, so a listener only implements the
/// events it cares about. Callbacks cannot fail the triggering operation.
pub trait EnrollmentListener: Send + Sync + Debug {
    /// A request from `student_id` was validated and stored.
    fn request_received(&self, _student_id: &str) {}

    /// `student_id` was assigned a seat in `course`.
    fn assignment_made(&self, _student_id: &str, _course: &str) {}
}

/// Registered listeners, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    listeners: Vec<Arc<dyn EnrollmentListener>>,
}

impl Listeners {
    /// Creates an empty listener list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener.
    pub fn add(&mut self, listener: Arc<dyn EnrollmentListener>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn request_received(&self, student_id: &str) {
        for l in &self.listeners {
            l.request_received(student_id);
        }
    }

    pub(crate) fn assignment_made(&self, student_id: &str, course: &str) {
        for l in &self.listeners {
            l.assignment_made(student_id, course);
        }
    }
}

/// A listener that keeps every event it receives, in order.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Mutex<Vec<EnrollmentEvent>>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<EnrollmentEvent> {
        self.lock().clone()
    }

    /// Recorded `AssignmentMade` events as `(student, course)` pairs.
    pub fn assignments(&self) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                EnrollmentEvent::AssignmentMade { student, course } => {
                    Some((student.clone(), course.clone()))
                }
                EnrollmentEvent::RequestReceived(_) => None,
            })
            .collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn push(&self, event: EnrollmentEvent) {
        self.lock().push(event);
    }

    // A poisoned lock still holds a valid event list.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EnrollmentEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EnrollmentListener for EventRecorder {
    fn request_received(&self, student_id: &str) {
        self.push(EnrollmentEvent::RequestReceived(student_id.to_string()));
    }

    fn assignment_made(&self, student_id: &str, course: &str) {
        self.push(EnrollmentEvent::AssignmentMade {
            student: student_id.to_string(),
            course: course.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tagged {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl EnrollmentListener for Tagged {
        fn request_received(&self, student_id: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.tag, student_id));
        }
    }

    #[test]
    fn test_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::new();
        listeners.add(Arc::new(Tagged {
            tag: "first",
            log: log.clone(),
        }));
        listeners.add(Arc::new(Tagged {
            tag: "second",
            log: log.clone(),
        }));

        listeners.request_received("s1");
        // Default no-op for the unimplemented callback
        listeners.assignment_made("s1", "A");

        assert_eq!(listeners.len(), 2);
        assert_eq!(*log.lock().unwrap(), vec!["first:s1", "second:s1"]);
    }

    #[test]
    fn test_recorder() {
        let recorder = EventRecorder::new();
        assert!(recorder.is_empty());

        recorder.request_received("s1");
        recorder.assignment_made("s1", "A");

        assert_eq!(recorder.len(), 2);
        assert_eq!(
            recorder.events()[0],
            EnrollmentEvent::RequestReceived("s1".into())
        );
        assert_eq!(recorder.assignments(), vec![("s1".into(), "A".into())]);
    }
}
