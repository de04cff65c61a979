//! Scheduling input container.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{SubjectId, Teacher};

/// Subjects to cover and the teacher pool to cover them with.
///
/// Deserializable, so a roster can be loaded from JSON:
///
/// ```
/// use u_curriculum::models::CoverRequest;
///
/// let request: CoverRequest = serde_json::from_str(r#"{
///     "subjects": ["Chemistry"],
///     "teachers": [{
///         "first_name": "Maria", "last_name": "Petrenko", "age": 38,
///         "email": "m.petrenko@example.com", "can_teach_subjects": ["Chemistry"]
///     }]
/// }"#).unwrap();
/// assert_eq!(request.teachers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverRequest {
    /// Subjects that must be covered.
    pub subjects: BTreeSet<SubjectId>,
    /// Candidate pool. Selected teachers are moved out by the scheduler.
    pub teachers: Vec<Teacher>,
}

impl CoverRequest {
    /// Creates a request from a subject list and a teacher pool.
    pub fn new<I, S>(subjects: I, teachers: Vec<Teacher>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SubjectId>,
    {
        Self {
            subjects: subjects.into_iter().map(Into::into).collect(),
            teachers,
        }
    }

    /// Adds a teacher to the pool.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }
}
