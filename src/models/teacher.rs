//! Teacher model.
//!
//! A teacher is a candidate for covering subjects. Each teacher has an
//! identity (name, age, contact), a fixed set of subjects it can teach,
//! and the subjects it was actually assigned by the scheduler.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::SubjectId;

/// A teacher that can be assigned subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years. Breaks ties between equally useful teachers.
    pub age: u32,
    /// Contact email.
    pub email: String,
    /// Every subject this teacher is able to teach.
    pub can_teach_subjects: BTreeSet<SubjectId>,
    /// Subjects assigned by the scheduler (empty until selected).
    #[serde(default)]
    pub assigned_subjects: BTreeSet<SubjectId>,
}

impl Teacher {
    /// Creates a teacher with no teachable subjects.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
            can_teach_subjects: BTreeSet::new(),
            assigned_subjects: BTreeSet::new(),
        }
    }

    /// Adds a teachable subject.
    pub fn with_subject(mut self, subject: impl Into<SubjectId>) -> Self {
        self.can_teach_subjects.insert(subject.into());
        self
    }

    /// Adds several teachable subjects.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SubjectId>,
    {
        self.can_teach_subjects
            .extend(subjects.into_iter().map(Into::into));
        self
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this teacher is able to teach `subject`.
    pub fn can_teach(&self, subject: &str) -> bool {
        self.can_teach_subjects.contains(subject)
    }

    /// Subjects from `uncovered` this teacher could take over.
    pub fn teachable(&self, uncovered: &BTreeSet<SubjectId>) -> BTreeSet<SubjectId> {
        self.can_teach_subjects
            .intersection(uncovered)
            .cloned()
            .collect()
    }

    /// Size of [`Teacher::teachable`] without allocating.
    pub fn teachable_count(&self, uncovered: &BTreeSet<SubjectId>) -> usize {
        self.can_teach_subjects.intersection(uncovered).count()
    }

    /// Whether the scheduler has assigned anything to this teacher.
    pub fn is_assigned(&self) -> bool {
        !self.assigned_subjects.is_empty()
    }
}
