//! Scheduling outcome errors.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::models::{SubjectId, Teacher};

/// The teacher pool cannot cover every required subject.
///
/// This is an expected outcome, not a fault. Teachers picked before
/// progress stopped were already moved out of the pool and keep their
/// assignments; they travel with the failure so the caller still owns
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to cover all subjects with the available teachers (uncovered: {})", join(.uncovered))]
pub struct CoverageFailure {
    /// Subjects no remaining teacher can teach.
    pub uncovered: BTreeSet<SubjectId>,
    /// Teachers selected before the scheduler got stuck, in selection order.
    pub selected: Vec<Teacher>,
}

impl CoverageFailure {
    /// Returns the partially selected teachers.
    pub fn into_selected(self) -> Vec<Teacher> {
        self.selected
    }
}

fn join(subjects: &BTreeSet<SubjectId>) -> String {
    subjects
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let failure = CoverageFailure {
            uncovered: ["B", "C"].into_iter().map(String::from).collect(),
            selected: vec![Teacher::new("T", "One", 30, "t1@x.org")],
        };
        assert_eq!(
            failure.to_string(),
            "unable to cover all subjects with the available teachers (uncovered: B, C)"
        );
        assert_eq!(failure.into_selected().len(), 1);
    }
}
