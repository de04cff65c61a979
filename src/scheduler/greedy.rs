//! Greedy subject-cover scheduler.
//!
//! # Algorithm
//!
//! 1. Start with every required subject uncovered.
//! 2. Scan the remaining pool left to right; score each teacher by how
//!    many uncovered subjects it can teach.
//! 3. Keep the best candidate: strictly higher score wins, equal scores
//!    go through the configured [`TieBreak`].
//! 4. If the best score is zero, no progress is possible: fail.
//! 5. Move the best teacher out of the pool, assign it the subjects it
//!    newly covers, repeat until nothing is uncovered.
//!
//! # Complexity
//! O(t² * s) worst case where t=teachers, s=subjects.
//!
//! # Reference
//! Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"

use log::{debug, trace};
use std::collections::BTreeSet;

use super::TieBreak;
use crate::error::CoverageFailure;
use crate::models::{CoverRequest, Schedule, SubjectId, Teacher};

/// Greedy set-cover scheduler for teachers and subjects.
///
/// # Ownership
///
/// The teacher pool is partitioned in place. Selected teachers are moved
/// out of the caller's `Vec` into the returned [`Schedule`] (or into the
/// [`CoverageFailure`]); unselected teachers stay behind in their original
/// relative order. Pass a clone to keep the full roster.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use u_curriculum::models::Teacher;
/// use u_curriculum::scheduler::GreedyCoverScheduler;
///
/// let subjects: BTreeSet<String> = ["A", "B", "C"].into_iter().map(String::from).collect();
/// let mut teachers = vec![
///     Teacher::new("Ann", "One", 30, "ann@example.com").with_subjects(["A", "B"]),
///     Teacher::new("Bob", "Two", 25, "bob@example.com").with_subjects(["C"]),
/// ];
///
/// let schedule = GreedyCoverScheduler::new().schedule(&subjects, &mut teachers).unwrap();
/// assert_eq!(schedule.len(), 2);
/// assert!(teachers.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyCoverScheduler {
    tie_break: TieBreak,
}

impl GreedyCoverScheduler {
    /// Creates a scheduler with the default tie-break.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Configured tie-break policy.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Covers `subjects` with teachers drawn from `teachers`.
    ///
    /// Returns the selected teachers in selection order, each with
    /// `assigned_subjects` set to what it newly covered. An empty
    /// `subjects` set yields an empty schedule and leaves the pool
    /// untouched.
    pub fn schedule(
        &self,
        subjects: &BTreeSet<SubjectId>,
        teachers: &mut Vec<Teacher>,
    ) -> Result<Schedule, CoverageFailure> {
        let mut uncovered = subjects.clone();
        let mut schedule = Schedule::new();

        while !uncovered.is_empty() {
            let Some(idx) = self.select_best(&uncovered, teachers) else {
                debug!(
                    "coverage failed: {} subject(s) uncovered after {} selection(s)",
                    uncovered.len(),
                    schedule.len()
                );
                return Err(CoverageFailure {
                    uncovered,
                    selected: schedule.into_teachers(),
                });
            };

            let mut teacher = teachers.remove(idx);
            let assigned = teacher.teachable(&uncovered);
            uncovered.retain(|s| !assigned.contains(s));
            teacher.assigned_subjects = assigned;

            debug!(
                "selected {} ({} new, {} remaining)",
                teacher.full_name(),
                teacher.assigned_subjects.len(),
                uncovered.len()
            );
            schedule.add_teacher(teacher);
        }

        Ok(schedule)
    }

    /// Schedules from a request; unselected teachers remain in
    /// `request.teachers`.
    pub fn schedule_request(&self, request: &mut CoverRequest) -> Result<Schedule, CoverageFailure> {
        self.schedule(&request.subjects, &mut request.teachers)
    }

    /// Index of the teacher to select next, or `None` when nobody covers
    /// anything still uncovered.
    fn select_best(&self, uncovered: &BTreeSet<SubjectId>, teachers: &[Teacher]) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut max_new = 0;

        for (idx, teacher) in teachers.iter().enumerate() {
            let count = teacher.teachable_count(uncovered);
            let current = best.map(|b| &teachers[b]);
            trace!("candidate {} covers {count}", teacher.full_name());

            if count > max_new || (count == max_new && self.tie_break.prefers(teacher, current)) {
                best = Some(idx);
                max_new = count;
            }
        }

        best.filter(|_| max_new > 0)
    }
}
