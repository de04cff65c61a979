//! Coverage quality metrics (KPIs).
//!
//! Summarizes how a schedule spreads the curriculum over its teachers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Teachers Used | Number of selected teachers |
//! | Coverage Rate | Required subjects assigned / required subjects |
//! | Avg / Max Load | Assigned subjects per selected teacher |
//! | Capability Usage | Mean of assigned / teachable per selected teacher |

use std::collections::{BTreeSet, HashMap};

use crate::models::{Schedule, SubjectId};

/// Schedule coverage indicators.
#[derive(Debug, Clone)]
pub struct CoverKpi {
    /// Number of selected teachers.
    pub teachers_used: usize,
    /// Number of required subjects.
    pub subjects_required: usize,
    /// Required subjects that are assigned to someone.
    pub subjects_covered: usize,
    /// `subjects_covered / subjects_required` (1.0 when nothing is required).
    pub coverage_rate: f64,
    /// Mean assigned subjects per selected teacher.
    pub avg_load: f64,
    /// Largest number of subjects given to one teacher.
    pub max_load: usize,
    /// Assigned subject count per teacher email.
    pub load_by_teacher: HashMap<String, usize>,
    /// Mean fraction of each teacher's capability that was used (0.0..1.0).
    pub avg_capability_usage: f64,
}

impl CoverKpi {
    /// Computes KPIs for `schedule` against the required `subjects`.
    pub fn calculate(schedule: &Schedule, subjects: &BTreeSet<SubjectId>) -> Self {
        let covered = schedule.covered_subjects();
        let subjects_covered = subjects.iter().filter(|s| covered.contains(*s)).count();

        let load_by_teacher: HashMap<String, usize> = schedule
            .iter()
            .map(|t| (t.email.clone(), t.assigned_subjects.len()))
            .collect();
        let max_load = schedule
            .iter()
            .map(|t| t.assigned_subjects.len())
            .max()
            .unwrap_or(0);

        let teachers_used = schedule.len();
        let (avg_load, avg_capability_usage) = if teachers_used == 0 {
            (0.0, 0.0)
        } else {
            let usage: f64 = schedule
                .iter()
                .map(|t| {
                    if t.can_teach_subjects.is_empty() {
                        0.0
                    } else {
                        t.assigned_subjects.len() as f64 / t.can_teach_subjects.len() as f64
                    }
                })
                .sum();
            (
                schedule.assignment_count() as f64 / teachers_used as f64,
                usage / teachers_used as f64,
            )
        };

        let coverage_rate = if subjects.is_empty() {
            1.0
        } else {
            subjects_covered as f64 / subjects.len() as f64
        };

        Self {
            teachers_used,
            subjects_required: subjects.len(),
            subjects_covered,
            coverage_rate,
            avg_load,
            max_load,
            load_by_teacher,
            avg_capability_usage,
        }
    }

    /// Whether no teacher carries more than `max_load` subjects and
    /// coverage reaches `min_coverage`.
    pub fn meets_thresholds(&self, max_load: usize, min_coverage: f64) -> bool {
        self.max_load <= max_load && self.coverage_rate >= min_coverage
    }
}
