//! Schedule (solution) model.
//!
//! A schedule is the ordered list of teachers selected to cover a
//! curriculum, each carrying the subjects it was assigned. Order is the
//! order of selection.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::{SubjectId, Teacher};

/// A complete subject-cover schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Selected teachers, in selection order.
    pub teachers: Vec<Teacher>,
}

/// A coverage problem found when auditing a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related subject or teacher email.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of coverage violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A required subject is not assigned to anyone.
    UncoveredSubject,
    /// A subject is assigned to more than one teacher.
    DuplicateAssignment,
    /// A subject is assigned that was never required.
    UnrequestedSubject,
    /// A teacher is assigned a subject it cannot teach.
    OutsideCapability,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selected teacher.
    pub fn add_teacher(&mut self, teacher: Teacher) {
        self.teachers.push(teacher);
    }

    /// Number of selected teachers.
    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    /// Whether no teacher was needed.
    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    /// Iterates teachers in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Teacher> {
        self.teachers.iter()
    }

    /// Hands the selected teachers back to the caller.
    pub fn into_teachers(self) -> Vec<Teacher> {
        self.teachers
    }

    /// The teacher assigned to `subject`, if any.
    pub fn teacher_for_subject(&self, subject: &str) -> Option<&Teacher> {
        self.teachers
            .iter()
            .find(|t| t.assigned_subjects.contains(subject))
    }

    /// Union of all assigned subjects.
    pub fn covered_subjects(&self) -> BTreeSet<SubjectId> {
        self.teachers
            .iter()
            .flat_map(|t| t.assigned_subjects.iter().cloned())
            .collect()
    }

    /// Total number of subject assignments.
    pub fn assignment_count(&self) -> usize {
        self.teachers.iter().map(|t| t.assigned_subjects.len()).sum()
    }

    /// Audits the schedule against the required subject set.
    ///
    /// An empty result means every required subject is assigned to
    /// exactly one teacher able to teach it and nothing else is assigned.
    pub fn violations(&self, subjects: &BTreeSet<SubjectId>) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut owners: HashMap<&str, usize> = HashMap::new();

        for teacher in &self.teachers {
            for subject in &teacher.assigned_subjects {
                *owners.entry(subject.as_str()).or_insert(0) += 1;

                if !teacher.can_teach(subject) {
                    violations.push(Violation::new(
                        ViolationType::OutsideCapability,
                        &teacher.email,
                        format!("{} cannot teach '{subject}'", teacher.full_name()),
                    ));
                }
                if !subjects.contains(subject) {
                    violations.push(Violation::new(
                        ViolationType::UnrequestedSubject,
                        subject,
                        format!("'{subject}' assigned to {} but not required", teacher.full_name()),
                    ));
                }
            }
        }

        for subject in subjects {
            match owners.get(subject.as_str()) {
                None => violations.push(Violation::new(
                    ViolationType::UncoveredSubject,
                    subject,
                    format!("'{subject}' is not assigned"),
                )),
                Some(&n) if n > 1 => violations.push(Violation::new(
                    ViolationType::DuplicateAssignment,
                    subject,
                    format!("'{subject}' is assigned to {n} teachers"),
                )),
                Some(_) => {}
            }
        }

        violations
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Teacher;
    type IntoIter = std::slice::Iter<'a, Teacher>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schedule:")?;
        for teacher in &self.teachers {
            writeln!(
                f,
                "{}, {} years, email: {}",
                teacher.full_name(),
                teacher.age,
                teacher.email
            )?;
            let subjects: Vec<&str> = teacher.assigned_subjects.iter().map(String::as_str).collect();
            writeln!(f, "   Teaches subjects: {}", subjects.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<SubjectId> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn assigned(email: &str, age: u32, subjects: &[&str]) -> Teacher {
        let mut t = Teacher::new("T", email, age, email).with_subjects(subjects.iter().copied());
        t.assigned_subjects = set(subjects);
        t
    }

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_teacher(assigned("t1@x.org", 30, &["A", "B"]));
        s.add_teacher(assigned("t2@x.org", 25, &["C"]));
        s
    }

    #[test]
    fn test_schedule_queries() {
        let s = sample_schedule();
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.assignment_count(), 3);
        assert_eq!(s.covered_subjects(), set(&["A", "B", "C"]));
        assert_eq!(s.teacher_for_subject("C").unwrap().email, "t2@x.org");
        assert!(s.teacher_for_subject("Z").is_none());
    }

    #[test]
    fn test_clean_schedule_has_no_violations() {
        let s = sample_schedule();
        assert!(s.violations(&set(&["A", "B", "C"])).is_empty());
    }

    #[test]
    fn test_uncovered_and_unrequested() {
        let s = sample_schedule();
        let v = s.violations(&set(&["A", "B", "D"]));

        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::UncoveredSubject && v.entity_id == "D"));
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::UnrequestedSubject && v.entity_id == "C"));
    }

    #[test]
    fn test_duplicate_and_capability() {
        let mut s = sample_schedule();
        let mut rogue = Teacher::new("R", "Rogue", 40, "r@x.org").with_subject("A");
        rogue.assigned_subjects = set(&["A", "Q"]);
        s.add_teacher(rogue);

        let v = s.violations(&set(&["A", "B", "C", "Q"]));
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::DuplicateAssignment && v.entity_id == "A"));
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::OutsideCapability && v.entity_id == "r@x.org"));
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.assignment_count(), 0);
        assert!(s.violations(&BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_display() {
        let mut s = Schedule::new();
        let mut t = Teacher::new("Maria", "Petrenko", 38, "m.petrenko@example.com")
            .with_subjects(["Chemistry", "Biology"]);
        t.assigned_subjects = set(&["Chemistry", "Biology"]);
        s.add_teacher(t);

        let rendered = s.to_string();
        assert_eq!(
            rendered,
            "Schedule:\n\
             Maria Petrenko, 38 years, email: m.petrenko@example.com\n   \
             Teaches subjects: Biology, Chemistry\n"
        );
    }
}
