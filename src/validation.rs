//! Input validation for coverage problems.
//!
//! Checks the subject set and teacher pool before scheduling. Detects:
//! - Blank subject identifiers
//! - Duplicate teacher emails
//! - Malformed emails
//! - Required subjects no teacher can teach
//!
//! The scheduler itself accepts any input; these checks let callers
//! reject bad rosters up front and predict coverage failure.

use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

use crate::models::{SubjectId, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A subject identifier is empty or whitespace.
    BlankSubject,
    /// Two teachers share the same email.
    DuplicateEmail,
    /// An email is not of the form `local@domain`.
    InvalidEmail,
    /// A required subject is not in any teacher's capability set.
    UnteachableSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a coverage problem.
///
/// Checks:
/// 1. No blank subject in the required set
/// 2. No blank subject in any capability set
/// 3. No duplicate teacher emails
/// 4. Every email has a non-empty local part and domain
/// 5. Every required subject is teachable by at least one teacher
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(subjects: &BTreeSet<SubjectId>, teachers: &[Teacher]) -> ValidationResult {
    let mut errors = Vec::new();

    for subject in subjects {
        if subject.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSubject,
                "Required subject set contains a blank subject",
            ));
        }
    }

    let mut emails = HashSet::new();
    for teacher in teachers {
        if !emails.insert(teacher.email.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmail,
                format!("Duplicate teacher email: {}", teacher.email),
            ));
        }

        if !is_plausible_email(&teacher.email) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEmail,
                format!(
                    "Teacher '{}' has invalid email '{}'",
                    teacher.full_name(),
                    teacher.email
                ),
            ));
        }

        if teacher
            .can_teach_subjects
            .iter()
            .any(|s| s.trim().is_empty())
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSubject,
                format!("Teacher '{}' lists a blank subject", teacher.full_name()),
            ));
        }
    }

    for subject in subjects {
        if !teachers.iter().any(|t| t.can_teach(subject)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnteachableSubject,
                format!("No teacher can teach '{subject}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::GreedyCoverScheduler;

    fn set(items: &[&str]) -> BTreeSet<SubjectId> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_teachers() -> Vec<Teacher> {
        vec![
            Teacher::new("Maria", "Petrenko", 38, "m.petrenko@example.com")
                .with_subjects(["Chemistry"]),
            Teacher::new("Olena", "Grytsenko", 42, "o.grytsenko@example.com")
                .with_subjects(["Biology", "Chemistry"]),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&set(&["Biology", "Chemistry"]), &sample_teachers()).is_ok());
    }

    #[test]
    fn test_blank_subject() {
        let errors = validate_input(&set(&["Biology", "  "]), &sample_teachers()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlankSubject));

        let mut teachers = sample_teachers();
        teachers[0].can_teach_subjects.insert(String::new());
        let errors = validate_input(&set(&["Biology"]), &teachers).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlankSubject && e.message.contains("Petrenko")));
    }

    #[test]
    fn test_duplicate_email() {
        let mut teachers = sample_teachers();
        teachers.push(Teacher::new("Other", "Maria", 50, "m.petrenko@example.com"));

        let errors = validate_input(&set(&["Biology"]), &teachers).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateEmail));
    }

    #[test]
    fn test_invalid_email() {
        for bad in ["", "no-at-sign", "@example.com", "user@", "a@b@c"] {
            let teachers = vec![Teacher::new("T", "X", 30, bad).with_subject("A")];
            let errors = validate_input(&set(&["A"]), &teachers).unwrap_err();
            assert!(
                errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::InvalidEmail),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_unteachable_subject_predicts_failure() {
        let subjects = set(&["Biology", "Physics"]);
        let mut teachers = sample_teachers();

        let errors = validate_input(&subjects, &teachers).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnteachableSubject);
        assert_eq!(errors[0].to_string(), "No teacher can teach 'Physics'");

        let failure = GreedyCoverScheduler::new()
            .schedule(&subjects, &mut teachers)
            .unwrap_err();
        assert_eq!(failure.uncovered, set(&["Physics"]));
    }

    #[test]
    fn test_multiple_errors() {
        let teachers = vec![
            Teacher::new("A", "X", 30, "dup@x.org"),
            Teacher::new("B", "X", 30, "dup@x.org"),
        ];
        let errors = validate_input(&set(&["A"]), &teachers).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
