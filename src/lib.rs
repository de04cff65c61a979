//! Curriculum coverage scheduling.
//!
//! Assigns teachers to subjects so that every subject of a curriculum is
//! taught by exactly one selected teacher, using a greedy set-cover
//! heuristic.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Schedule`, `CoverRequest`, `Violation`
//! - **`scheduler`**: `GreedyCoverScheduler`, tie-break policies, coverage KPIs
//! - **`validation`**: Input integrity checks (duplicate emails, blank subjects, unteachable subjects)
//! - **`error`**: `CoverageFailure`, the "cannot cover" outcome
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use u_curriculum::models::Teacher;
//! use u_curriculum::scheduler::GreedyCoverScheduler;
//!
//! let subjects: BTreeSet<String> = ["Mathematics", "Physics", "Chemistry", "Informatics", "Biology"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//!
//! let mut teachers = vec![
//!     Teacher::new("Oleksandr", "Ivanenko", 45, "o.ivanenko@example.com")
//!         .with_subjects(["Mathematics", "Physics"]),
//!     Teacher::new("Maria", "Petrenko", 38, "m.petrenko@example.com")
//!         .with_subjects(["Chemistry"]),
//!     Teacher::new("Serhii", "Kovalenko", 50, "s.kovalenko@example.com")
//!         .with_subjects(["Informatics", "Mathematics"]),
//!     Teacher::new("Natalia", "Shevchenko", 29, "n.shevchenko@example.com")
//!         .with_subjects(["Biology", "Chemistry"]),
//!     Teacher::new("Dmytro", "Bondarenko", 35, "d.bondarenko@example.com")
//!         .with_subjects(["Physics", "Informatics"]),
//!     Teacher::new("Olena", "Grytsenko", 42, "o.grytsenko@example.com")
//!         .with_subjects(["Biology"]),
//! ];
//!
//! let schedule = GreedyCoverScheduler::new()
//!     .schedule(&subjects, &mut teachers)
//!     .expect("roster covers the curriculum");
//!
//! let order: Vec<&str> = schedule.iter().map(|t| t.last_name.as_str()).collect();
//! assert_eq!(order, ["Shevchenko", "Bondarenko", "Ivanenko"]);
//! assert_eq!(teachers.len(), 3); // unselected teachers stay with the caller
//! println!("{schedule}");
//! ```
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::CoverageFailure;
