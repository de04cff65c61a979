//! Greedy cover scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyCoverScheduler` repeatedly selects the teacher able to take over
//! the most still-uncovered subjects. It is not optimal (set cover is
//! NP-hard) but stays within a ln(n) factor of the optimum.
//!
//! # KPI
//!
//! `CoverKpi` computes coverage rate, teacher load and capability usage.
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"
//! - Johnson (1974), "Approximation Algorithms for Combinatorial Problems"

mod greedy;
mod kpi;
mod tie_break;

pub use greedy::GreedyCoverScheduler;
pub use kpi::CoverKpi;
pub use tie_break::TieBreak;
