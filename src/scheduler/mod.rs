//! Visit matching and schedule views.
//!
//! Provides the random-choice matching engine that turns the directory
//! into a schedule, and the read-side views derived from it.
//!
//! # Algorithm
//!
//! `MatchingEngine` pairs each patient with a uniformly random member of
//! the staff qualified for and covering them. It is a heuristic with no
//! optimality guarantee and no conflict detection.
//!
//! # Views
//!
//! `projection` derives workload, routes and CSV rows; `ScheduleSummary`
//! computes headline figures (unscheduled patients, travel, capacity).

mod matching;
pub mod projection;
mod summary;

pub use matching::{candidates_for, is_qualified, MatchingEngine};
pub use projection::{RouteStop, StaffWorkload, CSV_HEADER};
pub use summary::ScheduleSummary;
