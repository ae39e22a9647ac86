//! Home-healthcare visit assignment engine.
//!
//! Matches patients needing care to qualified staff who cover their area,
//! and keeps the ledgers of staff availability submissions and patient
//! bookings for a single facility/day. Everything is held in memory.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Staff`, `Patient`, `Schedule`,
//!   `ScheduleEntry`, `AvailabilitySubmission`, `Booking`, `ClockTime`
//! - **`directory`**: Staff and patient catalogs
//! - **`validation`**: Catalog integrity checks (empty and duplicate IDs)
//! - **`scheduler`**: Random-choice matching engine and schedule views
//!   (workload, route, CSV, summary)
//! - **`ledger`**: Availability and booking ledgers
//! - **`coordinator`**: Owned state and the operations exposed to callers
//!
//! # Architecture
//!
//! The matching engine is a pure function of the catalogs and a random
//! source. The coordinator owns the mutable working set (schedule,
//! ledgers, random source) so each caller or test gets isolated state.
//! Transport (HTTP routing, file export) is left to callers.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Fikar & Hirsch (2017), "Home health care routing and scheduling: A review"

pub mod config;
pub mod coordinator;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::{EngineConfig, TransitionPolicy};
pub use coordinator::CareCoordinator;
pub use directory::DirectoryStore;
pub use error::{EngineError, EngineResult, Entity};
