//! Home-care domain models.
//!
//! Provides the data types the engine reads and produces: the directory
//! catalogs (staff and patients), the schedule of planned visits, and the
//! records kept by the availability and booking ledgers.
//!
//! # Domain Mappings
//!
//! | homecare-schedule | Scheduling term | Role |
//! |-------------------|-----------------|------|
//! | Patient | Task | Unit of demand, one visit per run |
//! | Staff | Resource | Performs visits |
//! | CareType | Skill | Qualification matched against needs |
//! | ScheduleEntry | Assignment | Staff × patient × slot |

mod availability;
mod booking;
mod patient;
mod schedule;
mod staff;
mod time;
mod timestamp;

pub use availability::{AvailabilityRequest, AvailabilitySubmission};
pub use booking::{Booking, BookingRequest, BookingStatus};
pub use patient::{Patient, PreferredTime, Priority};
pub use schedule::{Schedule, ScheduleEntry, VisitStatus};
pub use staff::{CareType, Role, Staff, DEFAULT_MAX_HOURS};
pub use time::{ClockTime, ClockTimeParseError, TimeRange};
pub use timestamp::{humanize, parse_humanized};
