//! Append/remove logs of staff availability and patient bookings.
//!
//! Both ledgers key their records by owner (staff or patient) and keep
//! insertion order within an owner. Record ids come from a ledger-wide
//! `IdSequence`, so ids never repeat, even after removal.

mod availability;
mod booking;

pub use availability::AvailabilityLedger;
pub use booking::{BookingLedger, SlotAvailability};

use serde::{Deserialize, Serialize};

/// Monotonic id generator starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Ledger owner key.
///
/// Canonical integer ids (`"9"`, `"101"`) order numerically and come
/// before every other id, which order lexicographically. So patient `"9"`
/// lists ahead of `"10"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum OwnerKey {
    Numeric(u64),
    Text(String),
}

impl From<&str> for OwnerKey {
    fn from(id: &str) -> Self {
        let canonical = !id.is_empty()
            && id.bytes().all(|b| b.is_ascii_digit())
            && (id == "0" || !id.starts_with('0'));
        match id.parse::<u64>() {
            Ok(n) if canonical => Self::Numeric(n),
            _ => Self::Text(id.to_string()),
        }
    }
}

/// Treats `None` and blank strings alike.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
