//! Engine configuration.
//!
//! Resolved once when a coordinator is built and passed down to the
//! matching engine and ledgers. Every field has a default, so a partial
//! JSON document deserializes into a complete configuration.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::models::ClockTime;

/// How booking status updates are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransitionPolicy {
    /// Any status may be written over any other.
    #[default]
    Permissive,
    /// Only forward lifecycle moves and cancellation are accepted.
    Guarded,
}

/// Tunable constants of the scheduling engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Visit slot for patients preferring mornings.
    pub morning_slot: ClockTime,
    /// Visit slot for patients preferring afternoons.
    pub afternoon_slot: ClockTime,
    /// Planned visit length (minutes).
    pub visit_duration_min: u16,
    /// Lowest simulated travel time (minutes, inclusive).
    pub travel_time_min_low: u16,
    /// Highest simulated travel time (minutes, inclusive).
    pub travel_time_min_high: u16,
    /// First hour of the bookable grid.
    pub booking_first_hour: u8,
    /// Hour at which the bookable grid ends (exclusive).
    pub booking_end_hour: u8,
    /// Visits per staff member per day shown as full capacity.
    pub max_daily_visits: u32,
    /// Facility-wide visit capacity per day.
    pub daily_capacity: u32,
    /// Travel time limit published to supervisors (minutes).
    pub max_travel_time_min: u16,
    /// Simulated processing time before a schedule run returns (ms).
    pub processing_delay_ms: u64,
    /// Booking status update policy.
    pub transition_policy: TransitionPolicy,
    /// Duration recorded on bookings that do not give one.
    pub default_booking_duration: String,
    /// Language recorded on bookings that do not give one.
    pub default_language: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            morning_slot: ClockTime::hour(9),
            afternoon_slot: ClockTime::hour(14),
            visit_duration_min: 45,
            travel_time_min_low: 10,
            travel_time_min_high: 39,
            booking_first_hour: 9,
            booking_end_hour: 17,
            max_daily_visits: 8,
            daily_capacity: 30,
            max_travel_time_min: 30,
            processing_delay_ms: 1500,
            transition_policy: TransitionPolicy::Permissive,
            default_booking_duration: "1 hour".to_string(),
            default_language: "English".to_string(),
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulated processing delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the booking status policy.
    pub fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }

    /// Sets the two visit slots.
    pub fn with_slots(mut self, morning: ClockTime, afternoon: ClockTime) -> Self {
        self.morning_slot = morning;
        self.afternoon_slot = afternoon;
        self
    }

    /// Sets the simulated travel time bounds (inclusive).
    pub fn with_travel_time(mut self, low: u16, high: u16) -> Self {
        self.travel_time_min_low = low.min(high);
        self.travel_time_min_high = low.max(high);
        self
    }

    /// Sets the per-staff visit capacity.
    pub fn with_max_daily_visits(mut self, visits: u32) -> Self {
        self.max_daily_visits = visits;
        self
    }

    /// Simulated processing delay.
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Inclusive travel time range (minutes), tolerant of swapped bounds.
    pub fn travel_time_range(&self) -> RangeInclusive<u16> {
        let low = self.travel_time_min_low.min(self.travel_time_min_high);
        let high = self.travel_time_min_low.max(self.travel_time_min_high);
        low..=high
    }

    /// Hourly slots of the bookable grid, in order.
    pub fn booking_grid(&self) -> Vec<ClockTime> {
        let end = self.booking_end_hour.min(24);
        (self.booking_first_hour..end)
            .filter_map(|h| ClockTime::new(h, 0))
            .collect()
    }
}
