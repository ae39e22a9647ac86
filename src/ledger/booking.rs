//! Booking ledger: per-patient log of appointment requests.
//!
//! Creation never checks for slot conflicts; `available_slots` is the
//! separate, read-only conflict query. Cancellation removes the record.
//!
//! Cross-patient listings walk patients in `OwnerKey` order (numeric ids
//! ascending, then other ids), each patient's bookings in creation order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::{non_blank, IdSequence, OwnerKey};
use crate::config::{EngineConfig, TransitionPolicy};
use crate::error::{EngineError, EngineResult, Entity};
use crate::models::{Booking, BookingRequest, BookingStatus, ClockTime};

/// Free hourly slots for a professional on a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub date: String,
    pub available_slots: Vec<ClockTime>,
    /// Bookings the professional already has on the date.
    pub booked_count: usize,
}

/// Bookings keyed by patient id, each list in creation order.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    bookings: BTreeMap<OwnerKey, Vec<Booking>>,
    ids: IdSequence,
    policy: TransitionPolicy,
    default_duration: String,
    default_language: String,
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::with_config(&EngineConfig::default())
    }
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger using the config's transition policy and defaults.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            bookings: BTreeMap::new(),
            ids: IdSequence::new(),
            policy: config.transition_policy,
            default_duration: config.default_booking_duration.clone(),
            default_language: config.default_language.clone(),
        }
    }

    /// Records a new pending booking stamped with the current time.
    ///
    /// # Errors
    /// `Validation` when patient id, professional id, date or time is
    /// missing. Date and time are stored as given, without format checks.
    pub fn create(&mut self, request: BookingRequest) -> EngineResult<Booking> {
        self.create_at(request, Utc::now())
    }

    /// Records a new pending booking with an explicit creation time.
    pub fn create_at(
        &mut self,
        request: BookingRequest,
        now: DateTime<Utc>,
    ) -> EngineResult<Booking> {
        let patient_id = non_blank(request.patient_id.as_deref());
        let professional_id = non_blank(request.professional_id.as_deref());
        let booking_date = non_blank(request.booking_date.as_deref());
        let booking_time = non_blank(request.booking_time.as_deref());

        let (Some(patient_id), Some(professional_id), Some(booking_date), Some(booking_time)) =
            (patient_id, professional_id, booking_date, booking_time)
        else {
            let missing: Vec<&str> = [
                ("patientId", patient_id),
                ("professionalId", professional_id),
                ("bookingDate", booking_date),
                ("bookingTime", booking_time),
            ]
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| *name)
            .collect();
            return Err(EngineError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        };

        let booking = Booking {
            id: self.ids.next_id(),
            patient_id: patient_id.to_string(),
            patient_name: request.patient_name.unwrap_or_default(),
            patient_phone: request.patient_phone,
            patient_email: request.patient_email,
            professional_id: professional_id.to_string(),
            professional_name: request.professional_name.unwrap_or_default(),
            service_type: request.service_type.unwrap_or_default(),
            booking_date: booking_date.to_string(),
            booking_time: booking_time.to_string(),
            duration: non_blank(request.duration.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| self.default_duration.clone()),
            location: request.location.unwrap_or_default(),
            notes: request.notes.unwrap_or_default(),
            preferred_language: non_blank(request.preferred_language.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| self.default_language.clone()),
            priority: request.priority.unwrap_or_default(),
            status: BookingStatus::Pending,
            created_at: now,
            confirmed_at: None,
            completed_at: None,
        };

        info!(
            id = booking.id,
            patient = %booking.patient_id,
            professional = %booking.professional_id,
            date = %booking.booking_date,
            time = %booking.booking_time,
            "booking created"
        );
        self.bookings
            .entry(OwnerKey::from(booking.patient_id.as_str()))
            .or_default()
            .push(booking.clone());
        Ok(booking)
    }

    /// A patient's bookings in creation order (empty if none).
    pub fn list_by_patient(&self, patient_id: &str) -> &[Booking] {
        self.bookings
            .get(&OwnerKey::from(patient_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A professional's bookings across all patients, in patient order.
    pub fn list_by_professional(&self, professional_id: &str) -> Vec<&Booking> {
        self.iter()
            .filter(|b| b.professional_id == professional_id)
            .collect()
    }

    /// Every booking, grouped by patient in patient order.
    pub fn all(&self) -> Vec<&Booking> {
        self.iter().collect()
    }

    pub fn find(&self, booking_id: u64) -> Option<&Booking> {
        self.iter().find(|b| b.id == booking_id)
    }

    /// Writes a new status, stamping confirmation/completion times.
    ///
    /// Notes are replaced only when non-blank notes are given.
    ///
    /// # Errors
    /// - `NotFound` when no booking has the id.
    /// - `Validation` when the guarded policy rejects the transition.
    pub fn update_status(
        &mut self,
        booking_id: u64,
        status: BookingStatus,
        notes: Option<String>,
    ) -> EngineResult<Booking> {
        self.update_status_at(booking_id, status, notes, Utc::now())
    }

    /// `update_status` with an explicit timestamp.
    pub fn update_status_at(
        &mut self,
        booking_id: u64,
        status: BookingStatus,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> EngineResult<Booking> {
        let policy = self.policy;
        let Some(booking) = self
            .bookings
            .values_mut()
            .flat_map(|list| list.iter_mut())
            .find(|b| b.id == booking_id)
        else {
            warn!(id = booking_id, "status update for unknown booking");
            return Err(EngineError::not_found(Entity::Booking, booking_id));
        };

        if policy == TransitionPolicy::Guarded && !booking.status.can_transition_to(status) {
            return Err(EngineError::validation(format!(
                "booking {booking_id} cannot move from {} to {status}",
                booking.status
            )));
        }

        let previous = booking.status;
        booking.status = status;
        if let Some(notes) = notes.filter(|n| !n.trim().is_empty()) {
            booking.notes = notes;
        }
        match status {
            BookingStatus::Confirmed => booking.confirmed_at = Some(now),
            BookingStatus::Completed => booking.completed_at = Some(now),
            BookingStatus::Pending | BookingStatus::Cancelled => {}
        }

        info!(id = booking_id, from = %previous, to = %status, "booking status updated");
        Ok(booking.clone())
    }

    /// Removes a booking; its id is never reissued.
    ///
    /// # Errors
    /// `NotFound` when no booking has the id.
    pub fn cancel(&mut self, booking_id: u64) -> EngineResult<Booking> {
        for list in self.bookings.values_mut() {
            if let Some(idx) = list.iter().position(|b| b.id == booking_id) {
                let removed = list.remove(idx);
                info!(id = booking_id, patient = %removed.patient_id, "booking cancelled");
                return Ok(removed);
            }
        }
        warn!(id = booking_id, "cancel for unknown booking");
        Err(EngineError::not_found(Entity::Booking, booking_id))
    }

    /// Grid slots not yet booked for the professional on the date.
    ///
    /// Dates match as exact text; a booking blocks the grid slot whose
    /// `HH:MM` label equals its time. Only existing bookings are
    /// considered; the professional's declared working hours are not.
    pub fn available_slots(
        &self,
        professional_id: &str,
        date: &str,
        grid: &[ClockTime],
    ) -> SlotAvailability {
        let day: Vec<&Booking> = self
            .iter()
            .filter(|b| b.occupies(professional_id, date))
            .collect();

        let available_slots = grid
            .iter()
            .copied()
            .filter(|slot| {
                let label = slot.to_string();
                !day.iter().any(|b| b.booking_time == label)
            })
            .collect();

        debug!(professional = %professional_id, %date, booked = day.len(), "slot query");
        SlotAvailability {
            date: date.to_string(),
            available_slots,
            booked_count: day.len(),
        }
    }

    /// Total number of stored bookings.
    pub fn len(&self) -> usize {
        self.bookings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values().flat_map(|list| list.iter())
    }
}
