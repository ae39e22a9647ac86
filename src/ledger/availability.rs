//! Availability ledger: per-staff log of submitted availability windows.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;

use super::{non_blank, IdSequence};
use crate::error::{EngineError, EngineResult};
use crate::models::{AvailabilityRequest, AvailabilitySubmission};

/// Submissions keyed by staff id, each list in submission order.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityLedger {
    submissions: BTreeMap<String, Vec<AvailabilitySubmission>>,
    ids: IdSequence,
}

impl AvailabilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submission stamped with the current time.
    ///
    /// # Errors
    /// `Validation` when `staff_id` is missing or blank.
    pub fn submit(&mut self, request: AvailabilityRequest) -> EngineResult<AvailabilitySubmission> {
        self.submit_at(request, Utc::now())
    }

    /// Records a submission with an explicit timestamp.
    ///
    /// Days, time ordering and overlap with earlier submissions are not
    /// checked.
    pub fn submit_at(
        &mut self,
        request: AvailabilityRequest,
        now: DateTime<Utc>,
    ) -> EngineResult<AvailabilitySubmission> {
        let staff_id = non_blank(request.staff_id.as_deref())
            .ok_or_else(|| EngineError::validation("staff ID required"))?
            .to_string();

        let submission = AvailabilitySubmission {
            id: self.ids.next_id(),
            staff_id: staff_id.clone(),
            staff_name: request.staff_name.unwrap_or_default(),
            days: request.days,
            start_time: request.start_time,
            end_time: request.end_time,
            max_hours: request.max_hours,
            coverage_areas: request.coverage_areas,
            notes: request.notes.unwrap_or_default(),
            submitted_at: now,
        };

        debug!(staff = %staff_id, id = submission.id, "availability submitted");
        self.submissions
            .entry(staff_id)
            .or_default()
            .push(submission.clone());
        Ok(submission)
    }

    /// A staff member's submissions in submission order (empty if none).
    pub fn list(&self, staff_id: &str) -> &[AvailabilitySubmission] {
        self.submissions
            .get(staff_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every staff member's submissions, keyed by staff id.
    pub fn all(&self) -> &BTreeMap<String, Vec<AvailabilitySubmission>> {
        &self.submissions
    }

    /// Removes a submission. Idempotent: unknown ids are ignored.
    ///
    /// Returns whether a submission was removed.
    pub fn delete(&mut self, staff_id: &str, submission_id: u64) -> bool {
        let Some(list) = self.submissions.get_mut(staff_id) else {
            return false;
        };
        let before = list.len();
        list.retain(|s| s.id != submission_id);
        let removed = list.len() != before;
        debug!(staff = %staff_id, id = submission_id, removed, "availability delete");
        removed
    }

    /// Total number of stored submissions.
    pub fn len(&self) -> usize {
        self.submissions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
