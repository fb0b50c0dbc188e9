//! # Revert Gate
//!
//! A published schedule may only go back to draft while every one of its
//! shifts is still ahead of us. If the shifts cannot be retrieved the gate
//! assumes a past shift exists and denies the revert.

use chrono::NaiveDate;
use guardias_core::{
    aggregator::has_past_shift,
    errors::{ShiftError, ShiftResult},
    models::schedule::ScheduleStatus,
};
use serde::Serialize;

use crate::source::ShiftSource;

/// Why a revert was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// At least one shift starts before the reference date.
    HasPastShift,
    /// The schedule's shifts could not be fetched.
    RetrievalFailed,
}

/// Outcome of the revert-to-draft check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum RevertDecision {
    Allowed,
    Denied(DenyReason),
}

impl RevertDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RevertDecision::Allowed)
    }
}

/// Decides whether schedule `schedule_id` can be reverted to draft.
///
/// `reference` is the first date considered "not past", normally today.
pub async fn can_revert_to_draft<S>(
    source: &S,
    schedule_id: i64,
    reference: NaiveDate,
) -> RevertDecision
where
    S: ShiftSource + ?Sized,
{
    let shifts = match source.shifts_for_schedule(schedule_id).await {
        Ok(shifts) => shifts,
        Err(err) => {
            tracing::warn!(
                "Could not fetch shifts for schedule {}, denying revert: {:#}",
                schedule_id,
                err
            );
            return RevertDecision::Denied(DenyReason::RetrievalFailed);
        }
    };

    if has_past_shift(&shifts, reference) {
        tracing::debug!(
            "Schedule {} has shifts before {}, denying revert",
            schedule_id,
            reference
        );
        return RevertDecision::Denied(DenyReason::HasPastShift);
    }

    RevertDecision::Allowed
}

/// Moves a published schedule back to draft if the gate allows it.
///
/// Returns the new status on success.
pub async fn revert_schedule<S>(
    status: ScheduleStatus,
    source: &S,
    schedule_id: i64,
    reference: NaiveDate,
) -> ShiftResult<ScheduleStatus>
where
    S: ShiftSource + ?Sized,
{
    if status != ScheduleStatus::Published {
        return Err(ShiftError::InvalidTransition {
            from: status,
            to: ScheduleStatus::Draft,
        });
    }

    match can_revert_to_draft(source, schedule_id, reference).await {
        RevertDecision::Allowed => {
            tracing::debug!("Schedule {} reverted to draft", schedule_id);
            Ok(ScheduleStatus::Draft)
        }
        RevertDecision::Denied(DenyReason::HasPastShift) => Err(ShiftError::RevertDenied(
            format!("schedule {schedule_id} has shifts before {reference}"),
        )),
        RevertDecision::Denied(DenyReason::RetrievalFailed) => Err(ShiftError::RevertDenied(
            format!("shifts for schedule {schedule_id} could not be retrieved"),
        )),
    }
}
