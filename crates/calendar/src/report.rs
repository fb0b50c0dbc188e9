use chrono::NaiveDate;
use guardias_core::{aggregator::DayGroups, models::shift::ShiftRecord};
use serde::Serialize;

use crate::revert::RevertDecision;

/// Calendar summary produced by the `guardias` binary.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarReport {
    pub day_groups: DayGroups,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Coverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert: Option<RevertCheck>,
}

/// Shifts covering a single date.
#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub date: NaiveDate,
    pub shifts: Vec<ShiftRecord>,
}

/// Revert gate result for one schedule.
#[derive(Debug, Clone, Serialize)]
pub struct RevertCheck {
    pub schedule_id: i64,
    pub reference_date: NaiveDate,
    pub decision: RevertDecision,
}
