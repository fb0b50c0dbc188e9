//! # Shift Aggregation
//!
//! Groups guard shifts into the per-day buckets shown on the calendar and
//! answers coverage questions over them.
//!
//! A shift occupies one or two calendar dates (its *span dates*): the date it
//! starts on, plus the following date when its end hour is not after its start
//! hour. Equal start and end hours count as a full 24h shift, so a `08:00` to
//! `08:00` shift spans two dates.
//!
//! Everything here is pure and synchronous. Results are recomputed from the
//! input list on every call.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::shift::ShiftRecord;

/// Area/window groups for each calendar date, dates in ascending order.
///
/// Groups within a date keep the order in which they were first seen.
pub type DayGroups = BTreeMap<NaiveDate, Vec<AreaWindowGroup>>;

/// Shifts sharing an area and a start/end window on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaWindowGroup {
    pub area_name: String,
    pub start_time: String,
    pub end_time: String,
    pub shift_type: String,
    /// Shifts in first-seen order, unique by shift id.
    pub agents: Vec<ShiftRecord>,
}

impl AreaWindowGroup {
    fn from_shift(shift: &ShiftRecord) -> Self {
        Self {
            area_name: shift.area_name.clone(),
            start_time: shift.start_time.clone(),
            end_time: shift.end_time.clone(),
            shift_type: shift.shift_type.clone(),
            agents: Vec::new(),
        }
    }

    /// Key identifying the group within a day: `area|start|end`.
    pub fn key(&self) -> String {
        group_key(&self.area_name, &self.start_time, &self.end_time)
    }

    fn matches(&self, shift: &ShiftRecord) -> bool {
        self.area_name == shift.area_name
            && self.start_time == shift.start_time
            && self.end_time == shift.end_time
    }

    fn push_agent(&mut self, shift: &ShiftRecord) {
        if !self.agents.iter().any(|agent| agent.id == shift.id) {
            self.agents.push(shift.clone());
        }
    }
}

impl ShiftRecord {
    /// Calendar dates this shift occupies. See [`compute_span_dates`].
    pub fn span_dates(&self) -> Vec<NaiveDate> {
        compute_span_dates(self.date, &self.start_time, &self.end_time)
    }
}

fn group_key(area_name: &str, start_time: &str, end_time: &str) -> String {
    format!("{area_name}|{start_time}|{end_time}")
}

/// Hour component of an `HH:MM[:SS]` string.
fn parse_hour(time: &str) -> Option<u32> {
    time.split(':').next()?.trim().parse().ok()
}

/// Whether a shift with these times runs into the next calendar date.
///
/// Only hours are compared. Unparseable hours are treated as a same-day shift;
/// such values are rejected when records are built from backend payloads.
pub fn crosses_midnight(start_time: &str, end_time: &str) -> bool {
    match (parse_hour(start_time), parse_hour(end_time)) {
        (Some(start), Some(end)) => end <= start,
        _ => false,
    }
}

/// Dates occupied by a shift starting on `date`, in ascending order.
///
/// Always contains `date`; contains the following date too when the shift
/// crosses midnight.
pub fn compute_span_dates(date: NaiveDate, start_time: &str, end_time: &str) -> Vec<NaiveDate> {
    let mut dates = vec![date];

    if crosses_midnight(start_time, end_time) {
        if let Some(next) = date.succ_opt() {
            dates.push(next);
        }
    }

    dates
}

/// Buckets shifts by span date, then by area and time window.
///
/// A shift lands once in every date it spans. Repeated shift ids within a
/// group are ignored, so aggregating a list that contains duplicates gives
/// the same result as aggregating it without them.
pub fn group_by_day_area_window(shifts: &[ShiftRecord]) -> DayGroups {
    let mut days = DayGroups::new();

    for shift in shifts {
        for date in shift.span_dates() {
            let groups = days.entry(date).or_default();

            let index = match groups.iter().position(|group| group.matches(shift)) {
                Some(index) => index,
                None => {
                    groups.push(AreaWindowGroup::from_shift(shift));
                    groups.len() - 1
                }
            };

            groups[index].push_agent(shift);
        }
    }

    tracing::debug!(
        "Grouped {} shifts into {} calendar days",
        shifts.len(),
        days.len()
    );

    days
}

/// Shifts whose span dates include `target`, in input order.
pub fn shifts_for_date(all_shifts: &[ShiftRecord], target: NaiveDate) -> Vec<ShiftRecord> {
    all_shifts
        .iter()
        .filter(|shift| shift.span_dates().contains(&target))
        .cloned()
        .collect()
}

/// True if any shift starts on a date strictly before `reference`.
pub fn has_past_shift(shifts: &[ShiftRecord], reference: NaiveDate) -> bool {
    shifts.iter().any(|shift| shift.date < reference)
}

/// [`has_past_shift`] against today's local date.
pub fn has_past_shift_today(shifts: &[ShiftRecord]) -> bool {
    has_past_shift(shifts, Local::now().date_naive())
}
