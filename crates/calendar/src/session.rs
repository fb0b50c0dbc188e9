use chrono::NaiveDate;
use eyre::Result;
use guardias_core::{
    aggregator::{group_by_day_area_window, shifts_for_date, AreaWindowGroup, DayGroups},
    models::shift::ShiftRecord,
};

use crate::source::ShiftSource;

/// Calendar state for one user session.
///
/// Holds the last fetched shift list and the day groups derived from it. The
/// groups are rebuilt whenever the list is replaced and never edited in place.
#[derive(Debug, Clone, Default)]
pub struct CalendarSession {
    shifts: Vec<ShiftRecord>,
    day_groups: DayGroups,
}

impl CalendarSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the shift list and recomputes the day groups.
    pub fn replace_shifts(&mut self, shifts: Vec<ShiftRecord>) {
        self.day_groups = group_by_day_area_window(&shifts);
        self.shifts = shifts;
    }

    /// Fetches every shift from `source` and replaces the current state.
    ///
    /// On error the previous shifts and groups are kept.
    pub async fn refresh<S>(&mut self, source: &S) -> Result<()>
    where
        S: ShiftSource + ?Sized,
    {
        let shifts = source.all_shifts().await?;
        tracing::debug!("Session refreshed with {} shifts", shifts.len());
        self.replace_shifts(shifts);
        Ok(())
    }

    pub fn shifts(&self) -> &[ShiftRecord] {
        &self.shifts
    }

    pub fn day_groups(&self) -> &DayGroups {
        &self.day_groups
    }

    /// Area/window groups on `date`, empty when nothing covers it.
    pub fn groups_on(&self, date: NaiveDate) -> &[AreaWindowGroup] {
        self.day_groups
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Shifts covering `date`, including overnight shifts from the day before.
    pub fn shifts_on(&self, date: NaiveDate) -> Vec<ShiftRecord> {
        shifts_for_date(&self.shifts, date)
    }
}
