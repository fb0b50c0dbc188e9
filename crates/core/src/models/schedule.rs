use std::fmt;

use serde::{Deserialize, Serialize};

/// Approval state of a schedule (cronograma).
///
/// Schedules move forward one step at a time:
/// `Draft -> Pending -> Approved -> Published`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Draft,
    Pending,
    Approved,
    Published,
}

impl ScheduleStatus {
    /// The next state in the approval workflow, `None` once published.
    pub fn next(self) -> Option<Self> {
        match self {
            ScheduleStatus::Draft => Some(ScheduleStatus::Pending),
            ScheduleStatus::Pending => Some(ScheduleStatus::Approved),
            ScheduleStatus::Approved => Some(ScheduleStatus::Published),
            ScheduleStatus::Published => None,
        }
    }

    /// Whether the workflow has an edge from `self` to `target`.
    ///
    /// Pending and approved schedules may be sent back to draft when rejected.
    /// `Published -> Draft` is a valid edge, but whether it is safe for a given
    /// schedule is decided by the revert gate, which looks at its shifts.
    pub fn can_transition_to(self, target: Self) -> bool {
        if self.next() == Some(target) {
            return true;
        }

        matches!(
            (self, target),
            (ScheduleStatus::Pending, ScheduleStatus::Draft)
                | (ScheduleStatus::Approved, ScheduleStatus::Draft)
                | (ScheduleStatus::Published, ScheduleStatus::Draft)
        )
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScheduleStatus::Draft => "draft",
            ScheduleStatus::Pending => "pending",
            ScheduleStatus::Approved => "approved",
            ScheduleStatus::Published => "published",
        };
        f.write_str(name)
    }
}
