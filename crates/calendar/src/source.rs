use std::path::{Path, PathBuf};

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use guardias_core::models::shift::{ShiftPayload, ShiftRecord};

/// Where shift records come from.
///
/// In production this is the backend's shift endpoint. Implementations map the
/// backend payload into validated [`ShiftRecord`]s.
#[async_trait]
pub trait ShiftSource: Send + Sync {
    /// Shifts belonging to one schedule (cronograma).
    async fn shifts_for_schedule(&self, schedule_id: i64) -> Result<Vec<ShiftRecord>>;

    /// Every shift visible to the session.
    async fn all_shifts(&self) -> Result<Vec<ShiftRecord>>;
}

/// Reads shifts from a JSON file holding an array of backend payloads.
///
/// The file is re-read on every call, so edits show up on the next refresh.
#[derive(Debug, Clone)]
pub struct FileShiftSource {
    path: PathBuf,
}

impl FileShiftSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<ShiftRecord>> {
        tracing::debug!("Reading shifts from {}", self.path.display());

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .wrap_err_with(|| format!("Failed to read shift file {}", self.path.display()))?;

        let payloads: Vec<ShiftPayload> = serde_json::from_str(&contents)
            .wrap_err_with(|| format!("Invalid shift JSON in {}", self.path.display()))?;

        let shifts = payloads
            .into_iter()
            .map(|payload| {
                let id = payload.id_guardia;
                ShiftRecord::try_from(payload).wrap_err_with(|| format!("Invalid shift {id}"))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} shifts from {}", shifts.len(), self.path.display());
        Ok(shifts)
    }
}

#[async_trait]
impl ShiftSource for FileShiftSource {
    async fn shifts_for_schedule(&self, schedule_id: i64) -> Result<Vec<ShiftRecord>> {
        let shifts = self.load().await?;

        Ok(shifts
            .into_iter()
            .filter(|shift| shift.schedule_id == Some(schedule_id))
            .collect())
    }

    async fn all_shifts(&self) -> Result<Vec<ShiftRecord>> {
        self.load().await
    }
}
