use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};

/// A shift (guardia) as returned by the backend API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayload {
    pub id_guardia: i64,
    pub fecha: NaiveDate,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub area_nombre: String,
    pub tipo: String,
    pub id_agente: i64,
    #[serde(default)]
    pub id_cronograma: Option<i64>,
}

/// A single guard shift covered by one agent.
///
/// `end_time` may be earlier than `start_time`, in which case the shift runs
/// into the next calendar day. Times keep the backend's textual form
/// (`HH:MM` or `HH:MM:SS`) since they are part of the grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub area_name: String,
    pub shift_type: String,
    pub agent_id: i64,
    pub schedule_id: Option<i64>,
}

impl TryFrom<ShiftPayload> for ShiftRecord {
    type Error = ShiftError;

    fn try_from(payload: ShiftPayload) -> ShiftResult<Self> {
        validate_time_of_day(&payload.hora_inicio)?;
        validate_time_of_day(&payload.hora_fin)?;

        if payload.area_nombre.trim().is_empty() {
            return Err(ShiftError::Validation(format!(
                "Shift {} has no area",
                payload.id_guardia
            )));
        }

        Ok(Self {
            id: payload.id_guardia,
            date: payload.fecha,
            start_time: payload.hora_inicio,
            end_time: payload.hora_fin,
            area_name: payload.area_nombre,
            shift_type: payload.tipo,
            agent_id: payload.id_agente,
            schedule_id: payload.id_cronograma,
        })
    }
}

/// Checks that `value` is a time of day in `HH:MM` or `HH:MM:SS` form.
pub fn validate_time_of_day(value: &str) -> ShiftResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| ShiftError::Validation(format!("Invalid time of day: {value:?}")))
}
