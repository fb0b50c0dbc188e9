//! # Guardias Core
//!
//! Domain types and the shift aggregation logic behind the guard calendar.
//!
//! - **models**: shift records, their backend wire shape and the schedule
//!   approval lifecycle
//! - **aggregator**: span-date computation, day/area/window grouping and
//!   coverage queries
//! - **errors**: the crate-wide error type

pub mod aggregator;
pub mod errors;
pub mod models;
