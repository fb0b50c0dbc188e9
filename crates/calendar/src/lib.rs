//! # Guardias Calendar
//!
//! Session-level plumbing around the shift aggregator: where shifts come from,
//! the per-session calendar state built from them, and the gate that decides
//! whether a published schedule can go back to draft.
//!
//! - **source**: the `ShiftSource` abstraction over the backend, plus a JSON
//!   file implementation
//! - **session**: `CalendarSession`, the explicit per-session context
//! - **revert**: the fail-safe revert-to-draft gate
//! - **report**: the serializable calendar summary printed by the CLI
//! - **config**: environment configuration for the CLI

/// Environment configuration
pub mod config;
/// Mock shift sources for tests
pub mod mock;
/// Serializable calendar report
pub mod report;
/// Revert-to-draft gate for published schedules
pub mod revert;
/// Per-session calendar state
pub mod session;
/// Shift retrieval
pub mod source;
