//! Service layer for phase-change lookups.
//!
//! Sits between a transport (the CLI, or anything that can hand over a JSON
//! body) and the reference table: parses raw pressures, runs the lookup
//! against an explicitly passed `PhaseTable`, and shapes the response payload.

pub mod config;
pub mod error;
pub mod input;
pub mod response;
pub mod service;
pub mod sweep;

pub use config::{TableFile, load_table, load_table_or_reference};
pub use error::{AppError, AppResult};
pub use input::{PressureInput, parse_pressure};
pub use response::{OUT_OF_RANGE_MESSAGE, PhaseChangeResponse};
pub use service::{PhaseChangeRequest, handle_json_request, handle_phase_change, to_json};
pub use sweep::{SweepPoint, sweep};
