//! Request handling against an explicitly supplied table.

use pc_table::PhaseTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::input::PressureInput;
use crate::response::PhaseChangeResponse;

/// Body of a phase-change query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseChangeRequest {
    pub pressure: PressureInput,
}

/// Resolve `input` and query `table`.
///
/// Unparseable input fails with `AppError::InvalidInput` before the table is
/// touched. An out-of-range pressure is a successful call whose payload is the
/// error response.
pub fn handle_phase_change(
    table: &PhaseTable,
    input: &PressureInput,
) -> AppResult<PhaseChangeResponse> {
    let pressure = input.resolve()?;
    let response = PhaseChangeResponse::from(table.lookup_or_interpolate(pressure));
    debug!(pressure, error = response.is_error(), "phase-change query");
    Ok(response)
}

/// Handle a JSON body of the form `{ "pressure": <number|string> }`.
pub fn handle_json_request(table: &PhaseTable, body: &str) -> AppResult<PhaseChangeResponse> {
    let request: PhaseChangeRequest =
        serde_json::from_str(body).map_err(AppError::BadRequest)?;
    handle_phase_change(table, &request.pressure)
}

/// Render a response as compact JSON.
pub fn to_json(response: &PhaseChangeResponse) -> AppResult<String> {
    Ok(serde_json::to_string(response)?)
}
