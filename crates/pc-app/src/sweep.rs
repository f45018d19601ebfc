//! Pressure sweeps across the reference table.

use pc_core::{Tolerances, nearly_equal};
use pc_table::PhaseTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::input::parse_pressure;
use crate::response::PhaseChangeResponse;

/// One evaluated sweep pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Pressure in the table unit (MPa)
    pub pressure: f64,
    pub response: PhaseChangeResponse,
}

/// Evaluate `num_points` linearly spaced pressures from `start` to `end`.
///
/// Both bounds accept the same text as a single query. Points outside the
/// table carry the out-of-range payload instead of failing the sweep.
pub fn sweep(
    table: &PhaseTable,
    start: &str,
    end: &str,
    num_points: usize,
) -> AppResult<Vec<SweepPoint>> {
    let start_p = parse_pressure(start).map_err(|e| with_context(e, "Start value error"))?;
    let end_p = parse_pressure(end).map_err(|e| with_context(e, "End value error"))?;

    if num_points < 2 {
        return Err(AppError::InvalidInput(
            "Sweep must have at least 2 points".to_string(),
        ));
    }
    if nearly_equal(start_p, end_p, Tolerances::default()) {
        return Err(AppError::InvalidInput(
            "Start and end values must be different".to_string(),
        ));
    }

    debug!(start = start_p, end = end_p, num_points, "pressure sweep");

    let step = (end_p - start_p) / (num_points - 1) as f64;
    let points = (0..num_points)
        .map(|i| {
            // land exactly on the end value so a tabulated end hits the exact row
            let pressure = if i == num_points - 1 {
                end_p
            } else {
                start_p + step * i as f64
            };
            SweepPoint {
                pressure,
                response: table.lookup_or_interpolate(pressure).into(),
            }
        })
        .collect();
    Ok(points)
}

fn with_context(err: AppError, context: &str) -> AppError {
    match err {
        AppError::InvalidInput(msg) => AppError::InvalidInput(format!("{context}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_across_table() {
        let table = PhaseTable::reference();
        let pts = sweep(&table, "0.05", "10", 5).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0].pressure, 0.05);
        assert_eq!(pts[4].pressure, 10.0);
        assert!(pts.iter().all(|p| !p.response.is_error()));
        assert_eq!(
            pts[0].response,
            PhaseChangeResponse::Reading {
                specific_volume_liquid: 0.00105,
                specific_volume_vapor: 30.0,
            }
        );
    }

    #[test]
    fn sweep_beyond_table_reports_per_point() {
        let table = PhaseTable::reference();
        let pts = sweep(&table, "0", "20", 3).unwrap();
        assert!(pts[0].response.is_error());
        assert!(!pts[1].response.is_error());
        assert!(pts[2].response.is_error());
    }

    #[test]
    fn descending_sweep() {
        let table = PhaseTable::reference();
        let pts = sweep(&table, "100 bar", "0.05 MPa", 3).unwrap();
        assert!(pts[0].pressure > pts[2].pressure);
        assert_eq!(pts[2].pressure, 0.05);
    }

    #[test]
    fn invalid_sweeps() {
        let table = PhaseTable::reference();
        assert!(sweep(&table, "1", "2", 1).is_err());
        assert!(sweep(&table, "1", "1", 4).is_err());
        assert!(sweep(&table, "x", "2", 4).is_err());
        assert!(sweep(&table, "1", "y", 4).is_err());
    }

    #[test]
    fn bound_errors_name_the_bound_once() {
        let table = PhaseTable::reference();
        let err = sweep(&table, "x", "2", 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Start value error: Invalid pressure value: 'x'"
        );
        let err = sweep(&table, "1", "y", 4).unwrap_err();
        assert_eq!(err.to_string().matches("Invalid input").count(), 1);
        assert!(err.to_string().contains("End value error"));
    }
}
