//! Built-in reference dataset.

use tracing::info;

use crate::point::ReferencePoint;
use crate::table::PhaseTable;

/// Saturation reference rows shipped with the crate (pressure in MPa, volumes in m^3/kg).
pub const REFERENCE_POINTS: [ReferencePoint; 2] = [
    ReferencePoint::new(0.05, 0.00105, 30.0),
    ReferencePoint::new(10.0, 0.0035, 0.0035),
];

impl PhaseTable {
    /// Table built from `REFERENCE_POINTS`.
    pub fn reference() -> Self {
        let table = Self::from_sorted_unchecked(REFERENCE_POINTS.to_vec());
        let (min_pressure, max_pressure) = table.pressure_range();
        info!(
            points = table.len(),
            min_pressure, max_pressure, "built-in reference table built"
        );
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_rows_pass_validation() {
        let validated = PhaseTable::new(REFERENCE_POINTS).unwrap();
        assert_eq!(validated, PhaseTable::reference());
    }

    #[test]
    fn reference_range() {
        assert_eq!(PhaseTable::reference().pressure_range(), (0.05, 10.0));
    }
}
