//! The immutable pressure-indexed reference table.

use pc_core::ensure_finite;
use tracing::{debug, info, warn};

use crate::error::{TableError, TableResult};
use crate::interpolate::interpolate_reading;
use crate::point::{Reading, ReferencePoint};

/// Outcome of a table query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// Pressure matched a row; values are the stored literals.
    Exact(Reading),
    /// Pressure fell strictly between two rows.
    Interpolated(Reading),
    /// Pressure could not be bracketed by two distinct rows.
    OutOfRange,
}

impl Lookup {
    pub fn reading(&self) -> Option<Reading> {
        match self {
            Self::Exact(r) | Self::Interpolated(r) => Some(*r),
            Self::OutOfRange => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange)
    }
}

/// Reference rows sorted ascending by pressure.
///
/// Invariants: at least two rows, unique finite pressures, finite volumes.
/// The table is never mutated after construction, so it can be shared
/// across threads by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTable {
    points: Vec<ReferencePoint>,
}

impl PhaseTable {
    /// Validate and sort `points` into a table.
    pub fn new(points: impl IntoIterator<Item = ReferencePoint>) -> TableResult<Self> {
        let mut points: Vec<ReferencePoint> = points.into_iter().collect();

        for p in &points {
            check_finite(p.pressure, "pressure", p.pressure)?;
            check_finite(p.liquid_volume, "liquid volume", p.pressure)?;
            check_finite(p.vapor_volume, "vapor volume", p.pressure)?;
        }

        points.sort_by(|a, b| a.pressure.total_cmp(&b.pressure));

        if let Some(pair) = points.windows(2).find(|w| w[0].pressure == w[1].pressure) {
            return Err(TableError::DuplicatePressure {
                pressure: pair[0].pressure,
            });
        }
        if points.len() < 2 {
            return Err(TableError::TooFewPoints {
                count: points.len(),
            });
        }

        info!(
            points = points.len(),
            min_pressure = points[0].pressure,
            max_pressure = points[points.len() - 1].pressure,
            "reference table built"
        );
        Ok(Self { points })
    }

    /// Build from rows already known to satisfy the invariants.
    pub(crate) fn from_sorted_unchecked(points: Vec<ReferencePoint>) -> Self {
        debug_assert!(points.len() >= 2);
        debug_assert!(points.windows(2).all(|w| w[0].pressure < w[1].pressure));
        Self { points }
    }

    /// Rows in ascending pressure order.
    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a table holds at least two rows.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest tabulated pressure.
    pub fn pressure_range(&self) -> (f64, f64) {
        (self.smallest().pressure, self.largest().pressure)
    }

    /// Exact row lookup, falling back to linear interpolation.
    ///
    /// A non-finite `pressure` is reported as `OutOfRange`.
    pub fn lookup_or_interpolate(&self, pressure: f64) -> Lookup {
        if let Some(row) = self.points.iter().find(|p| p.pressure == pressure) {
            debug!(pressure, "exact reference match");
            return Lookup::Exact(row.reading());
        }

        let (lower, upper) = self.bracket(pressure);
        if lower.pressure == upper.pressure || !pressure.is_finite() {
            warn!(
                pressure,
                bound = lower.pressure,
                "pressure out of reference range"
            );
            return Lookup::OutOfRange;
        }

        let reading = interpolate_reading(pressure, lower, upper);
        debug!(
            pressure,
            p1 = lower.pressure,
            p2 = upper.pressure,
            liquid = reading.liquid_volume,
            vapor = reading.vapor_volume,
            "interpolated reading"
        );
        Lookup::Interpolated(reading)
    }

    /// Bracketing rows for `pressure`.
    ///
    /// Lower is the largest row with `p <= pressure`, else the smallest row.
    /// Upper is the first row with `p >= pressure`, else the largest row.
    /// Outside the table both collapse onto the same end row.
    pub fn bracket(&self, pressure: f64) -> (&ReferencePoint, &ReferencePoint) {
        let lower = self
            .points
            .iter()
            .rev()
            .find(|p| p.pressure <= pressure)
            .unwrap_or_else(|| self.smallest());
        let upper = self
            .points
            .iter()
            .find(|p| p.pressure >= pressure)
            .unwrap_or_else(|| self.largest());
        (lower, upper)
    }

    fn smallest(&self) -> &ReferencePoint {
        &self.points[0]
    }

    fn largest(&self) -> &ReferencePoint {
        &self.points[self.points.len() - 1]
    }
}

fn check_finite(v: f64, what: &'static str, pressure: f64) -> TableResult<()> {
    ensure_finite(v, what)
        .map(|_| ())
        .map_err(|_| TableError::NonFinite { what, pressure })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pc_core::within_span;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interpolated_values_stay_between_endpoints(p in 0.05_f64..10.0_f64) {
            let table = PhaseTable::reference();
            if let Lookup::Interpolated(r) = table.lookup_or_interpolate(p) {
                prop_assert!(within_span(r.liquid_volume, 0.00105, 0.0035));
                prop_assert!(within_span(r.vapor_volume, 30.0, 0.0035));
            }
        }

        #[test]
        fn lookup_is_deterministic(p in -5.0_f64..20.0_f64) {
            let table = PhaseTable::reference();
            let a = table.lookup_or_interpolate(p);
            let b = table.lookup_or_interpolate(p);
            match (a.reading(), b.reading()) {
                (Some(x), Some(y)) => {
                    prop_assert_eq!(x.liquid_volume.to_bits(), y.liquid_volume.to_bits());
                    prop_assert_eq!(x.vapor_volume.to_bits(), y.vapor_volume.to_bits());
                }
                (None, None) => {}
                _ => prop_assert!(false, "outcomes differ for {}", p),
            }
        }

        #[test]
        fn tabulated_pressures_restore_exactly(
            rows in prop::collection::btree_map(0_u32..10_000, (0.0_f64..1.0, 0.0_f64..100.0), 2..8)
        ) {
            let points: Vec<ReferencePoint> = rows
                .iter()
                .map(|(&k, &(vf, vg))| ReferencePoint::new(f64::from(k) / 100.0, vf, vg))
                .collect();
            let table = PhaseTable::new(points.clone()).unwrap();
            for row in &points {
                prop_assert_eq!(table.lookup_or_interpolate(row.pressure), Lookup::Exact(row.reading()));
            }
        }
    }
}
