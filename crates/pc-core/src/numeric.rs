use crate::{PcError, PcResult};

/// Floating point type used for pressures and specific volumes.
pub type Real = f64;

/// Comparison band for table quantities.
///
/// `abs` matters for liquid volumes, which sit around 1e-3 m^3/kg; `rel`
/// scales with the larger operand for vapor volumes and pressures.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    /// Band for comparing interpolated volumes against hand-computed values.
    pub const VOLUME: Self = Self::new(1e-9, 1e-9);
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

/// `a` and `b` agree within either band of `tol`.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let band = tol.abs.max(tol.rel * a.abs().max(b.abs()));
    (a - b).abs() <= band
}

/// Pass `v` through, or name it in a `NonFinite` error.
pub fn ensure_finite(v: Real, what: &'static str) -> PcResult<Real> {
    v.is_finite()
        .then_some(v)
        .ok_or(PcError::NonFinite { what, value: v })
}

/// True when `v` lies in the closed interval spanned by `a` and `b`,
/// regardless of which endpoint is larger.
pub fn within_span(v: Real, a: Real, b: Real) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo <= v && v <= hi
}
