//! pc-core: shared foundation for the phase-change lookup crates.
//!
//! Contains:
//! - units (uom SI pressure types + table-unit conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{PcError, PcResult};
pub use numeric::*;
pub use units::*;
