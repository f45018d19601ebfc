//! pc-table: saturation specific-volume reference table.
//!
//! Provides:
//! - `ReferencePoint` rows (pressure -> liquid/vapor specific volume)
//! - `PhaseTable`, an immutable table sorted once at construction
//! - exact lookup with linear interpolation between bracketing rows
//! - the built-in reference dataset
//!
//! # Example
//!
//! ```
//! use pc_table::{Lookup, PhaseTable};
//!
//! let table = PhaseTable::reference();
//! match table.lookup_or_interpolate(5.025) {
//!     Lookup::Interpolated(r) => assert!((r.vapor_volume - 15.00175).abs() < 1e-9),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod dataset;
pub mod error;
pub mod interpolate;
pub mod point;
pub mod table;

pub use dataset::REFERENCE_POINTS;
pub use error::{TableError, TableResult};
pub use interpolate::{interpolate_reading, lerp};
pub use point::{Reading, ReferencePoint};
pub use table::{Lookup, PhaseTable};
