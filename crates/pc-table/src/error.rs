//! Reference table errors.

use pc_core::PcError;
use thiserror::Error;

/// Result type for table construction.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while building a `PhaseTable`.
///
/// Queries never fail; an unbracketed pressure is reported through
/// `Lookup::OutOfRange` instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Fewer than two rows, so nothing can be bracketed.
    #[error("Reference table needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    /// Two rows share the same pressure.
    #[error("Duplicate reference pressure {pressure}")]
    DuplicatePressure { pressure: f64 },

    /// NaN or infinite value in a row.
    #[error("Non-finite {what} in reference point at pressure {pressure}")]
    NonFinite { what: &'static str, pressure: f64 },
}

impl From<TableError> for PcError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NonFinite { what, pressure } => PcError::InvalidArg {
                what: format!("non-finite {what} at pressure {pressure}"),
            },
            other => PcError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
