//! Construction-time validation errors.
//!
//! Everything past construction is a total function: out-of-range coordinates
//! wrap instead of failing, and activate/deactivate are idempotent.

use thiserror::Error;

pub type LifeResult<T> = Result<T, LifeError>;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LifeError {
    /// A grid dimension was zero.
    #[error("grid dimensions must be nonzero (got {rows}x{cols})")]
    InvalidDimension { rows: u32, cols: u32 },

    /// A seed ratio fell outside `[0, 1]`.
    #[error("alive ratio must be within [0, 1] (got {0})")]
    InvalidRatio(f64),
}
