//! Cycle solver errors.

use tc_tables::TableError;
use thiserror::Error;

/// Result type for cycle operations.
pub type CycleResult<T> = Result<T, CycleError>;

/// Errors that can occur while solving a cycle.
///
/// A failed property resolution anywhere in the four-state chain aborts the
/// solve; nothing partial is returned. Solves are pure functions of their
/// inputs, so there is no retry path.
#[derive(Error, Debug)]
pub enum CycleError {
    /// Property resolution or table configuration failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A boundary condition is outside what the cycle model accepts.
    #[error("Invalid cycle input: {what}")]
    InvalidInput { what: &'static str },
}
