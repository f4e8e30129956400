//! Property table errors.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while loading or querying property tables.
#[derive(Error, Debug)]
pub enum TableError {
    /// I/O failure while reading a table file.
    #[error("I/O error reading property table")]
    Io(#[from] std::io::Error),

    /// Malformed table data. `line` is 1-based within the source text.
    #[error("Malformed property table at line {line}: {reason}")]
    Load { line: usize, reason: String },

    /// A column that must be monotonic is not.
    #[error("Column {column} is not monotonic at row {row}")]
    NotMonotonic { column: &'static str, row: usize },

    /// Interpolation needs at least two rows.
    #[error("Property table needs at least two rows, got {rows}")]
    TooFewRows { rows: usize },

    /// An anchor value falls outside the tabulated span of its column.
    #[error("{column} value {value} is outside the table range [{min}, {max}]")]
    OutOfRange {
        column: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Exactly one known property must be supplied to resolve a state.
    #[error("Exactly one known property must be supplied, got {supplied}")]
    AmbiguousAnchor { supplied: usize },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The queried region is outside what the table models.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Non-finite anchor or table value.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::OutOfRange {
            column: "temperature",
            value: 150.0,
            min: 200.0,
            max: 2200.0,
        };
        assert!(err.to_string().contains("temperature"));
        assert!(err.to_string().contains("150"));

        let err = TableError::AmbiguousAnchor { supplied: 2 };
        assert!(err.to_string().contains("got 2"));
    }
}
