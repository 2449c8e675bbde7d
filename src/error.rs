//! Errors raised while reading, parsing and writing score tables.

use thiserror::Error;

/// Failure of the parse / serialize pipeline.
///
/// Ranking cannot fail; every variant here comes from the table boundary or
/// from parsing a row into a record.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input column is absent from the header.
    #[error("missing required column `{column}`")]
    Schema { column: &'static str },

    /// A cell could not be converted to the type its column requires.
    #[error("row {row}: column `{column}` expects {expected}, got {value:?}")]
    FieldParse {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The row's scores add up past the range of a decimal.
    #[error("row {row}: score total is out of range")]
    Overflow { row: usize },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
