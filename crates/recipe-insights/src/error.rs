use std::error::Error;
use std::fmt;

/// Schema and typing failures raised while loading the input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// A required column is absent from the table header.
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    /// A numeric column holds a value that does not parse as a number.
    InvalidNumber {
        table: &'static str,
        column: &'static str,
        row: usize,
        value: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetError::MissingColumn { table, column } => {
                write!(f, "Missing required column '{}' in {}", column, table)
            }
            DatasetError::InvalidNumber {
                table,
                column,
                row,
                value,
            } => write!(
                f,
                "Invalid number '{}' in column '{}' of {} at row {}",
                value, column, table, row
            ),
        }
    }
}

impl Error for DatasetError {}
