//! Error types for the conversion pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conversion errors. None of these are recoverable per row.
#[derive(Error, Debug)]
pub enum Error {
    /// Source `type` column is not one of the known transaction kinds.
    #[error("Event '{0}' not defined")]
    UnknownEventType(String),

    /// A numeric column could not be parsed after locale normalization.
    #[error("malformed number in column '{field}': {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    /// CSV framing or deserialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row-level error tagged with the export line the row starts on.
    #[error("line {line}")]
    AtLine {
        line: u64,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn malformed_number(field: &'static str, value: impl Into<String>) -> Self {
        Error::MalformedNumber {
            field,
            value: value.into(),
        }
    }

    pub fn at_line(line: u64, source: Error) -> Self {
        Error::AtLine {
            line,
            source: Box::new(source),
        }
    }

    /// The underlying error with any line tag stripped.
    pub fn root(&self) -> &Error {
        match self {
            Error::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}
