use thiserror::Error;

/// Every failure the pipeline can surface. None of them is recovered from;
/// `main` prints the message and exits with -1.
#[derive(Debug, Error)]
pub enum AirDistError {
    /// The place count given on the command line is not a positive integer.
    #[error("{0}")]
    InvalidArgument(String),

    /// The CSV file could not be opened or read.
    #[error("could not read {path}")]
    Unreadable {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A row of the place list could not be turned into a place.
    #[error("row {row}: {reason}")]
    InputSource { row: u64, reason: String },

    /// The place list has a header but no places.
    #[error("input contains no places")]
    EmptyInput,
}
