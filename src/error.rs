//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers configuration failures detected before the pipeline starts and
//! resource failures while opening the log sinks. Per-row "wrongness" is a
//! data classification routed to the diagnostic sink, never an error here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Wrong action is selected")]
    WrongAction { action: String },

    #[error("Please define file with data")]
    MissingDataFile { path: std::path::PathBuf },

    #[error("We have not rights to read this file")]
    UnreadableDataFile { path: std::path::PathBuf },

    #[error("{name} cannot be open for writing")]
    SinkOpen {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}
