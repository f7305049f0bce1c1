use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that occur while turning an experiments table into commands.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The experiments file could not be opened.
    #[error("unable to read experiments from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The header row lacks one of the required columns.
    #[error("missing required column {0}")]
    MissingColumn(&'static str),

    /// A data row has fewer fields than the header.
    #[error("row {row} has {found} fields but the header declares {expected}")]
    ShortRow {
        row: u64,
        expected: usize,
        found: usize,
    },

    /// The table is not valid CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The command script could not be written.
    #[error("unable to write commands to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
