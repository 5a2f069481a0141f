//! Error types for the Quran SDK

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the database accessor.
///
/// Every variant carries the originating cause where one exists, so callers
/// can log the full chain for diagnostics.
#[derive(Error, Debug)]
pub enum QuranError {
    /// The existence check, copy step, or underlying open call failed.
    #[error("Failed opening database: {message}")]
    FailedOpeningDatabase {
        message: String,
        #[source]
        source: Option<ErrorCause>,
    },

    /// Statement compilation failed.
    #[error("Failed preparing query `{sql}`")]
    FailedPreparingQuery {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A read method's underlying query failed, including implicit opens
    /// and empty single-row results.
    #[error("Failed executing query: {message}")]
    FailedExecutingQuery {
        message: String,
        #[source]
        source: Option<ErrorCause>,
    },

    /// Releasing the open handle reported a non-success result code.
    #[error("Failed closing database")]
    FailedClosingDatabase {
        #[source]
        source: rusqlite::Error,
    },

    /// The bundled dataset is missing from the package. A distribution
    /// defect; retrying cannot succeed.
    #[error("Bundled database `{name}` not found at {}", path.display())]
    FailedLocatingBundledResource { name: String, path: PathBuf },
}

/// Underlying cause attached to an accessor failure.
#[derive(Error, Debug)]
pub enum ErrorCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// An earlier accessor failure, e.g. an implicit open inside a read.
    #[error(transparent)]
    Accessor(Box<QuranError>),

    #[error("{0}")]
    Message(String),
}

impl From<QuranError> for ErrorCause {
    fn from(err: QuranError) -> Self {
        ErrorCause::Accessor(Box::new(err))
    }
}

impl serde::Serialize for QuranError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
