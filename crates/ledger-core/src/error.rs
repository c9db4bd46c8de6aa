use thiserror::Error;

use crate::domain::DomainError;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("stored data under `{key}` is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored data under `{key}` could not be read; refusing to overwrite it")]
    Unreadable { key: String },
    #[error("stored schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("export failed: {0}")]
    Export(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl LedgerError {
    /// True for rejected user input, which callers treat as a no-op
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LedgerError::Domain(DomainError::InvalidInput(_)))
    }
}
