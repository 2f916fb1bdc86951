pub mod types;
pub mod lab_store;

pub use types::*;
pub use lab_store::*;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Lab already stored: {0}")]
    DuplicateLab(Uuid),

    #[error("Lab not found: {0}")]
    LabNotFound(Uuid),

    /// Failure reported by a persistent backend behind `LabSink`.
    #[error("Storage backend error: {0}")]
    Backend(String),
}
