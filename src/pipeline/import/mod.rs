pub mod reader;

pub use reader::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File too large: {size_bytes} bytes exceeds {max_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    #[error("Report contains no text")]
    EmptyReport,
}
