//! Heuristic parser for laboratory report text (already extracted from
//! PDF or OCR) into patient, metadata and result rows.

pub mod classify;
pub mod dates;
pub mod format;
pub mod header;
pub mod parser;
pub mod row;
pub mod tokens;
pub mod types;

pub use format::ReportSection;
pub use parser::*;
pub use types::*;
