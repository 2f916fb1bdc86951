//! Layout constants for the Synevo laboratory report format.
//!
//! Everything in here is part of the parser's contract with one vendor's
//! report layout. Another vendor gets its own parser, not new values here.

/// Provider literal stamped on every parsed Synevo report.
pub const PROVIDER: &str = "Synevo";

/// Lab-internal code that may precede a test name on a result row.
/// Stripped once, and only as a standalone leading token.
pub const TECHNICAL_CODE_PREFIX: &str = "SN";

/// Rows whose text before the value is shorter than this are rejected.
/// Heuristic: it filters abbreviations and stray numbers, not a rule
/// about real test names.
pub const MIN_NAME_PREFIX_CHARS: usize = 3;

/// Column-header row: starts with the first marker and contains the others.
pub const COLUMN_HEADER_START: &str = "Name";
pub const COLUMN_HEADER_MARKERS: &[&str] = &["Result", "Reference"];

/// Clinical sections that open a block of result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportSection {
    Hematology,
    Biochemistry,
    Immunology,
}

impl ReportSection {
    pub const ALL: [ReportSection; 3] = [
        ReportSection::Hematology,
        ReportSection::Biochemistry,
        ReportSection::Immunology,
    ];

    /// The header label as printed on the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hematology => "Hematology",
            Self::Biochemistry => "Biochemistry",
            Self::Immunology => "Immunology",
        }
    }

    /// Match a cleaned line against the known section headers
    /// (case-insensitive prefix).
    pub fn from_header_line(line: &str) -> Option<Self> {
        let lower = line.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| lower.starts_with(&section.label().to_lowercase()))
    }
}

/// True for the literal "Name ... Result ... Reference" column header row.
pub fn is_column_header(line: &str) -> bool {
    line.starts_with(COLUMN_HEADER_START)
        && COLUMN_HEADER_MARKERS.iter().all(|marker| line.contains(marker))
}
