use super::format::{is_column_header, ReportSection};
use super::tokens::{has_comparator, has_digit};

/// Which part of the report the walker is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionState {
    /// Before the first section header: patient block, lab address, etc.
    #[default]
    Preamble,
    In(ReportSection),
}

impl SectionState {
    pub fn section(&self) -> Option<ReportSection> {
        match self {
            Self::Preamble => None,
            Self::In(section) => Some(*section),
        }
    }

    /// State after a line of the given kind.
    pub fn advance(self, kind: LineKind) -> Self {
        match kind {
            LineKind::SectionHeader(section) => Self::In(section),
            _ => self,
        }
    }
}

/// Outcome of classifying one cleaned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    SectionHeader(ReportSection),
    Preamble,
    ColumnHeader,
    /// No digit and no comparator: method or instrument notes.
    Annotation,
    /// Goes to the row splitter.
    Candidate,
}

/// Apply the skip rules in order. `line` must already be whitespace-collapsed.
pub fn classify_line(state: SectionState, line: &str) -> LineKind {
    if let Some(section) = ReportSection::from_header_line(line) {
        return LineKind::SectionHeader(section);
    }
    if state == SectionState::Preamble {
        return LineKind::Preamble;
    }
    if is_column_header(line) {
        return LineKind::ColumnHeader;
    }
    if !has_digit(line) && !has_comparator(line) {
        return LineKind::Annotation;
    }
    LineKind::Candidate
}
