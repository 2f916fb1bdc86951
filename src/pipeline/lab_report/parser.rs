use tracing::{debug, info, warn};

use super::classify::{classify_line, LineKind, SectionState};
use super::format::PROVIDER;
use super::header::HeaderExtractor;
use super::row::parse_test_row;
use super::types::{ParseStats, ParsedLab};
use crate::pipeline::extraction::sanitize::{collapse_whitespace, report_lines};

/// A parser for one vendor's lab report text layout.
pub trait LabReportParser {
    fn provider(&self) -> &'static str;

    fn parse(&self, text: &str) -> ParsedLab;
}

/// Heuristic parser for Synevo result sheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynevoParser;

impl LabReportParser for SynevoParser {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn parse(&self, text: &str) -> ParsedLab {
        parse_synevo_text(text)
    }
}

/// Parse the extracted text of a Synevo report.
///
/// Never fails on content: rows that look like results but cannot be split
/// end up in `rejected_lines`.
pub fn parse_synevo_text(text: &str) -> ParsedLab {
    parse_synevo_text_with_stats(text).0
}

/// Same as [`parse_synevo_text`], also returning line counters.
pub fn parse_synevo_text_with_stats(text: &str) -> (ParsedLab, ParseStats) {
    let lines = report_lines(text);
    let mut header = HeaderExtractor::new();
    let mut stats = ParseStats {
        lines: lines.len(),
        ..Default::default()
    };
    let mut tests = Vec::new();
    let mut rejected_lines = Vec::new();
    let mut state = SectionState::default();

    for line in &lines {
        header.observe(line);

        let cleaned = collapse_whitespace(line);
        let kind = classify_line(state, &cleaned);
        state = state.advance(kind);

        match kind {
            LineKind::SectionHeader(section) => {
                stats.section_headers += 1;
                debug!(section = section.label(), "Entering report section");
            }
            LineKind::Preamble => stats.preamble_skipped += 1,
            LineKind::ColumnHeader => stats.column_headers_skipped += 1,
            LineKind::Annotation => stats.annotations_skipped += 1,
            LineKind::Candidate => {
                let section = state.section().map(|s| s.label());
                match parse_test_row(&cleaned, section) {
                    Some(test) => {
                        stats.accepted += 1;
                        tests.push(test);
                    }
                    None => {
                        stats.rejected += 1;
                        debug!(section = ?section, line = %line, "Rejected result row");
                        rejected_lines.push(line.clone());
                    }
                }
            }
        }
    }

    let (patient, meta) = header.finish();

    info!(
        tests = stats.accepted,
        rejected = stats.rejected,
        sections = stats.section_headers,
        "Parsed lab report"
    );
    if tests.is_empty() && !lines.is_empty() {
        warn!(
            lines = stats.lines,
            rejected = stats.rejected,
            "Lab report produced no test results"
        );
    }

    let parsed = ParsedLab {
        patient,
        meta,
        tests,
        rejected_lines,
    };
    (parsed, stats)
}
