use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Patient identity as printed in the report header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLabPatient {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLabMeta {
    pub provider: Option<String>,
    pub sampled_at: Option<NaiveDateTime>,
    pub result_at: Option<NaiveDateTime>,
}

/// One accepted result row.
///
/// `value` is only set for plain numerals; comparator results such as
/// `> 4000` keep their magnitude in `raw_value` alone. `unit` is always
/// present on emitted rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLabTest {
    pub section: Option<String>,
    pub name: String,
    pub value: Option<f64>,
    pub raw_value: String,
    pub unit: Option<String>,
    pub ref_raw: Option<String>,
}

impl ParsedLabTest {
    /// True when the raw result carries a `<`/`>` comparator.
    pub fn is_comparator(&self) -> bool {
        self.raw_value.starts_with(['<', '>'])
    }
}

/// Full result of parsing one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLab {
    pub patient: ParsedLabPatient,
    pub meta: ParsedLabMeta,
    pub tests: Vec<ParsedLabTest>,
    /// Candidate rows that could not be split. Diagnostics only.
    pub rejected_lines: Vec<String>,
}

impl ParsedLab {
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn tests_in_section<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = &'a ParsedLabTest> + 'a {
        self.tests
            .iter()
            .filter(move |t| t.section.as_deref() == Some(section))
    }
}

/// Counters collected while walking a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub lines: usize,
    pub section_headers: usize,
    pub preamble_skipped: usize,
    pub column_headers_skipped: usize,
    pub annotations_skipped: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl ParseStats {
    /// Rows that reached the field splitter.
    pub fn candidates(&self) -> usize {
        self.accepted + self.rejected
    }
}
