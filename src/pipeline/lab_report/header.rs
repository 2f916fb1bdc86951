use std::sync::LazyLock;

use regex::Regex;

use super::dates::{parse_report_date, parse_report_date_time};
use super::format::PROVIDER;
use super::types::{ParsedLabMeta, ParsedLabPatient};

/// Label-prefixed name fields. The value runs to the end of the line or to
/// the next gap of two or more spaces (side-by-side header columns).
static LAST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^last\s*name\s*:\s*(.+?)(?:\s{2,}|$)").unwrap());
static FIRST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^first\s*name\s*:\s*(.+?)(?:\s{2,}|$)").unwrap());

/// Date fields take the rest of the line; the date parsers stop at the end
/// of the date (or time), so a wide gap between date and time is kept.
static BIRTHDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:date\s+of\s+birth|birth\s*date)\s*:\s*(.+)$").unwrap()
});
static SAMPLED_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:sampl(?:e|ing)\s+date|sampled(?:\s+at)?)\s*:\s*(.+)$").unwrap()
});
static RESULT_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:result\s+date|results?\s+at|report\s+date)\s*:\s*(.+)$").unwrap()
});

/// Collects header fields from report lines. Each field keeps the first
/// value found in document order; a label whose value does not parse
/// leaves the field open for a later line.
#[derive(Debug, Default)]
pub struct HeaderExtractor {
    patient: ParsedLabPatient,
    meta: ParsedLabMeta,
}

impl HeaderExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, line: &str) {
        fill_once(&mut self.patient.last_name, || capture(&LAST_NAME, line));
        fill_once(&mut self.patient.first_name, || capture(&FIRST_NAME, line));
        fill_once(&mut self.patient.birthdate, || {
            capture(&BIRTHDATE, line).and_then(|v| parse_report_date(&v))
        });
        fill_once(&mut self.meta.sampled_at, || {
            capture(&SAMPLED_AT, line).and_then(|v| parse_report_date_time(&v))
        });
        fill_once(&mut self.meta.result_at, || {
            capture(&RESULT_AT, line).and_then(|v| parse_report_date_time(&v))
        });
    }

    pub fn finish(self) -> (ParsedLabPatient, ParsedLabMeta) {
        let meta = ParsedLabMeta {
            provider: Some(PROVIDER.to_string()),
            ..self.meta
        };
        (self.patient, meta)
    }
}

/// Scan every line once and return the header fields.
pub fn extract_header<'a, I>(lines: I) -> (ParsedLabPatient, ParsedLabMeta)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut extractor = HeaderExtractor::new();
    for line in lines {
        extractor.observe(line);
    }
    extractor.finish()
}

fn fill_once<T>(slot: &mut Option<T>, value: impl FnOnce() -> Option<T>) {
    if slot.is_none() {
        *slot = value();
    }
}

fn capture(pattern: &Regex, line: &str) -> Option<String> {
    let value = pattern.captures(line)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn extracts_all_fields() {
        let (patient, meta) = extract_header([
            "Last name: POPESCU",
            "First name: ANA MARIA",
            "Date of birth: 03.07.1985",
            "Sample date: 12/01/2024 08:30",
            "Result date: 13/01/2024 14:05",
        ]);

        assert_eq!(patient.last_name.as_deref(), Some("POPESCU"));
        assert_eq!(patient.first_name.as_deref(), Some("ANA MARIA"));
        assert_eq!(patient.birthdate, NaiveDate::from_ymd_opt(1985, 7, 3));
        assert_eq!(
            meta.sampled_at,
            NaiveDate::from_ymd_opt(2024, 1, 12).and_then(|d| d.and_hms_opt(8, 30, 0))
        );
        assert_eq!(
            meta.result_at,
            NaiveDate::from_ymd_opt(2024, 1, 13).and_then(|d| d.and_hms_opt(14, 5, 0))
        );
        assert_eq!(meta.provider.as_deref(), Some(PROVIDER));
    }

    #[test]
    fn first_occurrence_wins() {
        let (patient, meta) = extract_header([
            "Last name: IONESCU",
            "Sample date: 01/02/2024",
            "Last name: POPESCU",
            "Sample date: 05/06/2024",
        ]);
        assert_eq!(patient.last_name.as_deref(), Some("IONESCU"));
        assert_eq!(
            meta.sampled_at,
            NaiveDate::from_ymd_opt(2024, 2, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn missing_fields_stay_none() {
        let (patient, meta) = extract_header(["Biochemistry", "Glucose 92 mg/dL 74 - 106"]);
        assert_eq!(patient, ParsedLabPatient::default());
        assert!(meta.sampled_at.is_none());
        assert!(meta.result_at.is_none());
        assert_eq!(meta.provider.as_deref(), Some(PROVIDER));
    }

    #[test]
    fn unparseable_date_leaves_field_open() {
        let (patient, _) = extract_header([
            "Date of birth: unknown",
            "Date of birth: 9-11-1970",
        ]);
        assert_eq!(patient.birthdate, NaiveDate::from_ymd_opt(1970, 11, 9));
    }

    #[test]
    fn labels_are_case_insensitive() {
        let (patient, _) = extract_header(["LAST NAME: Dumitru", "first name:  Elena"]);
        assert_eq!(patient.last_name.as_deref(), Some("Dumitru"));
        assert_eq!(patient.first_name.as_deref(), Some("Elena"));
    }

    #[test]
    fn side_by_side_columns_stop_at_gap() {
        let (patient, _) = extract_header(["Last name: POPESCU      Patient ID: 4471"]);
        assert_eq!(patient.last_name.as_deref(), Some("POPESCU"));
    }

    #[test]
    fn wide_gap_between_date_and_time_keeps_time() {
        let (_, meta) = extract_header([
            "Sample date: 12/01/2024  08:30",
            "Result date: 13/01/2024     14:05      Page 1/2",
        ]);
        assert_eq!(
            meta.sampled_at,
            NaiveDate::from_ymd_opt(2024, 1, 12).and_then(|d| d.and_hms_opt(8, 30, 0))
        );
        assert_eq!(
            meta.result_at,
            NaiveDate::from_ymd_opt(2024, 1, 13).and_then(|d| d.and_hms_opt(14, 5, 0))
        );
    }

    #[test]
    fn date_column_next_to_other_field() {
        let (patient, meta) = extract_header([
            "Date of birth: 03.07.1985      Sex: F",
            "Sample date: 12/01/2024      Ward: 3",
        ]);
        assert_eq!(patient.birthdate, NaiveDate::from_ymd_opt(1985, 7, 3));
        assert_eq!(
            meta.sampled_at,
            NaiveDate::from_ymd_opt(2024, 1, 12).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn corrupted_birthdate_digits_are_rejected() {
        let (patient, _) = extract_header([
            "Date of birth: 123/04/19855",
            "Date of birth: 23/04/1985",
        ]);
        assert_eq!(patient.birthdate, NaiveDate::from_ymd_opt(1985, 4, 23));
    }

    #[test]
    fn label_must_start_the_line() {
        let (patient, _) = extract_header(["Doctor last name: Georgescu"]);
        assert!(patient.last_name.is_none());
    }

    #[test]
    fn empty_label_value_is_ignored() {
        let (patient, _) = extract_header(["First name:", "First name: Ion"]);
        assert_eq!(patient.first_name.as_deref(), Some("Ion"));
    }
}
