use super::format::{MIN_NAME_PREFIX_CHARS, TECHNICAL_CODE_PREFIX};
use super::tokens::{
    has_comparator, has_digit, is_unit_token, match_leading_numeric_token, parse_exact_value,
};
use super::types::ParsedLabTest;

/// Split one cleaned result row into name / value / unit / reference.
///
/// Returns `None` when the row cannot be split: no numeric token, a name
/// prefix under `MIN_NAME_PREFIX_CHARS`, an empty name after stripping the
/// technical code, or no unit token after the value.
pub fn parse_test_row(line: &str, section: Option<&str>) -> Option<ParsedLabTest> {
    let token = match_leading_numeric_token(line)?;

    let prefix = line[..token.start].trim();
    if prefix.chars().count() < MIN_NAME_PREFIX_CHARS {
        return None;
    }

    let name = strip_technical_code(prefix);
    if name.is_empty() {
        return None;
    }

    let raw_value = token.text.trim().to_string();
    let value = parse_exact_value(&raw_value);

    let (unit, ref_raw) = split_unit_and_reference(line[token.end..].trim());
    let unit = unit?;

    Some(ParsedLabTest {
        section: section.map(str::to_string),
        name: name.to_string(),
        value,
        raw_value,
        unit: Some(unit),
        ref_raw,
    })
}

/// Drop the lab-internal code when it is the first token of the name.
fn strip_technical_code(prefix: &str) -> &str {
    match prefix.strip_prefix(TECHNICAL_CODE_PREFIX) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => prefix,
    }
}

/// Leading unit-shaped tokens form the unit; the first token with a digit
/// or comparator (or any non-unit shape) starts the reference range.
fn split_unit_and_reference(rest: &str) -> (Option<String>, Option<String>) {
    let tokens: Vec<&str> = rest.split_whitespace().collect();

    let unit_len = tokens
        .iter()
        .take_while(|t| !has_digit(t) && !has_comparator(t) && is_unit_token(t))
        .count();

    let unit = (unit_len > 0).then(|| tokens[..unit_len].join(" "));
    let reference = tokens[unit_len..].join(" ");
    let reference = (!reference.is_empty()).then_some(reference);

    (unit, reference)
}
