//! Token-level helpers for splitting a result row.

use std::sync::LazyLock;

use regex::Regex;

/// Optional comparator, optional whitespace, then a decimal numeral with
/// `.` or `,` as separator.
static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?P<cmp><=|>=|<|>)\s*)?(?P<num>[0-9]+(?:[.,][0-9]+)?)").unwrap()
});

/// Comparator in front of a result value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparator {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }
}

/// First numeric token of a line, with byte offsets into that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericToken<'a> {
    pub comparator: Option<Comparator>,
    pub numeral: &'a str,
    /// Comparator, spacing and numeral exactly as written.
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Locate the first `[comparator] number` token anywhere in the line.
pub fn match_leading_numeric_token(line: &str) -> Option<NumericToken<'_>> {
    let caps = NUMERIC_TOKEN.captures(line)?;
    let whole = caps.get(0)?;
    let numeral = caps.name("num")?.as_str();
    let comparator = caps
        .name("cmp")
        .and_then(|m| Comparator::from_symbol(m.as_str()));

    Some(NumericToken {
        comparator,
        numeral,
        text: whole.as_str(),
        start: whole.start(),
        end: whole.end(),
    })
}

/// Parse a plain numeral, accepting `,` as the decimal separator.
/// Comparator values are never exact, so anything starting with `<`/`>`
/// yields `None`.
pub fn parse_exact_value(raw_value: &str) -> Option<f64> {
    if raw_value.starts_with(['<', '>']) {
        return None;
    }
    raw_value.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub fn has_comparator(text: &str) -> bool {
    text.contains(['<', '>'])
}

/// Unit-shaped token: letters plus `/`, `%` and the micro sign, no digits.
///
/// This is the most format-sensitive decision in the row splitter.
pub fn is_unit_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '/' | '%' | 'µ' | 'μ'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_plain_number() {
        let line = "Glucose 92 mg/dL";
        let token = match_leading_numeric_token(line).unwrap();
        assert_eq!(token.comparator, None);
        assert_eq!(token.numeral, "92");
        assert_eq!(token.text, "92");
        assert_eq!(&line[token.start..token.end], "92");
    }

    #[test]
    fn finds_comparator_with_space() {
        let token = match_leading_numeric_token("Anti-TG > 4000 IU/mL").unwrap();
        assert_eq!(token.comparator, Some(Comparator::Gt));
        assert_eq!(token.numeral, "4000");
        assert_eq!(token.text, "> 4000");
    }

    #[test]
    fn two_character_comparators_win_over_one() {
        let token = match_leading_numeric_token("CRP <=0,5 mg/L").unwrap();
        assert_eq!(token.comparator, Some(Comparator::Le));
        assert_eq!(token.text, "<=0,5");

        let token = match_leading_numeric_token("CRP >= 10 mg/L").unwrap();
        assert_eq!(token.comparator, Some(Comparator::Ge));
    }

    #[test]
    fn decimal_comma_and_point() {
        assert_eq!(match_leading_numeric_token("x 4,25 y").unwrap().numeral, "4,25");
        assert_eq!(match_leading_numeric_token("x 4.25 y").unwrap().numeral, "4.25");
    }

    #[test]
    fn no_number_no_token() {
        assert!(match_leading_numeric_token("Method: spectrophotometry").is_none());
        assert!(match_leading_numeric_token("< >").is_none());
    }

    #[test]
    fn exact_value_normalizes_comma() {
        assert_eq!(parse_exact_value("4,25"), Some(4.25));
        assert_eq!(parse_exact_value("67"), Some(67.0));
    }

    #[test]
    fn exact_value_rejects_comparators() {
        assert_eq!(parse_exact_value("> 4000"), None);
        assert_eq!(parse_exact_value("<0.5"), None);
        assert_eq!(parse_exact_value(">=1"), None);
    }

    #[test]
    fn unit_token_shapes() {
        assert!(is_unit_token("U/L"));
        assert!(is_unit_token("mmol/L"));
        assert!(is_unit_token("%"));
        assert!(is_unit_token("µg/dL"));
        assert!(is_unit_token("μmol/L"));
        assert!(is_unit_token("IU/mL"));
    }

    #[test]
    fn non_unit_tokens() {
        assert!(!is_unit_token(""));
        assert!(!is_unit_token("10^3/µL"));
        assert!(!is_unit_token("<"));
        assert!(!is_unit_token("-"));
        assert!(!is_unit_token("(3.5"));
        assert!(!is_unit_token("mg.dL"));
    }

    #[test]
    fn character_class_helpers() {
        assert!(has_digit("abc1"));
        assert!(!has_digit("abc"));
        assert!(has_comparator("< 50"));
        assert!(has_comparator(">"));
        assert!(!has_comparator("50"));
    }
}
