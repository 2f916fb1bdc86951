/// Split extracted report text into non-empty, trimmed lines.
/// Accepts `\n` and `\r\n`, drops a leading BOM and control characters
/// (tabs survive as column separators).
pub fn report_lines(raw: &str) -> Vec<String> {
    raw.trim_start_matches('\u{feff}')
        .lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() || *c == '\t')
                .collect::<String>()
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
