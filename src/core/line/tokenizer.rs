/// Truncates the line at the first `#`. There is no quoting, so every `#` is
/// a comment marker.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Splits text into words on runs of spaces and tabs. No quoting, no
/// escaping. Blank input yields no tokens and the caller skips the segment.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split([' ', '\t']).filter(|w| !w.is_empty()).collect()
}
