//! Single-pass text helpers: trimming, indentation and case folding.

/// Strips every character at or below the space character (ASCII control
/// characters and space) from both ends of `text`.
///
/// ```
/// use stringutils::trim;
///
/// assert_eq!(trim("  \t Hello, World! \r\n"), "Hello, World!");
/// ```
pub fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Indents every CRLF-terminated line after the first by `spaces` spaces.
///
/// The first line is left alone so the result can be appended to text that
/// is already positioned.
///
/// ```
/// use stringutils::indent;
///
/// assert_eq!(
///     format!("Struct {{{}\r\n}}", indent("\r\nfield 1\r\nfield 2", 2)),
///     "Struct {\r\n  field 1\r\n  field 2\r\n}"
/// );
/// ```
pub fn indent(text: &str, spaces: usize) -> String {
    let padding = " ".repeat(spaces);
    let mut output = String::with_capacity(text.len());
    for (i, line) in text.split_inclusive("\r\n").enumerate() {
        if i > 0 {
            output.push_str(&padding);
        }
        output.push_str(line);
    }
    output
}

/// ASCII lowercase. Non-ASCII characters pass through untouched.
pub fn to_lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Folds `text` for case-insensitive comparison (full Unicode lowercase).
pub fn normalize_case_insensitive(text: &str) -> String {
    text.to_lowercase()
}

/// Removes all whitespace, including whitespace between words.
///
/// ```
/// use stringutils::strip_margin_whitespace;
///
/// assert_eq!(strip_margin_whitespace(" example, example "), "example,example");
/// ```
pub fn strip_margin_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
