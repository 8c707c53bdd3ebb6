//! Splitting text into trimmed pieces and joining pieces back together.

use crate::text::trim;

/// A piece separator: either a single character or a literal substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter<'a> {
    Char(char),
    Str(&'a str),
}

impl Delimiter<'_> {
    /// Locate the first occurrence of this delimiter in `haystack`, returning
    /// its byte offset and byte length.
    ///
    /// An empty string delimiter never matches.
    fn find_in(&self, haystack: &str) -> Option<(usize, usize)> {
        match *self {
            Delimiter::Char(c) => haystack.find(c).map(|pos| (pos, c.len_utf8())),
            Delimiter::Str("") => None,
            Delimiter::Str(s) => haystack.find(s).map(|pos| (pos, s.len())),
        }
    }
}

impl From<char> for Delimiter<'_> {
    fn from(c: char) -> Self {
        Delimiter::Char(c)
    }
}

impl<'a> From<&'a str> for Delimiter<'a> {
    fn from(s: &'a str) -> Self {
        Delimiter::Str(s)
    }
}

impl<'a> From<&'a String> for Delimiter<'a> {
    fn from(s: &'a String) -> Self {
        Delimiter::Str(s.as_str())
    }
}

/// Splits `text` at each occurrence of `delimiter`, trimming every piece.
///
/// The whole text is trimmed first. Each segment before a delimiter is
/// trimmed and kept, even when that leaves it empty; the remainder after the
/// delimiter is trimmed before scanning continues. A delimiter at the very end
/// therefore produces no trailing piece, and text that trims to nothing
/// produces no pieces at all.
///
/// ```
/// use stringutils::split;
///
/// assert_eq!(split("Hello, World!", ' '), vec!["Hello,", "World!"]);
/// assert_eq!(
///     split("Hello::World!::My:Darling", "::"),
///     vec!["Hello", "World!", "My:Darling"]
/// );
/// ```
pub fn split<'a>(text: &str, delimiter: impl Into<Delimiter<'a>>) -> Vec<String> {
    let delimiter = delimiter.into();
    let mut pieces = Vec::new();
    let mut remainder = trim(text);
    while !remainder.is_empty() {
        match delimiter.find_in(remainder) {
            Some((pos, len)) => {
                pieces.push(trim(&remainder[..pos]).to_string());
                remainder = trim(&remainder[pos + len..]);
            }
            None => {
                pieces.push(remainder.to_string());
                remainder = "";
            }
        }
    }
    pieces
}

/// Concatenates `pieces`, inserting `delimiter` between consecutive pieces.
///
/// ```
/// use stringutils::join;
///
/// assert_eq!(join(["Hello", "World!"], '-'), "Hello-World!");
/// assert_eq!(join(["Hello", "World!"], ", "), "Hello, World!");
/// ```
pub fn join<'a, I>(pieces: I, delimiter: impl Into<Delimiter<'a>>) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let delimiter = delimiter.into();
    let mut output = String::new();
    for (i, piece) in pieces.into_iter().enumerate() {
        if i > 0 {
            match delimiter {
                Delimiter::Char(c) => output.push(c),
                Delimiter::Str(s) => output.push_str(s),
            }
        }
        output.push_str(piece.as_ref());
    }
    output
}
