//! Extraction of one top-level component from a delimited list.
//!
//! A component ends at the first comma that is not nested inside brackets or
//! a quoted string, or at the bracket that closes the enclosing group. The
//! brackets `[] {} () <>` all count toward the same nesting depth; they are
//! not required to match each other.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any quoted string.
    Bare,
    /// Inside a quoted string.
    Quoted,
    /// Inside a quoted string, right after a backslash.
    QuotedEscape,
}

/// Why scanning stopped before the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// A top-level comma; the component ends before it.
    Comma,
    /// The enclosing group closed; the component includes the closer.
    Closed,
}

struct Scanner {
    state: State,
    /// Unmatched openers, counting the group the component sits in.
    level: usize,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Bare,
            level: 1,
        }
    }

    fn step(&mut self, b: u8) -> Option<Stop> {
        match self.state {
            State::Quoted => match b {
                b'\\' => self.state = State::QuotedEscape,
                b'"' => self.state = State::Bare,
                _ => {}
            },
            State::QuotedEscape => self.state = State::Quoted,
            State::Bare => match b {
                b',' if self.level == 1 => return Some(Stop::Comma),
                b'"' => self.state = State::Quoted,
                b'[' | b'{' | b'(' | b'<' => self.level += 1,
                b']' | b'}' | b')' | b'>' => {
                    self.level -= 1;
                    if self.level == 0 {
                        return Some(Stop::Closed);
                    }
                }
                _ => {}
            },
        }
        None
    }
}

/// Rounds `index` down to the nearest char boundary of `text`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Returns the component of `text` that starts at byte `begin`, scanning no
/// further than byte `end`.
///
/// Nesting and quoting are tracked while scanning; inside a quoted string a
/// backslash escapes the next character. The result excludes a terminating
/// comma and includes a terminating closer. Unbalanced input simply runs to
/// `end`.
///
/// `end` is clamped to the text length and both offsets are rounded down to a
/// char boundary, so the function never panics.
///
/// ```
/// use stringutils::parse_component;
///
/// let line = "Value = {abc {c} = def} NextValue = 42";
/// assert_eq!(parse_component(line, 9, line.len()), "abc {c} = def}");
/// assert_eq!(parse_component("a(1, 2), b", 0, 10), "a(1, 2)");
/// ```
pub fn parse_component(text: &str, begin: usize, end: usize) -> &str {
    let end = floor_char_boundary(text, end);
    let begin = floor_char_boundary(text, begin);
    if begin >= end {
        return "";
    }

    let mut scanner = Scanner::new();
    let mut stop = end;
    for (offset, &b) in text.as_bytes()[begin..end].iter().enumerate() {
        let position = begin + offset;
        match scanner.step(b) {
            Some(Stop::Comma) => {
                stop = position;
                break;
            }
            Some(Stop::Closed) => {
                stop = position + 1;
                break;
            }
            None => {}
        }
    }
    if stop == end && scanner.state != State::Bare {
        log::trace!("parse_component: bound {end} reached inside a quoted string");
    }
    &text[begin..stop]
}
