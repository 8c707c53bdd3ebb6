//! Insertion and removal of a single escape character.

use std::collections::BTreeSet;

use bon::Builder;

/// Returns a copy of `text` in which every character found in
/// `chars_to_escape` is preceded by `escape_char`.
///
/// The escape character is only escaped when it is itself a member of
/// `chars_to_escape`.
///
/// ```
/// use std::collections::BTreeSet;
/// use stringutils::escape;
///
/// let chars = BTreeSet::from([' ', '!', '^']);
/// assert_eq!(escape("Hello, W^orld!", '^', &chars), "Hello,^ W^^orld^!");
/// ```
pub fn escape(text: &str, escape_char: char, chars_to_escape: &BTreeSet<char>) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if chars_to_escape.contains(&c) {
            output.push(escape_char);
        }
        output.push(c);
    }
    output
}

/// Scanner state for [`unescape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No escape character is pending.
    Normal,
    /// The previous character was an unescaped escape character.
    Pending,
}

impl State {
    /// Advances the scanner by one character, returning the next state and
    /// the character to emit, if any.
    fn step(self, c: char, escape_char: char) -> (State, Option<char>) {
        match self {
            State::Normal if c == escape_char => (State::Pending, None),
            State::Normal | State::Pending => (State::Normal, Some(c)),
        }
    }
}

/// Removes every occurrence of `escape_char` that is not itself escaped.
///
/// A doubled escape character produces one literal escape character. A
/// trailing lone escape character is dropped.
///
/// ```
/// use stringutils::unescape;
///
/// assert_eq!(unescape("Hello,^ W^^orld^!", '^'), "Hello, W^orld!");
/// ```
pub fn unescape(text: &str, escape_char: char) -> String {
    let mut output = String::with_capacity(text.len());
    let mut state = State::Normal;
    for c in text.chars() {
        let (next, emitted) = state.step(c, escape_char);
        if let Some(c) = emitted {
            output.push(c);
        }
        state = next;
    }
    if state == State::Pending {
        log::trace!("unescape: dropping trailing escape character {escape_char:?}");
    }
    output
}

/// A reusable escaping configuration.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use stringutils::Escaper;
///
/// let escaper = Escaper::builder()
///     .escape_char('^')
///     .chars(BTreeSet::from([' ', '^']))
///     .build();
///
/// let escaped = escaper.escape("a b^c");
/// assert_eq!(escaped, "a^ b^^c");
/// assert_eq!(escaper.unescape(&escaped), "a b^c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Escaper {
    /// Character placed in front of each escaped character.
    #[builder(default = '\\')]
    escape_char: char,

    /// Characters that get escaped.
    #[builder(default)]
    chars: BTreeSet<char>,
}

impl Default for Escaper {
    fn default() -> Self {
        Escaper::builder().build()
    }
}

impl Escaper {
    /// Create an escaper for the given escape character and character set.
    pub fn new(escape_char: char, chars: impl IntoIterator<Item = char>) -> Self {
        Escaper::builder()
            .escape_char(escape_char)
            .chars(chars.into_iter().collect())
            .build()
    }

    /// The configured escape character.
    pub fn escape_char(&self) -> char {
        self.escape_char
    }

    /// The configured set of characters to escape.
    pub fn chars(&self) -> &BTreeSet<char> {
        &self.chars
    }

    /// Escape `text` with this configuration. See [`escape`].
    pub fn escape(&self, text: &str) -> String {
        escape(text, self.escape_char, &self.chars)
    }

    /// Unescape `text` with this configuration's escape character. See [`unescape`].
    pub fn unescape(&self, text: &str) -> String {
        unescape(text, self.escape_char)
    }
}
