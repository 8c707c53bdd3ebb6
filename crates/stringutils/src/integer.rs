//! Strict decimal integer parsing.
//!
//! The accepted grammar is `-?(0|[1-9][0-9]*)`: no `+`, no whitespace, no
//! separators and no leading zeros. Callers trim before parsing.

use serde::Serialize;
use thiserror::Error;

/// Why a string could not be converted by [`to_integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegerError {
    /// The text is not a decimal integer. `index` is the byte offset of the
    /// rejected character, or the text length if the input ended too early.
    #[error("not a number (at byte {index})")]
    NotANumber { index: usize },

    /// The digit at byte `index` would take the value outside the `i64` range.
    #[error("integer overflow (at byte {index})")]
    Overflow { index: usize },
}

impl IntegerError {
    /// Byte offset in the input where parsing stopped.
    pub fn index(&self) -> usize {
        match *self {
            IntegerError::NotANumber { index } | IntegerError::Overflow { index } => index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting an optional `-`.
    Sign,
    /// Expecting the first digit.
    FirstDigit,
    /// A lone `0` was read; nothing may follow.
    Zero,
    /// Reading further digits.
    Accumulate,
}

struct Scanner {
    state: State,
    negative: bool,
    value: i64,
}

impl Scanner {
    fn new() -> Self {
        Self {
            state: State::Sign,
            negative: false,
            value: 0,
        }
    }

    fn step(&mut self, index: usize, c: char) -> Result<(), IntegerError> {
        self.state = match self.state {
            State::Sign if c == '-' => {
                self.negative = true;
                State::FirstDigit
            }
            State::Sign | State::FirstDigit => match c {
                '0' => State::Zero,
                '1'..='9' => {
                    let digit = decimal_digit(c, index)?;
                    self.value = if self.negative { -digit } else { digit };
                    State::Accumulate
                }
                _ => return Err(IntegerError::NotANumber { index }),
            },
            State::Zero => return Err(IntegerError::NotANumber { index }),
            State::Accumulate => {
                let digit = decimal_digit(c, index)?;
                self.value = self
                    .shifted(digit)
                    .ok_or(IntegerError::Overflow { index })?;
                State::Accumulate
            }
        };
        Ok(())
    }

    /// `value * 10 ± digit`, or `None` if that leaves the `i64` range.
    fn shifted(&self, digit: i64) -> Option<i64> {
        let scaled = self.value.checked_mul(10)?;
        if self.negative {
            scaled.checked_sub(digit)
        } else {
            scaled.checked_add(digit)
        }
    }

    fn finish(self, len: usize) -> Result<i64, IntegerError> {
        match self.state {
            State::Sign | State::FirstDigit => Err(IntegerError::NotANumber { index: len }),
            State::Zero | State::Accumulate => Ok(self.value),
        }
    }
}

fn decimal_digit(c: char, index: usize) -> Result<i64, IntegerError> {
    c.to_digit(10)
        .map(i64::from)
        .ok_or(IntegerError::NotANumber { index })
}

/// Parses `text` as a strict decimal `i64`.
///
/// ```
/// use stringutils::{IntegerError, to_integer};
///
/// assert_eq!(to_integer("-42"), Ok(-42));
/// assert_eq!(to_integer("007"), Err(IntegerError::NotANumber { index: 1 }));
/// assert_eq!(
///     to_integer("9223372036854775808"),
///     Err(IntegerError::Overflow { index: 18 })
/// );
/// ```
pub fn to_integer(text: &str) -> Result<i64, IntegerError> {
    let mut scanner = Scanner::new();
    for (index, c) in text.char_indices() {
        scanner.step(index, c)?;
    }
    scanner.finish(text.len())
}
