//! Miette diagnostic wrapper for integer parse errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use stringutils::IntegerError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the character that stopped
/// integer parsing.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(stringutils::integer))]
pub struct IntegerDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl IntegerDiagnostic {
    /// Create a diagnostic from an IntegerError and the text that produced it.
    pub fn from_integer_error(text: &str, err: &IntegerError) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = err.index().min(text.len());
        let width = text[offset..].chars().next().map_or(0, char::len_utf8);

        let help = match err {
            IntegerError::NotANumber { .. } if offset == text.len() => {
                "input ended where a digit was expected".to_string()
            }
            IntegerError::NotANumber { .. } => {
                "integers are `-?(0|[1-9][0-9]*)` with no whitespace or leading zeros".to_string()
            }
            IntegerError::Overflow { .. } => {
                format!("the accepted range is {} to {}", i64::MIN, i64::MAX)
            }
        };

        IntegerDiagnostic {
            src: NamedSource::new("input", text.to_string()),
            span: (offset, width).into(),
            message: err.to_string(),
            help: Some(help),
        }
    }
}
