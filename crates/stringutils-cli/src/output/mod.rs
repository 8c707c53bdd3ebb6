//! Output helpers: miette diagnostics, tables and JSON.

pub mod diagnostic;
pub mod table;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

pub use diagnostic::IntegerDiagnostic;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json_output);
    Ok(())
}
