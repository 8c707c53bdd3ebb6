//! Implementation of the single-pass text commands.

use clap::Args;
use miette::Result;
use stringutils::{indent, normalize_case_insensitive, strip_margin_whitespace, to_lower, trim};

use super::read_input;

/// Arguments shared by `trim`, `lower`, `normalize` and `strip`.
#[derive(Debug, Args)]
pub struct TextArgs {
    /// Input text (`-` reads stdin)
    pub text: String,
}

/// Arguments for the indent command.
#[derive(Debug, Args)]
pub struct IndentArgs {
    /// Input text (`-` reads stdin)
    pub text: String,

    /// Number of spaces added before each line after the first
    #[arg(short, long, default_value_t = 2)]
    pub spaces: usize,
}

/// Which helper a [`TextArgs`] command applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    Trim,
    Lower,
    Normalize,
    Strip,
}

impl TextOp {
    fn apply(self, text: &str) -> String {
        match self {
            TextOp::Trim => trim(text).to_string(),
            TextOp::Lower => to_lower(text),
            TextOp::Normalize => normalize_case_insensitive(text),
            TextOp::Strip => strip_margin_whitespace(text),
        }
    }
}

/// Run one of the single-pass text commands.
pub fn run_text(args: TextArgs, op: TextOp) -> Result<i32> {
    let text = read_input(&args.text)?;
    println!("{}", op.apply(&text));
    Ok(exitcode::OK)
}

/// Run the indent command.
pub fn run_indent(args: IndentArgs) -> Result<i32> {
    let text = read_input(&args.text)?;
    print!("{}", indent(&text, args.spaces));
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_ops() {
        assert_eq!(TextOp::Trim.apply("  a b \n"), "a b");
        assert_eq!(TextOp::Lower.apply("ABC"), "abc");
        assert_eq!(TextOp::Normalize.apply("ÉCOLE"), "école");
        assert_eq!(TextOp::Strip.apply(" a b "), "ab");
    }
}
