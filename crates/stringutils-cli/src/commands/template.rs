//! Implementation of the `stringutils template` command.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;
use stringutils::instantiate_template;

use crate::output::print_json;

/// Arguments for the template command.
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Template string to instantiate
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub template: Option<String>,

    /// File containing the template
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Variables in name=value format (repeatable)
    #[arg(short = 'D', long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for template results.
#[derive(Serialize)]
pub struct TemplateResult {
    pub result: String,
}

/// Parse a name=value variable string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid variable format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the template command.
pub fn run_template(args: TemplateArgs) -> Result<i32> {
    let template = match (&args.template, &args.file) {
        (Some(template), _) => template.clone(),
        (None, Some(path)) => read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Cannot read template file {}: {}", path.display(), e))?,
        (None, None) => return Ok(exitcode::USAGE),
    };

    // Later definitions of the same name win
    let variables: HashMap<String, String> = args.vars.into_iter().collect();
    let result = instantiate_template(&template, &variables);

    if args.json {
        print_json(&TemplateResult { result })?;
    } else {
        print!("{}", result);
        if !result.ends_with('\n') {
            println!();
        }
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val_splits_at_first_equals() {
        assert_eq!(
            parse_key_val("who=a=b"),
            Ok(("who".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn test_parse_key_val_allows_empty_value() {
        assert_eq!(parse_key_val("x="), Ok(("x".to_string(), String::new())));
    }

    #[test]
    fn test_parse_key_val_requires_equals() {
        assert!(parse_key_val("novalue").is_err());
    }
}
