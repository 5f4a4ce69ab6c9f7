//! Run phrase text against JSON input

use super::CliError;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The phrase text to compile
    pub phrases: String,
    /// JSON input string
    pub input: Option<String>,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Transform ran successfully with JSON output
    Success(serde_json::Value),
}

/// Execute a metaline check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let transform = crate::compile(&options.phrases)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let input: serde_json::Value = serde_json::from_str(json_str)?;

    Ok(CheckResult::Success(transform.apply_json(&input)))
}
