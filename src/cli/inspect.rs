//! Token and syntax tree dumps for debugging phrase text

use super::CliError;

/// One token per line: `<position> <kind>`
pub fn render_tokens(phrases: &str) -> Result<String, CliError> {
    let tokens = crate::tokenize(phrases)?;

    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{:>4} {}\n", token.position, token.kind));
    }
    Ok(out)
}

/// Pretty-printed parsed program
pub fn render_ast(phrases: &str) -> Result<String, CliError> {
    let program = crate::parse(phrases)?;
    Ok(format!("{:#?}\n", program))
}
