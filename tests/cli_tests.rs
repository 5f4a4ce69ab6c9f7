// tests/cli_tests.rs

#![cfg(feature = "cli")]

use metaline::cli::{CheckOptions, CheckResult, CliError, execute_check, render_ast, render_tokens};
use serde_json::json;

fn options(phrases: &str, input: Option<&str>) -> CheckOptions {
    CheckOptions {
        phrases: phrases.to_string(),
        input: input.map(str::to_string),
        syntax_only: false,
    }
}

#[test]
fn test_check_runs_transform() {
    let result = execute_check(&options("where.directorId.in.$;limit:99", Some("[1, 2]"))).unwrap();
    match result {
        CheckResult::Success(output) => assert_eq!(
            output,
            json!({"where": {"directorId": {"in": [1, 2]}}, "limit": 99})
        ),
        other => panic!("Expected success, got {:?}", other),
    }
}

#[test]
fn test_check_syntax_only() {
    let opts = CheckOptions {
        syntax_only: true,
        ..options("$>#id", None)
    };
    assert!(matches!(execute_check(&opts), Ok(CheckResult::SyntaxValid)));
}

#[test]
fn test_check_requires_input() {
    assert!(matches!(
        execute_check(&options("$", None)),
        Err(CliError::NoInput)
    ));
}

#[test]
fn test_check_rejects_bad_json() {
    assert!(matches!(
        execute_check(&options("$", Some("{nope"))),
        Err(CliError::Json(_))
    ));
}

#[test]
fn test_check_reports_phrase_errors() {
    let err = execute_check(&options("foo#", Some("1"))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Compile error: Unexpected token `#` at position 3"
    );
}

#[test]
fn test_render_tokens() {
    let out = render_tokens("a.$").unwrap();
    assert_eq!(out, "   0 a\n   1 .\n   2 $\n   3 EndOfInput\n");
}

#[test]
fn test_render_tokens_lex_error() {
    assert!(matches!(render_tokens("a@"), Err(CliError::Compile(_))));
}

#[test]
fn test_render_ast() {
    let out = render_ast("limit:99").unwrap();
    assert!(out.contains("ValueAssignment"));
    assert!(out.contains("\"limit\""));
}
