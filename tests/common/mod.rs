//! Common test utilities for Lox integration tests.
//!
//! Each test file in `tests/` is compiled as its own crate, so not every
//! helper here is used by every file; that's expected, hence the blanket
//! `dead_code` allowance.
#![allow(dead_code)]

use lox::diagnostics::Outcome;
use lox::interpreter::Interpreter;

/// Runs `source` through the full lex/parse/evaluate pipeline once, in a
/// fresh interpreter. Returns everything written to the output sink and
/// the resulting [`Outcome`].
pub fn run_source(source: &str) -> (String, Outcome) {
    let mut out = Vec::new();
    let outcome = Interpreter::new().run_source(source, &mut out);
    (String::from_utf8(out).expect("interpreter output is valid utf-8"), outcome)
}

/// Runs `source`, asserting it produced no compile or runtime errors, and
/// returns the captured stdout.
pub fn run_ok(source: &str) -> String {
    let (output, outcome) = run_source(source);
    assert!(matches!(outcome, Outcome::Ok), "expected Ok, got {outcome:?} for {source:?}");
    output
}

/// Runs `source`, asserting it produced at least one compile error, and
/// returns each diagnostic rendered as `[line N] Error<where>: <message>`.
pub fn compile_error_lines(source: &str) -> Vec<String> {
    let (_, outcome) = run_source(source);
    match outcome {
        Outcome::CompileErrors(errors) => errors.iter().map(|e| e.format()).collect(),
        other => panic!("expected compile errors, got {other:?} for {source:?}"),
    }
}

/// Runs `source`, asserting it raised a runtime error, and returns the
/// error rendered as `<message>\n[line N]`.
pub fn runtime_error_text(source: &str) -> String {
    let (_, outcome) = run_source(source);
    match outcome {
        Outcome::RuntimeError(error) => lox::diagnostics::format_runtime_error(&error),
        other => panic!("expected a runtime error, got {other:?} for {source:?}"),
    }
}
