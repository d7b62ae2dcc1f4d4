//! Binary-private orchestration: file I/O, the REPL loop, and exit-code
//! mapping around the library's [`lox::interpreter::Interpreter`].
//!
//! A thin layer between `main` and the library: file I/O, the REPL, and
//! CLI argument handling stay out of the interpreter core entirely, so the
//! library can be driven the same way by a script runner, a REPL, or a
//! test harness.

use std::io::{self, BufRead, Write};

use lox::diagnostics::Outcome;
use lox::interpreter::Interpreter;

use crate::pretty;

/// Reads `path`, runs it through the interpreter, and returns the process
/// exit code: 0 on success, 64 on a compile error, 70 on a runtime error.
///
/// Program output streams to stdout as it is produced (a `print` mid-script
/// is visible even if a later statement then hits a runtime error).
/// Diagnostics go to stderr, either in the default plain format or, when
/// `pretty` is set, rendered with `ariadne`.
pub fn run_file(path: &str, pretty: bool) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: could not read '{path}': {err}");
            return 74; // EX_IOERR
        }
    };

    let mut interpreter = Interpreter::new();
    let mut stdout = io::stdout();
    let outcome = interpreter.run_source(&source, &mut stdout);
    report(path, &source, &outcome, pretty);
    outcome.exit_code()
}

/// Runs an interactive read-eval-print loop over stdin.
///
/// One [`Interpreter`] lives for the whole session, so the global
/// environment a line defines into is still there on the next line — but
/// each line gets its own fresh compile-error check, so a typo on one line
/// never poisons the ones after it.
pub fn run_repl(pretty: bool) -> i32 {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            return 0;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return 0, // EOF (e.g. piped input, or Ctrl-D)
            Ok(_) => {}
            Err(_) => return 0,
        }

        if line.trim().is_empty() {
            continue;
        }

        let outcome = interpreter.run_source(&line, &mut stdout);
        report("<stdin>", &line, &outcome, pretty);
    }
}

fn report(filename: &str, source: &str, outcome: &Outcome, pretty: bool) {
    if pretty {
        pretty::render(filename, source, outcome);
        return;
    }

    match outcome {
        Outcome::Ok => {}
        Outcome::CompileErrors(errors) => {
            for error in errors {
                eprintln!("{}", error.format());
            }
        }
        Outcome::RuntimeError(error) => {
            eprintln!("{}", lox::diagnostics::format_runtime_error(error));
        }
    }
}
