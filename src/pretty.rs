//! Opt-in `ariadne`-rendered diagnostics, enabled by the CLI's `--pretty`
//! flag.
//!
//! One underlined source snippet per diagnostic. The plain one-line wire
//! format stays the default regardless — this module only runs when the
//! user asks for it.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use lox::diagnostics::{CompileDiagnostic, Outcome};

fn print_range_report(filename: &str, source: &str, span: Range<usize>, kind: &str, message: &str) {
    let report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(kind)
        .with_label(Label::new((filename, span)).with_message(message).with_color(Color::Red))
        .finish();

    if let Err(err) = report.eprint((filename, Source::from(source))) {
        eprintln!("{kind}: {message}");
        eprintln!("(failed to render diagnostic: {err})");
    }
}

fn compile_diagnostic_span(source: &str, diagnostic: &CompileDiagnostic) -> Range<usize> {
    let (start, end) = match diagnostic {
        CompileDiagnostic::Lex(error) => (error.span.start, error.span.end),
        CompileDiagnostic::Parse(error) => (error.token.span.start, error.token.span.end),
    };
    if start < end {
        return start..end;
    }
    // A zero-width span (e.g. `Eof`) has nothing to underline on its own;
    // fall back to the last byte of the source.
    let len = source.len();
    let last = len.saturating_sub(1);
    last..len.max(last + 1)
}

fn compile_diagnostic_message(diagnostic: &CompileDiagnostic) -> &str {
    match diagnostic {
        CompileDiagnostic::Lex(error) => &error.message,
        CompileDiagnostic::Parse(error) => &error.message,
    }
}

/// Renders every diagnostic carried by `outcome` against `source`.
pub fn render(filename: &str, source: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Ok => {}
        Outcome::CompileErrors(errors) => {
            for error in errors {
                print_range_report(
                    filename,
                    source,
                    compile_diagnostic_span(source, error),
                    "Compile error",
                    compile_diagnostic_message(error),
                );
            }
        }
        Outcome::RuntimeError(error) => {
            print_range_report(
                filename,
                source,
                error.span.start..error.span.end,
                "Runtime error",
                &error.message,
            );
        }
    }
}
