//! The Lox tree-walking interpreter CLI.
//!
//! Zero arguments starts a REPL; one argument runs it as a script path; more
//! than one is a usage error. Delegates to the `driver` module for file I/O
//! and the REPL loop, and to `pretty` for the opt-in `ariadne` diagnostic
//! view — both binary-private, keeping `main.rs` itself down to argument
//! parsing and exit-code plumbing.

use clap::Parser;

mod driver;
mod pretty;

/// Command-line interface for the Lox interpreter.
#[derive(Parser)]
#[command(name = "lox")]
#[command(about = "The Lox programming language", long_about = None)]
struct Cli {
    /// Script file to run. Omitted to start an interactive REPL instead.
    ///
    /// Declared as a `Vec` (rather than `Option<String>`) purely so more
    /// than one positional argument can be detected and reported with the
    /// usage message below instead of `clap`'s own argument-count error.
    files: Vec<String>,

    /// Render diagnostics with `ariadne` instead of the plain wire format.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.files.as_slice() {
        [] => driver::run_repl(cli.pretty),
        [file] => driver::run_file(file, cli.pretty),
        _ => {
            eprintln!("Usage: lox [script]");
            64
        }
    };

    std::process::exit(exit_code);
}
