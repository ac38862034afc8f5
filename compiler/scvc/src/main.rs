//! scv compiler CLI
//!
//! Compiles `.scv` spec files into one C++ header.

use std::io::IsTerminal;
use std::process::ExitCode;

use scv_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use scvc::{compile, explain, init_tracing, parse_args, Command, CompileOptions, Session};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return ExitCode::FAILURE;
    }

    match parse_args(&args, CompileOptions::from_env()) {
        Ok(Command::Compile(options)) => run(&options),
        Ok(Command::Explain(code)) => match explain(&code) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("{message}");
                ExitCode::FAILURE
            }
        },
        Ok(Command::Help) => {
            print_usage();
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("scv {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Run 'scv --help' for usage information.");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CompileOptions) -> ExitCode {
    let mut session = Session::new().with_options(options);
    match compile(&mut session, options) {
        Ok(Some(path)) => {
            if options.verbose {
                println!("Wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            let mut emitter = TerminalEmitter::stderr(options.color, std::io::stderr().is_terminal())
                .with_file_paths(session.file_paths());
            emitter.emit(&err.to_diagnostic());
            emitter.emit_summary(1);
            emitter.flush();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("scv {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: scv [options] <file.scv>...");
    println!();
    println!("All inputs are merged into one header named after the first input.");
    println!();
    println!("Options:");
    println!("  -o, --output <dir>        Output directory (default: $SCV_OUTPUT_DIR or .)");
    println!("  -v, --verbose             Print processed files, tokens and the syntax tree");
    println!("  --verbose-tokenization    Print the tokens of each file");
    println!("  --verbose-ast             Print the merged syntax tree");
    println!("  --color=<mode>            Color diagnostics: auto, always, never");
    println!("  --explain <code>          Describe an error code, e.g. E2006");
    println!("  -h, --help                Show this message");
    println!("  -V, --version             Show the version");
    println!();
    println!("Environment:");
    println!("  SCV_LOG=<filter>          Enable tracing, e.g. SCV_LOG=scv_emit=debug");
    println!("  SCV_LOG_TREE=1            Show tracing as an indented span tree");
}
