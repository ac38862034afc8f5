//! Command-line options.

use std::env;
use std::path::PathBuf;

use scv_diagnostic::emitter::ColorMode;

/// Environment variable naming the default output directory.
pub const OUTPUT_DIR_VAR: &str = "SCV_OUTPUT_DIR";

/// Settings for one compiler invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Input files; the output is named after the first.
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    /// Print processed paths, tokens and the merged tree.
    pub verbose: bool,
    pub dump_tokens: bool,
    pub dump_ast: bool,
    pub color: ColorMode,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            inputs: Vec::new(),
            output_dir: PathBuf::from("."),
            verbose: false,
            dump_tokens: false,
            dump_ast: false,
            color: ColorMode::default(),
        }
    }
}

impl CompileOptions {
    /// Defaults, with the output directory taken from `SCV_OUTPUT_DIR` if set.
    pub fn from_env() -> Self {
        let mut options = CompileOptions::default();
        if let Some(dir) = env::var_os(OUTPUT_DIR_VAR).filter(|dir| !dir.is_empty()) {
            options.output_dir = PathBuf::from(dir);
        }
        options
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Compile(CompileOptions),
    Explain(String),
    Help,
    Version,
}

/// Parse arguments (without the program name) on top of `defaults`.
///
/// `--help`, `--version` and `--explain` win over everything else on the
/// line. Errors are one-line messages for the user.
pub fn parse_args(args: &[String], defaults: CompileOptions) -> Result<Command, String> {
    let mut options = defaults;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--explain" => {
                let code = iter.next().ok_or("--explain requires an error code")?;
                return Ok(Command::Explain(code.clone()));
            }
            "--output" | "-o" => {
                let dir = iter.next().ok_or_else(|| format!("{arg} requires a directory"))?;
                options.output_dir = PathBuf::from(dir);
            }
            "--verbose" | "-v" => options.verbose = true,
            "--verbose-tokenization" => options.dump_tokens = true,
            "--verbose-ast" => options.dump_ast = true,
            _ => {
                if let Some(mode) = arg.strip_prefix("--color=") {
                    options.color = ColorMode::parse(mode)
                        .ok_or_else(|| format!("invalid color mode '{mode}', expected auto, always or never"))?;
                } else if let Some(code) = arg.strip_prefix("--explain=") {
                    return Ok(Command::Explain(code.to_string()));
                } else if let Some(dir) = arg.strip_prefix("--output=") {
                    options.output_dir = PathBuf::from(dir);
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option '{arg}'"));
                } else {
                    options.inputs.push(PathBuf::from(arg));
                }
            }
        }
    }

    if options.inputs.is_empty() {
        return Err("no input files".to_string());
    }
    Ok(Command::Compile(options))
}
