//! The scv compiler driver.
//!
//! Wires the phases together for the `scv` binary:
//!
//! ```text
//! input paths ──► Session (load, lex, parse, resolve `requires`) ──► merged Root
//!             ──► scv_emit ──► <output dir>/<first input>.hpp
//! ```
//!
//! Every phase stops at its first error, which comes back as a
//! [`CompileError`] and is rendered by the binary as a diagnostic.

mod compile;
pub mod debug;
mod error;
mod explain;
mod logging;
mod options;
mod session;

pub use compile::{compile, output_path, timestamp, OUTPUT_EXTENSION};
pub use debug::{format_tokens, AstPrinter};
pub use error::{CompileError, LoadError};
pub use explain::explain;
pub use logging::{init_tracing, LOG_TREE_VAR, LOG_VAR};
pub use options::{parse_args, Command, CompileOptions, OUTPUT_DIR_VAR};
pub use session::{Session, SourceFile, SOURCE_EXTENSION};
