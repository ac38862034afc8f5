//! One compile unit: inputs in, one header out.

use std::fs;
use std::path::{Path, PathBuf};

use scv_ir::Root;
use tracing::{debug, info, instrument};

use crate::debug::AstPrinter;
use crate::{CompileError, CompileOptions, Session};

/// Extension of generated headers.
pub const OUTPUT_EXTENSION: &str = "hpp";

/// `<output_dir>/<input file name with extension hpp>`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = PathBuf::from(input.file_name().unwrap_or(input.as_os_str()));
    name.set_extension(OUTPUT_EXTENSION);
    output_dir.join(name)
}

/// Local time, as stamped into the header comment.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse every input into one root and emit it as a single header.
///
/// Inputs already pulled in through `requires` are skipped. Returns the
/// path written, or `None` if there was nothing to compile.
#[instrument(skip_all, fields(inputs = options.inputs.len()))]
pub fn compile(session: &mut Session, options: &CompileOptions) -> Result<Option<PathBuf>, CompileError> {
    let Some(first) = options.inputs.first() else {
        return Ok(None);
    };

    let mut merged: Option<Root> = None;
    for input in &options.inputs {
        if session.is_processed(input) {
            debug!(path = %input.display(), "input already processed, skipping");
            continue;
        }
        let Some(root) = session.load_root(input)? else {
            continue;
        };
        match &mut merged {
            Some(merged) => merged.merge(root),
            None => merged = Some(root),
        }
    }
    let Some(root) = merged else {
        return Ok(None);
    };

    if options.dump_ast || options.verbose {
        print!("{}", AstPrinter::print(&root));
    }

    let header = scv_emit::emit(&root, &timestamp())?;
    let path = output_path(first, &options.output_dir);
    fs::write(&path, header).map_err(|source| CompileError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), files = session.files().len(), "header written");
    Ok(Some(path))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
