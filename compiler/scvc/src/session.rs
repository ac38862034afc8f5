//! Compilation session: loaded sources and processed-file bookkeeping.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use scv_ir::{FileId, Root, SourceText};
use scv_parse::{RequiredSource, SourceLoader};
use tracing::debug;

use crate::debug::format_tokens;
use crate::{CompileError, CompileOptions, LoadError};

/// Extension of spec files named by `requires`.
pub const SOURCE_EXTENSION: &str = "scv";

/// A file loaded into the session.
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Path as it was reached, for display.
    pub path: PathBuf,
    pub text: SourceText,
}

/// Owns every source loaded while compiling one output unit.
///
/// A file is loaded at most once: its canonical path is recorded before it
/// is parsed, so `requires` cycles and repeated inputs are no-ops.
#[derive(Default)]
pub struct Session {
    files: Vec<SourceFile>,
    processed: FxHashSet<PathBuf>,
    verbose: bool,
    dump_tokens: bool,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Print "Processing" lines and token dumps as `options` asks.
    #[must_use]
    pub fn with_options(mut self, options: &CompileOptions) -> Self {
        self.verbose = options.verbose;
        self.dump_tokens = options.verbose || options.dump_tokens;
        self
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Display paths indexed by [`FileId`], for diagnostics.
    pub fn file_paths(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|file| file.path.display().to_string())
            .collect()
    }

    /// Whether `path` names a file this session already loaded.
    pub fn is_processed(&self, path: &Path) -> bool {
        fs::canonicalize(path).is_ok_and(|canonical| self.processed.contains(&canonical))
    }

    /// Read `path` into the session. `Ok(None)` if it was already loaded.
    pub fn load(&mut self, path: &Path) -> Result<Option<FileId>, LoadError> {
        let canonical = fs::canonicalize(path).map_err(|err| LoadError::from_io(path, err))?;
        if self.processed.contains(&canonical) {
            debug!(path = %path.display(), "already processed");
            return Ok(None);
        }

        if self.verbose {
            println!("Processing {}", path.display());
        }
        let text = fs::read_to_string(&canonical).map_err(|err| LoadError::from_io(path, err))?;
        let id = FileId::new(u32::try_from(self.files.len()).unwrap_or(u32::MAX));
        debug!(path = %path.display(), file = id.raw(), bytes = text.len(), "loaded");

        self.processed.insert(canonical);
        self.files.push(SourceFile {
            path: path.to_path_buf(),
            text: SourceText::from(text),
        });
        Ok(Some(id))
    }

    /// Load, lex and parse one input file, pulling in what it requires.
    /// `Ok(None)` if the file was already loaded.
    pub fn load_root(&mut self, path: &Path) -> Result<Option<Root>, CompileError> {
        let Some(file) = self.load(path)? else {
            return Ok(None);
        };
        let text = self.text(file);

        let tokens = scv_lexer::tokenize(&text, file)?;
        if self.dump_tokens {
            print!("{}", format_tokens(path, &tokens));
        }
        let root = scv_parse::parse(&tokens, &text, file, self)?;
        Ok(Some(root))
    }

    fn text(&self, id: FileId) -> SourceText {
        self.file(id).map(|file| file.text.clone()).unwrap_or_default()
    }
}

/// `requires name` resolves to `name.scv` next to the requiring file.
impl SourceLoader for Session {
    type Error = LoadError;

    fn load_required(&mut self, from: FileId, name: &str) -> Result<Option<RequiredSource>, LoadError> {
        let directory = self
            .file(from)
            .and_then(|file| file.path.parent())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let mut path = directory.join(name);
        path.set_extension(SOURCE_EXTENSION);
        debug!(name, path = %path.display(), "resolving requires");

        let Some(file) = self.load(&path)? else {
            return Ok(None);
        };
        Ok(Some(RequiredSource {
            file,
            text: self.text(file),
        }))
    }
}
