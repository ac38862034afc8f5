//! Temporary on-disk workspace for driver tests.

use std::fs;
use std::path::{Path, PathBuf};

use scvc::{compile, CompileError, CompileOptions, Session};
use tempfile::TempDir;

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `text` to `relative`, creating parent directories.
    pub fn file(&self, relative: &str, text: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, text).unwrap();
        path
    }

    pub fn options(&self, inputs: &[&str]) -> CompileOptions {
        CompileOptions {
            inputs: inputs.iter().map(|input| self.root().join(input)).collect(),
            output_dir: self.root().to_path_buf(),
            ..CompileOptions::default()
        }
    }

    /// Compile `inputs` in a fresh session, returning the session too.
    pub fn run(&self, inputs: &[&str]) -> (Session, Result<Option<PathBuf>, CompileError>) {
        let mut session = Session::new();
        let result = compile(&mut session, &self.options(inputs));
        (session, result)
    }

    /// Compile `inputs` and return the header text.
    pub fn header(&self, inputs: &[&str]) -> String {
        let (_, result) = self.run(inputs);
        let path = result.unwrap().expect("something to compile");
        fs::read_to_string(path).unwrap()
    }

    /// Compile `inputs`, expecting failure.
    pub fn error(&self, inputs: &[&str]) -> (Session, CompileError) {
        let (session, result) = self.run(inputs);
        (session, result.unwrap_err())
    }
}

/// The header with its timestamp line removed.
pub fn without_timestamp(header: &str) -> String {
    header
        .lines()
        .filter(|line| !line.starts_with("// File autogenerated by scv on:"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Names of the structs defined in `header`, in order.
pub fn definitions(header: &str) -> Vec<&str> {
    header
        .lines()
        .filter_map(|line| line.strip_prefix("struct ")?.strip_suffix(" {"))
        .collect()
}
