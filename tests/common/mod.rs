// tests/common/mod.rs
//! Shared helpers for the CLI tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory of corpus files.
pub struct CorpusDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl CorpusDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

pub fn corpus_count() -> Command {
    Command::new(env!("CARGO_BIN_EXE_corpus_count"))
}

pub const ALICE: &str = "\
Alice was beginning to get very tired of sitting by her sister on the
bank, and of having nothing to do: once or twice she had peeped into the
book her sister was reading, but it had no pictures or conversations in
it, 'and what is the use of a book,' thought Alice 'without pictures or
conver-
sations?'
";
