use std::path::{Path, PathBuf};

use eyre::Result;

use crate::BufferPool;

/// Sink that persists rendered line sequences.
///
/// The generator never touches the file system itself; a session's output is
/// flushed through a writer once generation has finished.
pub trait LineWriter {
    /// Persist `lines` at `path`.
    fn write(&self, path: &Path, lines: &[String]) -> Result<WriteResult>;
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

/// Writes files below a root directory.
///
/// Relative paths are resolved against the root; absolute paths are used as
/// given.
#[derive(Debug)]
pub struct FsWriter {
    root: PathBuf,
    overwrite: Overwrite,
    pool: BufferPool,
}

impl FsWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overwrite: Overwrite::Always,
            pool: BufferPool::new(),
        }
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LineWriter for FsWriter {
    fn write(&self, path: &Path, lines: &[String]) -> Result<WriteResult> {
        let path = self.root.join(path);

        if self.overwrite == Overwrite::IfMissing && path.exists() {
            tracing::debug!(path = %path.display(), "skipping existing file");
            return Ok(WriteResult::Skipped);
        }

        self.pool
            .with_joined(lines, |content| write_file(&path, content))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
