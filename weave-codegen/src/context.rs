//! Per-session output accumulator.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use weave_core::{BufferPool, LineWriter, WriteResult};

use crate::{Error, Result};

/// Whether [`Context::set`] created or replaced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Inserted,
    Replaced,
}

impl SetOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced)
    }
}

/// Counts reported by [`Context::flush`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub written: usize,
    pub skipped: usize,
}

/// Destination path to rendered lines, in insertion order.
///
/// Each path is expected to be set once per session. Setting it again
/// replaces the previous lines; the replacement is reported and logged.
#[derive(Debug, Default)]
pub struct Context {
    entries: IndexMap<PathBuf, Vec<String>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `lines` at `path`.
    pub fn set(&mut self, path: impl Into<PathBuf>, lines: Vec<String>) -> SetOutcome {
        let path = path.into();
        tracing::debug!(path = %path.display(), lines = lines.len(), "context set");
        if self.entries.insert(path.clone(), lines).is_some() {
            tracing::warn!(path = %path.display(), "overwriting generated output");
            SetOutcome::Replaced
        } else {
            SetOutcome::Inserted
        }
    }

    pub fn get(&self, path: &Path) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    /// The lines at `path` joined into file text.
    pub fn text(&self, path: &Path, pool: &BufferPool) -> Option<String> {
        self.get(path).map(|lines| pool.join_lines(lines))
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Path, &[String])> {
        self.entries
            .iter()
            .map(|(path, lines)| (path.as_path(), lines.as_slice()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain every entry into `writer`, in insertion order.
    ///
    /// Stops at the first failed write; entries not yet written stay in the
    /// context.
    pub fn flush(&mut self, writer: &impl LineWriter) -> Result<FlushReport> {
        let mut report = FlushReport::default();
        let mut failure = None;
        for (path, lines) in &self.entries {
            match writer.write(path, lines) {
                Ok(WriteResult::Written) => report.written += 1,
                Ok(WriteResult::Skipped) => report.skipped += 1,
                Err(e) => {
                    failure = Some(Error::Write {
                        path: path.display().to_string(),
                        source: e.into(),
                    });
                    break;
                }
            }
        }

        self.entries.drain(..report.written + report.skipped);
        match failure {
            Some(err) => Err(err),
            None => Ok(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[derive(Default)]
    struct Recorder {
        written: RefCell<Vec<PathBuf>>,
        fail_on: Option<PathBuf>,
    }

    impl LineWriter for Recorder {
        fn write(&self, path: &Path, _lines: &[String]) -> eyre::Result<WriteResult> {
            if self.fail_on.as_deref() == Some(path) {
                eyre::bail!("disk full");
            }
            self.written.borrow_mut().push(path.to_path_buf());
            Ok(WriteResult::Written)
        }
    }

    #[test]
    fn test_set_reports_overwrite() {
        let mut context = Context::new();
        assert_eq!(context.set("a.cs", lines(&["one"])), SetOutcome::Inserted);
        assert_eq!(context.set("a.cs", lines(&["two"])), SetOutcome::Replaced);
        assert_eq!(context.len(), 1);
        assert_eq!(context.get(Path::new("a.cs")), Some(&lines(&["two"])[..]));
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut context = Context::new();
        context.set("z.cs", lines(&["z"]));
        context.set("a.cs", lines(&["a"]));
        context.set("m.cs", lines(&["m"]));
        context.set("z.cs", lines(&["z2"]));

        let paths: Vec<_> = context.paths().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(paths, vec!["z.cs", "a.cs", "m.cs"]);
    }

    #[test]
    fn test_text_joins_lines() {
        let mut context = Context::new();
        context.set("a.cs", lines(&["{", "}"]));
        let pool = BufferPool::new();
        assert_eq!(
            context.text(Path::new("a.cs"), &pool).as_deref(),
            Some("{\n}\n")
        );
        assert_eq!(context.text(Path::new("b.cs"), &pool), None);
    }

    #[test]
    fn test_flush_drains_in_order() {
        let mut context = Context::new();
        context.set("b.cs", lines(&["b"]));
        context.set("a.cs", lines(&["a"]));

        let writer = Recorder::default();
        let report = context.flush(&writer).unwrap();

        assert_eq!(report.written, 2);
        assert!(context.is_empty());
        assert_eq!(
            *writer.written.borrow(),
            vec![PathBuf::from("b.cs"), PathBuf::from("a.cs")]
        );
    }

    #[test]
    fn test_flush_stops_at_failure() {
        let mut context = Context::new();
        context.set("a.cs", lines(&["a"]));
        context.set("b.cs", lines(&["b"]));
        context.set("c.cs", lines(&["c"]));

        let writer = Recorder {
            fail_on: Some(PathBuf::from("b.cs")),
            ..Default::default()
        };
        let err = context.flush(&writer).unwrap_err();

        assert_eq!(err.to_string(), "failed to write 'b.cs'");
        assert_eq!(*writer.written.borrow(), vec![PathBuf::from("a.cs")]);
        let remaining: Vec<&Path> = context.paths().collect();
        assert_eq!(remaining, vec![Path::new("b.cs"), Path::new("c.cs")]);

        // A retry resumes from the failed entry.
        let report = context.flush(&Recorder::default()).unwrap();
        assert_eq!(report.written, 2);
        assert!(context.is_empty());
    }

    #[test]
    fn test_flush_large_context_in_order() {
        let mut context = Context::new();
        for i in 0..500 {
            context.set(format!("f{i}.cs"), lines(&["x"]));
        }

        let writer = Recorder::default();
        let report = context.flush(&writer).unwrap();

        assert_eq!(report.written, 500);
        assert!(context.is_empty());
        let written = writer.written.borrow();
        assert_eq!(written.first(), Some(&PathBuf::from("f0.cs")));
        assert_eq!(written.last(), Some(&PathBuf::from("f499.cs")));
    }
}
