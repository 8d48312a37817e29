//! Ledger of the files written by an export.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::errors::{io_at, ExportError, ExportResult};

/// The result of an export: the root directory and, for every module, the
/// path each fragment was written to.
///
/// Files that do not belong to a module (such as `MODULE.bazel`) are recorded
/// under the empty module name.
///
/// Nothing is removed on drop; call [`Exported::cleanup`] once done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    root: PathBuf,
    written: BTreeMap<String, BTreeMap<String, PathBuf>>,
}

impl Exported {
    /// The directory holding the exported tree. Empty once cleaned up.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `fragment` of `module` was written, if it was.
    pub fn file(&self, module: &str, fragment: &str) -> Option<&Path> {
        self.written
            .get(module)
            .and_then(|files| files.get(fragment))
            .map(PathBuf::as_path)
    }

    /// Every recorded `(module, fragment, path)`, sorted by module then
    /// fragment.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str, &Path)> {
        self.written.iter().flat_map(|(module, files)| {
            files
                .iter()
                .map(move |(fragment, path)| (module.as_str(), fragment.as_str(), path.as_path()))
        })
    }

    /// Removes the root directory and everything below it.
    ///
    /// Calling this more than once is fine: later calls do nothing.
    pub fn cleanup(&mut self) -> ExportResult<()> {
        if self.root.as_os_str().is_empty() {
            return Ok(());
        }

        if self.root.exists() {
            for entry in WalkDir::new(&self.root).contents_first(true) {
                let entry = entry.map_err(|source| ExportError::Walk {
                    path: self.root.clone(),
                    source,
                })?;
                let path = entry.path();
                if entry.file_type().is_dir() {
                    fs::remove_dir(path).map_err(io_at(path))?;
                } else {
                    fs::remove_file(path).map_err(io_at(path))?;
                }
            }
        }

        info!(root = %self.root.display(), "cleaned up export");
        self.root = PathBuf::new();
        self.written.clear();
        Ok(())
    }
}

/// Accumulates written files while an exporter runs.
#[derive(Debug, Clone)]
pub struct ExportedBuilder {
    root: PathBuf,
    written: BTreeMap<String, BTreeMap<String, PathBuf>>,
}

impl ExportedBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Records that `fragment` of `module` now lives at `path`. A fragment
    /// marked twice keeps the last path.
    pub fn mark_written(
        &mut self,
        module: impl Into<String>,
        fragment: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> &mut Self {
        self.written
            .entry(module.into())
            .or_default()
            .insert(fragment.into(), path.into());
        self
    }

    pub fn build(self) -> Exported {
        Exported {
            root: self.root,
            written: self.written,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        let mut builder = ExportedBuilder::new("/tmp/root");
        builder
            .mark_written("a.module", "A.java", "/tmp/root/amodule/A.java")
            .mark_written("", "MODULE.bazel", "/tmp/root/MODULE.bazel");
        let exported = builder.build();

        assert_eq!(
            exported.file("a.module", "A.java"),
            Some(Path::new("/tmp/root/amodule/A.java"))
        );
        assert_eq!(
            exported.file("", "MODULE.bazel"),
            Some(Path::new("/tmp/root/MODULE.bazel"))
        );
        assert_eq!(exported.file("a.module", "B.java"), None);
        assert_eq!(exported.file("missing", "A.java"), None);
        assert_eq!(exported.files().count(), 2);
    }

    #[test]
    fn cleanup_removes_everything_and_is_idempotent() {
        let root = tempfile::tempdir().unwrap().keep();
        let nested = root.join("amodule/src/main/java");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("A.java"), "class A {}").unwrap();

        let mut builder = ExportedBuilder::new(&root);
        builder.mark_written("a.module", "A.java", nested.join("A.java"));
        let mut exported = builder.build();

        exported.cleanup().unwrap();
        assert!(!root.exists());
        assert_eq!(exported.root(), Path::new(""));
        assert_eq!(exported.file("a.module", "A.java"), None);

        exported.cleanup().unwrap();
    }

    #[test]
    fn cleanup_tolerates_a_vanished_root() {
        let root = tempfile::tempdir().unwrap().keep();
        fs::remove_dir(&root).unwrap();

        let mut exported = ExportedBuilder::new(&root).build();
        exported.cleanup().unwrap();
        assert_eq!(exported.root(), Path::new(""));
    }
}
