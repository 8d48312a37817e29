//! Writing projects to disk.
//!
//! An [`Exporter`] lays a list of [`Module`]s out for one build system and
//! records every file it writes in an [`Exported`] ledger. [`of`] is the
//! usual entry point: it picks the exporter and a fresh temporary root.
//!
//! ```no_run
//! use packagetest::export;
//! use packagetest::project::{BuildSystem, File, Module};
//!
//! let modules = vec![Module::named("com.example").containing([File::new("A.java", "")])];
//! let mut project = export::of(BuildSystem::Maven, &[], &modules)?;
//! // run the tool under test against project.root() ...
//! project.cleanup()?;
//! # Ok::<(), packagetest::ExportError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::{io_at, ExportResult};
use crate::project::{BuildSystem, Module, Repository};

pub mod bazel;
pub mod exported;
pub mod layout;
pub mod maven;
pub mod pom;

pub use bazel::BazelExporter;
pub use exported::{Exported, ExportedBuilder};
pub use maven::MavenExporter;

/// Prefix of the temporary directories created by [`of`].
pub const TEMP_PREFIX: &str = "packagetest";

/// Lays a project out on disk for one build system.
pub trait Exporter {
    /// A short name for logs.
    fn name(&self) -> &'static str;

    /// Writes `modules` below `root`, which must already exist.
    fn export(
        &self,
        root: &Path,
        repositories: &[Repository],
        modules: &[Module],
    ) -> ExportResult<Exported>;
}

pub fn exporter_for(kind: BuildSystem) -> Box<dyn Exporter> {
    match kind {
        BuildSystem::Maven => Box::new(MavenExporter),
        BuildSystem::Bazel => Box::new(BazelExporter),
    }
}

/// Exports a project into a new temporary directory.
///
/// The directory is not removed automatically: call [`Exported::cleanup`]
/// on the result.
pub fn of(
    kind: BuildSystem,
    repositories: &[Repository],
    modules: &[Module],
) -> ExportResult<Exported> {
    layout::validate(modules)?;
    let root = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempdir()
        .map_err(io_at(&std::env::temp_dir()))?
        .keep();
    into(kind, &root, repositories, modules)
}

/// Exports a project below `root`, creating it if needed.
pub fn into(
    kind: BuildSystem,
    root: &Path,
    repositories: &[Repository],
    modules: &[Module],
) -> ExportResult<Exported> {
    fs::create_dir_all(root).map_err(io_at(root))?;
    let exporter = exporter_for(kind);
    info!(
        exporter = exporter.name(),
        root = %root.display(),
        modules = modules.len(),
        "exporting project"
    );
    exporter.export(root, repositories, modules)
}

/// Writes `contents` to `path`, creating parent directories.
pub(crate) fn write_file(path: &Path, contents: &str) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_at(parent))?;
    }
    fs::write(path, contents).map_err(io_at(path))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Writes the source files of `module` at their layout position.
pub(crate) fn write_sources(module: &Module, to: &mut ExportedBuilder) -> ExportResult<()> {
    for file in module.files() {
        let path = layout::file_path(to.root(), module.name(), file.fragment())?;
        write_file(&path, file.contents())?;
        to.mark_written(module.name(), file.fragment(), path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::File;

    #[test]
    fn of_creates_a_prefixed_root() {
        let modules = [Module::named("a.b").containing([File::new("A.java", "class A {}")])];
        let mut exported = of(BuildSystem::Maven, &[], &modules).unwrap();

        let name = exported.root().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(TEMP_PREFIX), "{name}");
        let source = exported.file("a.b", "A.java").unwrap();
        assert_eq!(fs::read_to_string(source).unwrap(), "class A {}");

        exported.cleanup().unwrap();
    }

    #[test]
    fn exporter_names() {
        assert_eq!(exporter_for(BuildSystem::Maven).name(), "maven");
        assert_eq!(exporter_for(BuildSystem::Bazel).name(), "bazel");
    }

    #[test]
    fn invalid_modules_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let modules = [Module::named("").containing([File::new("A.java", "")])];
        for kind in [BuildSystem::Maven, BuildSystem::Bazel] {
            assert!(into(kind, dir.path(), &[], &modules).is_err());
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
