//! Bazel layout with `rules_jvm_external`.
//!
//! ```text
//! root
//!  - MODULE.bazel
//!  - <moduledir>
//!    - BUILD.bazel
//!    - src/main/java/<package>/...
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::layout::{self, MAIN_DIRECTORY};
use super::{write_file, write_sources, Exported, ExportedBuilder, Exporter};
use crate::bazel::{BuildFile, ModuleFile};
use crate::errors::{io_at, ExportError, ExportResult, ReadError};
use crate::project::{Dependency, Module, Repository};

pub const MODULE_FILE: &str = "MODULE.bazel";
pub const BUILD_FILE: &str = "BUILD.bazel";

#[derive(Debug, Clone, Copy, Default)]
pub struct BazelExporter;

/// `src/main/java/**/*.java`
pub fn sources_glob() -> String {
    format!("{MAIN_DIRECTORY}/**/*.java")
}

/// The label a dependency is referred to by in a `BUILD.bazel` file.
pub fn build_label(dependency: &Dependency) -> String {
    match dependency {
        Dependency::External {
            group_id,
            artifact_id,
            ..
        } => format!(
            "@maven//:{}_{}",
            label_segment(group_id),
            label_segment(artifact_id)
        ),
        Dependency::Module(name) => {
            format!("//{}:{}", layout::module_directory(name), name)
        }
    }
}

fn label_segment(coordinate: &str) -> String {
    coordinate.replace(['.', '-'], "_")
}

/// The maven coordinates of every external dependency, sorted and without
/// duplicates.
pub fn artifacts(modules: &[Module]) -> BTreeSet<String> {
    modules
        .iter()
        .flat_map(Module::dependencies)
        .filter_map(Dependency::coordinates)
        .collect()
}

fn module_file(repositories: &[Repository], modules: &[Module]) -> ModuleFile {
    ModuleFile::builder()
        .artifacts(artifacts(modules))
        .repositories(repositories.iter().map(Repository::url))
        .build()
}

fn build_file(module: &Module) -> BuildFile {
    BuildFile::builder()
        .target_name(module.name())
        .srcs([sources_glob()])
        .srcs_glob()
        .deps(module.dependencies().iter().map(build_label))
        .build()
}

fn build_file_path(root: &Path, module: &Module) -> PathBuf {
    root.join(layout::module_directory(module.name()))
        .join(BUILD_FILE)
}

impl BazelExporter {
    fn export_module(&self, module: &Module, to: &mut ExportedBuilder) -> ExportResult<()> {
        let target = build_file_path(to.root(), module);
        write_file(&target, &build_file(module).to_text())?;
        to.mark_written(module.name(), BUILD_FILE, target);

        write_sources(module, to)
    }

    /// Reads the Bazel files of an export back, checking that they hold
    /// exactly what exporting `repositories` and `modules` writes.
    pub fn verify(
        &self,
        exported: &Exported,
        repositories: &[Repository],
        modules: &[Module],
    ) -> ExportResult<()> {
        check_written(exported, "", MODULE_FILE, |path| {
            module_file(repositories, modules).read_from_path(path)
        })?;
        for module in modules {
            check_written(exported, module.name(), BUILD_FILE, |path| {
                build_file(module).read_from_path(path)
            })?;
        }
        Ok(())
    }
}

fn check_written(
    exported: &Exported,
    module: &str,
    fragment: &str,
    read: impl FnOnce(&Path) -> Result<(), ReadError>,
) -> ExportResult<()> {
    let path = exported
        .file(module, fragment)
        .ok_or_else(|| ExportError::NotWritten {
            module: module.to_string(),
            fragment: fragment.to_string(),
        })?;
    match read(path) {
        Ok(()) => Ok(()),
        Err(ReadError::Io(source)) => Err(io_at(path)(source)),
        Err(source) => Err(ExportError::Verify {
            module: module.to_string(),
            fragment: fragment.to_string(),
            source,
        }),
    }
}

impl Exporter for BazelExporter {
    fn name(&self) -> &'static str {
        "bazel"
    }

    fn export(
        &self,
        root: &Path,
        repositories: &[Repository],
        modules: &[Module],
    ) -> ExportResult<Exported> {
        layout::validate(modules)?;
        let mut to = ExportedBuilder::new(root);

        let document = module_file(repositories, modules);
        debug!(
            artifacts = document.artifacts().map_or(0, |a| a.len()),
            repositories = repositories.len(),
            "writing module file"
        );
        let target = root.join(MODULE_FILE);
        write_file(&target, &document.to_text())?;
        to.mark_written("", MODULE_FILE, target);

        for module in modules {
            self.export_module(module, &mut to)?;
        }
        Ok(to.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn labels() {
        assert_eq!(
            build_label(&Dependency::external(
                "com.mycompany.app",
                "another-dependency",
                "1.0"
            )),
            "@maven//:com_mycompany_app_another_dependency"
        );
        assert_eq!(
            build_label(&Dependency::module("an.other.module")),
            "//anothermodule:an.other.module"
        );
    }

    #[test]
    fn artifacts_are_sorted_and_unique() {
        let modules = [
            Module::named("a").depending_on([
                Dependency::external("z", "z", "1"),
                Dependency::external("a", "a", "2"),
            ]),
            Module::named("b").depending_on([
                Dependency::external("z", "z", "1"),
                Dependency::unversioned("m", "m"),
                Dependency::module("a"),
            ]),
        ];
        let artifacts: Vec<_> = artifacts(&modules).into_iter().collect();
        assert_eq!(artifacts, vec!["a:a:2", "m:m", "z:z:1"]);
    }

    #[test]
    fn verify_detects_edits() {
        let dir = tempfile::tempdir().unwrap();
        let modules = [Module::named("a.b").depending_on([Dependency::external("g", "a", "1")])];
        let repositories = [Repository::named("central").at("https://repo1.maven.org/maven2")];
        let exported = BazelExporter
            .export(dir.path(), &repositories, &modules)
            .unwrap();
        BazelExporter
            .verify(&exported, &repositories, &modules)
            .unwrap();

        let build = exported.file("a.b", BUILD_FILE).unwrap();
        let edited = fs::read_to_string(build).unwrap().replace("@maven//:g_a", "@maven//:g_b");
        fs::write(build, edited).unwrap();

        let err = BazelExporter
            .verify(&exported, &repositories, &modules)
            .unwrap_err();
        assert!(matches!(err, ExportError::Verify { ref fragment, .. } if fragment == BUILD_FILE));
    }

    #[test]
    fn verify_requires_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let exported = BazelExporter.export(dir.path(), &[], &[]).unwrap();
        let err = BazelExporter
            .verify(&exported, &[], &[Module::named("missing")])
            .unwrap_err();
        assert!(matches!(err, ExportError::NotWritten { .. }));
    }
}
