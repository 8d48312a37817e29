//! Maven multi-module layout.
//!
//! ```text
//! root
//!  - pom.xml                        aggregator
//!  - <moduledir>
//!    - pom.xml
//!    - src/main/java/<package>/...
//! ```

use std::path::Path;

use tracing::debug;

use super::pom::Pom;
use super::{layout, write_file, write_sources, Exported, ExportedBuilder, Exporter};
use crate::errors::ExportResult;
use crate::project::{Module, Repository};

pub const POM_FILE: &str = "pom.xml";

/// Repositories are not written: maven resolves them from its own settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenExporter;

impl MavenExporter {
    fn export_module(&self, module: &Module, to: &mut ExportedBuilder) -> ExportResult<()> {
        let target = to
            .root()
            .join(layout::module_directory(module.name()))
            .join(POM_FILE);
        write_file(&target, &Pom::for_module(module).render())?;
        to.mark_written(module.name(), POM_FILE, target);

        write_sources(module, to)
    }
}

impl Exporter for MavenExporter {
    fn name(&self) -> &'static str {
        "maven"
    }

    fn export(
        &self,
        root: &Path,
        repositories: &[Repository],
        modules: &[Module],
    ) -> ExportResult<Exported> {
        layout::validate(modules)?;
        if !repositories.is_empty() {
            debug!(count = repositories.len(), "maven export ignores repositories");
        }

        let mut to = ExportedBuilder::new(root);
        let aggregator = Pom::aggregator(modules.iter().map(|m| layout::module_directory(m.name())));
        let target = root.join(POM_FILE);
        write_file(&target, &aggregator.render())?;
        to.mark_written("", POM_FILE, target);

        for module in modules {
            self.export_module(module, &mut to)?;
        }
        Ok(to.build())
    }
}
