//! Project manifests: a whole project described in JSON or YAML.
//!
//! ```yaml
//! build_system: bazel
//! repositories:
//!   - name: central
//!     url: https://repo1.maven.org/maven2
//! modules:
//!   - name: an.awesome.module
//!     files:
//!       - fragment: a/A.java
//!         contents: "package an.awesome.module.a;"
//!     dependencies:
//!       - module: an.other.module
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{io_at, ExportError, ExportResult};
use crate::export::{self, Exported};
use crate::project::{BuildSystem, Module, Repository};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub build_system: BuildSystem,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl ProjectManifest {
    /// Loads a manifest, picking the format from the file extension.
    pub fn load(path: &Path) -> ExportResult<Self> {
        let format = Format::of(path).ok_or_else(|| ExportError::Manifest {
            path: path.to_path_buf(),
            reason: "unknown manifest format".to_string(),
        })?;
        let source = fs::read_to_string(path).map_err(io_at(path))?;
        debug!(path = %path.display(), ?format, "loading manifest");

        let parsed = match format {
            Format::Json => serde_json::from_str(&source).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(&source).map_err(|e| e.to_string()),
        };
        parsed.map_err(|reason| ExportError::Manifest {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Exports the project below `root`, or into a fresh temporary
    /// directory.
    pub fn export(&self, root: Option<&Path>) -> ExportResult<Exported> {
        match root {
            Some(root) => export::into(self.build_system, root, &self.repositories, &self.modules),
            None => export::of(self.build_system, &self.repositories, &self.modules),
        }
    }
}
