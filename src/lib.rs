pub use crate::bazel::{BuildFile, ModuleFile};
pub use crate::config::ProjectManifest;
pub use crate::errors::{ExportError, ReadError, SyntaxError, SyntaxErrorKind};
pub use crate::export::{Exported, Exporter};
pub use crate::project::{BuildSystem, Dependency, File, Module, Repository};

pub mod bazel;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod grammar;
pub mod project;
