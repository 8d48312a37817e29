//! Build system agnostic description of a java project.
//!
//! A project is a list of [`Module`]s, each holding source [`File`]s and
//! [`Dependency`] edges, plus the [`Repository`]s external artifacts are
//! fetched from. Exporters turn this description into a tree on disk.
//!
//! For instance, the tree
//!
//! ```text
//! com/package/name/A.java
//! com/package/name/util/B.java
//! ```
//!
//! is the module `com.package.name` containing the fragments `A.java` and
//! `util/B.java`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The build systems a project can be exported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    Maven,
    Bazel,
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildSystem::Maven => f.write_str("maven"),
            BuildSystem::Bazel => f.write_str("bazel"),
        }
    }
}

/// A java module: a dotted package name, its files and its dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    name: String,
    #[serde(default)]
    files: Vec<File>,
    // single-key maps in YAML too, not `!external` tags
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    dependencies: Vec<Dependency>,
}

impl Module {
    /// A module named `name`, with no files and no dependencies.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Replaces the files of this module.
    pub fn containing(mut self, files: impl IntoIterator<Item = File>) -> Self {
        self.files = files.into_iter().collect();
        self
    }

    /// Replaces the dependencies of this module.
    pub fn depending_on(mut self, dependencies: impl IntoIterator<Item = Dependency>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}

/// A source file, addressed by its path relative to the module's package
/// directory.
///
/// With the package directory `com/package/name`, the file
/// `com/package/name/util/B.java` has the fragment `util/B.java`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    fragment: String,
    contents: String,
}

impl File {
    pub fn new(fragment: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            contents: contents.into(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// A dependency edge of a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dependency {
    /// A maven artifact, fetched from the project repositories.
    External {
        group_id: String,
        artifact_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        version: Option<String>,
    },
    /// Another module of the same project, by name.
    Module(String),
}

impl Dependency {
    pub fn external(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Dependency::External {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: Some(version.into()),
        }
    }

    /// An external dependency whose version is left to the build system.
    pub fn unversioned(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Dependency::External {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Dependency::Module(name.into())
    }

    /// Maven coordinates of an external dependency: `group:artifact:version`,
    /// or `group:artifact` when unversioned.
    pub fn coordinates(&self) -> Option<String> {
        match self {
            Dependency::External {
                group_id,
                artifact_id,
                version: Some(version),
            } => Some(format!("{group_id}:{artifact_id}:{version}")),
            Dependency::External {
                group_id,
                artifact_id,
                version: None,
            } => Some(format!("{group_id}:{artifact_id}")),
            Dependency::Module(_) => None,
        }
    }
}

/// A maven repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    name: String,
    #[serde(default)]
    url: String,
}

impl Repository {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }

    pub fn at(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
