//! `MODULE.bazel` document declaring the maven dependencies of a project
//! through `rules_jvm_external`.

use std::io;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{string_list, string_values};
use crate::errors::{ReadError, SyntaxError};
use crate::grammar::{Assignment, Code, FunctionCall, Identifier, List, Statement, StringLiteral};

pub const RULES_JVM_EXTERNAL_VERSION: &str = "6.1";

static BAZEL_DEP: Lazy<Arc<FunctionCall>> = Lazy::new(|| {
    Arc::new(FunctionCall::new(
        "bazel_dep",
        vec![
            Arc::new(Assignment::new(
                "name",
                Arc::new(StringLiteral::new("rules_jvm_external")),
            )),
            Arc::new(Assignment::new(
                "version",
                Arc::new(StringLiteral::new(RULES_JVM_EXTERNAL_VERSION)),
            )),
        ],
    ))
});

static USE_EXTENSION: Lazy<Arc<FunctionCall>> = Lazy::new(|| {
    Arc::new(FunctionCall::new(
        "use_extension",
        vec![
            Arc::new(StringLiteral::new("@rules_jvm_external//:extensions.bzl")),
            Arc::new(StringLiteral::new("maven")),
        ],
    ))
});

static USE_REPO: Lazy<Arc<FunctionCall>> = Lazy::new(|| {
    Arc::new(FunctionCall::new(
        "use_repo",
        vec![
            Arc::new(Identifier::new("maven")),
            Arc::new(StringLiteral::new("maven")),
        ],
    ))
});

/// The four statements, in order:
///
/// ```text
/// bazel_dep(name="rules_jvm_external",version="6.1",)
/// maven=use_extension("@rules_jvm_external//:extensions.bzl","maven",)
/// maven.install(artifacts=[...],fetch_sources=True,repositories=[...],)
/// use_repo(maven,"maven",)
/// ```
#[derive(Debug, Clone)]
pub struct ModuleFile {
    artifacts: Arc<List<StringLiteral>>,
    repositories: Arc<List<StringLiteral>>,
    code: Code,
}

impl ModuleFile {
    pub fn builder() -> ModuleFileBuilder {
        ModuleFileBuilder::default()
    }

    fn new(artifacts: List<StringLiteral>, repositories: List<StringLiteral>) -> Self {
        let artifacts = Arc::new(artifacts);
        let repositories = Arc::new(repositories);

        let maven_install = FunctionCall::new(
            "maven.install",
            vec![
                Arc::new(Assignment::new("artifacts", artifacts.clone())),
                Arc::new(Assignment::new(
                    "fetch_sources",
                    Arc::new(Identifier::new("True")),
                )),
                Arc::new(Assignment::new("repositories", repositories.clone())),
            ],
        );
        let code = Code::new(vec![
            Statement::new(BAZEL_DEP.clone()),
            Statement::new(Arc::new(Assignment::new(
                "maven",
                USE_EXTENSION.clone(),
            ))),
            Statement::new(Arc::new(maven_install)),
            Statement::new(USE_REPO.clone()),
        ]);

        Self {
            artifacts,
            repositories,
            code,
        }
    }

    /// Maven coordinates (`group:artifact:version`), once known.
    pub fn artifacts(&self) -> Option<Vec<&str>> {
        string_values(&self.artifacts)
    }

    /// Repository URLs, once known.
    pub fn repositories(&self) -> Option<Vec<&str>> {
        string_values(&self.repositories)
    }

    pub fn to_text(&self) -> String {
        self.code.to_text()
    }

    pub fn read_str(&self, source: &str) -> Result<(), SyntaxError> {
        self.code.read_str(source)
    }

    pub fn write_to_path(&self, path: &Path) -> io::Result<()> {
        self.code.write_to_path(path)
    }

    pub fn read_from_path(&self, path: &Path) -> Result<(), ReadError> {
        self.code.read_from_path(path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModuleFileBuilder {
    artifacts: Option<Vec<String>>,
    repositories: Option<Vec<String>>,
}

impl ModuleFileBuilder {
    pub fn artifacts<I, S>(mut self, artifacts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artifacts = Some(artifacts.into_iter().map(Into::into).collect());
        self
    }

    pub fn repositories<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repositories = Some(repositories.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> ModuleFile {
        ModuleFile::new(string_list(self.artifacts), string_list(self.repositories))
    }
}
