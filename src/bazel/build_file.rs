//! `BUILD.bazel` document holding a single `java_library` target.

use std::io;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{string_list, string_values};
use crate::errors::{ReadError, SyntaxError};
use crate::grammar::{Assignment, Code, Expression, FunctionCall, List, Statement, StringLiteral};

pub const PUBLIC_VISIBILITY: &str = "//visibility:public";

static VISIBILITY_PUBLIC: Lazy<Arc<List<StringLiteral>>> = Lazy::new(|| {
    Arc::new(List::new(
        StringLiteral::capture,
        vec![StringLiteral::new(PUBLIC_VISIBILITY)],
    ))
});

/// `java_library(name=...,srcs=...,visibility=["//visibility:public"],deps=[...])`
#[derive(Debug, Clone)]
pub struct BuildFile {
    name: Arc<StringLiteral>,
    srcs: Arc<List<StringLiteral>>,
    deps: Arc<List<StringLiteral>>,
    code: Code,
}

impl BuildFile {
    pub fn builder() -> BuildFileBuilder {
        BuildFileBuilder::default()
    }

    fn new(
        name: StringLiteral,
        srcs: List<StringLiteral>,
        srcs_glob: bool,
        deps: List<StringLiteral>,
    ) -> Self {
        let name = Arc::new(name);
        let srcs = Arc::new(srcs);
        let deps = Arc::new(deps);

        let srcs_expr: Arc<dyn Expression> = if srcs_glob {
            Arc::new(FunctionCall::new("glob", vec![srcs.clone()]))
        } else {
            srcs.clone()
        };
        let java_library = FunctionCall::new(
            "java_library",
            vec![
                Arc::new(Assignment::new("name", name.clone())),
                Arc::new(Assignment::new("srcs", srcs_expr)),
                Arc::new(Assignment::new(
                    "visibility",
                    VISIBILITY_PUBLIC.clone(),
                )),
                Arc::new(Assignment::new("deps", deps.clone())),
            ],
        );

        Self {
            name,
            srcs,
            deps,
            code: Code::new(vec![Statement::new(Arc::new(java_library))]),
        }
    }

    /// The target name, once known.
    pub fn name(&self) -> Option<&str> {
        self.name.value()
    }

    /// The source labels or globs, once known.
    pub fn srcs(&self) -> Option<Vec<&str>> {
        string_values(&self.srcs)
    }

    /// The dependency labels, once known.
    pub fn deps(&self) -> Option<Vec<&str>> {
        string_values(&self.deps)
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

/// Fixes the shape of a [`BuildFile`]. Leaves that are not set stay captures.
#[derive(Debug, Clone, Default)]
pub struct BuildFileBuilder {
    name: Option<String>,
    srcs: Option<Vec<String>>,
    srcs_glob: bool,
    deps: Option<Vec<String>>,
}

impl BuildFileBuilder {
    pub fn target_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn srcs<I, S>(mut self, srcs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.srcs = Some(srcs.into_iter().map(Into::into).collect());
        self
    }

    /// Wraps the sources in a `glob(...)` call.
    pub fn srcs_glob(mut self) -> Self {
        self.srcs_glob = true;
        self
    }

    pub fn deps<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deps = Some(deps.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> BuildFile {
        let name = match self.name {
            Some(name) => StringLiteral::new(name),
            None => StringLiteral::capture(),
        };
        BuildFile::new(
            name,
            string_list(self.srcs),
            self.srcs_glob,
            string_list(self.deps),
        )
    }
}
