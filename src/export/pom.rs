//! Minimal `pom.xml` model and its XML rendering.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::project::{Dependency, Module};

pub const MODEL_VERSION: &str = "4.0.0";
pub const GROUP_ID: &str = "packagetest.maven";
pub const VERSION: &str = "1.0.0";
/// Artifact of the aggregator pom at the export root.
pub const ROOT_ARTIFACT_ID: &str = "packagetest-maven";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const PROJECT_OPEN: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">"#;

/// `an.awesome.module` is published as `an-awesome-module`.
pub fn artifact_id(module: &str) -> String {
    module.replace('.', "-")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pom {
    pub artifact_id: String,
    pub packaging: Option<&'static str>,
    pub modules: Vec<String>,
    pub properties: BTreeMap<String, String>,
    pub managed: Vec<PomDependency>,
    pub dependencies: Vec<PomDependency>,
}

impl Pom {
    fn new(artifact_id: String) -> Self {
        Self {
            artifact_id,
            packaging: None,
            modules: Vec::new(),
            properties: BTreeMap::new(),
            managed: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// The aggregator listing every module directory.
    pub fn aggregator(module_directories: impl IntoIterator<Item = String>) -> Self {
        let mut pom = Self::new(ROOT_ARTIFACT_ID.to_string());
        pom.packaging = Some("pom");
        pom.modules = module_directories.into_iter().collect();
        pom
    }

    /// The pom of one module.
    ///
    /// External dependencies are declared without a version. Versioned ones
    /// are pinned in `<dependencyManagement>` through a
    /// `<groupId>.<artifactId>.version` property.
    pub fn for_module(module: &Module) -> Self {
        let mut pom = Self::new(artifact_id(module.name()));
        for dependency in module.dependencies() {
            match dependency {
                Dependency::External {
                    group_id,
                    artifact_id,
                    version,
                } => {
                    if let Some(version) = version {
                        let property = format!("{group_id}.{artifact_id}.version");
                        pom.managed.push(PomDependency {
                            group_id: group_id.clone(),
                            artifact_id: artifact_id.clone(),
                            version: Some(format!("${{{property}}}")),
                        });
                        pom.properties.insert(property, version.clone());
                    }
                    pom.dependencies.push(PomDependency {
                        group_id: group_id.clone(),
                        artifact_id: artifact_id.clone(),
                        version: None,
                    });
                }
                Dependency::Module(name) => pom.dependencies.push(PomDependency {
                    group_id: GROUP_ID.to_string(),
                    artifact_id: self::artifact_id(name),
                    version: Some("${project.version}".to_string()),
                }),
            }
        }
        pom
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // fmt::Write for String never fails.
        let _ = self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "{XML_HEADER}")?;
        writeln!(out, "{PROJECT_OPEN}")?;
        element(out, 1, "modelVersion", MODEL_VERSION)?;
        element(out, 1, "groupId", GROUP_ID)?;
        element(out, 1, "artifactId", &self.artifact_id)?;
        element(out, 1, "version", VERSION)?;
        if let Some(packaging) = self.packaging {
            element(out, 1, "packaging", packaging)?;
        }

        if !self.modules.is_empty() {
            open(out, 1, "modules")?;
            for module in &self.modules {
                element(out, 2, "module", module)?;
            }
            close(out, 1, "modules")?;
        }

        if !self.properties.is_empty() {
            open(out, 1, "properties")?;
            for (name, value) in &self.properties {
                element(out, 2, name, value)?;
            }
            close(out, 1, "properties")?;
        }

        if !self.managed.is_empty() {
            open(out, 1, "dependencyManagement")?;
            write_dependencies(out, 2, &self.managed)?;
            close(out, 1, "dependencyManagement")?;
        }

        if !self.dependencies.is_empty() {
            write_dependencies(out, 1, &self.dependencies)?;
        }

        writeln!(out, "</project>")
    }
}

fn write_dependencies(out: &mut String, depth: usize, deps: &[PomDependency]) -> fmt::Result {
    open(out, depth, "dependencies")?;
    for dep in deps {
        open(out, depth + 1, "dependency")?;
        element(out, depth + 2, "groupId", &dep.group_id)?;
        element(out, depth + 2, "artifactId", &dep.artifact_id)?;
        if let Some(version) = &dep.version {
            element(out, depth + 2, "version", version)?;
        }
        close(out, depth + 1, "dependency")?;
    }
    close(out, depth, "dependencies")
}

fn indent(out: &mut String, depth: usize) {
    out.push_str(&"  ".repeat(depth));
}

fn open(out: &mut String, depth: usize, tag: &str) -> fmt::Result {
    indent(out, depth);
    writeln!(out, "<{tag}>")
}

fn close(out: &mut String, depth: usize, tag: &str) -> fmt::Result {
    indent(out, depth);
    writeln!(out, "</{tag}>")
}

fn element(out: &mut String, depth: usize, tag: &str, text: &str) -> fmt::Result {
    indent(out, depth);
    writeln!(out, "<{tag}>{}</{tag}>", escape(text))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
