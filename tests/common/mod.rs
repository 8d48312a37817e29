//! Shared fixtures: a two-module project with one external dependency.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use packagetest::{Dependency, Exported, File, Module, Repository};

pub const LOCAL_REPO: &str = "file:///home/packagetest/.m2/repository";
pub const CENTRAL_REPO: &str = "https://repo1.maven.org/maven2";

pub fn another_dependency() -> Dependency {
    Dependency::external("com.mycompany.app", "another-dependency", "1.0")
}

pub fn an_other_module() -> Module {
    Module::named("an.other.module")
        .containing([File::new("C.java", "package an.other.module;")])
}

pub fn an_awesome_module() -> Module {
    Module::named("an.awesome.module")
        .containing([
            File::new("a/A.java", "package an.awesome.module.a;"),
            File::new("a/ATest.java", "package an.awesome.module.a;"),
            File::new("b/B.java", "package an.awesome.module.b;"),
        ])
        .depending_on([
            Dependency::module("an.other.module"),
            another_dependency(),
        ])
}

pub fn modules() -> Vec<Module> {
    vec![an_awesome_module(), an_other_module()]
}

pub fn repositories() -> Vec<Repository> {
    vec![
        Repository::named("local").at(LOCAL_REPO),
        Repository::named("central").at(CENTRAL_REPO),
    ]
}

/// Asserts that `fragment` of `module` was written at `relative` below the
/// export root, and returns its path.
pub fn check_written<'a>(
    exported: &'a Exported,
    module: &str,
    fragment: &str,
    relative: &str,
) -> &'a Path {
    let path = exported
        .file(module, fragment)
        .unwrap_or_else(|| panic!("file {fragment} not written for module {module}"));
    assert_eq!(path, exported.root().join(relative));
    path
}

pub fn check_content(exported: &Exported, module: &str, fragment: &str, expected: &str) {
    let path = exported
        .file(module, fragment)
        .unwrap_or_else(|| panic!("file {fragment} not written for module {module}"));
    assert_eq!(fs::read_to_string(path).unwrap(), expected);
}

pub fn set<'a>(values: impl IntoIterator<Item = &'a str>) -> BTreeSet<&'a str> {
    values.into_iter().collect()
}
