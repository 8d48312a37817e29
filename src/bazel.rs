//! Bazel documents built on top of the fragment grammar.
//!
//! Both documents have a fixed statement skeleton. Their builders decide which
//! leaves are literals (to write, or to verify while reading) and which are
//! captures (to collect values from an existing file).

pub mod build_file;
pub mod module_file;

pub use build_file::{BuildFile, BuildFileBuilder};
pub use module_file::{ModuleFile, ModuleFileBuilder, RULES_JVM_EXTERNAL_VERSION};

use crate::grammar::{List, StringLiteral};

/// A list of string literals, or a capture when `values` is `None`.
pub(crate) fn string_list<I, S>(values: Option<I>) -> List<StringLiteral>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match values {
        Some(values) => List::new(
            StringLiteral::capture,
            values.into_iter().map(StringLiteral::new).collect(),
        ),
        None => List::capture(StringLiteral::capture),
    }
}

/// The string values held by a list, once bound.
pub(crate) fn string_values(list: &List<StringLiteral>) -> Option<Vec<&str>> {
    list.elements()
        .map(|elements| elements.iter().filter_map(StringLiteral::value).collect())
}
