//! On-disk layout shared by every exporter.
//!
//! ```text
//! root
//!  - <moduledir>                     module name without its dots
//!    - src/main/java/<package>/...   sources
//!    - src/test/java/<package>/...   files named like `*Test.java`
//! ```

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ExportError, ExportResult};
use crate::project::Module;

pub const MAIN_DIRECTORY: &str = "src/main/java";
pub const TEST_DIRECTORY: &str = "src/test/java";

static TEST_FILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.+Test\.java$").expect("test file pattern is valid")
});

/// `an.awesome.module` lives in `anawesomemodule`.
pub fn module_directory(module: &str) -> String {
    module.replace('.', "")
}

/// The package path of a module, `an/awesome/module`.
pub fn package_path(module: &str) -> String {
    module.replace('.', "/")
}

pub fn is_test_file(fragment: &str) -> bool {
    TEST_FILE_RE.is_match(fragment)
}

/// Path of `fragment` relative to the export root.
pub fn relative_path(module: &str, fragment: &str) -> PathBuf {
    let source_root = if is_test_file(fragment) {
        TEST_DIRECTORY
    } else {
        MAIN_DIRECTORY
    };
    Path::new(&module_directory(module))
        .join(source_root)
        .join(package_path(module))
        .join(fragment)
}

pub fn file_path(root: &Path, module: &str, fragment: &str) -> ExportResult<PathBuf> {
    if module.is_empty() {
        return Err(ExportError::InvalidModule {
            reason: "module name should not be empty".to_string(),
        });
    }
    if fragment.is_empty() {
        return Err(ExportError::InvalidModule {
            reason: format!("module '{module}' has a file with an empty path fragment"),
        });
    }
    Ok(root.join(relative_path(module, fragment)))
}

/// Rejects modules that cannot be laid out before anything is written.
pub fn validate(modules: &[Module]) -> ExportResult<()> {
    for module in modules {
        if module.name().is_empty() {
            return Err(ExportError::InvalidModule {
                reason: "module name should not be empty".to_string(),
            });
        }
        for file in module.files() {
            file_path(Path::new(""), module.name(), file.fragment())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::File;

    #[test]
    fn sources_and_tests_are_split() {
        assert_eq!(
            relative_path("an.awesome.module", "a/A.java"),
            Path::new("anawesomemodule/src/main/java/an/awesome/module/a/A.java")
        );
        assert_eq!(
            relative_path("an.awesome.module", "a/ATest.java"),
            Path::new("anawesomemodule/src/test/java/an/awesome/module/a/ATest.java")
        );
    }

    #[test]
    fn test_pattern_needs_a_prefix() {
        assert!(is_test_file("FooTest.java"));
        assert!(!is_test_file("Test.java"));
        assert!(!is_test_file("FooTest.java.bak"));
        assert!(!is_test_file("Testing.java"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let root = Path::new("/root");
        assert!(matches!(
            file_path(root, "", "A.java"),
            Err(ExportError::InvalidModule { .. })
        ));
        assert!(matches!(
            file_path(root, "a", ""),
            Err(ExportError::InvalidModule { .. })
        ));

        let nameless = Module::named("");
        assert!(validate(&[nameless]).is_err());
        let empty_fragment = Module::named("a").containing([File::new("", "")]);
        assert!(validate(&[empty_fragment]).is_err());
        assert!(validate(&[Module::named("a")]).is_ok());
    }
}
