//! packagetest error handling.
//!
//! Grammar failures and I/O failures are kept apart: every divergence between a
//! fragment and the expected grammar shape is a [`SyntaxError`], while reading
//! or writing files surfaces as [`ReadError::Io`] or [`ExportError::Io`].
//! All types derive `miette::Diagnostic` so the CLI can render them with source
//! snippets.

use std::io;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// SYNTAX ERRORS - token level failures of the fragment grammar
// ============================================================================

/// What went wrong while reading a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("expected {expected} but found end of stream")]
    UnexpectedEnd { expected: String },

    #[error("expected '{expected}' but found '{found}'")]
    UnexpectedChar { expected: char, found: char },

    #[error("invalid identifier start: {found}")]
    InvalidIdentifierStart { found: char },

    #[error("expected {what} {expected} but found {found}")]
    ValueMismatch {
        what: &'static str,
        expected: String,
        found: String,
    },

    #[error("expected {what} of size {expected} but found {found}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid end of function call '{found}'")]
    InvalidCallEnd { found: char },
}

/// A fragment diverged from the grammar shape or from a bound expectation.
///
/// `offset` is the byte offset in the fragment where the divergence was
/// detected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(packagetest::syntax))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// A zero-length span at the failure offset, for diagnostics.
    pub fn span(&self) -> SourceSpan {
        SourceSpan::from((self.offset, 0))
    }
}

// ============================================================================
// READ ERRORS - reading a whole document from a file or reader
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(packagetest::io))]
    Io(#[from] io::Error),

    #[error("syntax error in {file}: {error}")]
    #[diagnostic(code(packagetest::syntax))]
    Syntax {
        file: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
        #[source]
        error: SyntaxError,
    },
}

impl ReadError {
    /// Attaches the document name and contents to a grammar failure.
    pub fn syntax(file: impl Into<String>, contents: impl Into<String>, error: SyntaxError) -> Self {
        let file = file.into();
        Self::Syntax {
            src: NamedSource::new(file.clone(), contents.into()),
            span: error.span(),
            file,
            error,
        }
    }

    /// The underlying grammar failure, if this is not an I/O error.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            ReadError::Syntax { error, .. } => Some(error),
            ReadError::Io(_) => None,
        }
    }
}

// ============================================================================
// EXPORT ERRORS - the project export pipeline
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("I/O error at {}: {source}", path.display())]
    #[diagnostic(code(packagetest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    #[diagnostic(code(packagetest::io))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid module: {reason}")]
    #[diagnostic(code(packagetest::module))]
    InvalidModule { reason: String },

    #[error("unexpected content in {fragment} of module '{module}'")]
    #[diagnostic(code(packagetest::verify))]
    Verify {
        module: String,
        fragment: String,
        #[source]
        #[diagnostic_source]
        source: ReadError,
    },

    #[error("file {fragment} was not written for module '{module}'")]
    #[diagnostic(code(packagetest::verify))]
    NotWritten { module: String, fragment: String },

    #[error("invalid manifest {}: {reason}", path.display())]
    #[diagnostic(
        code(packagetest::manifest),
        help("manifests are JSON (.json) or YAML (.yaml, .yml) files")
    )]
    Manifest { path: PathBuf, reason: String },
}

/// Builds a `map_err` adapter that tags an I/O failure with its path.
pub fn io_at(path: &Path) -> impl FnOnce(io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

// ============================================================================
// CLI ERRORS
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] ExportError),

    #[error("cannot tell which bazel document {} is", path.display())]
    #[diagnostic(
        code(packagetest::document),
        help("name the file BUILD, BUILD.bazel or MODULE.bazel")
    )]
    UnknownDocument { path: PathBuf },

    #[error("failed to write output: {0}")]
    #[diagnostic(code(packagetest::output))]
    Io(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_messages_name_both_values() {
        let err = SyntaxError::new(
            SyntaxErrorKind::ValueMismatch {
                what: "identifier",
                expected: "bar".into(),
                found: "foo".into(),
            },
            0,
        );
        assert_eq!(err.to_string(), "expected identifier bar but found foo");
    }

    #[test]
    fn read_error_keeps_syntax_error() {
        let inner = SyntaxError::new(SyntaxErrorKind::InvalidCallEnd { found: ']' }, 12);
        let err = ReadError::syntax("BUILD.bazel", "java_library(]", inner.clone());
        assert_eq!(err.syntax_error(), Some(&inner));
        assert!(err.to_string().contains("BUILD.bazel"));
    }
}
