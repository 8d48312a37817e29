//! Top level statements and whole documents.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::{CharStream, Expression};
use crate::errors::{ReadError, SyntaxError};

/// Line terminator appended after every statement.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// One top level expression, written on its own line.
#[derive(Debug, Clone)]
pub struct Statement {
    expression: Arc<dyn Expression>,
}

impl Statement {
    pub fn new(expression: Arc<dyn Expression>) -> Self {
        Self { expression }
    }
}

impl Expression for Statement {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.expression.write(out)?;
        out.write_str(LINE_SEPARATOR)
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        // no need to read the line separator, whitespace is skipped by the
        // next token read
        self.expression.read(stream)
    }
}

/// An ordered sequence of statements. The order is the document's schema:
/// statements are written and expected back in exactly this order.
#[derive(Debug, Clone, Default)]
pub struct Code {
    statements: Vec<Statement>,
}

impl Code {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Renders the whole document.
    pub fn to_text(&self) -> String {
        super::to_text(self)
    }

    /// Reads a document held in memory.
    pub fn read_str(&self, source: &str) -> Result<(), SyntaxError> {
        self.read(&mut CharStream::new(source))
    }

    pub fn write_to_path(&self, path: &Path) -> io::Result<()> {
        debug!(path = %path.display(), "writing bazel file");
        fs::write(path, self.to_text())
    }

    pub fn read_from_path(&self, path: &Path) -> Result<(), ReadError> {
        let source = fs::read_to_string(path)?;
        self.read_str(&source)
            .map_err(|e| ReadError::syntax(path.display().to_string(), source, e))
    }
}

impl Expression for Code {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for statement in &self.statements {
            statement.write(out)?;
        }
        Ok(())
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        for statement in &self.statements {
            statement.read(stream)?;
        }
        Ok(())
    }
}
