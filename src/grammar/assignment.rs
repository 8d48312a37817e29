use std::fmt;
use std::sync::Arc;

use super::{CharStream, Expression, Identifier};
use crate::errors::SyntaxError;

/// A keyword assignment `name=<expression>`, used both for keyword arguments
/// and for top level bindings such as `maven = use_extension(...)`.
#[derive(Debug, Clone)]
pub struct Assignment {
    name: Identifier,
    value: Arc<dyn Expression>,
}

impl Assignment {
    pub fn new(name: &str, value: Arc<dyn Expression>) -> Self {
        Self {
            name: Identifier::new(name),
            value,
        }
    }
}

impl Expression for Assignment {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.name.write(out)?;
        out.write_char('=')?;
        self.value.write(out)
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        self.name.read(stream)?;
        stream.expect_next('=')?;
        self.value.read(stream)
    }
}
