use std::fmt;

use super::{CharStream, Expression, Slot};
use crate::errors::{SyntaxError, SyntaxErrorKind};

/// A double quoted string. There is no escape processing: the first `"` after
/// the opening one ends the literal.
#[derive(Debug, Clone)]
pub struct StringLiteral {
    value: Slot<String>,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Slot::literal(value.into()),
        }
    }

    pub fn capture() -> Self {
        Self {
            value: Slot::capture(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.get().map(String::as_str)
    }
}

impl PartialEq for StringLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Expression for StringLiteral {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_char('"')?;
        out.write_str(self.value.bound("string"))?;
        out.write_char('"')
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        stream.expect_next('"')?;
        let start = stream.offset() - 1;

        let mut read = String::new();
        loop {
            match stream.read_char() {
                Some('"') => break,
                Some(c) => read.push(c),
                None => return Err(stream.end_of_stream("closing '\"'")),
            }
        }

        if let Some(expected) = self.value.get() {
            if *expected != read {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::ValueMismatch {
                        what: "string",
                        expected: format!("\"{expected}\""),
                        found: format!("\"{read}\""),
                    },
                    start,
                ));
            }
            return Ok(());
        }

        self.value.fill(read);
        Ok(())
    }
}
