use std::fmt;

use unicode_xid::UnicodeXID;

use super::{CharStream, Expression, Slot};
use crate::errors::{SyntaxError, SyntaxErrorKind};

/// A bare name such as `java_library`, `maven` or `True`.
#[derive(Debug, Clone)]
pub struct Identifier {
    value: Slot<String>,
}

impl Identifier {
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

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

// `_` is not XID_Start, but Bazel identifiers may begin with it.
fn is_identifier_start(c: char) -> bool {
    UnicodeXID::is_xid_start(c) || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    UnicodeXID::is_xid_continue(c)
}

impl Expression for Identifier {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(self.value.bound("identifier"))
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        let first = stream.next()?;
        let start = stream.offset() - first.len_utf8();
        if !is_identifier_start(first) {
            return Err(stream.error_at_last(
                first,
                SyntaxErrorKind::InvalidIdentifierStart { found: first },
            ));
        }

        let mut read = String::from(first);
        while let Some(c) = stream.read_char() {
            if !is_identifier_part(c) {
                // belongs to the next token
                stream.unread(c);
                break;
            }
            read.push(c);
        }

        if let Some(expected) = self.value.get() {
            if *expected != read {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::ValueMismatch {
                        what: "identifier",
                        expected: expected.clone(),
                        found: read,
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
