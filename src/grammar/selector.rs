use std::fmt;

use super::{CharStream, Expression, Identifier, Slot};
use crate::errors::{SyntaxError, SyntaxErrorKind};

/// A dotted chain of identifiers, e.g. `maven.install`.
#[derive(Debug, Clone)]
pub struct Selector {
    identifiers: Slot<Vec<Identifier>>,
}

impl Selector {
    pub fn new(identifiers: Vec<Identifier>) -> Self {
        Self {
            identifiers: Slot::literal(identifiers),
        }
    }

    /// Splits `path` on dots: `"maven.install"` gives two segments.
    pub fn parse(path: &str) -> Self {
        Self::new(path.split('.').map(Identifier::new).collect())
    }

    pub fn capture() -> Self {
        Self {
            identifiers: Slot::capture(),
        }
    }

    pub fn identifiers(&self) -> Option<&[Identifier]> {
        self.identifiers.get().map(Vec::as_slice)
    }
}

impl Expression for Selector {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for (i, id) in self.identifiers.bound("selector").iter().enumerate() {
            if i > 0 {
                out.write_char('.')?;
            }
            id.write(out)?;
        }
        Ok(())
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        let start = stream.offset();
        let mut read = Vec::new();
        loop {
            let id = Identifier::capture();
            id.read(stream)?;
            read.push(id);

            let next = stream.next()?;
            if next != '.' {
                // One character too far, put it back
                stream.unread(next);
                break;
            }
        }

        let Some(expected) = self.identifiers.get() else {
            self.identifiers.fill(read);
            return Ok(());
        };

        if expected.len() != read.len() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::SizeMismatch {
                    what: "selector",
                    expected: expected.len(),
                    found: read.len(),
                },
                start,
            ));
        }
        for (want, got) in expected.iter().zip(&read) {
            if want != got {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::ValueMismatch {
                        what: "selector segment",
                        expected: want.value().unwrap_or_default().to_string(),
                        found: got.value().unwrap_or_default().to_string(),
                    },
                    start,
                ));
            }
        }
        Ok(())
    }
}
