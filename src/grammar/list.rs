use std::fmt;

use super::{to_text, CharStream, Expression, Slot};
use crate::errors::{SyntaxError, SyntaxErrorKind};

/// A bracketed, comma separated list: `["a","b",]`.
///
/// Elements are read through fresh captures built by `factory`. A literal list
/// checks the parsed elements against its own, ignoring order.
#[derive(Debug, Clone)]
pub struct List<T> {
    factory: fn() -> T,
    elements: Slot<Vec<T>>,
}

impl<T: Expression + PartialEq> List<T> {
    pub fn new(factory: fn() -> T, elements: Vec<T>) -> Self {
        Self {
            factory,
            elements: Slot::literal(elements),
        }
    }

    pub fn capture(factory: fn() -> T) -> Self {
        Self {
            factory,
            elements: Slot::capture(),
        }
    }

    pub fn elements(&self) -> Option<&[T]> {
        self.elements.get().map(Vec::as_slice)
    }

    fn verify(&self, expected: &[T], found: &[T], start: usize) -> Result<(), SyntaxError> {
        if expected.len() != found.len() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::SizeMismatch {
                    what: "list",
                    expected: expected.len(),
                    found: found.len(),
                },
                start,
            ));
        }

        let mut matched = vec![false; expected.len()];
        for element in found {
            let slot = expected
                .iter()
                .enumerate()
                .position(|(i, e)| !matched[i] && e == element);
            match slot {
                Some(i) => matched[i] = true,
                None => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::ValueMismatch {
                            what: "list element among",
                            expected: expected.iter().map(to_text).collect::<Vec<_>>().join(","),
                            found: to_text(element),
                        },
                        start,
                    ))
                }
            }
        }

        Ok(())
    }
}

/// Consumes the separator before another element, if there is one. A comma
/// directly followed by `]` is a trailing comma and ends the list.
fn has_next_element(stream: &mut CharStream<'_>) -> Result<bool, SyntaxError> {
    let next = stream.next()?;
    if next != ',' {
        stream.unread(next);
        return Ok(false);
    }

    Ok(stream.peek()? != ']')
}

impl<T: Expression + PartialEq> Expression for List<T> {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_char('[')?;
        for element in self.elements.bound("list") {
            element.write(out)?;
            out.write_char(',')?;
        }
        out.write_char(']')
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        stream.expect_next('[')?;
        let start = stream.offset() - 1;

        let mut read = Vec::new();
        if stream.peek()? != ']' {
            loop {
                let element = (self.factory)();
                element.read(stream)?;
                read.push(element);
                if !has_next_element(stream)? {
                    break;
                }
            }
        }
        stream.expect_next(']')?;

        if let Some(expected) = self.elements.get() {
            return self.verify(expected, &read, start);
        }

        self.elements.fill(read);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::StringLiteral;

    fn values(list: &List<StringLiteral>) -> Vec<&str> {
        list.elements()
            .unwrap()
            .iter()
            .filter_map(StringLiteral::value)
            .collect()
    }

    fn literal(values: &[&str]) -> List<StringLiteral> {
        List::new(
            StringLiteral::capture,
            values.iter().copied().map(StringLiteral::new).collect(),
        )
    }

    #[test]
    fn test_read() {
        let mut s = CharStream::new("[\"//pkg1:target1\",\"//pkg2:target2\"]");
        let l = List::capture(StringLiteral::capture);
        l.read(&mut s).unwrap();

        assert_eq!(values(&l), vec!["//pkg1:target1", "//pkg2:target2"]);
    }

    #[test]
    fn test_read_with_whitespace() {
        let mut s = CharStream::new("  [\n  \"//pkg1:target1\",\n  \"//pkg2:target2\"\n ]");
        let l = List::capture(StringLiteral::capture);
        l.read(&mut s).unwrap();

        assert_eq!(values(&l), vec!["//pkg1:target1", "//pkg2:target2"]);
    }

    #[test]
    fn test_trailing_comma_is_tolerated() {
        let with = List::capture(StringLiteral::capture);
        with.read(&mut CharStream::new("[\"a\",\"b\",]")).unwrap();
        let without = List::capture(StringLiteral::capture);
        without.read(&mut CharStream::new("[\"a\",\"b\"]")).unwrap();

        assert_eq!(values(&with), vec!["a", "b"]);
        assert_eq!(values(&with), values(&without));
    }

    #[test]
    fn test_empty_list() {
        let l = List::capture(StringLiteral::capture);
        l.read(&mut CharStream::new("[ ]")).unwrap();
        assert!(l.elements().unwrap().is_empty());
        assert_eq!(to_text(&l), "[]");
    }

    #[test]
    fn test_literal_ignores_order() {
        let l = literal(&["b", "a"]);
        l.read(&mut CharStream::new("[\"a\",\"b\",]")).unwrap();
    }

    #[test]
    fn test_literal_size_mismatch() {
        let err = literal(&["a"])
            .read(&mut CharStream::new("[\"a\",\"b\"]"))
            .unwrap_err();
        assert_eq!(err.to_string(), "expected list of size 1 but found 2");
    }

    #[test]
    fn test_literal_value_mismatch() {
        let err = literal(&["a", "a"])
            .read(&mut CharStream::new("[\"a\",\"b\"]"))
            .unwrap_err();
        assert!(matches!(err.kind, SyntaxErrorKind::ValueMismatch { .. }));
        assert!(err.to_string().contains("\"b\""));
    }

    #[test]
    fn test_missing_bracket() {
        let err = List::capture(StringLiteral::capture)
            .read(&mut CharStream::new("[\"a\" \"b\"]"))
            .unwrap_err();
        assert_eq!(err.to_string(), "expected ']' but found '\"'");
    }

    #[test]
    fn test_write() {
        assert_eq!(to_text(&literal(&["a", "b"])), "[\"a\",\"b\",]");
    }
}
