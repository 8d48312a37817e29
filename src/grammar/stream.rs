//! Character stream with one character of pushback.
//!
//! Every reader in the grammar pulls characters from a [`CharStream`]. Lookahead
//! is done by reading a character and pushing it back with [`CharStream::unread`]
//! when it belongs to the next token.

use std::str::Chars;

use crate::errors::{SyntaxError, SyntaxErrorKind};

#[derive(Debug, Clone)]
pub struct CharStream<'a> {
    chars: Chars<'a>,
    pushback: Option<char>,
    // Byte offset of the next character to be returned.
    offset: usize,
}

impl<'a> CharStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            pushback: None,
            offset: 0,
        }
    }

    /// Byte offset of the next character to be returned.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reads one raw character, whitespace included.
    pub fn read_char(&mut self) -> Option<char> {
        let c = self.pushback.take().or_else(|| self.chars.next())?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Pushes `c` back so the next read returns it again.
    ///
    /// # Panics
    ///
    /// Only one character of pushback is supported; unreading twice in a row
    /// is a bug in the calling reader.
    pub fn unread(&mut self, c: char) {
        assert!(
            self.pushback.is_none(),
            "CharStream supports a single character of pushback"
        );
        self.offset -= c.len_utf8();
        self.pushback = Some(c);
    }

    /// Skips whitespace and returns the first non whitespace character.
    pub fn next(&mut self) -> Result<char, SyntaxError> {
        while let Some(c) = self.read_char() {
            if !c.is_whitespace() {
                return Ok(c);
            }
        }

        Err(self.end_of_stream("non whitespace char"))
    }

    /// Like [`CharStream::next`], but the character must be `expected`.
    pub fn expect_next(&mut self, expected: char) -> Result<(), SyntaxError> {
        let found = self.next()?;
        if found == expected {
            return Ok(());
        }

        Err(self.error_at_last(found, SyntaxErrorKind::UnexpectedChar { expected, found }))
    }

    /// Returns the next non whitespace character without consuming it.
    pub fn peek(&mut self) -> Result<char, SyntaxError> {
        let c = self.next()?;
        self.unread(c);
        Ok(c)
    }

    pub fn end_of_stream(&self, expected: &str) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::UnexpectedEnd {
                expected: expected.to_string(),
            },
            self.offset,
        )
    }

    /// An error located at `last`, the character that was just consumed.
    pub fn error_at_last(&self, last: char, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.offset - last.len_utf8())
    }
}
