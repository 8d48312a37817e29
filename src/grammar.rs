//! Reader/writer engine for Bazel `BUILD` and `MODULE` fragments.
//!
//! The grammar is a fixed subset of Starlark: function calls, keyword
//! assignments, lists, string literals and dotted identifiers. There are no
//! comments, operators or comprehensions.
//!
//! Every node implements [`Expression`] and can be used in two directions:
//!
//! - **write**: serialize the node deterministically;
//! - **read**: parse a fragment, checking it against the values the node was
//!   built with, or capturing them when it was built empty.
//!
//! Which of the two happens for a given leaf is decided by its [`Slot`]: a
//! [`Slot::Literal`] is an exact expectation, a [`Slot::Capture`] is filled by
//! the first successful read.

use std::fmt;

use once_cell::sync::OnceCell;

use crate::errors::SyntaxError;

pub mod assignment;
pub mod call;
pub mod code;
pub mod identifier;
pub mod list;
pub mod selector;
pub mod stream;
pub mod string;

pub use assignment::Assignment;
pub use call::FunctionCall;
pub use code::{Code, Statement, LINE_SEPARATOR};
pub use identifier::Identifier;
pub use list::List;
pub use selector::Selector;
pub use stream::CharStream;
pub use string::StringLiteral;

// ============================================================================
// EXPRESSION CONTRACT
// ============================================================================

/// A node of the fragment grammar.
pub trait Expression: fmt::Debug + Send + Sync {
    /// Serializes the node.
    ///
    /// # Panics
    ///
    /// Writing a node that still holds an empty capture is a programming
    /// error and panics.
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Reads the node from `stream`, verifying literals and filling captures.
    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError>;
}

/// Renders an expression into a fresh `String`.
pub fn to_text<E: Expression + ?Sized>(expr: &E) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails.
    let _ = expr.write(&mut out);
    out
}

// ============================================================================
// LITERAL / CAPTURE SLOTS
// ============================================================================

/// The value held by a leaf node.
#[derive(Debug, Clone)]
pub enum Slot<T> {
    /// A known value: written as is, asserted while reading.
    Literal(T),
    /// An unknown value, set by the first successful read.
    Capture(OnceCell<T>),
}

impl<T> Slot<T> {
    pub fn literal(value: T) -> Self {
        Slot::Literal(value)
    }

    pub fn capture() -> Self {
        Slot::Capture(OnceCell::new())
    }

    /// The literal value, or the captured one once it has been read.
    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Literal(value) => Some(value),
            Slot::Capture(cell) => cell.get(),
        }
    }

    /// Stores `value` into an empty capture. Bound slots are left untouched.
    pub fn fill(&self, value: T) {
        if let Slot::Capture(cell) = self {
            let _ = cell.set(value);
        }
    }

    /// The value to write.
    ///
    /// # Panics
    ///
    /// Panics when the slot is an empty capture.
    pub fn bound(&self, what: &str) -> &T {
        match self.get() {
            Some(value) => value,
            None => panic!("cannot write {what}: it is a capture that has not been read"),
        }
    }
}
