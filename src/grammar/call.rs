use std::fmt;
use std::sync::Arc;

use super::{CharStream, Expression, Selector};
use crate::errors::{SyntaxError, SyntaxErrorKind};

/// A call such as `glob(["src/**/*.java"])`.
///
/// The arguments are fixed when the call is built: reading checks that exactly
/// these arguments appear, in this order. There are no optional or variadic
/// arguments in the supported grammar.
#[derive(Debug, Clone)]
pub struct FunctionCall {
    selector: Selector,
    arguments: Vec<Arc<dyn Expression>>,
}

impl FunctionCall {
    /// `name` may be dotted, e.g. `"maven.install"`.
    pub fn new(name: &str, arguments: Vec<Arc<dyn Expression>>) -> Self {
        Self::with_selector(Selector::parse(name), arguments)
    }

    pub fn with_selector(selector: Selector, arguments: Vec<Arc<dyn Expression>>) -> Self {
        Self {
            selector,
            arguments,
        }
    }
}

impl Expression for FunctionCall {
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.selector.write(out)?;
        out.write_char('(')?;
        for arg in &self.arguments {
            arg.write(out)?;
            out.write_char(',')?;
        }
        out.write_char(')')
    }

    fn read(&self, stream: &mut CharStream<'_>) -> Result<(), SyntaxError> {
        self.selector.read(stream)?;
        stream.expect_next('(')?;

        let last = self.arguments.len().saturating_sub(1);
        for (i, arg) in self.arguments.iter().enumerate() {
            arg.read(stream)?;
            if i != last {
                stream.expect_next(',')?;
            }
        }

        // We can end with `)`, or with `,)`
        match stream.next()? {
            ',' => stream.expect_next(')'),
            ')' => Ok(()),
            found => Err(stream.error_at_last(found, SyntaxErrorKind::InvalidCallEnd { found })),
        }
    }
}
