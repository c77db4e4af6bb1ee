use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact literal
///
/// On success the output is the matched slice of the input, which is always
/// equal to the literal.
#[derive(Debug, Clone)]
pub struct Exact {
    expected: Cow<'static, str>,
}

impl Exact {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Exact {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        if !rest.starts_with(self.expected.as_ref()) {
            return Err(ParseError::new(self.expected.clone(), cursor));
        }

        let len = self.expected.len();
        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Convenience function to create an Exact parser
pub fn exact(expected: impl Into<Cow<'static, str>>) -> Exact {
    Exact::new(expected)
}
