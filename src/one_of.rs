use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches a single char from a set
#[derive(Debug, Clone)]
pub struct OneOf {
    chars: Cow<'static, str>,
}

impl OneOf {
    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl<'code> Parser<'code> for OneOf {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.rest().chars().next() {
            Some(c) if self.chars.contains(c) => Ok((c, cursor.advance(c.len_utf8()))),
            _ => Err(ParseError::new(self.chars.clone(), cursor)),
        }
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of(chars: impl Into<Cow<'static, str>>) -> OneOf {
    OneOf::new(chars)
}
