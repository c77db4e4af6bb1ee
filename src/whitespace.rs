use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// ASCII whitespace: space, tab, newline, carriage return, vertical tab and
/// form feed
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Parser that consumes exactly `size` whitespace characters
///
/// Used for fixed indentation and single-space separators. It fails if fewer
/// than `size` characters remain or if any of them is not whitespace. It
/// never consumes more than `size`, so `whitespace(1)` on `"  x"` leaves
/// `" x"`.
#[derive(Debug, Clone, Copy)]
pub struct Whitespace {
    size: usize,
}

impl Whitespace {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl<'code> Parser<'code> for Whitespace {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let mut len = 0;

        for c in rest.chars().take(self.size) {
            if !is_whitespace(c) {
                return Err(ParseError::new(" ".repeat(self.size), cursor));
            }
            len += c.len_utf8();
        }

        // Ran out of input before `size` characters
        if len < self.size {
            return Err(ParseError::new(" ".repeat(self.size), cursor));
        }

        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Convenience function to create a Whitespace parser
pub fn whitespace(size: usize) -> Whitespace {
    Whitespace::new(size)
}
