use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::take_while::take_while;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Zero digits is a failure rather than a zero value, so a grammar that
/// expects a number never silently accepts a missing one. A run of digits
/// too large for u64 also fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl<'code> Parser<'code> for Integer {
    type Output = u64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (digits, next) = take_while(|c| c.is_ascii_digit()).parse(cursor)?;

        if digits.is_empty() {
            return Err(ParseError::new("integer", cursor));
        }

        match digits.parse::<u64>() {
            Ok(value) => Ok((value, next)),
            Err(_) => Err(ParseError::new("integer that fits in 64 bits", cursor)),
        }
    }
}

/// Convenience function to create an Integer parser
pub fn integer() -> Integer {
    Integer
}
