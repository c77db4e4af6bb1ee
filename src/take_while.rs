use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes the longest leading run of chars satisfying a
/// predicate
///
/// This parser never fails. When the first char does not match (or the
/// input is empty) it succeeds with an empty slice and consumes nothing.
pub struct TakeWhile<F> {
    predicate: F,
}

impl<F> TakeWhile<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let rest = cursor.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !(self.predicate)(c))
            .map_or(rest.len(), |(i, _)| i);

        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<F>(predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate)
}
