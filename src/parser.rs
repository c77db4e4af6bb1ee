use crate::cursor::Cursor;
use crate::error::ParseError;

/// Outcome of a single parser invocation: the parsed value and the remaining
/// input, or the first failure.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), ParseError<'code>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the cursor past it on success.
    /// On failure the caller still holds the cursor it passed in and may
    /// retry something else from there.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Parse from the start of `input`
    fn parse_str(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(Cursor::new(input))
    }
}

/// Plain functions and closures are parsers, so grammar rules can be written
/// as `fn rule(cursor: Cursor) -> ParseResult<Rule>`.
impl<'code, F, O> Parser<'code> for F
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        self(cursor)
    }
}
