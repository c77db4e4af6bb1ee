use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between a leading and a trailing parser
///
/// This is a generic combinator that parses `before + inner + after` and
/// returns just the `inner` value with the surrounding results discarded.
/// The three parsers run strictly in order and the first failure is
/// returned as-is; nothing after a failing parser is invoked.
///
/// # Examples
/// - `"[42]"` → `42`
/// - `"Monkey 0:\n"` with `"Monkey "` and `":\n"` → `0`
pub struct Delimited<B, P, A> {
    before: B,
    inner: P,
    after: A,
}

impl<B, P, A> Delimited<B, P, A> {
    pub fn new(before: B, inner: P, after: A) -> Self {
        Delimited {
            before,
            inner,
            after,
        }
    }
}

impl<'code, B, P, A> Parser<'code> for Delimited<B, P, A>
where
    B: Parser<'code>,
    P: Parser<'code>,
    A: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.before.parse(cursor)?;
        let (value, cursor) = self.inner.parse(cursor)?;
        let (_, cursor) = self.after.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Delimited parser
pub fn delimited<'code, B, P, A>(before: B, inner: P, after: A) -> Delimited<B, P, A>
where
    B: Parser<'code>,
    P: Parser<'code>,
    A: Parser<'code>,
{
    Delimited::new(before, inner, after)
}

/// Extension trait to add .delimited_by() method support for parsers
pub trait DelimitedExt<'code>: Parser<'code> + Sized {
    fn delimited_by<B, A>(self, before: B, after: A) -> Delimited<B, Self, A>
    where
        B: Parser<'code>,
        A: Parser<'code>,
    {
        Delimited::new(before, self, after)
    }
}

/// Implement DelimitedExt for all parsers
impl<'code, P> DelimitedExt<'code> for P where P: Parser<'code> {}
