use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::exact;
    use crate::integer::integer;
    use crate::one_of::one_of;

    #[derive(Debug, PartialEq)]
    enum Operator {
        Add,
        Mul,
        Other(char),
    }

    #[test]
    fn test_map_char_to_enum() {
        let parser = one_of("+*-").map(|c| match c {
            '+' => Operator::Add,
            '*' => Operator::Mul,
            other => Operator::Other(other),
        });

        let (op, cursor) = parser.parse_str("* 19").unwrap();
        assert_eq!(op, Operator::Mul);
        assert_eq!(cursor.rest(), " 19");

        let (op, _) = parser.parse_str("-").unwrap();
        assert_eq!(op, Operator::Other('-'));
    }

    #[test]
    fn test_map_integer_to_string() {
        let parser = integer().map(|num| format!("Number: {}", num));

        let (result, cursor) = parser.parse_str("123").unwrap();
        assert_eq!(result, "Number: 123");
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_chaining() {
        let parser = integer().map(|n| n * 2).map(|n| n + 1);

        let (result, _) = parser.parse_str("20").unwrap();
        assert_eq!(result, 41);
    }

    #[test]
    fn test_map_preserves_errors() {
        let error = exact("old").map(|_| 0).parse_str("new").unwrap_err();
        assert_eq!(error.expected(), "old");
    }

    #[test]
    fn test_map_is_not_called_on_failure() {
        let parser = integer().map(|_| -> u64 { unreachable!("mapper must not run") });
        assert!(parser.parse_str("x").is_err());
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(exact("9"), |s: &str| s.len());

        let (len, cursor) = parser.parse_str("9").unwrap();
        assert_eq!(len, 1);
        assert!(cursor.eos());
    }
}
