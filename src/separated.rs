use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that matches a list of items separated by a literal
///
/// This combinator parses one item unconditionally, then keeps going for as
/// long as the remaining input starts with the separator. It returns a
/// vector of all items.
///
/// # Examples
/// - `"79, 98"` with separator `", "` → `vec![79, 98]`
/// - `"1;2;3"` with separator `";"` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one item
/// - Once a separator has been consumed, the next item is required, so a
///   trailing separator is an error
/// - Does not handle whitespace around the separator
/// - Stops when a separator plus item consumes no input
pub struct Separated<P> {
    parser: P,
    separator: Cow<'static, str>,
}

impl<P> Separated<P> {
    pub fn new(parser: P, separator: impl Into<Cow<'static, str>>) -> Self {
        Separated {
            parser,
            separator: separator.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Separated<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        let (first, mut cursor) = self.parser.parse(cursor)?;
        results.push(first);

        // A missing separator ends the list, it is not an error
        while cursor.starts_with(&self.separator) {
            let after_separator = cursor.advance(self.separator.len());
            let (value, next) = self.parser.parse(after_separator)?;
            // An empty separator and an empty item would repeat forever
            if next == cursor {
                break;
            }
            results.push(value);
            cursor = next;
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given
/// literal
pub fn separated<'code, P>(parser: P, separator: impl Into<Cow<'static, str>>) -> Separated<P>
where
    P: Parser<'code>,
{
    Separated::new(parser, separator)
}

/// Extension trait to add .separated_by() method support for parsers
pub trait SeparatedExt<'code>: Parser<'code> + Sized {
    fn separated_by(self, separator: impl Into<Cow<'static, str>>) -> Separated<Self> {
        Separated::new(self, separator)
    }
}

/// Implement SeparatedExt for all parsers
impl<'code, P> SeparatedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::integer;
    use crate::one_of::one_of;
    use crate::take_while::take_while;

    #[test]
    fn test_multiple_items() {
        let (items, cursor) = separated(integer(), ", ").parse_str("1, 2, 3").unwrap();
        assert_eq!(items, vec![1, 2, 3]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_single_item() {
        let (items, cursor) = separated(integer(), ", ").parse_str("42\n").unwrap();
        assert_eq!(items, vec![42]);
        assert_eq!(cursor.rest(), "\n");
    }

    #[test]
    fn test_empty_input_fails() {
        let error = separated(integer(), ", ").parse_str("").unwrap_err();
        assert_eq!(error.expected(), "integer");
    }

    #[test]
    fn test_first_item_failure_propagates() {
        let error = separated(integer(), ",").parse_str("x,1").unwrap_err();
        assert_eq!(error.expected(), "integer");
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_trailing_separator_fails() {
        let error = separated(integer(), ",").parse_str("1,2,").unwrap_err();
        assert_eq!(error.expected(), "integer");
        assert_eq!(error.position(), 4);
    }

    #[test]
    fn test_partial_separator_ends_list() {
        // "," alone is not the full ", " separator
        let (items, cursor) = separated(integer(), ", ").parse_str("1, 2,3").unwrap();
        assert_eq!(items, vec![1, 2]);
        assert_eq!(cursor.rest(), ",3");
    }

    #[test]
    fn test_non_matching_separator() {
        let (items, cursor) = separated(integer(), ",").parse_str("1;2;3").unwrap();
        assert_eq!(items, vec![1]);
        assert_eq!(cursor.rest(), ";2;3");
    }

    #[test]
    fn test_with_remaining_content() {
        let (items, cursor) = separated(integer(), ", ")
            .parse_str("79, 98\n  Operation")
            .unwrap();
        assert_eq!(items, vec![79, 98]);
        assert_eq!(cursor.rest(), "\n  Operation");
    }

    #[test]
    fn test_multi_char_separator() {
        let (items, _) = separated(one_of("abc"), "::").parse_str("a::b::c").unwrap();
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_no_progress_terminates() {
        let (items, cursor) = separated(take_while(|c| c == 'a'), "").parse_str("aab").unwrap();
        assert_eq!(items, vec!["aa"]);
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_method_syntax() {
        let (items, cursor) = integer().separated_by("-").parse_str("10-20").unwrap();
        assert_eq!(items, vec![10, 20]);
        assert!(cursor.eos());
    }
}
