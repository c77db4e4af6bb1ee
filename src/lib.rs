//! # strcomb - Parser Combinators over Text
//!
//! A small parser combinator library for puzzle inputs: fixed-layout record
//! blocks, separated number lists and tiny expressions.
//!
//! Every parser is a value implementing [`Parser`], which takes a [`Cursor`]
//! over the remaining input and returns the parsed value together with a new
//! cursor, or a [`ParseError`]. The library emphasizes:
//!
//! - **Zero panics**: malformed input is an ordinary `Err`, never a crash
//! - **Readable errors**: what was expected, plus a short preview of the input
//! - **Composability**: small parsers combine into larger ones
//! - **Explicit backtracking**: there is no alternation combinator; cursors
//!   are `Copy`, so a caller keeps the pre-attempt cursor and retries from it
//!
//! ```
//! use strcomb::{Cursor, ParseResult, Parser, exact, integer};
//!
//! #[derive(Debug, PartialEq)]
//! enum Operand {
//!     Old,
//!     Value(u64),
//! }
//!
//! fn operand(cursor: Cursor<'_>) -> ParseResult<'_, Operand> {
//!     match exact("old").parse(cursor) {
//!         Ok((_, cursor)) => Ok((Operand::Old, cursor)),
//!         // Retry from the cursor we had before trying "old"
//!         Err(_) => {
//!             let (value, cursor) = integer().parse(cursor)?;
//!             Ok((Operand::Value(value), cursor))
//!         }
//!     }
//! }
//!
//! let (value, rest) = operand.parse_str("19\n").unwrap();
//! assert_eq!(value, Operand::Value(19));
//! assert_eq!(rest.rest(), "\n");
//! ```

pub mod cursor;
pub mod delimited;
pub mod error;
pub mod exact;
pub mod integer;
pub mod map;
pub mod one_of;
pub mod parser;
pub mod separated;
pub mod take_while;
pub mod whitespace;

pub use cursor::Cursor;
pub use delimited::{Delimited, DelimitedExt, delimited};
pub use error::{CONTEXT_LIMIT, CodeLoc, ParseError, ReadablePosition};
pub use exact::{Exact, exact};
pub use integer::{Integer, integer};
pub use map::{Map, MapExt, map};
pub use one_of::{OneOf, one_of};
pub use parser::{ParseResult, Parser};
pub use separated::{Separated, SeparatedExt, separated};
pub use take_while::{TakeWhile, take_while};
pub use whitespace::{Whitespace, whitespace};
