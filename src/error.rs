use crate::cursor::Cursor;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Maximum number of characters of remaining input kept in an error preview
pub const CONTEXT_LIMIT: usize = 50;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Remaining input at this location
    pub fn rest(&self) -> &'code str {
        self.code.get(self.loc..).unwrap_or("")
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Byte offset is reported instead of a column because columns depend on
    /// encoding and rendering, while the offset is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = self.code.get(..self.loc).unwrap_or(self.code);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: before.len() - line_start,
        }
    }
}

/// Truncate `rest` to at most [`CONTEXT_LIMIT`] characters, replacing the
/// tail with an ellipsis when it is cut.
fn preview(rest: &str) -> String {
    if rest.chars().count() <= CONTEXT_LIMIT {
        return rest.to_string();
    }

    let mut context: String = rest.chars().take(CONTEXT_LIMIT - ELLIPSIS.len()).collect();
    context.push_str(ELLIPSIS);
    context
}

/// A failed parse
///
/// There is only one kind of failure: some parser required `expected` and the
/// input at the failure point did not provide it. A failure is an ordinary
/// outcome; callers decide whether to propagate it or try something else from
/// the cursor they held before the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected:?} in {context:?} at {}", DisplayLoc(.loc))]
pub struct ParseError<'code> {
    expected: Cow<'static, str>,
    context: String,
    loc: CodeLoc<'code>,
}

struct DisplayLoc<'a, 'code>(&'a CodeLoc<'code>);

impl fmt::Display for DisplayLoc<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.0.readable_position();
        write!(f, "line {}, byte offset {}", pos.line, pos.byte_offset)
    }
}

impl<'code> ParseError<'code> {
    pub fn new(expected: impl Into<Cow<'static, str>>, cursor: Cursor<'code>) -> Self {
        let expected = expected.into();
        let loc = cursor.loc();
        tracing::trace!(expected = %expected, position = loc.position(), "parse failed");

        ParseError {
            context: preview(loc.rest()),
            expected,
            loc,
        }
    }

    /// What the failing parser required
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Bounded preview of the unconsumed input where the failure happened
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        self.loc
    }

    /// Byte offset of the failure in the source
    pub fn position(&self) -> usize {
        self.loc.position()
    }

    /// Whether this failure happened exactly at `cursor`, i.e. without any
    /// input having been consumed by the failing attempt
    pub fn is_at(&self, cursor: Cursor<'code>) -> bool {
        self.loc.position() == cursor.position()
    }
}
