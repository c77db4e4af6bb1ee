use crate::error::{CodeLoc, ParseError};

/// A position in a borrowed text buffer
///
/// A cursor is a lightweight, `Copy` view over the unconsumed remainder of the
/// source. It is never mutated in place: every advance returns a new cursor,
/// so a caller that wants to retry from an earlier point simply keeps the old
/// value around.
///
/// The offset is always kept on a char boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// The unconsumed remainder of the source
    pub fn rest(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Byte offset of the cursor into the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The full source text this cursor points into
    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Check if the cursor is at the end of the source
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn starts_with(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    /// Get the char at the current position
    ///
    /// Returns an error if the cursor is at the end of the source
    pub fn value(&self) -> Result<char, ParseError<'code>> {
        self.rest()
            .chars()
            .next()
            .ok_or_else(|| ParseError::new("any character", *self))
    }

    /// Advance past the current char
    ///
    /// If already at the end, returns a cursor still positioned at the end
    pub fn next(self) -> Self {
        match self.rest().chars().next() {
            Some(c) => self.advance(c.len_utf8()),
            None => self,
        }
    }

    /// Advance past the current char, returning an error if at end
    pub fn try_next(self) -> Result<Self, ParseError<'code>> {
        let c = self.value()?;
        Ok(self.advance(c.len_utf8()))
    }

    /// Location of this cursor for error reporting
    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source, self.position)
    }

    /// Consume `bytes` bytes. Callers pass the length of something they just
    /// matched against `rest()`, so the result stays on a char boundary.
    pub(crate) fn advance(self, bytes: usize) -> Self {
        let position = (self.position + bytes).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(position));
        Cursor {
            source: self.source,
            position,
        }
    }
}

impl<'code> From<&'code str> for Cursor<'code> {
    fn from(source: &'code str) -> Self {
        Cursor::new(source)
    }
}
