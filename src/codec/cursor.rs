// ============================================================================
// Cursor
// Mutable scan position shared across composed parses of one input string
// ============================================================================

use super::errors::{ParseError, ParseErrorKind, ParseResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scan position over an immutable input string.
///
/// One cursor is owned by one parse call tree: every successful sub-parse
/// advances `index`, and a failed sub-parse leaves `index` at the failure
/// start while recording the failure offset in `error_index`. Callers that
/// compose several parses over the same input thread a single cursor
/// through all of them.
///
/// # Example
/// ```
/// use amount_format::codec::{parse_i64_at, Cursor};
///
/// let mut cursor = Cursor::new();
/// let value = parse_i64_at("42 m", 10, &mut cursor).unwrap();
/// assert_eq!(value, 42);
/// assert_eq!(cursor.index(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    index: usize,
    error_index: Option<usize>,
}

impl Cursor {
    /// Creates a cursor at the start of the input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor at the given byte offset.
    pub fn at(index: usize) -> Self {
        Self {
            index,
            error_index: None,
        }
    }

    /// Current scan position (byte offset).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the scan position to `index`.
    #[inline]
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Advances the scan position by `n` bytes.
    #[inline]
    pub fn increment(&mut self, n: usize) {
        self.index += n;
    }

    /// Offset of the last recorded parse failure, if any.
    #[inline]
    pub fn error_index(&self) -> Option<usize> {
        self.error_index
    }

    /// Records a parse failure offset.
    #[inline]
    pub fn set_error_index(&mut self, index: usize) {
        self.error_index = Some(index);
    }

    /// Next character at the scan position without consuming it.
    pub fn peek(&self, source: &str) -> Option<char> {
        source.get(self.index..).and_then(|rest| rest.chars().next())
    }

    /// Advances past `literal` at the current position.
    ///
    /// Fails with `MalformedInput` if the literal is not present; the scan
    /// position is left unchanged and the error offset is recorded.
    pub fn skip(&mut self, literal: &str, source: &str) -> ParseResult<()> {
        let present = source
            .get(self.index..)
            .map_or(false, |rest| rest.starts_with(literal));
        if present {
            self.index += literal.len();
            Ok(())
        } else {
            self.error_index = Some(self.index);
            Err(ParseError::new(ParseErrorKind::MalformedInput, self.index))
        }
    }
}
