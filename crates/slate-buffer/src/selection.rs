//! Text selection handling.
//!
//! ## Learning: Range Types
//!
//! Rust's standard library has `Range<T>` (exclusive end) and
//! `RangeInclusive<T>` (inclusive end). For text, we use exclusive
//! ranges because empty selections (start == end) fall out naturally.

use crate::Position;

/// A selection of text in the buffer.
///
/// A selection has a start and end position. The start is always
/// before or equal to the end (normalized).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Selection {
    /// Creates a new selection.
    ///
    /// Automatically normalizes so start <= end.
    pub fn new(start: Position, end: Position) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Creates a zero-width selection (cursor position).
    pub fn cursor(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Returns true if this is a zero-width selection (just a cursor).
    pub fn is_cursor(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_normalization() {
        let sel = Selection::new(Position::new(5, 0), Position::new(2, 0));
        assert_eq!(sel.start, Position::new(2, 0));
        assert_eq!(sel.end, Position::new(5, 0));
    }

    #[test]
    fn test_cursor_selection_is_empty() {
        assert!(Selection::cursor(Position::new(3, 3)).is_cursor());
        assert!(!Selection::new(Position::new(1, 0), Position::new(1, 10)).is_cursor());
    }
}
