//! # Slate Buffer
//!
//! Rope-backed text storage for the notepad, plus the small value types the
//! rest of the editor speaks in.
//!
//! ## Key Concepts
//!
//! ### Ownership & Borrowing
//! - `TextBuffer` owns the rope
//! - Accessors like `text()` and `line()` hand out borrowed `Cow<str>` views
//! - Mutations require `&mut self`
//!
//! ### Positions are chars, not bytes
//! Every column and index in this crate counts Unicode scalar values, so a
//! Japanese line and an ASCII line of the same length have the same columns.

mod buffer;
mod cursor;
mod history;
mod selection;

pub use buffer::TextBuffer;
pub use cursor::{Cursor, Position};
pub use history::{EditKind, History, Snapshot};
pub use selection::Selection;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Position {line}:{column} is out of bounds")]
    PositionOutOfBounds { line: usize, column: usize },

    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Buffer has no file path")]
    NoFilePath,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len_chars(), 0);
        assert_eq!(buffer.len_lines(), 1);
    }

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from("Hello, World!");
        assert_eq!(buffer.len_chars(), 13);
        assert_eq!(buffer.text(), "Hello, World!");
    }

    #[test]
    fn test_line_operations() {
        let buffer = TextBuffer::from("Line 1\nLine 2\nLine 3");
        assert_eq!(buffer.len_lines(), 3);
        assert_eq!(buffer.line(0).unwrap(), "Line 1\n");
        assert_eq!(buffer.line(1).unwrap(), "Line 2\n");
        assert_eq!(buffer.line(2).unwrap(), "Line 3");
    }

    #[test]
    fn test_find_returns_position_range() {
        let buffer = TextBuffer::from("alpha\nbeta\ngamma");
        let range = buffer.find_forward("beta", 0, true).unwrap();
        let start = buffer.char_idx_to_position(range.start).unwrap();
        let end = buffer.char_idx_to_position(range.end).unwrap();
        assert_eq!(Selection::new(start, end), Selection::new(Position::new(1, 0), Position::new(1, 4)));
    }
}
