//! Cursor and position types for text navigation.
//!
//! ## Learning: Newtype Pattern
//!
//! `Position` is a struct that wraps line/column coordinates.
//! This is better than using `(usize, usize)` because you can't
//! accidentally swap line and column, and the fields name themselves.

use crate::Selection;

/// A position in the text buffer (line and column).
///
/// Both line and column are 0-indexed. A "line" here is a block in layout
/// terms: one run of text between line breaks, however many rows it wraps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in characters not bytes)
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position at the start of the document.
    pub const ZERO: Position = Position { line: 0, column: 0 };
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.column.cmp(&other.column),
            other => other,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display as 1-indexed for user-facing output
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// The caret plus an optional selection anchor.
///
/// Only the editor facade keeps one of these. It mirrors what the text widget
/// reports, and remembers the anchor of selections it made itself (search
/// matches) so the next search can start from the right end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Current caret position
    pub position: Position,

    /// Selection anchor. When Some, text between anchor and position is selected.
    pub anchor: Option<Position>,
}

impl Cursor {
    /// Creates a new cursor at a position.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            anchor: None,
        }
    }

    /// Moves the cursor to a new position, clearing selection.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
        self.anchor = None;
    }

    /// Replaces the cursor with a selection; the caret ends up at `selection.end`.
    pub fn select(&mut self, selection: Selection) {
        self.anchor = Some(selection.start);
        self.position = selection.end;
    }

    /// Returns true if text is selected.
    pub fn has_selection(&self) -> bool {
        !self.selection().is_cursor()
    }

    /// Returns the normalized selection, or a zero-width one at the caret.
    pub fn selection(&self) -> Selection {
        match self.anchor {
            Some(anchor) => Selection::new(anchor, self.position),
            None => Selection::cursor(self.position),
        }
    }
}
