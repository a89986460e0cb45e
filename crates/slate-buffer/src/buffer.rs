//! Core text buffer implementation using rope data structure.
//!
//! ## Why Rope?
//!
//! The notepad mirrors the editor widget's text here before every search and
//! save. A rope keeps that mirror cheap to rebuild and gives O(log n)
//! line/char conversions, which the search and gutter code lean on.
//!
//! ## Learning: Ownership in Action
//!
//! ```rust,ignore
//! let mut buffer = TextBuffer::new(); // buffer OWNS the rope
//! let text = buffer.text();           // text BORROWS from buffer
//! // buffer.set_text("x");            // ERROR! Can't mutate while borrowed
//! drop(text);                         // Release borrow
//! buffer.set_text("x");               // Now OK!
//! ```

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::{BufferError, BufferResult, Position};

/// A text buffer backed by a rope data structure.
///
/// # Thread Safety
///
/// `TextBuffer` is `Send` but not `Sync` - it can be moved between threads
/// but shouldn't be accessed from multiple threads simultaneously.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The rope holding our text content
    rope: Rope,

    /// Whether the buffer has unsaved changes
    modified: bool,

    /// Associated file path (if any)
    file_path: Option<PathBuf>,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use slate_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
            file_path: None,
        }
    }

    /// Loads a buffer from a file.
    ///
    /// The file must be valid UTF-8; anything else surfaces as an
    /// `InvalidData` I/O error.
    ///
    /// # Learning: Error Handling with `?`
    ///
    /// The `?` operator propagates errors up the call stack.
    /// It's syntactic sugar for:
    /// ```rust,ignore
    /// match result {
    ///     Ok(value) => value,
    ///     Err(e) => return Err(e.into()),
    /// }
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        Ok(Self {
            rope: Rope::from_str(&content),
            modified: false,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Saves the buffer to its associated file.
    pub fn save(&mut self) -> BufferResult<()> {
        let path = self.file_path.clone().ok_or(BufferError::NoFilePath)?;
        self.save_as(&path)
    }

    /// Saves the buffer to a specific path.
    ///
    /// The rope is written verbatim: no line ending conversion, no BOM and
    /// no trailing newline are added.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> BufferResult<()> {
        let path = path.as_ref();

        // Write next to the target first, then rename over it
        let temp_path = temp_path_for(path);
        let mut file = std::fs::File::create(&temp_path)?;
        self.rope.write_to(&mut file)?;
        file.sync_all()?;
        drop(file);

        if let Err(e) = std::fs::rename(&temp_path, path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    // ==================== Text Access ====================

    /// Returns the entire text content as a `Cow<str>`.
    ///
    /// # Learning: Cow (Clone-on-Write)
    ///
    /// For small buffers, this returns a borrowed reference (cheap).
    /// For large buffers spanning multiple rope chunks, it allocates.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a specific line (0-indexed).
    ///
    /// Line includes the trailing newline if present.
    pub fn line(&self, line_idx: usize) -> BufferResult<Cow<'_, str>> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: line_idx,
                column: 0,
            });
        }
        Ok(self.rope.line(line_idx).into())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters (Unicode scalar values) in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the length of a line in characters, excluding its line break.
    pub fn line_len(&self, line_idx: usize) -> BufferResult<usize> {
        let line = self.line(line_idx)?;
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(trimmed.chars().count())
    }

    // ==================== Mutations ====================

    /// Replaces the whole content.
    ///
    /// Marks the buffer modified only when the text actually changed.
    pub fn set_text(&mut self, text: &str) {
        if self.rope == text {
            return;
        }
        self.rope = Rope::from_str(text);
        self.modified = true;
    }

    /// Marks the buffer as saved without touching disk.
    pub fn mark_clean(&mut self) {
        self.modified = false;
    }

    // ==================== Position Conversion ====================

    /// Converts a Position (line, column) to a character index.
    ///
    /// # Learning: Bounds Checking
    ///
    /// We validate input before operations to maintain invariants.
    /// This prevents panics and provides meaningful error messages.
    pub fn position_to_char_idx(&self, pos: Position) -> BufferResult<usize> {
        if pos.line >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            });
        }

        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();

        // Allow column to be at end of line (for insertion)
        if pos.column > line_len {
            return Err(BufferError::PositionOutOfBounds {
                line: pos.line,
                column: pos.column,
            });
        }

        Ok(line_start + pos.column)
    }

    /// Converts a character index to a Position (line, column).
    pub fn char_idx_to_position(&self, char_idx: usize) -> BufferResult<Position> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }

        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        let column = char_idx - line_start;

        Ok(Position { line, column })
    }

    /// Clamps a position into the buffer, snapping to the nearest valid spot.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.len_lines().saturating_sub(1));
        let max_col = self.line_len(line).unwrap_or(0);
        Position::new(line, pos.column.min(max_col))
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns the associated file path, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    // ==================== Search ====================

    /// Finds the first occurrence of `pattern` starting at or after `from`.
    ///
    /// Returns the matched character range. Matching compares chars one by
    /// one, folding case unless `case_sensitive` is set.
    pub fn find_forward(
        &self,
        pattern: &str,
        from: usize,
        case_sensitive: bool,
    ) -> Option<Range<usize>> {
        let needle: Vec<char> = pattern.chars().collect();
        let len = self.len_chars();
        if needle.is_empty() || needle.len() > len || from > len - needle.len() {
            return None;
        }

        (from..=len - needle.len())
            .find(|&start| self.matches_at(&needle, start, case_sensitive))
            .map(|start| start..start + needle.len())
    }

    /// Finds the last occurrence of `pattern` that starts before `before`.
    pub fn find_backward(
        &self,
        pattern: &str,
        before: usize,
        case_sensitive: bool,
    ) -> Option<Range<usize>> {
        let needle: Vec<char> = pattern.chars().collect();
        let len = self.len_chars();
        if needle.is_empty() || needle.len() > len || before == 0 {
            return None;
        }

        let upper = (before - 1).min(len - needle.len());
        (0..=upper)
            .rev()
            .find(|&start| self.matches_at(&needle, start, case_sensitive))
            .map(|start| start..start + needle.len())
    }

    fn matches_at(&self, needle: &[char], start: usize, case_sensitive: bool) -> bool {
        self.rope
            .chars_at(start)
            .zip(needle)
            .all(|(hay, &pat)| chars_match(hay, pat, case_sensitive))
    }
}

fn chars_match(a: char, b: char, case_sensitive: bool) -> bool {
    if a == b {
        return true;
    }
    !case_sensitive && a.to_lowercase().eq(b.to_lowercase())
}

/// Sibling temp file used for atomic saves, e.g. `notes.txt` -> `.notes.txt.slate-tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());
    path.with_file_name(format!(".{name}.slate-tmp"))
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            modified: false,
            file_path: None,
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
