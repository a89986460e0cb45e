//! The open document.
//!
//! ## Learning: Composition over Inheritance
//!
//! Rust doesn't have inheritance. Instead, `Document` composes
//! a `TextBuffer` and adds what a notepad needs on top: a display name,
//! the line ending style the file came with, and whether it ended with
//! a line break.
//!
//! ## Two views of the same text
//!
//! The editor widget stores lines without their breaks and has no notion
//! of a final terminator. [`Document::display_text`] produces the text in
//! that shape (`\n` separators, final terminator removed), and
//! [`Document::sync_from_lines`] rebuilds the file form from the widget's
//! lines using the original line ending. Opening a file and saving it
//! unchanged therefore writes the same bytes back.

use std::borrow::Cow;
use std::ops::Deref;
use std::path::Path;

use slate_buffer::TextBuffer;

use crate::{CoreError, CoreResult};

/// Line ending style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style: \n
    #[default]
    Lf,
    /// Windows-style: \r\n
    CrLf,
    /// Classic Mac: \r
    Cr,
}

impl LineEnding {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Detects line ending from text.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else if text.contains('\r') {
            LineEnding::Cr
        } else {
            LineEnding::Lf
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            LineEnding::Lf => "LF",
            LineEnding::CrLf => "CRLF",
            LineEnding::Cr => "CR",
        }
    }
}

/// A document being edited.
#[derive(Debug, Clone)]
pub struct Document {
    /// The underlying text buffer, in file form
    buffer: TextBuffer,

    /// Display name
    name: String,

    /// Line ending style
    line_ending: LineEnding,

    /// Whether the text ends with a line break
    trailing_newline: bool,

    /// Length of the display form, in chars
    display_chars: usize,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            name: "Untitled".to_string(),
            line_ending: LineEnding::default(),
            trailing_newline: false,
            display_chars: 0,
        }
    }

    /// Opens a document from a file.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let buffer = TextBuffer::from_file(path)?;

        // Detect line ending from file content
        let text = buffer.text();
        let line_ending = LineEnding::detect(&text);
        let trailing_newline = text.ends_with(['\n', '\r']);
        drop(text);

        let mut doc = Self {
            buffer,
            name: display_name(path),
            line_ending,
            trailing_newline,
            display_chars: 0,
        };
        doc.display_chars = doc.display_text().chars().count();
        Ok(doc)
    }

    // ==================== Getters ====================

    /// Returns the file path.
    pub fn path(&self) -> Option<&Path> {
        self.buffer.file_path()
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the line ending the document writes.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    /// Returns the text buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns the text in file form.
    pub fn text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    /// Returns the line count.
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Number of chars the user sees, counting each line break as one.
    pub fn display_len(&self) -> usize {
        self.display_chars
    }

    /// Returns the text in the shape the editor widget expects.
    pub fn display_text(&self) -> String {
        let text = self.buffer.text();
        let mut normalized = match self.line_ending {
            LineEnding::Lf => text.into_owned(),
            LineEnding::CrLf => text.replace("\r\n", "\n"),
            LineEnding::Cr => text.replace('\r', "\n"),
        };
        if self.trailing_newline && normalized.ends_with('\n') {
            normalized.pop();
        }
        normalized
    }

    // ==================== Synchronisation ====================

    /// Rebuilds the file form from the widget's lines.
    ///
    /// Lines are joined with the document's line ending, and the final
    /// terminator is restored if the file had one.
    pub fn sync_from_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Deref<Target = str>,
    {
        let mut chars = 0;
        let mut count = 0usize;
        let lines = lines.into_iter().inspect(|line| {
            chars += line.chars().count();
            count += 1;
        });
        let text = compose(lines, self.line_ending, self.trailing_newline);
        self.buffer.set_text(&text);
        // Separators count as one char each, as the widget sees them
        self.display_chars = chars + count.saturating_sub(1);
    }

    // ==================== File Operations ====================

    /// Saves the document to its file.
    pub fn save(&mut self) -> CoreResult<()> {
        if self.path().is_none() {
            return Err(CoreError::NoFilePath);
        }
        self.buffer.save()?;
        Ok(())
    }

    /// Saves the document to a new path.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        self.buffer.save_as(path)?;
        self.name = display_name(path);
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins lines with `ending`, appending one more `ending` when `terminated`.
pub fn compose<I>(lines: I, ending: LineEnding, terminated: bool) -> String
where
    I: IntoIterator,
    I::Item: Deref<Target = str>,
{
    let mut text = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            text.push_str(ending.as_str());
        }
        text.push_str(&line);
    }
    if terminated {
        text.push_str(ending.as_str());
    }
    text
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits display text the way the editor widget does.
    fn widget_lines(display: &str) -> Vec<&str> {
        display.split('\n').collect()
    }

    fn open_and_resave(bytes: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, bytes).unwrap();

        let mut doc = Document::open(&path).unwrap();
        let display = doc.display_text();
        doc.sync_from_lines(widget_lines(&display));
        assert!(!doc.is_modified());
        doc.save().unwrap();

        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_line_ending_detect() {
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\rb"), LineEnding::Cr);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.name(), "Untitled");
        assert!(doc.path().is_none());
        assert_eq!(doc.display_text(), "");
        assert_eq!(doc.line_count(), 1);
    }

    #[test]
    fn test_round_trip_through_widget_lines() {
        for original in [
            "",
            "single line",
            "lf\nfile\n",
            "crlf\r\nfile\r\n",
            "no\r\nterminator",
            "cr\rfile\r",
            "blank\n\nlines\n\n",
            "日本語\nテキスト\n",
        ] {
            assert_eq!(open_and_resave(original), original, "round trip of {original:?}");
        }
    }

    #[test]
    fn test_display_text_strips_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        std::fs::write(&path, "a\r\nb\r\n").unwrap();

        let doc = Document::open(&path).unwrap();
        assert_eq!(doc.line_ending(), LineEnding::CrLf);
        assert_eq!(doc.display_text(), "a\nb");
        assert_eq!(doc.display_len(), 3);
        assert_eq!(doc.name(), "t.txt");
    }

    #[test]
    fn test_edits_use_document_line_ending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        std::fs::write(&path, "a\r\nb\r\n").unwrap();

        let mut doc = Document::open(&path).unwrap();
        doc.sync_from_lines(["a", "inserted", "b"]);
        assert!(doc.is_modified());
        assert_eq!(doc.display_len(), 12);
        doc.save().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\r\ninserted\r\nb\r\n");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_save_untitled_needs_path() {
        let mut doc = Document::new();
        assert!(matches!(doc.save(), Err(CoreError::NoFilePath)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        doc.sync_from_lines(["hello", "world"]);
        doc.save_as(&path).unwrap();

        assert_eq!(doc.name(), "fresh.txt");
        assert_eq!(doc.path(), Some(path.as_path()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\nworld");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Document::open(dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose(["a", "b"], LineEnding::CrLf, false), "a\r\nb");
        assert_eq!(compose(["a", "b"], LineEnding::Lf, true), "a\nb\n");
        assert_eq!(compose(Vec::<&str>::new(), LineEnding::Lf, false), "");
    }
}
