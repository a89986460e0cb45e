//! Moving between the text widget's coordinates and the document's.
//!
//! The widget reports its caret as `(line, byte offset)` and can only be
//! steered with motions. The document counts columns in chars. Everything
//! that crosses that boundary goes through here.

use iced::widget::text_editor::{Action, Content, Edit, Motion};
use slate_buffer::{Position, Snapshot};
use slate_core::document::compose;
use slate_core::LineEnding;

/// Char column of byte offset `byte` within `line`.
pub fn char_column(line: &str, byte: usize) -> usize {
    line.char_indices().take_while(|(i, _)| *i < byte).count()
}

/// Chars before `position`, counting each line break as one.
pub fn char_offset<I>(lines: I, position: Position) -> usize
where
    I: IntoIterator,
    I::Item: std::ops::Deref<Target = str>,
{
    let mut offset = 0;
    for (index, line) in lines.into_iter().enumerate() {
        if index == position.line {
            return offset + position.column.min(line.chars().count());
        }
        offset += line.chars().count() + 1;
    }
    // Past the last line: the end of the text
    offset.saturating_sub(1)
}

/// The widget caret as a document position.
pub fn caret(content: &Content) -> Position {
    let (line, byte) = content.cursor_position();
    let column = content
        .line(line)
        .map(|text| char_column(&text, byte))
        .unwrap_or(0);
    Position::new(line, column)
}

/// The widget's text with `\n` separators and no final terminator.
pub fn display_text(content: &Content) -> String {
    compose(content.lines(), LineEnding::Lf, false)
}

/// Current text and caret, for the undo history.
pub fn snapshot(content: &Content) -> Snapshot {
    Snapshot::new(display_text(content), caret(content))
}

/// Creates widget content showing `text` (`\n` separators).
pub fn content_from(text: &str) -> Content {
    let mut content = Content::with_text(text);
    // The widget drops a trailing empty line; put it back
    if text.ends_with('\n') {
        content.perform(Action::Move(Motion::DocumentEnd));
        content.perform(Action::Edit(Edit::Enter));
        content.perform(Action::Move(Motion::DocumentStart));
    }
    content
}

/// Moves the caret to `target` without selecting.
///
/// Walks down visual rows until the target line is reached, so it works
/// with and without word wrap.
pub fn place(content: &mut Content, target: Position) {
    content.perform(Action::Move(Motion::DocumentStart));

    let mut current = content.cursor_position();
    while current.0 < target.line {
        content.perform(Action::Move(Motion::Down));
        let next = content.cursor_position();
        if next == current {
            break;
        }
        current = next;
    }
    content.perform(Action::Move(Motion::Home));

    for _ in 0..target.column {
        content.perform(Action::Move(Motion::Right));
    }
}

/// Selects from `start` to `end`, leaving the caret at `end`.
pub fn select(content: &mut Content, start: Position, end: Position) {
    let length = char_offset(content.lines(), end).saturating_sub(char_offset(content.lines(), start));
    place(content, start);
    for _ in 0..length {
        content.perform(Action::Select(Motion::Right));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_column_counts_chars_not_bytes() {
        assert_eq!(char_column("hello", 3), 3);
        assert_eq!(char_column("héllo", 3), 2);
        assert_eq!(char_column("日本語", 6), 2);
        assert_eq!(char_column("abc", 99), 3);
    }

    #[test]
    fn test_char_offset() {
        let lines = ["ab", "cde", ""];
        assert_eq!(char_offset(lines, Position::new(0, 0)), 0);
        assert_eq!(char_offset(lines, Position::new(1, 2)), 5);
        assert_eq!(char_offset(lines, Position::new(2, 0)), 7);
        // Columns clamp to the line
        assert_eq!(char_offset(lines, Position::new(0, 10)), 2);
        // Lines past the end clamp to the end of the text
        assert_eq!(char_offset(lines, Position::new(9, 0)), 7);
    }

    #[test]
    fn test_content_keeps_trailing_empty_line() {
        let content = content_from("a\nb\n");
        assert_eq!(content.line_count(), 3);
        assert_eq!(display_text(&content), "a\nb\n");

        let plain = content_from("a\nb");
        assert_eq!(plain.line_count(), 2);
        assert_eq!(caret(&plain), Position::ZERO);
    }
}
