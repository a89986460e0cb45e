//! Status bar text.

use slate_buffer::Position;

/// The three status bar labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// `Ln 3, Col 7`
    pub position: String,
    /// `120 chars`
    pub length: String,
    /// `100%`
    pub zoom: String,
}

impl StatusLine {
    /// Builds the labels from a 0-based caret, the document length in chars
    /// and the zoom percentage.
    pub fn new(caret: Position, char_count: usize, zoom_percent: i32) -> Self {
        Self {
            position: format!("Ln {}, Col {}", caret.line + 1, caret.column + 1),
            length: format!("{char_count} chars"),
            zoom: format!("{zoom_percent}%"),
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(Position::ZERO, 0, 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_one_based() {
        let status = StatusLine::new(Position::new(2, 6), 120, 110);
        assert_eq!(status.position, "Ln 3, Col 7");
        assert_eq!(status.length, "120 chars");
        assert_eq!(status.zoom, "110%");
    }

    #[test]
    fn test_default() {
        let status = StatusLine::default();
        assert_eq!(status.position, "Ln 1, Col 1");
        assert_eq!(status.length, "0 chars");
        assert_eq!(status.zoom, "100%");
    }
}
