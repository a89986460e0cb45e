//! Block geometry.
//!
//! A *block* is one line of the document as the text widget lays it out: it
//! occupies one row, or several when word wrap splits it. Gutter numbering
//! and line highlighting only need each block's top and height, so they are
//! written against the [`BlockLayout`] trait rather than a concrete widget.
//!
//! ## Learning: Prefix Sums
//!
//! `MonospaceLayout` stores the running total of rows before each block.
//! `block_top(i)` is then a single multiply, and `block_at(y)` is a binary
//! search (`partition_point`) over the running totals.

use std::ops::Deref;

use unicode_width::UnicodeWidthChar;

/// Display columns a tab advances by.
pub const TAB_WIDTH: usize = 4;

/// A block's box, in pixels relative to the top of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGeometry {
    pub index: usize,
    pub top: f32,
    pub height: f32,
}

impl BlockGeometry {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Read access to the vertical layout of a document.
pub trait BlockLayout {
    /// Number of blocks; never zero (an empty document has one empty block).
    fn block_count(&self) -> usize;

    /// Height of one visual row.
    fn line_height(&self) -> f32;

    /// Top of block `index`, relative to the document top.
    fn block_top(&self, index: usize) -> f32;

    /// Height of block `index`, covering all of its wrapped rows.
    fn block_height(&self, index: usize) -> f32;

    /// Index of the block under document coordinate `y`, clamped into range.
    fn block_at(&self, y: f32) -> usize;

    /// Vertical offset, within block `index`, of the row holding `column`.
    fn caret_offset(&self, index: usize, column: usize) -> f32;

    /// Total height of the document.
    fn content_height(&self) -> f32 {
        let last = self.block_count().saturating_sub(1);
        self.block_top(last) + self.block_height(last)
    }

    /// Top and height of block `index` together.
    fn geometry(&self, index: usize) -> BlockGeometry {
        BlockGeometry {
            index,
            top: self.block_top(index),
            height: self.block_height(index),
        }
    }
}

/// Font-derived sizes used to estimate layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Height of one row in pixels
    pub line_height: f32,
    /// Advance of one narrow glyph in pixels
    pub char_width: f32,
}

impl LayoutMetrics {
    /// Estimates metrics for a monospace font of the given size.
    pub fn for_font(font_size: f32, line_height_factor: f32) -> Self {
        Self {
            line_height: (font_size * line_height_factor).max(1.0),
            char_width: (font_size * crate::gutter::DIGIT_ADVANCE_RATIO).max(1.0),
        }
    }
}

/// Layout of a document set in a fixed-pitch font.
///
/// With wrapping on, each block is split into rows the way the text widget
/// word-wraps it; see [`word_wrap_breaks`].
#[derive(Debug, Clone)]
pub struct MonospaceLayout {
    line_height: f32,
    /// Char column where each continuation row of a block starts; empty for
    /// single-row blocks
    row_breaks: Vec<Vec<usize>>,
    /// `row_starts[i]` is the number of rows above block `i`; one extra
    /// trailing entry holds the total.
    row_starts: Vec<usize>,
}

impl MonospaceLayout {
    /// Builds a layout from per-block display widths, breaking a block
    /// every `wrap_columns` columns.
    pub fn new(
        widths: impl IntoIterator<Item = usize>,
        line_height: f32,
        wrap_columns: Option<usize>,
    ) -> Self {
        let wrap_columns = wrap_columns.map(|c| c.max(1));
        let row_breaks: Vec<Vec<usize>> = widths
            .into_iter()
            .map(|width| match wrap_columns {
                Some(columns) => (columns..width).step_by(columns).collect(),
                None => Vec::new(),
            })
            .collect();
        Self::from_breaks(row_breaks, line_height)
    }

    /// Builds a layout by measuring lines of text.
    ///
    /// `wrap_width` is the pixel width available to text, or `None` when
    /// wrapping is off.
    pub fn from_lines<I>(lines: I, metrics: LayoutMetrics, wrap_width: Option<f32>) -> Self
    where
        I: IntoIterator,
        I::Item: Deref<Target = str>,
    {
        let wrap_columns = wrap_width.map(|w| (w / metrics.char_width).floor().max(1.0) as usize);
        let row_breaks: Vec<Vec<usize>> = lines
            .into_iter()
            .map(|line| match wrap_columns {
                Some(columns) => word_wrap_breaks(&line, columns),
                None => Vec::new(),
            })
            .collect();
        Self::from_breaks(row_breaks, metrics.line_height)
    }

    /// A layout of `count` single-row blocks.
    pub fn uniform(count: usize, line_height: f32) -> Self {
        Self::new(std::iter::repeat_n(0, count.max(1)), line_height, None)
    }

    fn from_breaks(mut row_breaks: Vec<Vec<usize>>, line_height: f32) -> Self {
        if row_breaks.is_empty() {
            row_breaks.push(Vec::new());
        }

        let mut row_starts = Vec::with_capacity(row_breaks.len() + 1);
        let mut total = 0;
        row_starts.push(0);
        for breaks in &row_breaks {
            total += breaks.len() + 1;
            row_starts.push(total);
        }

        Self {
            line_height: line_height.max(1.0),
            row_breaks,
            row_starts,
        }
    }

    /// Number of rows block `index` occupies.
    pub fn rows(&self, index: usize) -> usize {
        let index = self.clamp_index(index);
        self.row_starts[index + 1] - self.row_starts[index]
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.row_breaks.len() - 1)
    }
}

impl BlockLayout for MonospaceLayout {
    fn block_count(&self) -> usize {
        self.row_breaks.len()
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn block_top(&self, index: usize) -> f32 {
        self.row_starts[self.clamp_index(index)] as f32 * self.line_height
    }

    fn block_height(&self, index: usize) -> f32 {
        self.rows(index) as f32 * self.line_height
    }

    fn block_at(&self, y: f32) -> usize {
        if y <= 0.0 || y.is_nan() {
            return 0;
        }
        let row = (y / self.line_height).floor() as usize;
        // First entry strictly greater than `row`, minus one, is the block start
        let index = self.row_starts.partition_point(|&start| start <= row);
        self.clamp_index(index.saturating_sub(1))
    }

    fn caret_offset(&self, index: usize, column: usize) -> f32 {
        let breaks = &self.row_breaks[self.clamp_index(index)];
        let row = breaks.partition_point(|&start| start <= column);
        row as f32 * self.line_height
    }
}

/// Display width of a line, ignoring any trailing line break.
pub fn display_width(line: &str) -> usize {
    line.trim_end_matches(['\n', '\r']).chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match c {
        '\t' => TAB_WIDTH,
        c => c.width().unwrap_or(0),
    }
}

/// Char columns at which word wrap starts a new row.
///
/// Greedy, like the text widget's word wrapping: a word that would overflow
/// the row moves to the next one, the spaces after a word may hang past the
/// edge, and a word wider than a whole row keeps a row to itself.
pub fn word_wrap_breaks(line: &str, columns: usize) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut row_width = 0;
    for word in words(line) {
        if row_width > 0 && row_width + word.width > columns {
            breaks.push(word.start);
            row_width = 0;
        }
        row_width += word.width + word.space;
    }
    breaks
}

/// A run of non-space chars plus the spaces after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Word {
    /// Char column of the first char
    start: usize,
    width: usize,
    space: usize,
}

fn words(line: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Option<Word> = None;

    for (index, c) in line.trim_end_matches(['\n', '\r']).chars().enumerate() {
        let width = char_width(c);
        match current.as_mut() {
            Some(word) if c.is_whitespace() => word.space += width,
            Some(word) if word.space == 0 => word.width += width,
            _ => {
                words.extend(current.take());
                current = Some(if c.is_whitespace() {
                    Word { start: index, width: 0, space: width }
                } else {
                    Word { start: index, width, space: 0 }
                });
            }
        }
    }
    words.extend(current);
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uniform_layout() {
        let layout = MonospaceLayout::uniform(5, 20.0);
        assert_eq!(layout.block_count(), 5);
        assert_eq!(layout.block_top(3), 60.0);
        assert_eq!(layout.block_height(3), 20.0);
        assert_eq!(layout.content_height(), 100.0);
        assert_eq!(layout.block_at(59.9), 2);
        assert_eq!(layout.block_at(60.0), 3);
        assert_eq!(layout.block_at(10_000.0), 4);
        assert_eq!(layout.block_at(-5.0), 0);
    }

    #[test]
    fn test_empty_document_has_one_block() {
        let layout = MonospaceLayout::new(Vec::new(), 10.0, Some(80));
        assert_eq!(layout.block_count(), 1);
        assert_eq!(layout.block_height(0), 10.0);
    }

    #[test]
    fn test_wrapped_blocks_span_rows() {
        // widths 5, 25, 0, 10 at 10 columns: rows 1, 3, 1, 1
        let layout = MonospaceLayout::new([5, 25, 0, 10], 10.0, Some(10));
        assert_eq!(layout.rows(1), 3);
        assert_eq!(layout.block_top(2), 40.0);
        assert_eq!(layout.block_height(1), 30.0);
        assert_eq!(layout.content_height(), 60.0);
        assert_eq!(layout.block_at(35.0), 1);
        assert_eq!(layout.block_at(45.0), 2);
        assert_eq!(layout.caret_offset(1, 24), 20.0);
        assert_eq!(layout.caret_offset(1, 999), 20.0);
    }

    #[test]
    fn test_no_wrap_is_one_row_per_block() {
        let layout = MonospaceLayout::new([500, 3], 10.0, None);
        assert_eq!(layout.rows(0), 1);
        assert_eq!(layout.caret_offset(0, 400), 0.0);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc\r\n"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("\tx"), TAB_WIDTH + 1);
    }

    #[test]
    fn test_from_lines_measures_wrap() {
        let metrics = LayoutMetrics {
            line_height: 20.0,
            char_width: 10.0,
        };
        let layout = MonospaceLayout::from_lines(["short", "a much longer line"], metrics, Some(100.0));
        // "a much " / "longer " / "line"
        assert_eq!(layout.rows(0), 1);
        assert_eq!(layout.rows(1), 3);
    }

    #[test]
    fn test_word_wrap_moves_whole_words() {
        let metrics = LayoutMetrics {
            line_height: 20.0,
            char_width: 10.0,
        };
        let layout =
            MonospaceLayout::from_lines(["aaaaaa bbbbbb cccccc", "second"], metrics, Some(100.0));

        // "aaaaaa " / "bbbbbb " / "cccccc"
        assert_eq!(layout.rows(0), 3);
        assert_eq!(layout.block_top(1), 60.0);
        assert_eq!(layout.block_at(50.0), 0);
        assert_eq!(layout.block_at(60.0), 1);

        // Caret rows follow the word breaks, not multiples of the width
        assert_eq!(layout.caret_offset(0, 6), 0.0);
        assert_eq!(layout.caret_offset(0, 7), 20.0);
        assert_eq!(layout.caret_offset(0, 14), 40.0);
    }

    #[test]
    fn test_word_wrap_breaks() {
        assert_eq!(word_wrap_breaks("aaaaaa bbbbbb cccccc", 10), vec![7, 14]);
        // Trailing spaces hang instead of forcing a row
        assert_eq!(word_wrap_breaks("aaaaaaaaaa   ", 10), Vec::<usize>::new());
        // An overlong word keeps its own row, the next word starts a new one
        assert_eq!(word_wrap_breaks("ab cdefghijklmnop q", 5), vec![3, 17]);
        // Leading indentation counts toward the first row
        assert_eq!(word_wrap_breaks("    abcdefg", 8), vec![4]);
        assert!(word_wrap_breaks("", 4).is_empty());
    }

    proptest! {
        #[test]
        fn block_at_inverts_block_top(
            widths in prop::collection::vec(0usize..200, 1..60),
            columns in 1usize..50,
        ) {
            let layout = MonospaceLayout::new(widths.clone(), 16.0, Some(columns));
            for i in 0..widths.len() {
                let g = layout.geometry(i);
                prop_assert_eq!(layout.block_at(g.top), i);
                prop_assert_eq!(layout.block_at(g.bottom() - 0.5), i);
            }
        }
    }
}
