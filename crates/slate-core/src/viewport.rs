//! The visible window onto the document.
//!
//! The text widget scrolls itself; the notepad keeps this mirror of its
//! scroll position so the gutter and highlight can be drawn in the same
//! coordinates. Scroll requests arrive in rows, and caret moves pull the
//! caret's row back into view the same way the widget does.

use slate_buffer::Position;

use crate::layout::BlockLayout;

/// Vertical scroll offset and size of the text area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Document y shown at the top edge
    pub top: f32,
    /// Visible height
    pub height: f32,
    /// Visible width of the text area (excluding the gutter)
    pub width: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            top: 0.0,
            height: height.max(0.0),
            width: width.max(0.0),
        }
    }

    /// Document y shown at the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Largest valid `top`: the last row may scroll up to the top edge.
    pub fn max_top(layout: &impl BlockLayout) -> f32 {
        (layout.content_height() - layout.line_height()).max(0.0)
    }

    /// Scrolls by whole rows; negative scrolls up.
    pub fn scroll_rows(&mut self, rows: i32, layout: &impl BlockLayout) {
        self.top += rows as f32 * layout.line_height();
        self.clamp(layout);
    }

    /// Keeps `top` inside `[0, max_top]`, snapped to a row boundary.
    pub fn clamp(&mut self, layout: &impl BlockLayout) {
        let line_height = layout.line_height();
        let top = self.top.clamp(0.0, Self::max_top(layout));
        self.top = (top / line_height).round() * line_height;
        if self.top > Self::max_top(layout) {
            self.top = Self::max_top(layout);
        }
    }

    /// Changes the visible size, keeping the scroll offset valid.
    pub fn resize(&mut self, width: f32, height: f32, layout: &impl BlockLayout) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.clamp(layout);
    }

    /// Scrolls the minimum amount needed to show the caret's row.
    pub fn ensure_visible(&mut self, caret: Position, layout: &impl BlockLayout) {
        let line = caret.line.min(layout.block_count().saturating_sub(1));
        let row_top = layout.block_top(line) + layout.caret_offset(line, caret.column);
        let row_bottom = row_top + layout.line_height();

        if row_top < self.top {
            self.top = row_top;
        } else if row_bottom > self.bottom() {
            self.top = row_bottom - self.height;
        }
        self.clamp(layout);
    }

    /// First block that intersects the viewport.
    pub fn first_visible_block(&self, layout: &impl BlockLayout) -> usize {
        layout.block_at(self.top)
    }
}
