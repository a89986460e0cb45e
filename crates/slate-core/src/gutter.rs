//! Line-number gutter geometry.
//!
//! Two pure functions drive the gutter:
//!
//! - [`gutter_width`] sizes the gutter from the block count, so it only
//!   widens when the count gains a digit (9 → 10, 99 → 100, ...).
//! - [`visible_labels`] walks the blocks that intersect the viewport and
//!   says where each number goes.
//!
//! Painting them is left to the UI widget.

use crate::layout::BlockLayout;
use crate::viewport::Viewport;

/// Fixed padding added to the digit run, in pixels.
pub const DEFAULT_PADDING: f32 = 24.0;

/// Space kept between the right edge of a number and the editor text.
pub const RIGHT_INSET: f32 = 8.0;

/// Width of a digit in a monospace font, as a fraction of the font size.
pub const DIGIT_ADVANCE_RATIO: f32 = 0.6;

/// Font-derived sizes the width calculation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterMetrics {
    /// Horizontal advance of the glyph `9`
    pub digit_advance: f32,
    /// Fixed padding
    pub padding: f32,
}

impl GutterMetrics {
    /// Estimates metrics for a monospace font of the given pixel size.
    pub fn for_font_size(font_size: f32, padding: f32) -> Self {
        Self {
            digit_advance: font_size * DIGIT_ADVANCE_RATIO,
            padding,
        }
    }
}

impl Default for GutterMetrics {
    fn default() -> Self {
        Self::for_font_size(15.0, DEFAULT_PADDING)
    }
}

/// Number of decimal digits in `max(1, n)`.
pub fn digit_count(n: usize) -> usize {
    n.max(1).ilog10() as usize + 1
}

/// Width of the gutter for a document of `block_count` blocks.
pub fn gutter_width(block_count: usize, metrics: GutterMetrics) -> f32 {
    metrics.padding + metrics.digit_advance * digit_count(block_count) as f32
}

/// Right edge that numbers are aligned against, given the gutter width.
pub fn label_right_edge(width: f32) -> f32 {
    (width - RIGHT_INSET).max(0.0)
}

/// One line number to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterLabel {
    /// 1-based line number (block index + 1)
    pub number: usize,
    /// Top of the block relative to the viewport's top edge
    pub y: f32,
    /// Height of the block; the number sits in its first row
    pub height: f32,
}

/// Labels for every block that intersects the viewport, top to bottom.
///
/// Starts at the first visible block and stops at the first block whose top
/// lies below the viewport, so the cost is proportional to what is on screen.
pub fn visible_labels(layout: &impl BlockLayout, viewport: &Viewport) -> Vec<GutterLabel> {
    let mut labels = Vec::new();
    let count = layout.block_count();
    let mut index = viewport.first_visible_block(layout);

    while index < count {
        let geometry = layout.geometry(index);
        let top = geometry.top - viewport.top;
        if top > viewport.height {
            break;
        }
        if top + geometry.height >= 0.0 {
            labels.push(GutterLabel {
                number: index + 1,
                y: top,
                height: geometry.height,
            });
        }
        index += 1;
    }

    labels
}
