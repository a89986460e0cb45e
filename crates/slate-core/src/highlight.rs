//! Current-line highlighting.
//!
//! The highlight is an "extra selection": a translucent band drawn under the
//! text without touching it. The set is rebuilt from scratch on every caret
//! move or edit, so stale bands never linger.

use crate::layout::BlockLayout;
use crate::theme::{Palette, Rgba, ThemeMode};
use crate::viewport::Viewport;

/// A full-width band over one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRect {
    /// Block being highlighted
    pub block: usize,
    /// Top relative to the viewport's top edge
    pub y: f32,
    /// Height of the whole block, wrapped rows included
    pub height: f32,
    /// Width of the text area
    pub width: f32,
    pub color: Rgba,
}

/// The decorations drawn over the text. Holds at most one rectangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraHighlights {
    rect: Option<HighlightRect>,
}

impl ExtraHighlights {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    pub fn len(&self) -> usize {
        usize::from(self.rect.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &HighlightRect> {
        self.rect.iter()
    }
}

/// Computes the highlight for the block holding the caret.
///
/// Returns an empty set when the document is read-only.
pub fn current_line(
    layout: &impl BlockLayout,
    viewport: &Viewport,
    caret_line: usize,
    read_only: bool,
    mode: ThemeMode,
) -> ExtraHighlights {
    if read_only {
        return ExtraHighlights::none();
    }

    let block = caret_line.min(layout.block_count().saturating_sub(1));
    let geometry = layout.geometry(block);

    ExtraHighlights {
        rect: Some(HighlightRect {
            block,
            y: geometry.top - viewport.top,
            height: geometry.height,
            width: viewport.width,
            color: Palette::for_mode(mode).line_highlight,
        }),
    }
}
