//! Custom widgets drawn alongside iced's `text_editor`.
//!
//! ## Learning: Custom Widgets in Iced
//!
//! A widget implements `iced::advanced::Widget`: `size` and `layout` claim
//! space, `draw` paints into it. Neither widget here handles events, so
//! clicks and scrolling fall through to the editor.

pub mod gutter;
pub mod line_highlight;

pub use gutter::Gutter;
pub use line_highlight::LineHighlight;
