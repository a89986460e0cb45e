//! # Slate Core
//!
//! Everything the notepad does that isn't drawing: the document and its
//! file I/O, undo, search, zoom, theme, and the geometry behind the
//! line-number gutter and current-line highlight.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Editor                        │
//! │  ┌──────────┐ ┌─────────┐ ┌────────┐ ┌────────────┐  │
//! │  │ Document │ │ History │ │ Search │ │ Zoom/Theme │  │
//! │  └──────────┘ └─────────┘ └────────┘ └────────────┘  │
//! └──────────────────────────────────────────────────────┘
//!        layout ──► viewport ──► gutter / highlight
//! ```
//!
//! The geometry modules are pure functions over a [`layout::BlockLayout`]
//! and a [`viewport::Viewport`], so the UI can recompute them on every
//! scroll, edit or caret move.
//!
//! ## Learning: Module Organization
//!
//! Rust modules map to files:
//! - `mod foo;` looks for `foo.rs` or `foo/mod.rs`
//! - `pub use` re-exports items for cleaner public APIs

pub mod config;
pub mod document;
pub mod editor;
pub mod gutter;
pub mod highlight;
pub mod layout;
pub mod notification;
pub mod search;
pub mod status;
pub mod theme;
pub mod viewport;
pub mod zoom;

pub use config::Config;
pub use document::{Document, LineEnding};
pub use editor::Editor;
pub use gutter::{GutterLabel, GutterMetrics};
pub use highlight::{ExtraHighlights, HighlightRect};
pub use layout::{BlockLayout, MonospaceLayout};
pub use notification::{Notification, NotificationKind, Notifier};
pub use search::{SearchDirection, SearchOutcome};
pub use status::StatusLine;
pub use theme::{Palette, Rgba, ThemeMode};
pub use viewport::Viewport;
pub use zoom::Zoom;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Document has no file path")]
    NoFilePath,

    #[error("Document is read-only")]
    ReadOnly,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Buffer(#[from] slate_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}
