//! Main editor orchestration.
//!
//! ## Learning: The Facade Pattern
//!
//! `Editor` acts as a facade, providing a simple interface to
//! the document, history, search, zoom and theme. The UI talks only to
//! `Editor`, never to the individual pieces.

use std::ops::Deref;
use std::path::Path;

use slate_buffer::{Cursor, EditKind, History, Position, Selection, Snapshot};
use tracing::{debug, info};

use crate::config::Config;
use crate::document::Document;
use crate::gutter::{self, GutterMetrics};
use crate::highlight::{self, ExtraHighlights};
use crate::layout::{BlockLayout, LayoutMetrics};
use crate::search::{self, SearchDirection, SearchOptions, SearchOutcome, SearchState};
use crate::status::StatusLine;
use crate::theme::ThemeMode;
use crate::viewport::Viewport;
use crate::zoom::Zoom;
use crate::{CoreError, CoreResult};

/// The notepad's state, minus anything the GUI toolkit owns.
///
/// ## Thread Safety
///
/// `Editor` is designed to be owned by a single thread (the UI thread).
/// File dialogs run elsewhere and hand their results back as messages.
#[derive(Debug)]
pub struct Editor {
    /// Editor configuration
    config: Config,

    /// The open document
    document: Document,

    /// Undo/redo snapshots
    history: History,

    /// Caret, plus the anchor of selections made by search
    cursor: Cursor,

    /// Search bar state
    search: SearchState,

    zoom: Zoom,
    theme: ThemeMode,
    word_wrap: bool,
    read_only: bool,
}

impl Editor {
    /// Creates an editor with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an editor with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            document: Document::new(),
            history: History::new(config.editor.undo_limit),
            cursor: Cursor::default(),
            search: SearchState::new(SearchOptions {
                case_sensitive: config.search.case_sensitive,
            }),
            zoom: Zoom::new(config.editor.font_size),
            theme: config.ui.theme,
            word_wrap: config.editor.word_wrap,
            read_only: config.editor.read_only,
            config,
        }
    }

    // ==================== Document Operations ====================

    /// Replaces the document with a fresh, empty one.
    pub fn new_document(&mut self) {
        self.replace_document(Document::new());
        info!("New document");
    }

    /// Opens a file, replacing the current document.
    ///
    /// On failure the current document is left untouched.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let document = Document::open(path)?;
        self.load_document(document);
        Ok(())
    }

    /// Installs a document that was read elsewhere (e.g. off the UI thread).
    pub fn load_document(&mut self, document: Document) {
        if let Some(path) = document.path() {
            info!(
                "Opened {} ({} lines, {})",
                path.display(),
                document.line_count(),
                document.line_ending().label()
            );
        }
        self.replace_document(document);
    }

    /// Saves to the document's own path.
    pub fn save(&mut self) -> CoreResult<()> {
        self.document.save()?;
        if let Some(path) = self.document.path() {
            info!("Saved {}", path.display());
        }
        Ok(())
    }

    /// Saves to a new path, which becomes the document's path.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        self.document.save_as(path)?;
        info!("Saved {}", path.display());
        Ok(())
    }

    /// True when saving needs a path from the user first.
    pub fn needs_save_path(&self) -> bool {
        self.document.path().is_none()
    }

    fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.history.clear();
        self.cursor = Cursor::default();
        self.search.reset();
    }

    /// Returns the open document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Window title: document name, with a marker when modified.
    pub fn title(&self) -> String {
        let marker = if self.document.is_modified() { "*" } else { "" };
        format!("{}{} - Slate", self.document.name(), marker)
    }

    // ==================== Editing ====================

    /// Mirrors the widget's lines into the document after an edit.
    pub fn sync_text<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Deref<Target = str>,
    {
        self.document.sync_from_lines(lines);
    }

    /// Records the state from before an edit, for undo.
    pub fn record_edit(&mut self, before: Snapshot, kind: EditKind) -> CoreResult<()> {
        if self.read_only {
            return Err(CoreError::ReadOnly);
        }
        self.history.record(before, kind);
        Ok(())
    }

    /// Steps back; `current` is the state being left.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.read_only {
            return None;
        }
        let restored = self.history.undo(current)?;
        self.cursor.move_to(restored.cursor);
        debug!("Undo ({} steps left)", self.history.undo_count());
        Some(restored)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.read_only {
            return None;
        }
        let restored = self.history.redo(current)?;
        self.cursor.move_to(restored.cursor);
        debug!("Redo ({} steps left)", self.history.redo_count());
        Some(restored)
    }

    /// Ends the current undo step.
    pub fn seal_history(&mut self) {
        self.history.seal();
    }

    pub fn can_undo(&self) -> bool {
        !self.read_only && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.read_only && self.history.can_redo()
    }

    // ==================== Caret ====================

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Updates the caret from the widget.
    ///
    /// A selection made by search survives as long as the caret stays at
    /// its end.
    pub fn set_caret(&mut self, position: Position) {
        if self.cursor.has_selection() && self.cursor.position == position {
            return;
        }
        self.cursor.move_to(position);
    }

    // ==================== Search ====================

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// Changes the query. The next search starts from the caret as usual.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
        self.search.reset();
    }

    /// Searches for the current query from the current selection.
    ///
    /// Returns `None` for an empty query. A match becomes the selection;
    /// on `NotFound` the caret is left alone.
    pub fn find(&mut self, direction: SearchDirection) -> CoreResult<Option<SearchOutcome>> {
        let buffer = self.document.buffer();
        let selection = self.cursor.selection();
        let start = buffer.position_to_char_idx(buffer.clamp_position(selection.start))?;
        let end = buffer.position_to_char_idx(buffer.clamp_position(selection.end))?;

        let Some(outcome) = search::search(
            buffer,
            &self.search.query,
            start..end,
            direction,
            self.search.options,
        ) else {
            return Ok(None);
        };

        match &outcome {
            SearchOutcome::Found { range, wrapped } => {
                let start = buffer.char_idx_to_position(range.start)?;
                let end = buffer.char_idx_to_position(range.end)?;
                debug!(
                    "Found {:?} at {} ({:?}{})",
                    self.search.query,
                    start,
                    direction,
                    if *wrapped { ", wrapped" } else { "" }
                );
                self.cursor.select(Selection::new(start, end));
            }
            SearchOutcome::NotFound => {
                debug!("{:?} not found", self.search.query);
            }
        }

        self.search.set_last_outcome(outcome.clone());
        Ok(Some(outcome))
    }

    // ==================== View Settings ====================

    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
        debug!("Zoom {}", self.zoom.label());
    }

    pub fn zoom_out(&mut self) {
        if self.zoom.zoom_out() {
            debug!("Zoom {}", self.zoom.label());
        }
    }

    pub fn zoom_reset(&mut self) {
        self.zoom.reset();
        debug!("Zoom {}", self.zoom.label());
    }

    /// Current font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.zoom.font_size()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Switches between light and dark for this session.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        info!("Theme switched to {}", self.theme);
        self.theme
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        self.word_wrap = enabled;
        debug!("Word wrap {}", if enabled { "on" } else { "off" });
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Derived View State ====================

    /// Sizes used to estimate the layout at the current zoom.
    pub fn layout_metrics(&self) -> LayoutMetrics {
        LayoutMetrics::for_font(self.font_size(), self.config.editor.line_height)
    }

    /// Gutter metrics at the current zoom.
    pub fn gutter_metrics(&self) -> GutterMetrics {
        GutterMetrics::for_font_size(self.font_size(), self.config.ui.gutter_padding)
    }

    /// Gutter width for a document of `block_count` blocks.
    pub fn gutter_width(&self, block_count: usize) -> f32 {
        gutter::gutter_width(block_count, self.gutter_metrics())
    }

    /// The current-line highlight, if it should be drawn.
    pub fn highlights(&self, layout: &impl BlockLayout, viewport: &Viewport) -> ExtraHighlights {
        if !self.config.ui.highlight_current_line {
            return ExtraHighlights::none();
        }
        highlight::current_line(
            layout,
            viewport,
            self.cursor.position.line,
            self.read_only,
            self.theme,
        )
    }

    /// Status bar labels.
    pub fn status(&self) -> StatusLine {
        StatusLine::new(
            self.cursor.position,
            self.document.display_len(),
            self.zoom.percent(),
        )
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceLayout;

    fn editor_with(lines: &[&str]) -> Editor {
        let mut editor = Editor::new();
        editor.sync_text(lines.iter().copied());
        editor
    }

    #[test]
    fn test_find_selects_match_and_advances() {
        let mut editor = editor_with(&["alpha beta", "beta gamma"]);

        let first = editor.find(SearchDirection::Forward).unwrap();
        assert!(first.is_none(), "empty query is a no-op");

        editor.set_search_query("BETA");
        editor.find(SearchDirection::Forward).unwrap();
        let sel = editor.cursor().selection();
        assert_eq!(sel, Selection::new(Position::new(0, 6), Position::new(0, 10)));

        // The widget reports the caret at the match end: selection survives
        editor.set_caret(Position::new(0, 10));
        editor.find(SearchDirection::Forward).unwrap();
        assert_eq!(editor.cursor().selection().start, Position::new(1, 0));

        let outcome = editor.find(SearchDirection::Forward).unwrap().unwrap();
        assert_eq!(outcome, SearchOutcome::Found { range: 6..10, wrapped: true });
    }

    #[test]
    fn test_find_previous_from_selection_start() {
        let mut editor = editor_with(&["one two one"]);
        editor.set_search_query("one");
        editor.set_caret(Position::new(0, 11));

        editor.find(SearchDirection::Backward).unwrap();
        assert_eq!(editor.cursor().selection().start, Position::new(0, 8));

        editor.find(SearchDirection::Backward).unwrap();
        assert_eq!(editor.cursor().selection().start, Position::new(0, 0));
    }

    #[test]
    fn test_not_found_leaves_caret() {
        let mut editor = editor_with(&["hello"]);
        editor.set_caret(Position::new(0, 2));
        editor.set_search_query("absent");

        let outcome = editor.find(SearchDirection::Forward).unwrap();
        assert_eq!(outcome, Some(SearchOutcome::NotFound));
        assert_eq!(editor.cursor().position, Position::new(0, 2));
        assert!(!editor.cursor().has_selection());
        assert_eq!(editor.search_state().last_outcome(), Some(&SearchOutcome::NotFound));
    }

    #[test]
    fn test_caret_move_drops_search_selection() {
        let mut editor = editor_with(&["abc abc"]);
        editor.set_search_query("abc");
        editor.find(SearchDirection::Forward).unwrap();
        assert!(editor.cursor().has_selection());

        editor.set_caret(Position::new(0, 1));
        assert!(!editor.cursor().has_selection());
    }

    #[test]
    fn test_undo_redo_restores_snapshots() {
        let mut editor = editor_with(&["a"]);
        editor
            .record_edit(Snapshot::new("a", Position::new(0, 1)), EditKind::Other)
            .unwrap();
        editor.sync_text(["a", ""]);

        let restored = editor.undo(Snapshot::new("a\n", Position::new(1, 0))).unwrap();
        assert_eq!(restored.text, "a");
        assert_eq!(editor.cursor().position, Position::new(0, 1));
        assert!(editor.can_redo());

        let again = editor.redo(Snapshot::new("a", Position::new(0, 1))).unwrap();
        assert_eq!(again.text, "a\n");
        assert!(!editor.can_redo());
    }

    #[test]
    fn test_read_only_refuses_history() {
        let mut editor = Editor::new();
        editor.set_read_only(true);
        assert!(matches!(
            editor.record_edit(Snapshot::new("", Position::ZERO), EditKind::Insert),
            Err(CoreError::ReadOnly)
        ));
        assert!(editor.undo(Snapshot::new("", Position::ZERO)).is_none());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_read_only_suppresses_highlight() {
        let mut editor = Editor::new();
        let layout = MonospaceLayout::uniform(3, 20.0);
        let viewport = Viewport::new(100.0, 100.0);
        assert_eq!(editor.highlights(&layout, &viewport).len(), 1);

        editor.set_read_only(true);
        assert!(editor.highlights(&layout, &viewport).is_empty());
    }

    #[test]
    fn test_status_and_title() {
        let mut editor = editor_with(&["abc", "de"]);
        editor.set_caret(Position::new(1, 2));
        editor.zoom_in();

        let status = editor.status();
        assert_eq!(status.position, "Ln 2, Col 3");
        assert_eq!(status.length, "6 chars");
        assert_eq!(status.zoom, "110%");
        assert_eq!(editor.title(), "Untitled* - Slate");
    }

    #[test]
    fn test_gutter_width_tracks_zoom() {
        let mut editor = Editor::new();
        let before = editor.gutter_width(120);
        editor.zoom_in();
        let after = editor.gutter_width(120);
        assert!(after > before);
        assert_eq!(editor.gutter_width(5), editor.gutter_width(9));
    }

    #[test]
    fn test_open_failure_keeps_document() {
        let mut editor = editor_with(&["keep me"]);
        let dir = tempfile::tempdir().unwrap();
        assert!(editor.open_file(dir.path().join("missing.txt")).is_err());
        assert_eq!(editor.document().text(), "keep me");
    }

    #[test]
    fn test_open_edit_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "line one\r\nline two\r\n").unwrap();

        let mut editor = Editor::new();
        editor.open_file(&path).unwrap();
        assert!(!editor.needs_save_path());

        let display = editor.document().display_text();
        editor.sync_text(display.split('\n'));
        editor.save().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"line one\r\nline two\r\n");

        editor.new_document();
        assert!(editor.needs_save_path());
        assert!(matches!(editor.save(), Err(CoreError::NoFilePath)));
    }

    #[test]
    fn test_toggle_theme() {
        let mut editor = Editor::new();
        assert_eq!(editor.theme(), ThemeMode::Light);
        assert_eq!(editor.toggle_theme(), ThemeMode::Dark);
        assert_eq!(editor.toggle_theme(), ThemeMode::Light);
    }
}
