use iced::widget::text_editor::{Action, Edit};
use iced::widget::text_input;
use iced::{keyboard, Task};
use slate_buffer::{EditKind, Snapshot};
use slate_core::{CoreResult, SearchDirection, SearchOutcome};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::app::file_ops::{self, CANCELLED};
use crate::app::view::search_input_id;
use crate::app::{App, Message, Page};
use crate::caret;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ==================== Files ====================
            Message::NewFile => {
                self.context_menu.visible = false;
                self.editor.new_document();
                self.reload_content();
                let id = self.notifier.success("New file created");
                return self.expire_later(id);
            }

            Message::OpenFile => {
                self.context_menu.visible = false;
                return Task::perform(file_ops::pick_and_load(), Message::FileOpened);
            }

            Message::FileOpened(result) => match result {
                Ok(document) => {
                    let shown = document
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| document.name().to_string());
                    self.editor.load_document(document);
                    self.reload_content();
                    let id = self.notifier.success(format!("Opened: {shown}"));
                    return self.expire_later(id);
                }
                Err(e) if e == CANCELLED => {}
                Err(e) => {
                    warn!("{e}");
                    let id = self.notifier.error(e);
                    return self.expire_later(id);
                }
            },

            Message::Save => {
                self.context_menu.visible = false;
                if self.editor.needs_save_path() {
                    return self.update(Message::SaveAs);
                }
                let result = self.editor.save();
                return self.report_save(result);
            }

            Message::SaveAs => {
                self.context_menu.visible = false;
                let name = self.editor.document().name().to_string();
                return Task::perform(file_ops::pick_save_path(name), Message::SavePathPicked);
            }

            Message::SavePathPicked(result) => match result {
                Ok(path) => {
                    let result = self.editor.save_as(&path);
                    return self.report_save(result);
                }
                Err(e) if e == CANCELLED => {}
                Err(e) => {
                    warn!("{e}");
                    let id = self.notifier.error(e);
                    return self.expire_later(id);
                }
            },

            // ==================== Editing ====================
            Message::EditorAction(action) => {
                self.context_menu.visible = false;
                self.perform(action);
            }

            Message::Undo => {
                let current = caret::snapshot(&self.content);
                if let Some(restored) = self.editor.undo(current) {
                    self.restore(restored);
                }
            }

            Message::Redo => {
                let current = caret::snapshot(&self.content);
                if let Some(restored) = self.editor.redo(current) {
                    self.restore(restored);
                }
            }

            Message::ShowEditorContextMenu => {
                self.context_menu.visible = true;
                self.context_menu.position = self.last_cursor_position;
            }

            Message::HideEditorContextMenu => {
                self.context_menu.visible = false;
            }

            Message::EditorCut => {
                self.context_menu.visible = false;
                if let Some(selected) = self.content.selection() {
                    if let Err(e) = write_clipboard(selected) {
                        warn!("Clipboard: {e}");
                    }
                    self.perform(Action::Edit(Edit::Delete));
                }
            }

            Message::EditorCopy => {
                self.context_menu.visible = false;
                if let Some(selected) = self.content.selection() {
                    if let Err(e) = write_clipboard(selected) {
                        warn!("Clipboard: {e}");
                    }
                }
            }

            Message::EditorPaste => {
                self.context_menu.visible = false;
                match read_clipboard() {
                    Ok(text) => self.perform(Action::Edit(Edit::Paste(Arc::new(text)))),
                    Err(e) => warn!("Clipboard: {e}"),
                }
            }

            Message::EditorSelectAll => {
                self.context_menu.visible = false;
                self.perform(Action::SelectAll);
            }

            // ==================== Search ====================
            Message::ShowSearch => {
                self.page = Page::Editor;
                if !self.search_visible {
                    self.search_visible = true;
                    self.relayout();
                }
                return Task::batch([
                    text_input::focus(search_input_id()),
                    text_input::select_all(search_input_id()),
                ]);
            }

            Message::HideSearch => {
                if self.search_visible {
                    self.search_visible = false;
                    self.relayout();
                }
            }

            Message::SearchQueryChanged(query) => {
                self.editor.set_search_query(query);
            }

            Message::FindNext => return self.find(SearchDirection::Forward),
            Message::FindPrevious => return self.find(SearchDirection::Backward),

            // ==================== View ====================
            Message::ToggleWrap => {
                let enabled = !self.editor.word_wrap();
                self.editor.set_word_wrap(enabled);
                self.relayout();
            }

            Message::ZoomIn => {
                self.editor.zoom_in();
                self.relayout();
            }

            Message::ZoomOut => {
                self.editor.zoom_out();
                self.relayout();
            }

            Message::ZoomReset => {
                self.editor.zoom_reset();
                self.relayout();
            }

            Message::ToggleTheme => {
                self.editor.toggle_theme();
            }

            Message::NavigateTo(page) => {
                self.context_menu.visible = false;
                self.page = page;
            }

            // ==================== Notifications ====================
            Message::NotificationExpired(id) | Message::DismissNotification(id) => {
                self.notifier.dismiss(id);
            }

            // ==================== Window and input ====================
            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::MouseMoved(point) => {
                self.last_cursor_position = point;
            }

            Message::WindowResized(size) => {
                self.window_size = size;
                self.relayout();
            }
        }

        Task::none()
    }

    /// Applies a text editor action, recording undo history for edits.
    fn perform(&mut self, action: Action) {
        if action.is_edit() {
            if self.editor.read_only() {
                return;
            }
            let kind = edit_kind(&action);
            let before = caret::snapshot(&self.content);
            self.content.perform(action);

            if caret::display_text(&self.content) != before.text {
                if let Err(e) = self.editor.record_edit(before, kind) {
                    warn!("Edit not recorded: {e}");
                }
                self.editor.sync_text(self.content.lines());
                self.relayout();
            }
            self.sync_caret();
            return;
        }

        if let Action::Scroll { lines } = action {
            self.content.perform(action);
            self.viewport.scroll_rows(lines, &self.layout);
            return;
        }

        // Caret moves end the current undo step
        self.content.perform(action);
        self.editor.seal_history();
        self.sync_caret();
    }

    /// Puts an undo/redo snapshot back into the widget.
    fn restore(&mut self, snapshot: Snapshot) {
        self.content = caret::content_from(&snapshot.text);
        caret::place(&mut self.content, snapshot.cursor);
        self.editor.sync_text(self.content.lines());
        self.relayout();
        self.sync_caret();
    }

    fn find(&mut self, direction: SearchDirection) -> Task<Message> {
        match self.editor.find(direction) {
            Ok(Some(SearchOutcome::Found { .. })) => {
                let selection = self.editor.cursor().selection();
                caret::select(&mut self.content, selection.start, selection.end);
                self.editor.seal_history();
                self.sync_caret();
                Task::none()
            }
            Ok(Some(SearchOutcome::NotFound)) => {
                let query = &self.editor.search_state().query;
                let id = self.notifier.warning("Search", format!("'{query}' was not found"));
                self.expire_later(id)
            }
            Ok(None) => Task::none(),
            Err(e) => {
                warn!("Search failed: {e}");
                Task::none()
            }
        }
    }

    fn report_save(&mut self, result: CoreResult<()>) -> Task<Message> {
        let id = match result {
            Ok(()) => {
                let shown = self
                    .editor
                    .document()
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.notifier.success(format!("Saved: {shown}"))
            }
            Err(e) => {
                warn!("Save failed: {e}");
                self.notifier.error(e.to_string())
            }
        };
        self.expire_later(id)
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                if self.context_menu.visible {
                    return self.update(Message::HideEditorContextMenu);
                }
                return self.update(Message::HideSearch);
            }
            keyboard::Key::Named(keyboard::key::Named::F3) => {
                if modifiers.shift() {
                    return self.update(Message::FindPrevious);
                }
                return self.update(Message::FindNext);
            }
            _ => {}
        }

        if !modifiers.control() {
            return Task::none();
        }

        if let keyboard::Key::Character(c) = key.as_ref() {
            let message = match (c.to_lowercase().as_str(), modifiers.shift()) {
                ("n", _) => Message::NewFile,
                ("o", _) => Message::OpenFile,
                ("s", true) => Message::SaveAs,
                ("s", false) => Message::Save,
                ("z", true) | ("y", _) => Message::Redo,
                ("z", false) => Message::Undo,
                ("f", _) => Message::ShowSearch,
                ("=", _) | ("+", _) => Message::ZoomIn,
                ("-", _) => Message::ZoomOut,
                ("0", _) => Message::ZoomReset,
                _ => return Task::none(),
            };
            debug!("Shortcut {c:?} -> {message:?}");
            return self.update(message);
        }

        Task::none()
    }
}

/// Undo grouping for an edit: runs of typing or deleting merge, line breaks
/// and pastes stand alone.
fn edit_kind(action: &Action) -> EditKind {
    match action {
        Action::Edit(Edit::Insert(_)) => EditKind::Insert,
        Action::Edit(Edit::Backspace | Edit::Delete) => EditKind::Delete,
        _ => EditKind::Other,
    }
}

fn write_clipboard(text: String) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text)
}

fn read_clipboard() -> Result<String, arboard::Error> {
    arboard::Clipboard::new()?.get_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use slate_core::BlockLayout;

    fn app_with(text: &str) -> App {
        let (mut app, _) = App::new(Flags::default());
        app.content = caret::content_from(text);
        app.editor.sync_text(app.content.lines());
        app.relayout();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let edit = if c == '\n' { Edit::Enter } else { Edit::Insert(c) };
            let _ = app.update(Message::EditorAction(Action::Edit(edit)));
        }
    }

    #[test]
    fn test_edit_kinds() {
        assert_eq!(edit_kind(&Action::Edit(Edit::Insert('a'))), EditKind::Insert);
        assert_eq!(edit_kind(&Action::Edit(Edit::Backspace)), EditKind::Delete);
        assert_eq!(edit_kind(&Action::Edit(Edit::Enter)), EditKind::Other);
        assert_eq!(
            edit_kind(&Action::Edit(Edit::Paste(Arc::new("x".into())))),
            EditKind::Other
        );
    }

    #[test]
    fn test_typing_updates_document_and_status() {
        let mut app = app_with("");
        type_text(&mut app, "hi\nyo");

        assert_eq!(app.editor.document().text(), "hi\nyo");
        let status = app.editor.status();
        assert_eq!(status.position, "Ln 2, Col 3");
        assert_eq!(status.length, "5 chars");
        assert_eq!(app.layout.block_count(), 2);
        assert_eq!(app.title(), "Untitled* - Slate");
    }

    #[test]
    fn test_undo_restores_text() {
        let mut app = app_with("");
        type_text(&mut app, "abc");
        let _ = app.update(Message::Undo);
        assert_eq!(caret::display_text(&app.content), "");

        let _ = app.update(Message::Redo);
        assert_eq!(caret::display_text(&app.content), "abc");
        assert_eq!(app.editor.document().text(), "abc");
    }

    #[test]
    fn test_read_only_ignores_edits() {
        let mut app = app_with("fixed");
        app.editor.set_read_only(true);
        type_text(&mut app, "x");
        assert_eq!(caret::display_text(&app.content), "fixed");
        assert_eq!(app.editor.document().text(), "fixed");
    }

    #[test]
    fn test_not_found_warns() {
        let mut app = app_with("hello");
        let _ = app.update(Message::SearchQueryChanged("absent".into()));
        let _ = app.update(Message::FindNext);

        let notification = app.notifier.current().unwrap();
        assert_eq!(notification.title, "Search");
        assert_eq!(notification.message, "'absent' was not found");
    }

    #[test]
    fn test_zoom_widens_gutter() {
        let mut app = app_with("a\nb");
        let before = app.editor.gutter_width(app.layout.block_count());
        let _ = app.update(Message::ZoomIn);
        assert_eq!(app.editor.status().zoom, "110%");
        assert!(app.editor.gutter_width(app.layout.block_count()) > before);
    }

    #[test]
    fn test_shortcuts() {
        let mut app = app_with("");
        let ctrl = keyboard::Modifiers::CTRL;

        let _ = app.handle_key_pressed(keyboard::Key::Character("f".into()), ctrl);
        assert!(app.search_visible);

        let _ = app.handle_key_pressed(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::empty(),
        );
        assert!(!app.search_visible);

        let _ = app.handle_key_pressed(keyboard::Key::Character("=".into()), ctrl);
        assert_eq!(app.editor.zoom().percent(), 110);
    }
}
