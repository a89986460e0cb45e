use iced::widget::text_editor;
use iced::{keyboard, Point, Size};
use slate_core::Document;
use std::path::PathBuf;

use crate::app::types::Page;

#[derive(Debug, Clone)]
pub enum Message {
    // File operations
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    FileOpened(Result<Document, String>),
    SavePathPicked(Result<PathBuf, String>),

    // Edit operations
    Undo,
    Redo,

    // Editor
    EditorAction(text_editor::Action),

    // Search
    ShowSearch,
    HideSearch,
    SearchQueryChanged(String),
    FindNext,
    FindPrevious,

    // View
    ToggleWrap,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleTheme,
    NavigateTo(Page),

    // Editor context menu
    ShowEditorContextMenu,
    HideEditorContextMenu,
    EditorCut,
    EditorCopy,
    EditorPaste,
    EditorSelectAll,

    // Notifications
    NotificationExpired(u64),
    DismissNotification(u64),

    // Window and input
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    MouseMoved(Point),
    WindowResized(Size),
}
