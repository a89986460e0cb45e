use iced::widget::text_editor;
use iced::{event, keyboard, window, Event, Point, Size, Subscription, Task};
use slate_core::{BlockLayout, Config, Editor, MonospaceLayout, Notifier, Viewport};
use std::path::PathBuf;
use std::time::Duration;

pub mod file_ops;
pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

use crate::caret;

/// Startup options, filled in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to open at startup
    pub file: Option<PathBuf>,
    /// Disable editing (and the current-line highlight)
    pub read_only: bool,
    pub config: Config,
}

pub struct App {
    pub editor: Editor,
    pub content: text_editor::Content,
    /// Estimated layout of `content`, rebuilt on edits, zoom, wrap and resize
    pub layout: MonospaceLayout,
    /// Mirror of the text editor's scroll position
    pub viewport: Viewport,
    pub page: Page,
    pub search_visible: bool,
    pub notifier: Notifier,
    pub context_menu: ContextMenu,
    pub last_cursor_position: Point,
    pub window_size: Size,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let window_size = Size::new(flags.config.ui.window_width, flags.config.ui.window_height);

        let mut editor = Editor::with_config(flags.config);
        if flags.read_only {
            editor.set_read_only(true);
        }

        let mut app = Self {
            editor,
            content: text_editor::Content::new(),
            layout: MonospaceLayout::uniform(1, 1.0),
            viewport: Viewport::default(),
            page: Page::Editor,
            search_visible: false,
            notifier: Notifier::new(),
            context_menu: ContextMenu::default(),
            last_cursor_position: Point::ORIGIN,
            window_size,
        };
        app.relayout();

        let task = match flags.file {
            Some(path) => Task::perform(file_ops::load_document(path), Message::FileOpened),
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        self.editor.title()
    }

    pub fn theme(&self) -> iced::Theme {
        crate::theme::iced_theme(self.editor.theme())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Captured key presses too, so shortcuts still work while the
        // search box has focus
        let keyboard_sub = event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        Subscription::batch([
            keyboard_sub,
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ])
    }

    // ==================== Geometry ====================

    /// Size of the area the text editor occupies, estimated from the window.
    pub fn text_area_size(&self) -> Size {
        let mut height = self.window_size.height
            - COMMAND_BAR_HEIGHT
            - STATUS_BAR_HEIGHT
            - 2.0 * SEPARATOR;
        if self.search_visible {
            height -= SEARCH_BAR_HEIGHT + SEPARATOR;
        }
        let width = self.window_size.width
            - NAV_RAIL_WIDTH
            - SEPARATOR
            - self.editor.gutter_width(self.layout.block_count());
        Size::new(width.max(0.0), height.max(0.0))
    }

    /// Rebuilds the layout estimate and keeps the scroll mirror in range.
    pub fn relayout(&mut self) {
        let area = self.text_area_size();
        let wrap_width = self
            .editor
            .word_wrap()
            .then_some(area.width - 2.0 * EDITOR_PADDING_X);

        let before = self.editor.gutter_width(self.layout.block_count());
        self.layout = MonospaceLayout::from_lines(
            self.content.lines(),
            self.editor.layout_metrics(),
            wrap_width,
        );
        let after = self.editor.gutter_width(self.layout.block_count());
        if before != after {
            tracing::debug!("Gutter width {before} -> {after}");
        }

        let area = self.text_area_size();
        self.viewport.resize(area.width, area.height, &self.layout);
    }

    /// Pulls the caret from the widget into the editor and scrolls to it.
    pub fn sync_caret(&mut self) {
        let position = caret::caret(&self.content);
        self.editor.set_caret(position);
        self.viewport.ensure_visible(position, &self.layout);
    }

    /// Replaces the widget content with the editor's document.
    pub fn reload_content(&mut self) {
        self.content = caret::content_from(&self.editor.document().display_text());
        self.viewport.top = 0.0;
        self.relayout();
        self.sync_caret();
    }

    /// Schedules the dismissal of notification `id`.
    pub fn expire_later(&self, id: u64) -> Task<Message> {
        let ms = self.editor.config().ui.notification_ms;
        if ms == 0 {
            return Task::none();
        }
        let after = Duration::from_millis(ms);
        Task::perform(
            slate_core::notification::expire(id, after),
            Message::NotificationExpired,
        )
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let window_size = Size::new(flags.config.ui.window_width, flags.config.ui.window_height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(window_size)
        .theme(App::theme)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
