use iced::Point;

/// Pages reachable from the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Editor,
    Settings,
}

/// The editor's right-click menu.
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    pub visible: bool,
    pub position: Point,
}

// Fixed sizes of the shell around the text area, in pixels
pub const NAV_RAIL_WIDTH: f32 = 64.0;
pub const COMMAND_BAR_HEIGHT: f32 = 44.0;
pub const SEARCH_BAR_HEIGHT: f32 = 44.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const SEPARATOR: f32 = 1.0;
pub const EDITOR_PADDING_X: f32 = 6.0;
pub const CONTEXT_MENU_WIDTH: f32 = 200.0;
