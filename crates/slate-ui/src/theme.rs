//! Palette to iced styles.
//!
//! ## Learning: Style Closures
//!
//! iced 0.13 styles widgets with closures of the form
//! `Fn(&Theme, Status) -> Style`. The helpers here capture a `&'static
//! Palette` so each view can ask for "the button style for this mode"
//! without threading colors through every call.

use iced::widget::{button, container, text_editor, text_input};
use iced::{Background, Border, Color, Theme};
use slate_core::{Palette, Rgba, ThemeMode};

/// Converts a palette color to an iced color.
pub fn color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.alpha())
}

/// The built-in iced theme matching a mode; used for widgets Slate doesn't style.
pub fn iced_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
    }
}

/// A plain background fill.
pub fn surface(fill: Rgba) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(color(fill))),
        ..Default::default()
    }
}

/// A one pixel separator line.
pub fn separator(palette: &'static Palette) -> impl Fn(&Theme) -> container::Style {
    surface(palette.separator)
}

/// Flat command-bar and menu button; `checked` keeps the hover fill.
pub fn flat_button(
    palette: &'static Palette,
    checked: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => Some(color(palette.hover)),
            _ if checked => Some(color(palette.hover)),
            _ => None,
        };
        let text_color = match status {
            button::Status::Disabled => color(palette.text_muted),
            _ if checked => color(palette.accent),
            _ => color(palette.text),
        };
        button::Style {
            background: bg.map(Background::Color),
            text_color,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Accent-filled button for the settings page.
pub fn accent_button(palette: &'static Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let mut bg = color(palette.accent);
        if matches!(status, button::Status::Hovered) {
            bg.a = 0.9;
        }
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: color(palette.editor_bg),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// The text editor draws on a transparent background so the line
/// highlight underneath shows through.
pub fn editor(palette: &'static Palette) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |_, _| text_editor::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            width: 0.0,
            radius: 0.0.into(),
            color: Color::TRANSPARENT,
        },
        icon: color(palette.text_muted),
        placeholder: color(palette.text_muted),
        value: color(palette.text),
        selection: color(palette.selection),
    }
}

pub fn search_input(palette: &'static Palette) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_, status| {
        let border_color = match status {
            text_input::Status::Focused => color(palette.accent),
            _ => color(palette.separator),
        };
        text_input::Style {
            background: Background::Color(color(palette.editor_bg)),
            border: Border {
                width: 1.0,
                radius: 4.0.into(),
                color: border_color,
            },
            icon: color(palette.text_muted),
            placeholder: color(palette.text_muted),
            value: color(palette.text),
            selection: color(palette.selection),
        }
    }
}

/// Floating panels: context menu and notifications.
pub fn popup(palette: &'static Palette) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(color(palette.editor_bg))),
        border: Border {
            color: color(palette.separator),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let c = color(Rgba::rgba(255, 0, 0, 51));
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_iced_theme_follows_mode() {
        assert_eq!(iced_theme(ThemeMode::Dark), Theme::Dark);
        assert_eq!(iced_theme(ThemeMode::Light), Theme::Light);
    }
}
