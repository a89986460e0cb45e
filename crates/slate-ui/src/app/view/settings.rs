use iced::widget::{button, column, container, text, vertical_space, Space};
use iced::{Alignment, Element, Length, Padding};
use slate_core::{Palette, ThemeMode};

use crate::app::{App, Message, Page, NAV_RAIL_WIDTH};
use crate::theme;

impl App {
    pub fn view_nav_rail(&self, palette: &'static Palette) -> Element<'_, Message> {
        let nav_btn = |label: &'static str, page: Page| {
            button(text(label).size(11).center())
                .width(Length::Fill)
                .padding(Padding::from([10, 4]))
                .style(theme::flat_button(palette, self.page == page))
                .on_press(Message::NavigateTo(page))
        };

        let rail = column![
            nav_btn("Edit", Page::Editor),
            vertical_space(),
            nav_btn("Settings", Page::Settings),
        ]
        .spacing(4)
        .padding(6)
        .align_x(Alignment::Center);

        container(rail)
            .width(NAV_RAIL_WIDTH)
            .height(Length::Fill)
            .style(theme::surface(palette.window_bg))
            .into()
    }

    pub fn view_settings(&self, palette: &'static Palette) -> Element<'_, Message> {
        let current = match self.editor.theme() {
            ThemeMode::Light => "Current theme: Light",
            ThemeMode::Dark => "Current theme: Dark",
        };

        let page = column![
            text("Settings").size(24).color(theme::color(palette.text)),
            Space::with_height(Length::Fixed(24.0)),
            text("Appearance").size(13).color(theme::color(palette.text_muted)),
            text(current).size(12).color(theme::color(palette.text)),
            button(text("Toggle theme (Light / Dark)").size(13).center())
                .width(Length::Fixed(250.0))
                .padding(Padding::from([8, 12]))
                .style(theme::accent_button(palette))
                .on_press(Message::ToggleTheme),
        ]
        .spacing(10);

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(40)
            .style(theme::surface(palette.editor_bg))
            .into()
    }
}
