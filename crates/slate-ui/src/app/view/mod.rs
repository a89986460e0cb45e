pub mod editor;
pub mod settings;

use iced::widget::{
    button, column, container, horizontal_space, mouse_area, row, stack, text, text_input,
    Column, Space,
};
use iced::{Alignment, Element, Length, Padding};
use slate_core::{NotificationKind, Palette};

use crate::app::{App, Message, Page, CONTEXT_MENU_WIDTH, SEPARATOR};
use crate::theme;

/// Id of the search box, so it can be focused from a shortcut.
pub fn search_input_id() -> text_input::Id {
    text_input::Id::new("search")
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = Palette::for_mode(self.editor.theme());

        let page = match self.page {
            Page::Editor => self.view_editor_page(palette),
            Page::Settings => self.view_settings(palette),
        };

        let content = row![
            self.view_nav_rail(palette),
            vertical_separator(palette),
            page,
        ]
        .height(Length::Fill);

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::surface(palette.window_bg))
            .into();

        let tracked_view: Element<'_, Message> = mouse_area(main_view)
            .on_move(Message::MouseMoved)
            .into();

        let with_menu: Element<'_, Message> = if self.context_menu.visible {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::HideEditorContextMenu),
                tracked_view,
                self.view_editor_context_menu(palette),
            ]
            .into()
        } else {
            tracked_view
        };

        match self.view_notification(palette) {
            Some(toast) => stack![with_menu, toast].into(),
            None => with_menu,
        }
    }

    pub fn editor_menu_btn<'a>(
        palette: &'static Palette,
        label: &'a str,
        shortcut: &'a str,
        msg: Message,
        enabled: bool,
    ) -> Element<'a, Message> {
        let text_color = if enabled { palette.text } else { palette.text_muted };

        let btn = button(
            row![
                text(label).size(12).color(theme::color(text_color)),
                horizontal_space(),
                text(shortcut).size(11).color(theme::color(palette.text_muted)),
            ]
            .width(Length::Fill)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 12]))
        .style(theme::flat_button(palette, false));

        if enabled {
            btn.on_press(msg).into()
        } else {
            btn.into()
        }
    }

    pub fn view_editor_context_menu(&self, palette: &'static Palette) -> Element<'_, Message> {
        let has_selection = self.content.selection().is_some();
        let editable = !self.editor.read_only();

        let items: Vec<Element<'_, Message>> = vec![
            Self::editor_menu_btn(palette, "Cut", "Ctrl+X", Message::EditorCut, has_selection && editable),
            Self::editor_menu_btn(palette, "Copy", "Ctrl+C", Message::EditorCopy, has_selection),
            Self::editor_menu_btn(palette, "Paste", "Ctrl+V", Message::EditorPaste, editable),
            horizontal_separator(palette),
            Self::editor_menu_btn(palette, "Select All", "Ctrl+A", Message::EditorSelectAll, true),
        ];

        let menu_box = container(Column::with_children(items).width(Length::Fixed(CONTEXT_MENU_WIDTH)))
            .padding(4)
            .style(theme::popup(palette));

        let x = self.context_menu.position.x;
        let y = self.context_menu.position.y;

        column![
            Space::with_height(Length::Fixed(y)),
            row![Space::with_width(Length::Fixed(x)), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// The visible notification, pinned to the top center.
    fn view_notification(&self, palette: &'static Palette) -> Option<Element<'_, Message>> {
        let notification = self.notifier.current()?;

        let (marker, accent) = match notification.kind {
            NotificationKind::Success => ("OK", iced::Color::from_rgb8(0x0f, 0x7b, 0x0f)),
            NotificationKind::Warning => ("!", iced::Color::from_rgb8(0x9d, 0x5d, 0x00)),
            NotificationKind::Error => ("x", iced::Color::from_rgb8(0xc4, 0x2b, 0x1c)),
        };

        let toast = container(
            row![
                text(marker).size(12).color(accent),
                text(notification.title.as_str())
                    .size(13)
                    .color(theme::color(palette.text)),
                text(notification.message.as_str())
                    .size(12)
                    .color(theme::color(palette.text)),
                horizontal_space(),
                button(text("x").size(11).color(theme::color(palette.text_muted)))
                    .padding(Padding::from([2, 6]))
                    .style(theme::flat_button(palette, false))
                    .on_press(Message::DismissNotification(notification.id)),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .width(Length::Fixed(420.0))
        .padding(Padding::from([8, 12]))
        .style(theme::popup(palette));

        Some(
            container(toast)
                .padding(Padding::from([12, 0]))
                .center_x(Length::Fill)
                .into(),
        )
    }
}

pub fn horizontal_separator<'a>(palette: &'static Palette) -> Element<'a, Message> {
    container(Space::new(Length::Fill, SEPARATOR))
        .style(theme::separator(palette))
        .into()
}

pub fn vertical_separator<'a>(palette: &'static Palette) -> Element<'a, Message> {
    container(Space::new(SEPARATOR, Length::Fill))
        .style(theme::separator(palette))
        .into()
}
