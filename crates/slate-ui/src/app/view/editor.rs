use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{button, column, container, mouse_area, row, stack, text, text_editor, text_input, Space};
use iced::{Alignment, Element, Font, Length, Padding};
use slate_core::{BlockLayout, Palette};

use super::{horizontal_separator, search_input_id};
use crate::app::{
    App, Message, COMMAND_BAR_HEIGHT, EDITOR_PADDING_X, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::theme;
use crate::widget::{Gutter, LineHighlight};

impl App {
    pub fn view_editor_page(&self, palette: &'static Palette) -> Element<'_, Message> {
        let mut page = column![self.view_command_bar(palette), horizontal_separator(palette)];

        if self.search_visible {
            page = page
                .push(self.view_search_bar(palette))
                .push(horizontal_separator(palette));
        }

        page.push(self.view_editor(palette))
            .push(horizontal_separator(palette))
            .push(self.view_status_bar(palette))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn command_btn<'a>(
        palette: &'static Palette,
        label: &'a str,
        msg: Option<Message>,
        checked: bool,
    ) -> Element<'a, Message> {
        button(text(label).size(12))
            .padding(Padding::from([6, 10]))
            .style(theme::flat_button(palette, checked))
            .on_press_maybe(msg)
            .into()
    }

    fn command_separator<'a>(palette: &'static Palette) -> Element<'a, Message> {
        container(Space::new(Length::Fixed(1.0), Length::Fixed(20.0)))
            .style(theme::separator(palette))
            .into()
    }

    pub fn view_command_bar(&self, palette: &'static Palette) -> Element<'_, Message> {
        let can_undo = self.editor.can_undo().then_some(Message::Undo);
        let can_redo = self.editor.can_redo().then_some(Message::Redo);

        let bar = row![
            Self::command_btn(palette, "New", Some(Message::NewFile), false),
            Self::command_btn(palette, "Open", Some(Message::OpenFile), false),
            Self::command_btn(palette, "Save", Some(Message::Save), false),
            Self::command_separator(palette),
            Self::command_btn(palette, "Undo", can_undo, false),
            Self::command_btn(palette, "Redo", can_redo, false),
            Self::command_separator(palette),
            Self::command_btn(palette, "Find", Some(Message::ShowSearch), false),
            Self::command_separator(palette),
            Self::command_btn(palette, "Wrap", Some(Message::ToggleWrap), self.editor.word_wrap()),
            Self::command_btn(palette, "Zoom In", Some(Message::ZoomIn), false),
            Self::command_btn(palette, "Zoom Out", Some(Message::ZoomOut), false),
        ]
        .spacing(4)
        .padding(Padding::from([0, 8]))
        .align_y(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .height(COMMAND_BAR_HEIGHT)
            .center_y(COMMAND_BAR_HEIGHT)
            .style(theme::surface(palette.window_bg))
            .into()
    }

    pub fn view_search_bar(&self, palette: &'static Palette) -> Element<'_, Message> {
        let input = text_input("Search...", &self.editor.search_state().query)
            .id(search_input_id())
            .on_input(Message::SearchQueryChanged)
            .on_submit(Message::FindNext)
            .size(13)
            .padding(Padding::from([4, 8]))
            .width(Length::Fixed(240.0))
            .style(theme::search_input(palette));

        let bar = row![
            input,
            Self::command_btn(palette, "Next", Some(Message::FindNext), false),
            Self::command_btn(palette, "Previous", Some(Message::FindPrevious), false),
            Space::with_width(Length::Fill),
            Self::command_btn(palette, "x", Some(Message::HideSearch), false),
        ]
        .spacing(6)
        .padding(Padding::from([0, 10]))
        .align_y(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .height(SEARCH_BAR_HEIGHT)
            .center_y(SEARCH_BAR_HEIGHT)
            .style(theme::surface(palette.search_bar_bg))
            .into()
    }

    pub fn view_editor(&self, palette: &'static Palette) -> Element<'_, Message> {
        let font_size = self.editor.font_size();
        let wrapping = if self.editor.word_wrap() {
            Wrapping::Word
        } else {
            Wrapping::None
        };

        let gutter: Element<'_, Message> = Gutter::new(
            &self.layout,
            self.viewport.top,
            self.editor.gutter_width(self.layout.block_count()),
        )
        .font_size(font_size)
        .colors(theme::color(palette.gutter_bg), theme::color(palette.gutter_text))
        .into();

        let editor = text_editor(&self.content)
            .height(Length::Fill)
            .padding(Padding {
                top: 0.0,
                right: EDITOR_PADDING_X,
                bottom: 0.0,
                left: EDITOR_PADDING_X,
            })
            .font(Font::MONOSPACE)
            .size(font_size)
            .line_height(LineHeight::Relative(self.editor.config().editor.line_height))
            .wrapping(wrapping)
            .style(theme::editor(palette))
            .on_action(Message::EditorAction);

        let highlight = LineHighlight::new(self.editor.highlights(&self.layout, &self.viewport));

        // mouse_area catches right-clicks without producing an editor action
        let surface = stack![
            highlight,
            mouse_area(editor).on_right_press(Message::ShowEditorContextMenu),
        ];

        row![
            gutter,
            container(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::surface(palette.editor_bg)),
        ]
        .height(Length::Fill)
        .into()
    }

    pub fn view_status_bar(&self, palette: &'static Palette) -> Element<'_, Message> {
        let status = self.editor.status();
        let color = theme::color(palette.status_text);

        let mut labels = row![
            text(status.position).size(12).color(color),
            text(status.length).size(12).color(color),
            text(status.zoom).size(12).color(color),
            text(self.editor.document().line_ending().label()).size(12).color(color),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        if self.editor.read_only() {
            labels = labels.push(text("Read-only").size(12).color(color));
        }

        container(labels.padding(Padding::from([0, 15])))
            .width(Length::Fill)
            .height(STATUS_BAR_HEIGHT)
            .center_y(STATUS_BAR_HEIGHT)
            .style(theme::surface(palette.window_bg))
            .into()
    }
}
