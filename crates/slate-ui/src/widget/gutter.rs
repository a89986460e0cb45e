//! The line-number gutter.
//!
//! The gutter is a fixed-width strip that paints one right-aligned number
//! per visible block. It holds no state: the labels are recomputed from the
//! layout and the scroll offset every time it draws, using the height it was
//! actually given.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::text::{self, LineHeight, Shaping, Text, Wrapping};
use iced::advanced::widget::{Tree, Widget};
use iced::advanced::mouse;
use iced::{alignment, Color, Element, Font, Length, Pixels, Point, Rectangle, Size};
use slate_core::gutter::{self, GutterLabel};
use slate_core::layout::BlockLayout;
use slate_core::Viewport;

/// Paints line numbers for the blocks of `layout` visible below `scroll_top`.
pub struct Gutter<'a, L> {
    layout: &'a L,
    scroll_top: f32,
    width: f32,
    font_size: f32,
    background: Color,
    text_color: Color,
}

impl<'a, L: BlockLayout> Gutter<'a, L> {
    pub fn new(layout: &'a L, scroll_top: f32, width: f32) -> Self {
        Self {
            layout,
            scroll_top,
            width,
            font_size: 14.0,
            background: Color::TRANSPARENT,
            text_color: Color::BLACK,
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn colors(mut self, background: Color, text_color: Color) -> Self {
        self.background = background;
        self.text_color = text_color;
        self
    }

    /// Labels for a gutter of the given pixel height.
    fn labels(&self, height: f32) -> Vec<GutterLabel> {
        let viewport = Viewport {
            top: self.scroll_top,
            height,
            width: self.width,
        };
        gutter::visible_labels(self.layout, &viewport)
    }
}

impl<Message, Theme, Renderer, L> Widget<Message, Theme, Renderer> for Gutter<'_, L>
where
    Renderer: text::Renderer<Font = Font>,
    L: BlockLayout,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.width), Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        layout::atomic(limits, Length::Fixed(self.width), Length::Fill)
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                ..Default::default()
            },
            self.background,
        );

        let right_edge = gutter::label_right_edge(bounds.width);
        let row_height = self.layout.line_height();

        for label in self.labels(bounds.height) {
            let text = Text {
                content: label.number.to_string(),
                bounds: Size::new(right_edge, row_height),
                size: Pixels(self.font_size),
                line_height: LineHeight::Absolute(Pixels(row_height)),
                font: Font::MONOSPACE,
                horizontal_alignment: alignment::Horizontal::Right,
                vertical_alignment: alignment::Vertical::Top,
                shaping: Shaping::Basic,
                wrapping: Wrapping::None,
            };

            // Right alignment anchors the text at its right edge
            renderer.fill_text(
                text,
                Point::new(bounds.x + right_edge, bounds.y + label.y),
                self.text_color,
                bounds,
            );
        }
    }
}

impl<'a, Message, Theme, Renderer, L> From<Gutter<'a, L>> for Element<'a, Message, Theme, Renderer>
where
    Renderer: text::Renderer<Font = Font> + 'a,
    L: BlockLayout + 'a,
{
    fn from(gutter: Gutter<'a, L>) -> Self {
        Element::new(gutter)
    }
}
