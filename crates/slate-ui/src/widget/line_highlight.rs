//! Draws the current-line band underneath the text editor.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{Tree, Widget};
use iced::advanced::mouse;
use iced::{Element, Length, Rectangle, Size};
use slate_core::ExtraHighlights;

use crate::theme;

/// Fills every rectangle of an [`ExtraHighlights`] set across the full
/// width of the widget. Place it below the editor in a `stack!`.
pub struct LineHighlight {
    highlights: ExtraHighlights,
}

impl LineHighlight {
    pub fn new(highlights: ExtraHighlights) -> Self {
        Self { highlights }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for LineHighlight
where
    Renderer: iced::advanced::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        layout::atomic(limits, Length::Fill, Length::Fill)
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

        for rect in self.highlights.iter() {
            let band = Rectangle {
                x: bounds.x,
                y: bounds.y + rect.y,
                width: bounds.width,
                height: rect.height,
            };
            // Bands scrolled partly out of view are clipped to the widget
            if let Some(visible) = band.intersection(&bounds) {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: visible,
                        ..Default::default()
                    },
                    theme::color(rect.color),
                );
            }
        }
    }
}

impl<'a, Message, Theme, Renderer> From<LineHighlight> for Element<'a, Message, Theme, Renderer>
where
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(highlight: LineHighlight) -> Self {
        Element::new(highlight)
    }
}
