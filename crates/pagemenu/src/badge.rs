//! Notification badges.

use pagemenu_render::text::{Font, FontFamily};
use pagemenu_render::{Color, Point, Rect, Size};

/// How a badge is drawn.
///
/// The defaults are a 12px title with 3px padding on every side and a 2px
/// white border.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeStyle {
    /// Padding between the badge text and its border, per side.
    pub insets: Size,
    /// Width of the border stroke.
    pub border_width: f32,
    pub border_color: Color,
    pub font: Font,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            insets: Size::new(3.0, 3.0),
            border_width: 2.0,
            border_color: Color::WHITE,
            font: Font::new(FontFamily::SansSerif, 12.0),
        }
    }
}

/// A short text label shown over the top-right corner of an item's title.
///
/// The badge carries its text, its style and the anchor point it should be
/// pinned to. Its offset from the anchor is up to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    text: String,
    anchor: Point,
    style: BadgeStyle,
}

impl Badge {
    /// Create a badge with the default style, pinned to the top-right corner
    /// of `label_frame`.
    pub fn anchored_to(text: impl Into<String>, label_frame: Rect) -> Self {
        Self {
            text: text.into(),
            anchor: label_frame.top_right(),
            style: BadgeStyle::default(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    /// The badge text, never empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Point in item coordinates the badge is pinned to.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }
}
