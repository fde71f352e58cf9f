//! Geometry and color values exchanged with the host.
//!
//! Coordinates are logical pixels. The origin is the top-left corner of the
//! menu's content and y grows downwards.

use bytemuck::{Pod, Zeroable};

/// A position in menu content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width and height pair, used for container bounds and text extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left() + self.width()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top() + self.height()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.left() + self.width() / 2.0,
            self.top() + self.height() / 2.0,
        )
    }

    /// Corner a badge is pinned to.
    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    /// The frame shrunk by `dx` on both horizontal edges and `dy` on both
    /// vertical edges. Width and height stop at zero.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.left() + dx,
            self.top() + dy,
            (self.width() - 2.0 * dx).max(0.0),
            (self.height() - 2.0 * dy).max(0.0),
        )
    }
}

/// An RGBA color with straight (not premultiplied) alpha, channels in
/// `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// An opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }

    /// A color from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |channel: u8| f32::from(channel) / 255.0;
        Self::rgba(unit(r), unit(g), unit(b), unit(a))
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(digits.get(i * 2..i * 2 + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::from_rgb8(channel(0)?, channel(1)?, channel(2)?)),
            8 => Some(Self::from_rgba8(
                channel(0)?,
                channel(1)?,
                channel(2)?,
                channel(3)?,
            )),
            _ => None,
        }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_frame_geometry() {
        let frame = Rect::new(96.0, 0.0, 80.0, 44.0);
        assert_eq!(frame.right(), 176.0);
        assert_eq!(frame.bottom(), 44.0);
        assert_eq!(frame.center(), Point::new(136.0, 22.0));
        assert_eq!(frame.top_right(), Point::new(176.0, 0.0));
    }

    #[test]
    fn test_inset_clamps_to_zero() {
        let frame = Rect::new(0.0, 0.0, 80.0, 44.0);
        assert_eq!(frame.inset(8.0, 6.0), Rect::new(8.0, 6.0, 64.0, 32.0));
        assert_eq!(frame.inset(41.0, 30.0).size, Size::ZERO);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("ffffff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("#000000FF"), Some(Color::BLACK));

        let translucent = Color::from_hex("#0000FF80").unwrap();
        assert_eq!(translucent.b, 1.0);
        assert!((translucent.a - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["", "#FFF", "#GG0000", "#FF00000", "blue", "#ÿÿÿ"] {
            assert_eq!(Color::from_hex(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn test_transparency() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::from_hex("#FFFFFF00").unwrap().is_transparent());
        assert!(!Color::LIGHT_GRAY.is_transparent());
    }
}
