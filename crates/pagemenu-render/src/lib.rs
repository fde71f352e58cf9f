//! Geometry, color and text types for pagemenu.
//!
//! This crate holds the value types that cross the boundary between the menu
//! sizing logic and whatever toolkit actually draws the menu:
//!
//! - [`Point`], [`Size`], [`Rect`]: logical-pixel geometry
//! - [`Color`]: RGBA color
//! - [`text::Font`]: font family, size and weight
//! - [`text::TextMeasurer`]: the text-measurement capability a host supplies
//!
//! # Example
//!
//! ```
//! use pagemenu_render::text::{Font, FontFamily, HeuristicTextMeasurer, TextMeasurer};
//!
//! let font = Font::new(FontFamily::SansSerif, 10.0);
//! let size = HeuristicTextMeasurer.measure("Home", &font);
//! assert_eq!(size.width, 20.0);
//! ```

pub mod text;
mod types;

pub use types::{Color, Point, Rect, Size};
