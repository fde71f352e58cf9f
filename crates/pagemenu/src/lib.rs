//! Pagemenu - sizing and styling for the items of a horizontally paging menu.
//!
//! A paging menu is a row of tabs on top of a horizontally paged content
//! area. This crate decides how large each tab is and how it looks, and
//! leaves drawing to whatever toolkit hosts it.
//!
//! - [`MenuOptions`]: validated configuration, built in code or from TOML
//! - [`ItemLayoutPolicy`]: pure size and style rules for one item
//! - [`MenuItem`]: per-item presenter that drives a [`ViewHost`]
//! - [`MenuRowLayout`]: frames, scroll offset and focus indicator for a row
//!
//! # Example
//!
//! ```
//! use pagemenu::{DisplayMode, MenuOptions, MenuRowLayout, WidthMode};
//! use pagemenu::render::text::HeuristicTextMeasurer;
//! use pagemenu::render::Size;
//!
//! let options = MenuOptions::builder()
//!     .display_mode(DisplayMode::standard(WidthMode::Fixed { width: 80.0 }))
//!     .item_margin(10.0)
//!     .build()?;
//!
//! let titles = ["Home", "Feed", "Messages"];
//! let row = MenuRowLayout::compute(&titles, &options, &HeuristicTextMeasurer, Size::new(320.0, 568.0), 0);
//! assert_eq!(row.content_width(), 300.0);
//! # Ok::<(), pagemenu::Error>(())
//! ```

mod badge;
mod config;
mod error;
mod item;
mod options;
mod policy;
pub mod prelude;
mod row;
mod view_host;

pub use badge::{Badge, BadgeStyle};
pub use error::{Error, Result};
pub use item::MenuItem;
pub use options::{
    DisplayMode, FocusMode, ItemStyle, MenuOptions, MenuOptionsBuilder, ScrollingMode, WidthMode,
};
pub use policy::{ItemAppearance, ItemLayoutPolicy, ItemSize};
pub use row::{MenuRowLayout, DUMMY_ITEM_SETS};
pub use view_host::ViewHost;

pub use pagemenu_core::{ConnectionGuard, ConnectionId, Signal};

/// Geometry, color and text measurement types.
pub mod render {
    pub use pagemenu_render::*;
}
