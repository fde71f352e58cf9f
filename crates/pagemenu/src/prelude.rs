//! Commonly used types, for glob importing:
//!
//! ```
//! use pagemenu::prelude::*;
//! ```

// ============================================================================
// Configuration
// ============================================================================

pub use crate::{
    DisplayMode, FocusMode, ItemStyle, MenuOptions, MenuOptionsBuilder, ScrollingMode, WidthMode,
};

// ============================================================================
// Layout
// ============================================================================

pub use crate::{ItemAppearance, ItemLayoutPolicy, ItemSize, MenuRowLayout};

// ============================================================================
// Presenter
// ============================================================================

pub use crate::{Badge, BadgeStyle, MenuItem, Signal, ViewHost};

// ============================================================================
// Geometry and text
// ============================================================================

pub use pagemenu_render::text::{Font, FontFamily, FontWeight, HeuristicTextMeasurer, TextMeasurer};
pub use pagemenu_render::{Color, Point, Rect, Size};
