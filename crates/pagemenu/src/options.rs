//! Menu configuration.
//!
//! [`MenuOptions`] is the immutable configuration shared by every item of one
//! menu. It can only be obtained from [`MenuOptionsBuilder::build`] or
//! [`MenuOptions::from_toml_str`], both of which validate it, so sizing code
//! downstream never has to guard against malformed values.
//!
//! # Example
//!
//! ```
//! use pagemenu::{DisplayMode, MenuOptions, WidthMode};
//!
//! let options = MenuOptions::builder()
//!     .display_mode(DisplayMode::standard(WidthMode::Fixed { width: 96.0 }))
//!     .item_margin(8.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.item_style().item_margin, 8.0);
//! ```

use pagemenu_render::text::{Font, FontFamily, FontWeight};
use pagemenu_render::Color;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::policy::ItemLayoutPolicy;

/// How an item's content width is chosen in `Standard` and `Infinite` modes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WidthMode {
    /// Fit the title, rounded up to a whole pixel.
    #[default]
    Flexible,
    /// Use an explicit content width and ignore the title.
    Fixed {
        /// Content width in logical pixels, before margins.
        width: f32,
    },
}

/// Scrolling behaviour the host should give the menu's scroll view.
///
/// Carried through for the host; it never affects item sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollingMode {
    /// Free scrolling without bounce.
    ScrollEnabled,
    /// Free scrolling with bounce at the edges.
    ScrollEnabledAndBounces,
    /// The menu follows the pager page by page.
    #[default]
    PagingEnabled,
}

/// How item widths relate to their content and to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayMode {
    /// Items are sized by their own width mode, regardless of siblings.
    Standard {
        /// Flexible or fixed content width.
        width_mode: WidthMode,
        /// Keep the selected item centered in the visible area.
        center_item: bool,
        /// Scroll behaviour handed to the host.
        scrolling_mode: ScrollingMode,
    },
    /// Every item gets `container_width / item_count`; margins are dropped.
    SegmentedControl,
    /// Sized like `Standard`, laid out in an endlessly looping row.
    Infinite {
        width_mode: WidthMode,
        scrolling_mode: ScrollingMode,
    },
}

impl DisplayMode {
    /// A `Standard` mode that does not center items and pages with the content.
    pub fn standard(width_mode: WidthMode) -> Self {
        Self::Standard {
            width_mode,
            center_item: false,
            scrolling_mode: ScrollingMode::default(),
        }
    }

    /// An `Infinite` mode that pages with the content.
    pub fn infinite(width_mode: WidthMode) -> Self {
        Self::Infinite {
            width_mode,
            scrolling_mode: ScrollingMode::default(),
        }
    }

    /// The width mode, if this display mode has one.
    pub fn width_mode(&self) -> Option<WidthMode> {
        match self {
            Self::Standard { width_mode, .. } | Self::Infinite { width_mode, .. } => {
                Some(*width_mode)
            }
            Self::SegmentedControl => None,
        }
    }

    /// The scrolling mode, if the menu scrolls at all in this display mode.
    pub fn scrolling_mode(&self) -> Option<ScrollingMode> {
        match self {
            Self::Standard { scrolling_mode, .. } | Self::Infinite { scrolling_mode, .. } => {
                Some(*scrolling_mode)
            }
            Self::SegmentedControl => None,
        }
    }

    /// Returns true for the segmented-control mode.
    pub fn is_segmented_control(&self) -> bool {
        matches!(self, Self::SegmentedControl)
    }

    /// Returns true if the selected item should be scrolled to the center.
    pub fn centers_selected_item(&self) -> bool {
        match self {
            Self::Standard { center_item, .. } => *center_item,
            Self::Infinite { .. } => true,
            Self::SegmentedControl => false,
        }
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::standard(WidthMode::Flexible)
    }
}

/// The indicator drawn for the selected item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusMode {
    /// No indicator.
    None,
    /// A bar along the bottom edge of the menu under the selected item.
    Underline {
        /// Thickness of the bar.
        height: f32,
        color: Color,
        /// Inset from the item's left and right edges.
        horizontal_padding: f32,
        /// Gap between the bar and the bottom of the menu.
        vertical_padding: f32,
    },
    /// A rounded rectangle behind the selected item's title.
    ///
    /// Item backgrounds are always transparent in this mode so the
    /// rectangle shows through.
    RoundRect {
        /// Corner radius.
        radius: f32,
        /// Inset from the item's left and right edges.
        horizontal_padding: f32,
        /// Inset from the menu's top and bottom edges.
        vertical_padding: f32,
        /// Fill of the rectangle.
        selected_color: Color,
    },
}

impl FocusMode {
    /// Returns true if item backgrounds must stay transparent.
    pub fn clears_item_background(&self) -> bool {
        matches!(self, Self::RoundRect { .. })
    }
}

impl Default for FocusMode {
    fn default() -> Self {
        Self::Underline {
            height: 3.0,
            color: Color::BLUE,
            horizontal_padding: 0.0,
            vertical_padding: 0.0,
        }
    }
}

/// Colors, fonts and padding of a menu item in both selection states.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    /// Title color of unselected items.
    pub text_color: Color,
    /// Title color of the selected item.
    pub selected_text_color: Color,
    /// Title font of unselected items.
    pub font: Font,
    /// Title font of the selected item. May measure wider than `font`.
    pub selected_font: Font,
    /// Item background when unselected. Ignored under [`FocusMode::RoundRect`].
    pub background_color: Color,
    /// Item background when selected. Ignored under [`FocusMode::RoundRect`].
    pub selected_background_color: Color,
    /// Horizontal padding on each side of the title. Ignored by
    /// [`DisplayMode::SegmentedControl`].
    pub item_margin: f32,
}

impl Default for ItemStyle {
    fn default() -> Self {
        let font = Font::new(FontFamily::SansSerif, 16.0);
        Self {
            text_color: Color::LIGHT_GRAY,
            selected_text_color: Color::BLACK,
            selected_font: font.with_weight(FontWeight::BOLD),
            font,
            background_color: Color::WHITE,
            selected_background_color: Color::WHITE,
            item_margin: 20.0,
        }
    }
}

/// Validated configuration for one menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOptions {
    display_mode: DisplayMode,
    focus_mode: FocusMode,
    item_style: ItemStyle,
    item_count: usize,
    height: f32,
    background_color: Color,
    selected_background_color: Color,
}

impl MenuOptions {
    /// Start building options from the defaults.
    pub fn builder() -> MenuOptionsBuilder {
        MenuOptionsBuilder::new()
    }

    /// How item widths relate to their titles and to the container.
    pub fn display_mode(&self) -> &DisplayMode {
        &self.display_mode
    }

    /// The selected-item indicator.
    pub fn focus_mode(&self) -> &FocusMode {
        &self.focus_mode
    }

    /// Colors, fonts and margin of every item.
    pub fn item_style(&self) -> &ItemStyle {
        &self.item_style
    }

    /// Number of items the menu holds; the divisor in segmented-control mode.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Height of the menu bar.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Background of the menu bar itself.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Background of the menu bar while an item is selected.
    pub fn selected_background_color(&self) -> Color {
        self.selected_background_color
    }

    /// Margin actually applied to each side of an item.
    ///
    /// Zero in segmented-control mode, the configured margin otherwise.
    pub fn effective_item_margin(&self) -> f32 {
        ItemLayoutPolicy::from_options(self).margin()
    }
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            focus_mode: FocusMode::default(),
            item_style: ItemStyle::default(),
            item_count: 0,
            height: 50.0,
            background_color: Color::WHITE,
            selected_background_color: Color::WHITE,
        }
    }
}

/// Builder for [`MenuOptions`].
///
/// Setters never fail; every check runs in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct MenuOptionsBuilder {
    options: MenuOptions,
}

impl MenuOptionsBuilder {
    /// Create a builder holding the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display mode.
    pub fn display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.options.display_mode = display_mode;
        self
    }

    /// Set the selected-item indicator.
    pub fn focus_mode(mut self, focus_mode: FocusMode) -> Self {
        self.options.focus_mode = focus_mode;
        self
    }

    /// Replace the whole item style, margin included.
    pub fn item_style(mut self, item_style: ItemStyle) -> Self {
        self.options.item_style = item_style;
        self
    }

    /// Shortcut for setting only the item margin of the current style.
    pub fn item_margin(mut self, margin: f32) -> Self {
        self.options.item_style.item_margin = margin;
        self
    }

    /// Set the number of items. Must be non-zero for a segmented control.
    pub fn item_count(mut self, item_count: usize) -> Self {
        self.options.item_count = item_count;
        self
    }

    /// Set the height of the menu bar.
    pub fn height(mut self, height: f32) -> Self {
        self.options.height = height;
        self
    }

    /// Set the background of the menu bar.
    pub fn background_color(mut self, color: Color) -> Self {
        self.options.background_color = color;
        self
    }

    /// Set the background of the menu bar while an item is selected.
    pub fn selected_background_color(mut self, color: Color) -> Self {
        self.options.selected_background_color = color;
        self
    }

    /// Validate and produce the options.
    pub fn build(self) -> Result<MenuOptions> {
        let options = self.options;

        validate_display_mode(&options.display_mode, options.item_count)?;
        validate_margin(options.item_style.item_margin)?;
        validate_non_negative("height", options.height)?;
        validate_font("item_style.font", &options.item_style.font)?;
        validate_font("item_style.selected_font", &options.item_style.selected_font)?;

        match options.focus_mode {
            FocusMode::None => {}
            FocusMode::Underline {
                height,
                horizontal_padding,
                vertical_padding,
                ..
            } => {
                validate_non_negative("focus_mode.height", height)?;
                validate_non_negative("focus_mode.horizontal_padding", horizontal_padding)?;
                validate_non_negative("focus_mode.vertical_padding", vertical_padding)?;
            }
            FocusMode::RoundRect {
                radius,
                horizontal_padding,
                vertical_padding,
                ..
            } => {
                validate_non_negative("focus_mode.radius", radius)?;
                validate_non_negative("focus_mode.horizontal_padding", horizontal_padding)?;
                validate_non_negative("focus_mode.vertical_padding", vertical_padding)?;
            }
        }

        tracing::debug!(
            target: pagemenu_core::logging::targets::CONFIG,
            display_mode = ?options.display_mode,
            item_count = options.item_count,
            "built menu options"
        );
        Ok(options)
    }
}

pub(crate) fn validate_display_mode(display_mode: &DisplayMode, item_count: usize) -> Result<()> {
    match display_mode {
        DisplayMode::Standard { width_mode, .. } | DisplayMode::Infinite { width_mode, .. } => {
            match width_mode {
                WidthMode::Flexible => Ok(()),
                WidthMode::Fixed { width } if width.is_finite() && *width >= 0.0 => Ok(()),
                WidthMode::Fixed { width } => Err(Error::NegativeFixedWidth(*width)),
            }
        }
        DisplayMode::SegmentedControl if item_count == 0 => Err(Error::ZeroItemCount),
        DisplayMode::SegmentedControl => Ok(()),
    }
}

pub(crate) fn validate_margin(margin: f32) -> Result<()> {
    if margin.is_finite() && margin >= 0.0 {
        Ok(())
    } else {
        Err(Error::NegativeMargin(margin))
    }
}

fn validate_non_negative(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_value(
            field,
            format!("must be a non-negative number, got {value}"),
        ))
    }
}

fn validate_font(field: &str, font: &Font) -> Result<()> {
    if font.size().is_finite() && font.size() > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_value(
            field,
            format!("font size must be positive, got {}", font.size()),
        ))
    }
}
