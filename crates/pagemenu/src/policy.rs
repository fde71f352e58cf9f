//! Item sizing and styling policy.
//!
//! [`ItemLayoutPolicy`] decides how wide and tall a menu item asks to be. It
//! is a plain value: no caches, no ambient lookups, and the container size is
//! always passed in. Equal inputs give equal outputs, so sizes for a whole row
//! may be computed in any order or in parallel.
//!
//! | display mode       | content width                    | margin        |
//! |--------------------|----------------------------------|---------------|
//! | `Flexible`         | `ceil(measured width)`           | `item_margin` |
//! | `Fixed { width }`  | `width`                          | `item_margin` |
//! | `SegmentedControl` | `container width / item_count`   | `0`           |
//!
//! The item width is `content + 2 * margin`; the height is always
//! `floor(measured height)`.
//!
//! # Example
//!
//! ```
//! use pagemenu::{DisplayMode, ItemLayoutPolicy, WidthMode};
//! use pagemenu_render::text::{Font, FontFamily, HeuristicTextMeasurer};
//! use pagemenu_render::Size;
//!
//! let policy = ItemLayoutPolicy::new(DisplayMode::SegmentedControl, 8.0, 4).unwrap();
//! let font = Font::new(FontFamily::SansSerif, 16.0);
//! let size = policy.compute_size(&HeuristicTextMeasurer, "Home", &font, Size::new(320.0, 480.0));
//! assert_eq!(size.width, 80.0);
//! ```

use pagemenu_core::logging::targets;
use pagemenu_render::text::{Font, TextMeasurer};
use pagemenu_render::{Color, Rect, Size};

use crate::error::Result;
use crate::options::{
    validate_display_mode, validate_margin, DisplayMode, FocusMode, ItemStyle, MenuOptions,
    WidthMode,
};

/// The size an item requests from its host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemSize {
    /// Content width plus both margins. Never negative.
    pub width: f32,
    /// Floor of the measured title height.
    pub height: f32,
}

impl ItemSize {
    /// Create a size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Frame of the title label inside an item of this size, given the
    /// horizontal margin that was applied on each side.
    pub fn label_frame(&self, margin: f32) -> Rect {
        Rect::new(
            margin,
            0.0,
            (self.width - margin * 2.0).max(0.0),
            self.height,
        )
    }
}

impl From<ItemSize> for Size {
    fn from(size: ItemSize) -> Self {
        Size::new(size.width, size.height)
    }
}

/// Colors and font an item shows in one selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAppearance {
    /// Item background; transparent under a round-rect focus.
    pub background_color: Color,
    /// Title color.
    pub text_color: Color,
    /// Title font. Sizes must be recomputed with it.
    pub font: Font,
}

/// Pure sizing rules for the items of one menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayoutPolicy {
    display_mode: DisplayMode,
    item_margin: f32,
    item_count: usize,
}

impl ItemLayoutPolicy {
    /// Create a policy, rejecting the configurations that would make sizing
    /// meaningless (negative widths or margins, a segmented control with no
    /// items).
    pub fn new(display_mode: DisplayMode, item_margin: f32, item_count: usize) -> Result<Self> {
        validate_display_mode(&display_mode, item_count)?;
        validate_margin(item_margin)?;
        Ok(Self {
            display_mode,
            item_margin,
            item_count,
        })
    }

    /// Create the policy described by already validated options.
    pub fn from_options(options: &MenuOptions) -> Self {
        Self {
            display_mode: *options.display_mode(),
            item_margin: options.item_style().item_margin,
            item_count: options.item_count(),
        }
    }

    /// The display mode the policy sizes for.
    pub fn display_mode(&self) -> &DisplayMode {
        &self.display_mode
    }

    /// Margin applied to each side of an item: zero for a segmented control.
    pub fn margin(&self) -> f32 {
        match self.display_mode {
            DisplayMode::SegmentedControl => 0.0,
            DisplayMode::Standard { .. } | DisplayMode::Infinite { .. } => self.item_margin,
        }
    }

    /// Compute the size of an item titled `title` rendered in `font`.
    ///
    /// `container` is the menu's current visible size. Only the
    /// segmented-control mode reads it.
    pub fn compute_size<M>(&self, measurer: &M, title: &str, font: &Font, container: Size) -> ItemSize
    where
        M: TextMeasurer + ?Sized,
    {
        let measured = measurer.measure(title, font);

        let content_width = match self.display_mode {
            DisplayMode::Standard { width_mode, .. } | DisplayMode::Infinite { width_mode, .. } => {
                match width_mode {
                    WidthMode::Flexible => measured.width.ceil(),
                    WidthMode::Fixed { width } => width,
                }
            }
            DisplayMode::SegmentedControl => container.width / self.item_count as f32,
        };

        let size = ItemSize::new(
            (content_width + self.margin() * 2.0).max(0.0),
            measured.height.floor(),
        );

        tracing::trace!(
            target: targets::LAYOUT,
            title,
            width = size.width,
            height = size.height,
            "computed item size"
        );
        size
    }

    /// Recompute the size after the container changed to `new_container`.
    ///
    /// Safe to call for every mode; only a segmented control's result depends
    /// on the container.
    pub fn on_resize<M>(&self, measurer: &M, title: &str, font: &Font, new_container: Size) -> ItemSize
    where
        M: TextMeasurer + ?Sized,
    {
        self.compute_size(measurer, title, font, new_container)
    }

    /// Colors and font for an item in the given selection state.
    ///
    /// The selected font may measure differently from the unselected one, so
    /// size must be recomputed with the returned font afterwards.
    pub fn style_for(selected: bool, style: &ItemStyle, focus_mode: &FocusMode) -> ItemAppearance {
        let background_color = if focus_mode.clears_item_background() {
            Color::TRANSPARENT
        } else if selected {
            style.selected_background_color
        } else {
            style.background_color
        };

        let (text_color, font) = if selected {
            (style.selected_text_color, style.selected_font.clone())
        } else {
            (style.text_color, style.font.clone())
        };

        ItemAppearance {
            background_color,
            text_color,
            font,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pagemenu_render::text::{FontFamily, HeuristicTextMeasurer};

    /// Reports a fixed measurement regardless of the text.
    struct FixedMeasurer(Size);

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, _text: &str, _font: &Font) -> Size {
            self.0
        }
    }

    fn font() -> Font {
        Font::new(FontFamily::SansSerif, 16.0)
    }

    const SCREEN: Size = Size::new(320.0, 568.0);

    #[test]
    fn test_flexible_home_example() {
        let policy = ItemLayoutPolicy::new(DisplayMode::standard(WidthMode::Flexible), 8.0, 0).unwrap();
        let size = policy.compute_size(&FixedMeasurer(Size::new(40.0, 19.5)), "Home", &font(), SCREEN);
        assert_eq!(size, ItemSize::new(56.0, 19.0));
    }

    #[test]
    fn test_flexible_rounds_up() {
        let policy = ItemLayoutPolicy::new(DisplayMode::infinite(WidthMode::Flexible), 10.0, 0).unwrap();
        let size = policy.compute_size(&FixedMeasurer(Size::new(40.2, 18.9)), "Feed", &font(), SCREEN);
        assert_eq!(size, ItemSize::new(61.0, 18.0));
    }

    #[test]
    fn test_fixed_ignores_title() {
        let policy = ItemLayoutPolicy::new(
            DisplayMode::standard(WidthMode::Fixed { width: 100.0 }),
            12.0,
            0,
        )
        .unwrap();
        for title in ["", "A", "A much longer title than fits"] {
            let size = policy.compute_size(&HeuristicTextMeasurer, title, &font(), SCREEN);
            assert_eq!(size.width, 124.0);
        }
    }

    #[test]
    fn test_segmented_control_divides_container() {
        let policy = ItemLayoutPolicy::new(DisplayMode::SegmentedControl, 20.0, 4).unwrap();
        assert_eq!(policy.margin(), 0.0);
        for title in ["Home", "Settings and Privacy"] {
            let size = policy.compute_size(&HeuristicTextMeasurer, title, &font(), SCREEN);
            assert_eq!(size.width, 80.0);
            assert_eq!(size.height, 20.0);
        }
    }

    #[test]
    fn test_segmented_width_never_negative() {
        let policy = ItemLayoutPolicy::new(DisplayMode::SegmentedControl, 8.0, 4).unwrap();
        for width in [0.0, -320.0] {
            let size = policy.compute_size(&HeuristicTextMeasurer, "Home", &font(), Size::new(width, 568.0));
            assert_eq!(size.width, 0.0);
            assert_eq!(size.height, 20.0);
        }
    }

    #[test]
    fn test_empty_title_has_zero_height() {
        let policy = ItemLayoutPolicy::new(DisplayMode::default(), 8.0, 0).unwrap();
        let size = policy.compute_size(&HeuristicTextMeasurer, "", &font(), SCREEN);
        assert_eq!(size, ItemSize::new(16.0, 0.0));
    }

    #[test]
    fn test_resize_only_affects_segmented_control() {
        let measurer = HeuristicTextMeasurer;
        let landscape = Size::new(568.0, 320.0);

        let standard = ItemLayoutPolicy::new(DisplayMode::default(), 8.0, 0).unwrap();
        assert_eq!(
            standard.compute_size(&measurer, "Home", &font(), SCREEN),
            standard.on_resize(&measurer, "Home", &font(), landscape)
        );

        let segmented = ItemLayoutPolicy::new(DisplayMode::SegmentedControl, 8.0, 2).unwrap();
        assert_eq!(segmented.on_resize(&measurer, "Home", &font(), landscape).width, 284.0);
    }

    #[test]
    fn test_new_rejects_bad_configuration() {
        assert!(matches!(
            ItemLayoutPolicy::new(DisplayMode::SegmentedControl, 0.0, 0),
            Err(Error::ZeroItemCount)
        ));
        assert!(matches!(
            ItemLayoutPolicy::new(DisplayMode::default(), -1.0, 0),
            Err(Error::NegativeMargin(_))
        ));
    }

    #[test]
    fn test_style_for_selection() {
        let style = ItemStyle::default();
        let unselected = ItemLayoutPolicy::style_for(false, &style, &FocusMode::default());
        let selected = ItemLayoutPolicy::style_for(true, &style, &FocusMode::default());

        assert_eq!(unselected.text_color, style.text_color);
        assert_eq!(unselected.font, style.font);
        assert_eq!(unselected.background_color, style.background_color);
        assert_eq!(selected.text_color, style.selected_text_color);
        assert_eq!(selected.font, style.selected_font);
        assert_eq!(selected.background_color, style.selected_background_color);
        assert_ne!(selected, unselected);
    }

    #[test]
    fn test_round_rect_background_is_transparent() {
        let style = ItemStyle {
            background_color: Color::RED,
            selected_background_color: Color::BLUE,
            ..ItemStyle::default()
        };
        let focus = FocusMode::RoundRect {
            radius: 8.0,
            horizontal_padding: 4.0,
            vertical_padding: 4.0,
            selected_color: Color::GRAY,
        };
        for selected in [false, true] {
            let appearance = ItemLayoutPolicy::style_for(selected, &style, &focus);
            assert_eq!(appearance.background_color, Color::TRANSPARENT);
        }
    }

    #[test]
    fn test_label_frame() {
        let size = ItemSize::new(56.0, 19.0);
        assert_eq!(size.label_frame(8.0), Rect::new(8.0, 0.0, 40.0, 19.0));
        assert_eq!(Size::from(size), Size::new(56.0, 19.0));
    }
}
