//! Layout of a whole menu row.
//!
//! [`MenuRowLayout`] runs the item policy over every title of a menu and
//! places the resulting frames left to right. It also answers the questions a
//! host needs for scrolling and for drawing the focus indicator.
//!
//! In [`DisplayMode::Infinite`] the titles are laid out
//! [`DUMMY_ITEM_SETS`] times in a row so the host can wrap the scroll
//! position around the middle copy. Public indices are always logical
//! (`0..titles.len()`) and refer to the middle copy.

use pagemenu_core::logging::{span_names, targets};
use pagemenu_core::PerfSpan;
use pagemenu_render::text::TextMeasurer;
use pagemenu_render::{Rect, Size};

use crate::options::{DisplayMode, FocusMode, MenuOptions};
use crate::policy::ItemLayoutPolicy;

/// Number of consecutive copies of the items laid out in infinite mode.
pub const DUMMY_ITEM_SETS: usize = 3;

/// Item frames of one menu row, in menu content coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRowLayout {
    frames: Vec<Rect>,
    item_count: usize,
    content_width: f32,
    display_mode: DisplayMode,
    focus_mode: FocusMode,
    menu_height: f32,
}

impl MenuRowLayout {
    /// Lay out `titles` with `selected` using its selected font.
    ///
    /// Every frame is as tall as the menu; widths come from
    /// [`ItemLayoutPolicy::compute_size`].
    pub fn compute<T, M>(
        titles: &[T],
        options: &MenuOptions,
        measurer: &M,
        container: Size,
        selected: usize,
    ) -> Self
    where
        T: AsRef<str>,
        M: TextMeasurer + ?Sized,
    {
        let _span = PerfSpan::new(span_names::ROW_LAYOUT);
        let policy = ItemLayoutPolicy::from_options(options);
        let display_mode = *options.display_mode();

        if display_mode.is_segmented_control() && titles.len() != options.item_count() {
            tracing::warn!(
                target: targets::LAYOUT,
                titles = titles.len(),
                item_count = options.item_count(),
                "segmented control divides by the configured item count, not the title count"
            );
        }

        let sets = match display_mode {
            DisplayMode::Infinite { .. } => DUMMY_ITEM_SETS,
            DisplayMode::Standard { .. } | DisplayMode::SegmentedControl => 1,
        };

        let selected_style =
            ItemLayoutPolicy::style_for(true, options.item_style(), options.focus_mode());
        let unselected_style =
            ItemLayoutPolicy::style_for(false, options.item_style(), options.focus_mode());

        let widths: Vec<f32> = titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let font = if index == selected {
                    &selected_style.font
                } else {
                    &unselected_style.font
                };
                policy
                    .compute_size(measurer, title.as_ref(), font, container)
                    .width
            })
            .collect();

        let mut frames = Vec::with_capacity(widths.len() * sets);
        let mut x = 0.0;
        for _ in 0..sets {
            for &width in &widths {
                frames.push(Rect::new(x, 0.0, width, options.height()));
                x += width;
            }
        }

        tracing::debug!(
            target: targets::LAYOUT,
            items = titles.len(),
            frames = frames.len(),
            content_width = x,
            "laid out menu row"
        );

        Self {
            frames,
            item_count: titles.len(),
            content_width: x,
            display_mode,
            focus_mode: *options.focus_mode(),
            menu_height: options.height(),
        }
    }

    /// Number of logical items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// All laid out frames, including infinite-mode copies.
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Total width of all frames.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Frame of logical item `index`.
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.physical_index(index)
            .and_then(|i| self.frames.get(i).copied())
    }

    /// Horizontal scroll offset that shows item `index` after selection.
    ///
    /// Centering modes center the item. Otherwise `current_offset` is kept
    /// if the item is fully visible, or moved just enough to reveal it. A
    /// segmented control never scrolls. The result always stays inside the
    /// scrollable range.
    pub fn scroll_offset(&self, index: usize, visible_width: f32, current_offset: f32) -> f32 {
        let Some(frame) = self.frame(index) else {
            return current_offset;
        };
        let max_offset = (self.content_width - visible_width).max(0.0);

        let offset = match self.display_mode {
            DisplayMode::SegmentedControl => 0.0,
            mode if mode.centers_selected_item() => frame.center().x - visible_width / 2.0,
            DisplayMode::Standard { .. } | DisplayMode::Infinite { .. } => {
                if frame.left() < current_offset {
                    frame.left()
                } else if frame.right() > current_offset + visible_width {
                    frame.right() - visible_width
                } else {
                    current_offset
                }
            }
        };

        offset.clamp(0.0, max_offset)
    }

    /// Frame of the focus indicator under/behind item `index`.
    pub fn focus_frame(&self, index: usize) -> Option<Rect> {
        let frame = self.frame(index)?;
        match self.focus_mode {
            FocusMode::None => None,
            FocusMode::Underline {
                height,
                horizontal_padding,
                vertical_padding,
                ..
            } => Some(Rect::new(
                frame.left() + horizontal_padding,
                self.menu_height - height - vertical_padding,
                (frame.width() - horizontal_padding * 2.0).max(0.0),
                height,
            )),
            FocusMode::RoundRect {
                horizontal_padding,
                vertical_padding,
                ..
            } => Some(frame.inset(horizontal_padding, vertical_padding)),
        }
    }

    /// Logical index of the item under content x coordinate `x`.
    pub fn index_at(&self, x: f32) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        self.frames
            .iter()
            .position(|frame| x >= frame.left() && x < frame.right())
            .map(|i| i % self.item_count)
    }

    fn physical_index(&self, index: usize) -> Option<usize> {
        if index >= self.item_count {
            return None;
        }
        Some(match self.display_mode {
            DisplayMode::Infinite { .. } => self.item_count * (DUMMY_ITEM_SETS / 2) + index,
            DisplayMode::Standard { .. } | DisplayMode::SegmentedControl => index,
        })
    }
}
