//! Single-line text measurement.
//!
//! Menu sizing needs exactly one thing from the text stack: the unwrapped,
//! unbounded extent of a title in a given font. [`TextMeasurer`] is that
//! capability. Hosts with a real text engine implement it themselves; the
//! crate ships a heuristic measurer and, behind the `cosmic-text` feature, a
//! shaping one.

use pagemenu_core::logging::targets;
use unicode_segmentation::UnicodeSegmentation;

use super::Font;
use crate::Size;

/// Measures a string rendered on a single line.
///
/// Implementations must be deterministic for equal inputs and cheap enough
/// to call on every resize and selection change. Empty text measures as
/// [`Size::ZERO`].
pub trait TextMeasurer {
    /// Returns the extent of `text` rendered with `font`, with no wrapping
    /// and no width or height bound.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &Font) -> Size {
        (**self).measure(text, font)
    }
}

/// A font-agnostic measurer suitable for tests, headless hosts and early
/// layout before fonts are loaded.
///
/// Every grapheme cluster advances by [`AVERAGE_ADVANCE_EM`](Self::AVERAGE_ADVANCE_EM)
/// times the font size; the line is [`LINE_HEIGHT_EM`](Self::LINE_HEIGHT_EM)
/// times the font size tall. Font family and weight are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    /// Horizontal advance per grapheme, in ems.
    pub const AVERAGE_ADVANCE_EM: f32 = 0.5;
    /// Line height, in ems.
    pub const LINE_HEIGHT_EM: f32 = 1.25;
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let graphemes = text.graphemes(true).count();
        if graphemes == 0 {
            return Size::ZERO;
        }
        let size = Size::new(
            graphemes as f32 * font.size() * Self::AVERAGE_ADVANCE_EM,
            font.size() * Self::LINE_HEIGHT_EM,
        );
        tracing::trace!(target: targets::TEXT, graphemes, width = size.width, "estimated text extent");
        size
    }
}

/// Measures text by shaping it with cosmic-text.
///
/// The font system is loaded once and shared between calls behind a mutex,
/// so a single measurer can serve every item of a menu.
#[cfg(feature = "cosmic-text")]
pub struct CosmicTextMeasurer {
    font_system: parking_lot::Mutex<cosmic_text::FontSystem>,
    line_height_multiplier: f32,
}

#[cfg(feature = "cosmic-text")]
impl CosmicTextMeasurer {
    /// Create a measurer backed by the system's installed fonts.
    pub fn new() -> Self {
        Self::with_font_system(cosmic_text::FontSystem::new())
    }

    /// Create a measurer around an existing font system.
    pub fn with_font_system(font_system: cosmic_text::FontSystem) -> Self {
        Self {
            font_system: parking_lot::Mutex::new(font_system),
            line_height_multiplier: 1.2,
        }
    }

    /// Set the line height as a multiple of the font size.
    pub fn with_line_height_multiplier(mut self, multiplier: f32) -> Self {
        self.line_height_multiplier = multiplier;
        self
    }
}

#[cfg(feature = "cosmic-text")]
impl Default for CosmicTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "cosmic-text")]
impl std::fmt::Debug for CosmicTextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicTextMeasurer")
            .field("line_height_multiplier", &self.line_height_multiplier)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "cosmic-text")]
impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size {
        use cosmic_text::{Buffer, Metrics, Shaping, Wrap};

        if text.is_empty() {
            return Size::ZERO;
        }

        let mut font_system = self.font_system.lock();
        let font_system = &mut *font_system;

        let metrics = Metrics::new(font.size(), font.size() * self.line_height_multiplier);
        let mut buffer = Buffer::new(font_system, metrics);
        buffer.set_wrap(font_system, Wrap::None);
        buffer.set_size(font_system, None, None);
        buffer.set_text(font_system, text, font.to_attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(font_system, false);

        let mut size = Size::ZERO;
        for run in buffer.layout_runs() {
            size.width = size.width.max(run.line_w);
            size.height = size.height.max(run.line_top + run.line_height);
        }

        tracing::trace!(
            target: targets::TEXT,
            text,
            width = size.width,
            height = size.height,
            "shaped text"
        );
        size
    }
}
