//! Font representation.

/// Font weight, on the usual 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Semi-bold weight (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);

    /// Create a font weight from a numeric value, clamped to 100-900.
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }

    #[cfg(feature = "cosmic-text")]
    pub(crate) fn to_cosmic(self) -> cosmic_text::Weight {
        cosmic_text::Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font family, either generic or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    Serif,
    #[default]
    SansSerif,
    Monospace,
    /// A specific installed family, e.g. "Inter".
    Name(String),
}

impl FontFamily {
    /// Parse a CSS-style family name.
    ///
    /// The generic keywords `serif`, `sans-serif` and `monospace` map to their
    /// generic variants; anything else is treated as a concrete family name.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "serif" => Self::Serif,
            "sans-serif" | "sans_serif" | "sans" => Self::SansSerif,
            "monospace" | "mono" => Self::Monospace,
            _ => Self::Name(name.trim().to_string()),
        }
    }

    #[cfg(feature = "cosmic-text")]
    pub(crate) fn to_cosmic(&self) -> cosmic_text::Family<'_> {
        match self {
            FontFamily::Serif => cosmic_text::Family::Serif,
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
            FontFamily::Monospace => cosmic_text::Family::Monospace,
            FontFamily::Name(name) => cosmic_text::Family::Name(name.as_str()),
        }
    }
}

/// A font specification: family, pixel size and weight.
///
/// `Font` does not reference font data. A [`TextMeasurer`] resolves it when
/// measuring.
///
/// # Example
///
/// ```
/// use pagemenu_render::text::{Font, FontFamily, FontWeight};
///
/// let regular = Font::new(FontFamily::SansSerif, 16.0);
/// let bold = regular.with_weight(FontWeight::BOLD);
/// assert_ne!(regular, bold);
/// ```
///
/// [`TextMeasurer`]: super::TextMeasurer
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
}

impl Font {
    /// Create a new font with the given family and size in pixels.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Em size in logical pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Same font at `size`, e.g. a larger selected-state title.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Same font at `weight`.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }

    #[cfg(feature = "cosmic-text")]
    pub(crate) fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        cosmic_text::Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 16.0)
    }
}
