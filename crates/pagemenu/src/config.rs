//! Loading [`MenuOptions`] from TOML.
//!
//! Every key is optional; missing keys keep the [`MenuOptions`] defaults.
//!
//! ```toml
//! item_count = 4
//! height = 44.0
//!
//! [display_mode]
//! kind = "standard"          # standard | segmented_control | infinite
//! width_mode = "fixed"       # flexible | fixed
//! fixed_width = 96.0
//! center_item = true
//! scrolling_mode = "scroll_enabled"
//!
//! [focus_mode]
//! kind = "round_rect"        # none | underline | round_rect
//! radius = 12.0
//! selected_color = "#EEEEEE"
//!
//! [item_style]
//! text_color = "#808080"
//! selected_text_color = "#000000"
//! item_margin = 12.0
//! font = { family = "sans-serif", size = 15.0 }
//! selected_font = { family = "sans-serif", size = 15.0, weight = 700 }
//! ```

use std::path::Path;

use pagemenu_core::logging::targets;
use pagemenu_render::text::{Font, FontFamily, FontWeight};
use pagemenu_render::Color;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::options::{DisplayMode, FocusMode, ItemStyle, MenuOptions, ScrollingMode, WidthMode};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuConfig {
    item_count: Option<usize>,
    height: Option<f32>,
    background_color: Option<String>,
    selected_background_color: Option<String>,
    display_mode: Option<DisplayModeConfig>,
    focus_mode: Option<FocusModeConfig>,
    item_style: Option<ItemStyleConfig>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum WidthModeKind {
    #[default]
    Flexible,
    Fixed,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum DisplayModeConfig {
    Standard {
        #[serde(default)]
        width_mode: WidthModeKind,
        fixed_width: Option<f32>,
        #[serde(default)]
        center_item: bool,
        #[serde(default)]
        scrolling_mode: ScrollingMode,
    },
    SegmentedControl {},
    Infinite {
        #[serde(default)]
        width_mode: WidthModeKind,
        fixed_width: Option<f32>,
        #[serde(default)]
        scrolling_mode: ScrollingMode,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum FocusModeConfig {
    None {},
    Underline {
        height: Option<f32>,
        color: Option<String>,
        #[serde(default)]
        horizontal_padding: f32,
        #[serde(default)]
        vertical_padding: f32,
    },
    RoundRect {
        #[serde(default)]
        radius: f32,
        #[serde(default)]
        horizontal_padding: f32,
        #[serde(default)]
        vertical_padding: f32,
        selected_color: Option<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemStyleConfig {
    text_color: Option<String>,
    selected_text_color: Option<String>,
    background_color: Option<String>,
    selected_background_color: Option<String>,
    item_margin: Option<f32>,
    font: Option<FontConfig>,
    selected_font: Option<FontConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FontConfig {
    #[serde(default = "default_family")]
    family: String,
    size: f32,
    #[serde(default = "default_weight")]
    weight: u16,
}

fn default_family() -> String {
    "sans-serif".to_string()
}

fn default_weight() -> u16 {
    FontWeight::NORMAL.value()
}

impl FontConfig {
    fn to_font(&self) -> Font {
        Font::new(FontFamily::from_name(&self.family), self.size)
            .with_weight(FontWeight::new(self.weight))
    }
}

fn parse_color(field: &str, value: Option<&str>, default: Color) -> Result<Color> {
    match value {
        None => Ok(default),
        Some(hex) => Color::from_hex(hex).ok_or_else(|| Error::invalid_color(field, hex)),
    }
}

fn width_mode(kind: WidthModeKind, fixed_width: Option<f32>) -> Result<WidthMode> {
    match (kind, fixed_width) {
        (WidthModeKind::Flexible, None) => Ok(WidthMode::Flexible),
        (WidthModeKind::Flexible, Some(_)) => Err(Error::invalid_value(
            "display_mode.fixed_width",
            "only allowed when width_mode = \"fixed\"",
        )),
        (WidthModeKind::Fixed, Some(width)) => Ok(WidthMode::Fixed { width }),
        (WidthModeKind::Fixed, None) => Err(Error::invalid_value(
            "display_mode.fixed_width",
            "required when width_mode = \"fixed\"",
        )),
    }
}

impl DisplayModeConfig {
    fn resolve(self) -> Result<DisplayMode> {
        Ok(match self {
            Self::Standard {
                width_mode: kind,
                fixed_width,
                center_item,
                scrolling_mode,
            } => DisplayMode::Standard {
                width_mode: width_mode(kind, fixed_width)?,
                center_item,
                scrolling_mode,
            },
            Self::SegmentedControl {} => DisplayMode::SegmentedControl,
            Self::Infinite {
                width_mode: kind,
                fixed_width,
                scrolling_mode,
            } => DisplayMode::Infinite {
                width_mode: width_mode(kind, fixed_width)?,
                scrolling_mode,
            },
        })
    }
}

impl FocusModeConfig {
    fn resolve(self) -> Result<FocusMode> {
        Ok(match self {
            Self::None {} => FocusMode::None,
            Self::Underline {
                height,
                color,
                horizontal_padding,
                vertical_padding,
            } => FocusMode::Underline {
                height: height.unwrap_or(3.0),
                color: parse_color("focus_mode.color", color.as_deref(), Color::BLUE)?,
                horizontal_padding,
                vertical_padding,
            },
            Self::RoundRect {
                radius,
                horizontal_padding,
                vertical_padding,
                selected_color,
            } => FocusMode::RoundRect {
                radius,
                horizontal_padding,
                vertical_padding,
                selected_color: parse_color(
                    "focus_mode.selected_color",
                    selected_color.as_deref(),
                    Color::LIGHT_GRAY,
                )?,
            },
        })
    }
}

impl ItemStyleConfig {
    fn resolve(self) -> Result<ItemStyle> {
        let defaults = ItemStyle::default();
        Ok(ItemStyle {
            text_color: parse_color(
                "item_style.text_color",
                self.text_color.as_deref(),
                defaults.text_color,
            )?,
            selected_text_color: parse_color(
                "item_style.selected_text_color",
                self.selected_text_color.as_deref(),
                defaults.selected_text_color,
            )?,
            background_color: parse_color(
                "item_style.background_color",
                self.background_color.as_deref(),
                defaults.background_color,
            )?,
            selected_background_color: parse_color(
                "item_style.selected_background_color",
                self.selected_background_color.as_deref(),
                defaults.selected_background_color,
            )?,
            item_margin: self.item_margin.unwrap_or(defaults.item_margin),
            font: self
                .font
                .as_ref()
                .map_or(defaults.font, FontConfig::to_font),
            selected_font: self
                .selected_font
                .as_ref()
                .map_or(defaults.selected_font, FontConfig::to_font),
        })
    }
}

impl MenuOptions {
    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: MenuConfig = toml::from_str(source)?;
        let defaults = MenuOptions::default();

        let mut builder = MenuOptions::builder()
            .background_color(parse_color(
                "background_color",
                config.background_color.as_deref(),
                defaults.background_color(),
            )?)
            .selected_background_color(parse_color(
                "selected_background_color",
                config.selected_background_color.as_deref(),
                defaults.selected_background_color(),
            )?);

        if let Some(item_count) = config.item_count {
            builder = builder.item_count(item_count);
        }
        if let Some(height) = config.height {
            builder = builder.height(height);
        }
        if let Some(display_mode) = config.display_mode {
            builder = builder.display_mode(display_mode.resolve()?);
        }
        if let Some(focus_mode) = config.focus_mode {
            builder = builder.focus_mode(focus_mode.resolve()?);
        }
        if let Some(item_style) = config.item_style {
            builder = builder.item_style(item_style.resolve()?);
        }

        builder.build()
    }

    /// Read, parse and validate options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading menu options");
        Self::from_toml_str(&source)
    }
}
