//! Fonts and single-line text measurement.

mod font;
mod measure;

pub use font::{Font, FontFamily, FontWeight};
#[cfg(feature = "cosmic-text")]
pub use measure::CosmicTextMeasurer;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
