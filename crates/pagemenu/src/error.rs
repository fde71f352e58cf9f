//! Error types for menu configuration.
//!
//! Sizing and styling never fail at runtime. Everything that can go wrong is
//! caught while building [`MenuOptions`](crate::MenuOptions).

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or loading menu options.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `Fixed` width mode was given a negative or non-finite width.
    #[error("fixed item width must be a non-negative number, got {0}")]
    NegativeFixedWidth(f32),

    /// The item margin is negative or non-finite.
    #[error("item margin must be a non-negative number, got {0}")]
    NegativeMargin(f32),

    /// A segmented control was configured with no items to divide by.
    #[error("segmented control display mode requires at least one item")]
    ZeroItemCount,

    /// Any other out-of-range option.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A color string could not be parsed.
    #[error("invalid color for '{field}': '{value}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor { field: String, value: String },

    /// TOML syntax or shape error.
    #[error("failed to parse menu configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// File I/O error.
    #[error("failed to read menu configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a color error.
    pub fn invalid_color(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
