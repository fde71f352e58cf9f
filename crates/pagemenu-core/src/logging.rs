//! Logging facilities for pagemenu.
//!
//! pagemenu uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("pagemenu::layout=trace")
//!         .init();
//!
//!     // Build menus...
//! }
//! ```
//!
//! Every subsystem logs under one of the [`targets`], so a single directive
//! is enough to watch e.g. only the sizing policy.

/// Span names used throughout pagemenu for tracing.
pub mod span_names {
    /// Laying out a full menu row.
    pub const ROW_LAYOUT: &str = "pagemenu::row_layout";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Umbrella target used by the `menu_*!` macros.
    pub const MENU: &str = "pagemenu";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pagemenu_core::signal";
    /// Item sizing and row layout target.
    pub const LAYOUT: &str = "pagemenu::layout";
    /// Menu item presenter target.
    pub const ITEM: &str = "pagemenu::item";
    /// Options validation and TOML loading target.
    pub const CONFIG: &str = "pagemenu::config";
    /// Text measurement backends.
    pub const TEXT: &str = "pagemenu_render::text";
}

/// A guard that keeps a tracing span entered until it is dropped.
///
/// Wrap an operation in a `PerfSpan` to see its duration in any subscriber
/// that records span timings.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "pagemenu::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Log at trace level under the `pagemenu` target.
#[macro_export]
macro_rules! menu_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "pagemenu", $($arg)*)
    };
}

/// Log at debug level under the `pagemenu` target.
#[macro_export]
macro_rules! menu_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "pagemenu", $($arg)*)
    };
}

/// Log at info level under the `pagemenu` target.
#[macro_export]
macro_rules! menu_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "pagemenu", $($arg)*)
    };
}

/// Log at warn level under the `pagemenu` target.
#[macro_export]
macro_rules! menu_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "pagemenu", $($arg)*)
    };
}

/// Log at error level under the `pagemenu` target.
#[macro_export]
macro_rules! menu_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "pagemenu", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("trace")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_perf_span() {
        setup();
        // Just ensure it enters and drops without panicking
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_macros_expand() {
        setup();
        menu_trace!("trace {}", 1);
        menu_debug!(value = 2, "debug");
        menu_info!("info");
        menu_warn!("warn");
        menu_error!("error");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::SIGNAL,
            targets::LAYOUT,
            targets::ITEM,
            targets::CONFIG,
            targets::TEXT,
        ] {
            assert!(target.starts_with("pagemenu"));
        }
    }
}
