//! Core systems for pagemenu.
//!
//! This crate provides the pieces shared by every pagemenu crate:
//!
//! - **Signal/Slot System**: Type-safe change notification between a menu
//!   item and whoever observes it
//! - **Logging**: Tracing targets, span names and convenience macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use pagemenu_core::Signal;
//!
//! let selection_changed = Signal::<bool>::new();
//!
//! let conn_id = selection_changed.connect(|selected| {
//!     println!("Selected: {}", selected);
//! });
//!
//! selection_changed.emit(true);
//! selection_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
