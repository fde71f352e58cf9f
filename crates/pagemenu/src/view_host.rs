//! The boundary between menu items and the toolkit that draws them.

use pagemenu_render::text::TextMeasurer;
use pagemenu_render::Size;

use crate::badge::Badge;
use crate::policy::{ItemAppearance, ItemSize};

/// The external collaborator that owns an item's real visual elements.
///
/// A [`MenuItem`](crate::MenuItem) never touches a toolkit type. It measures
/// text, asks for the container size, and pushes sizes, styles and badge
/// changes through this trait. Everything else (view trees, constraints,
/// lifecycle callbacks) stays on the host side.
pub trait ViewHost: TextMeasurer {
    /// The menu's current visible size.
    ///
    /// Read once, for an item's initial layout. Later resizes are reported
    /// explicitly through [`MenuItem::on_resize`](crate::MenuItem::on_resize).
    fn container_size(&self) -> Size;

    /// Resize the item's view to `size`.
    fn apply_size(&mut self, size: ItemSize);

    /// Re-skin the item's background and title label.
    ///
    /// The title is a single line, centered in the item's label frame.
    fn apply_appearance(&mut self, appearance: &ItemAppearance);

    /// Show (or move) the badge overlay.
    ///
    /// Draw it with [`Badge::style`] near [`Badge::anchor`]. Items start
    /// with no badge, so this is first called from
    /// [`MenuItem::set_badge`](crate::MenuItem::set_badge).
    fn show_badge(&mut self, badge: &Badge);

    /// Remove the badge overlay, if any.
    fn hide_badge(&mut self);
}
