//! Menu item presenter.
//!
//! [`MenuItem`] is one selectable tab of a paging menu. It owns the item's
//! logical state (title, selection, badge, current size) and its
//! [`ViewHost`], and turns host events into policy evaluations:
//!
//! - construction: unselected style, size against `host.container_size()`
//! - [`set_selected`](MenuItem::set_selected): re-style, then re-size with the
//!   newly applied font
//! - [`on_resize`](MenuItem::on_resize): re-size against the new container
//!
//! # Signals
//!
//! - `selection_changed(bool)`: Emitted when the selection state flips
//! - `size_changed(ItemSize)`: Emitted when a re-layout changes the size

use std::sync::Arc;

use pagemenu_core::logging::targets;
use pagemenu_core::Signal;
use pagemenu_render::{Rect, Size};

use crate::badge::Badge;
use crate::options::MenuOptions;
use crate::policy::{ItemAppearance, ItemLayoutPolicy, ItemSize};
use crate::view_host::ViewHost;

/// A selectable menu item bound to a [`ViewHost`].
pub struct MenuItem<H: ViewHost> {
    title: String,
    options: Arc<MenuOptions>,
    policy: ItemLayoutPolicy,
    host: H,
    selected: bool,
    appearance: ItemAppearance,
    container: Size,
    size: ItemSize,
    badge: Option<Badge>,

    /// Signal emitted when the selection state changes.
    pub selection_changed: Signal<bool>,

    /// Signal emitted when the item's size changes.
    pub size_changed: Signal<ItemSize>,
}

impl<H: ViewHost> MenuItem<H> {
    /// Create an unselected item and push its initial style and size to
    /// `host`.
    pub fn new(title: impl Into<String>, options: impl Into<Arc<MenuOptions>>, mut host: H) -> Self {
        let title = title.into();
        let options = options.into();
        let policy = ItemLayoutPolicy::from_options(&options);

        let appearance =
            ItemLayoutPolicy::style_for(false, options.item_style(), options.focus_mode());
        let container = host.container_size();
        let size = policy.compute_size(&host, &title, &appearance.font, container);

        host.apply_appearance(&appearance);
        host.apply_size(size);

        pagemenu_core::menu_debug!(
            title = %title,
            width = size.width,
            height = size.height,
            "created menu item"
        );

        Self {
            title,
            options,
            policy,
            host,
            selected: false,
            appearance,
            container,
            size,
            badge: None,
            selection_changed: Signal::new(),
            size_changed: Signal::new(),
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The title shown on the item.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The menu options this item was created with.
    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// Returns true if the item is the menu's current selection.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// The size last pushed to the host.
    pub fn size(&self) -> ItemSize {
        self.size
    }

    /// The appearance last pushed to the host.
    pub fn appearance(&self) -> &ItemAppearance {
        &self.appearance
    }

    /// The container size the current layout was computed against.
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Frame of the title label in item coordinates.
    ///
    /// The host draws the title on a single line, centered in this frame.
    pub fn label_frame(&self) -> Rect {
        self.size.label_frame(self.policy.margin())
    }

    /// The view host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the view host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the item and hand back its host.
    pub fn into_host(self) -> H {
        self.host
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Change the selection state.
    ///
    /// Does nothing if the state is unchanged.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected == selected {
            return;
        }

        self.selected = selected;
        self.appearance = ItemLayoutPolicy::style_for(
            selected,
            self.options.item_style(),
            self.options.focus_mode(),
        );
        self.host.apply_appearance(&self.appearance);

        // The selected font can measure differently.
        self.relayout();

        tracing::debug!(target: targets::ITEM, title = %self.title, selected, "selection changed");
        self.selection_changed.emit(selected);
    }

    /// React to the container being resized (e.g. rotation).
    ///
    /// Returns the item's size afterwards. Calling this repeatedly with the
    /// same size is a no-op after the first call.
    pub fn on_resize(&mut self, container: Size) -> ItemSize {
        self.container = container;
        self.relayout();
        self.size
    }

    // =========================================================================
    // Badge
    // =========================================================================

    /// The badge currently shown, if any. Items start without one.
    pub fn badge(&self) -> Option<&Badge> {
        self.badge.as_ref()
    }

    /// Show `text` in a badge over the title. An empty string removes the
    /// badge.
    pub fn set_badge(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.clear_badge();
            return;
        }

        let badge = Badge::anchored_to(text, self.label_frame());
        self.host.show_badge(&badge);
        self.badge = Some(badge);
    }

    /// Remove the badge, if one is shown.
    pub fn clear_badge(&mut self) {
        if self.badge.take().is_some() {
            self.host.hide_badge();
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn relayout(&mut self) {
        let size = self.policy.on_resize(
            &self.host,
            &self.title,
            &self.appearance.font,
            self.container,
        );
        if size == self.size {
            tracing::trace!(target: targets::ITEM, title = %self.title, "size unchanged");
            return;
        }

        self.size = size;
        self.host.apply_size(size);

        // The badge follows the label's top-right corner.
        if let Some(text) = self.badge.as_ref().map(|badge| badge.text().to_string()) {
            self.set_badge(text);
        }

        self.size_changed.emit(size);
    }
}

impl<H: ViewHost + std::fmt::Debug> std::fmt::Debug for MenuItem<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("title", &self.title)
            .field("selected", &self.selected)
            .field("size", &self.size)
            .field("badge", &self.badge)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
