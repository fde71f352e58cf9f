//! Signal/slot system for pagemenu.
//!
//! A [`Signal<Args>`] holds any number of connected slots (closures). When the
//! signal is emitted every slot is invoked, in connection order, on the
//! emitting thread. Menu items use signals to report selection and size
//! changes to whoever owns them.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type
//! - [`ConnectionId`] - Identifier returned when connecting a slot
//! - [`ConnectionGuard`] - Scoped connection that disconnects when dropped
//!
//! # Example
//!
//! ```
//! use pagemenu_core::Signal;
//!
//! let width_changed = Signal::<f32>::new();
//!
//! let conn_id = width_changed.connect(|width| {
//!     println!("Width changed to: {}", width);
//! });
//!
//! width_changed.emit(80.0);
//! width_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};
use static_assertions::assert_impl_all;

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Pass it to [`Signal::disconnect`] to remove the slot again.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification point that any number of slots can observe.
///
/// Slots receive `&Args`. Signals without a payload use `()`, and
/// multi-value payloads use a tuple.
///
/// # Re-entrancy
///
/// Slots are collected before any of them run, so a slot may connect or
/// disconnect on the same signal without deadlocking. Such changes take
/// effect on the next emission.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

assert_impl_all!(Signal<usize>: Send, Sync);

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

impl<Args> Signal<Args> {
    /// An unconnected signal.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Add `slot` to the signal. It stays connected until
    /// [`disconnect`](Self::disconnect) is called with the returned ID.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that stays connected only while the returned guard lives.
    ///
    /// # Example
    ///
    /// ```
    /// use pagemenu_core::Signal;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let tapped = Signal::<usize>::new();
    /// let last = Arc::new(AtomicUsize::new(usize::MAX));
    /// {
    ///     let last = last.clone();
    ///     let _guard = tapped.connect_scoped(move |&index| last.store(index, Ordering::SeqCst));
    ///     tapped.emit(2);
    /// }
    /// tapped.emit(5);
    /// assert_eq!(last.load(Ordering::SeqCst), 2);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard { signal: self, id }
    }

    /// Remove one slot. Returns `false` if `id` was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Remove every slot.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Number of slots currently connected.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Suppress emission. While blocked, [`emit`](Self::emit) returns
    /// without calling any slot; the emission is not replayed later.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Call every connected slot with `args`, in connection order, on the
    /// current thread.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(
            target: targets::SIGNAL,
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection that is removed from its signal when dropped.
///
/// Created via [`Signal::connect_scoped`]. The guard borrows the signal, so
/// the signal always outlives it.
#[must_use = "dropping the guard disconnects the slot immediately"]
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<'_, Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

impl<Args> std::fmt::Debug for ConnectionGuard<'_, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionGuard").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// Connect a slot to `signal` that appends every emitted value to a log.
    fn recorder<T: Clone + Send + 'static>(signal: &Signal<T>) -> (ConnectionId, Arc<Mutex<Vec<T>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let id = signal.connect(move |value: &T| sink.lock().push(value.clone()));
        (id, log)
    }

    #[test]
    fn test_slots_see_every_emission() {
        let selected_index = Signal::<usize>::new();
        let (_, log) = recorder(&selected_index);

        selected_index.emit(3);
        selected_index.emit(0);

        assert_eq!(*log.lock(), vec![3, 0]);
    }

    #[test]
    fn test_disconnected_slot_stops_receiving() {
        let selected_index = Signal::<usize>::new();
        let (id, log) = recorder(&selected_index);

        selected_index.emit(1);
        assert!(selected_index.disconnect(id));
        assert!(!selected_index.disconnect(id));
        selected_index.emit(2);

        assert_eq!(*log.lock(), vec![1]);
    }

    #[test]
    fn test_blocking_drops_emissions() {
        let title = Signal::<String>::new();
        let (_, log) = recorder(&title);

        title.emit("Home".to_string());
        title.set_blocked(true);
        assert!(title.is_blocked());
        title.emit("Feed".to_string());
        title.set_blocked(false);
        title.emit("Me".to_string());

        assert_eq!(*log.lock(), vec!["Home".to_string(), "Me".to_string()]);
    }

    #[test]
    fn test_every_slot_is_called_in_connection_order() {
        let relayout = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for n in 0..4 {
            let order = order.clone();
            relayout.connect(move |_| order.lock().push(n));
        }

        relayout.emit(());
        assert_eq!(*order.lock(), vec![0, 1, 2, 3]);

        relayout.disconnect_all();
        assert_eq!(relayout.connection_count(), 0);
    }

    #[test]
    fn test_guard_scopes_connection() {
        let selected = Signal::<bool>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        {
            let hits = hits.clone();
            let guard = selected.connect_scoped(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(selected.connection_count(), 1);
            assert!(format!("{guard:?}").contains("ConnectionGuard"));
            selected.emit(true);
        }

        selected.emit(false);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(selected.connection_count(), 0);
    }

    #[test]
    fn test_slot_can_disconnect_itself() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let own_id = Arc::new(Mutex::new(None));

        let slot_signal = signal.clone();
        let slot_calls = calls.clone();
        let slot_own_id = own_id.clone();
        let id = signal.connect(move |_| {
            slot_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = *slot_own_id.lock() {
                slot_signal.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tuple_arguments() {
        let resized = Signal::<(f32, f32)>::new();
        let (_, log) = recorder(&resized);

        resized.emit((568.0, 320.0));
        assert_eq!(*log.lock(), vec![(568.0, 320.0)]);
        assert_eq!(format!("{resized:?}"), "Signal { connections: 1, blocked: false }");
    }
}
