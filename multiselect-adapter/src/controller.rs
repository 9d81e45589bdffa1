use core::fmt;

use multiselect::{Selection, SelectionKey, SelectionOptions, SelectionSnapshot};

/// Outcome of routing a press event through [`SelectionController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressOutcome {
    /// No selection is active: the host should run its normal activation
    /// action for the item (open, play, navigate, ...).
    Activated,
    /// The press toggled the item. `applied` is `false` when the cap blocked
    /// the insertion.
    Toggled { applied: bool },
    /// The press was absorbed without effect.
    Ignored,
}

/// A framework-neutral controller that wraps a `multiselect::Selection` and
/// implements the usual list-UI input policy:
///
/// - a short press toggles the pressed item while a selection is active, and
///   activates it otherwise
/// - a long press starts a selection when none is active
///
/// This type does not hold any UI objects. Adapters drive it by calling
/// `on_press` / `on_long_press` when input events occur and branching on the
/// returned [`PressOutcome`].
#[derive(Clone)]
pub struct SelectionController<K> {
    selection: Selection<K>,
}

impl<K: SelectionKey> SelectionController<K> {
    pub fn new(options: SelectionOptions<K>) -> Self {
        Self {
            selection: Selection::new(options),
        }
    }

    pub fn from_selection(selection: Selection<K>) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &Selection<K> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<K> {
        &mut self.selection
    }

    pub fn into_selection(self) -> Selection<K> {
        self.selection
    }

    /// Call this when the UI reports a short press/click on an item.
    ///
    /// While a selection is active the press toggles the item; otherwise the
    /// host should perform its normal activation action.
    pub fn on_press(&mut self, item: K) -> PressOutcome {
        if !self.selection.is_in_selection_mode() {
            return PressOutcome::Activated;
        }
        let applied = self.selection.toggle(item);
        PressOutcome::Toggled { applied }
    }

    /// Call this when the UI reports a long press on an item.
    ///
    /// A long press starts a selection when none is active. While a selection
    /// is already active it is absorbed (short presses extend an active
    /// selection).
    pub fn on_long_press(&mut self, item: K) -> PressOutcome {
        if self.selection.is_in_selection_mode() {
            return PressOutcome::Ignored;
        }
        let applied = self.selection.toggle(item);
        PressOutcome::Toggled { applied }
    }

    /// Toggles a batch of items as a unit (e.g. a select-all button).
    ///
    /// See [`Selection::toggle_all`] for the exact semantics.
    pub fn toggle_all(&mut self, items: impl IntoIterator<Item = K>) -> bool {
        self.selection.toggle_all(items)
    }

    /// Clears the selection (e.g. a close/cancel button).
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Captures a snapshot of the wrapped selection.
    pub fn snapshot(&self) -> SelectionSnapshot<K>
    where
        K: Clone,
    {
        self.selection.snapshot()
    }

    /// Restores a controller from a snapshot, re-supplying the cap and
    /// callback via `options`.
    pub fn restore(snapshot: SelectionSnapshot<K>, options: SelectionOptions<K>) -> Self {
        Self {
            selection: Selection::restore(snapshot, options),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for SelectionController<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selection", &self.selection)
            .finish()
    }
}
