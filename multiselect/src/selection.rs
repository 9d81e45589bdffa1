use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::key::{KeySet, SelectionKey};
use crate::{SelectionOptions, SelectionSnapshot};

/// A headless multi-selection engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by forwarding input events (`toggle`,
///   `toggle_all`, `clear`).
/// - Rendering is exposed via membership queries (`is_selected`) and
///   zero-allocation iteration (`for_each_selected`).
///
/// The cap (`max_selectable`) gates additions only; removal always succeeds.
/// For press/long-press dispatch patterns, see the `multiselect-adapter`
/// crate.
#[derive(Clone)]
pub struct Selection<K> {
    selected: KeySet<K>,
    max_selectable: Option<usize>,
    on_change: Option<crate::OnChangeCallback<K>>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: SelectionKey> Selection<K> {
    /// Creates a new selection from options.
    ///
    /// If `options.initial_selected` holds more identities than the cap
    /// allows, the excess is dropped in order; the cap invariant holds from
    /// the first observable state.
    pub fn new(options: SelectionOptions<K>) -> Self {
        let SelectionOptions {
            initial_selected,
            max_selectable,
            on_change,
        } = options;

        let mut selected = KeySet::new();
        let mut dropped = 0usize;
        for item in initial_selected {
            if matches!(max_selectable, Some(max) if selected.len() >= max) {
                dropped += 1;
                continue;
            }
            selected.insert(item);
        }
        if dropped > 0 {
            swarn!(dropped, "Selection::new: initial selection exceeds the cap");
        }
        sdebug!(
            len = selected.len(),
            capped = max_selectable.is_some(),
            "Selection::new"
        );

        Self {
            selected,
            max_selectable,
            on_change,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    /// Rebuilds a selection from a previously captured snapshot.
    ///
    /// The snapshot replaces `options.initial_selected`; the cap and change
    /// callback come from `options` (they are not part of the snapshot).
    pub fn restore(snapshot: SelectionSnapshot<K>, options: SelectionOptions<K>) -> Self {
        Self::new(SelectionOptions {
            initial_selected: snapshot.selected,
            ..options
        })
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn max_selectable(&self) -> Option<usize> {
        self.max_selectable
    }

    /// Remaining additions the cap allows. `None` means unbounded.
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.max_selectable
            .map(|max| max.saturating_sub(self.selected.len()))
    }

    /// Whether at least one item is selected.
    ///
    /// Hosts typically switch affordances on this (checkboxes, action bars).
    pub fn is_in_selection_mode(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Whether the cap has been reached. Always `false` when unbounded.
    pub fn is_selection_full(&self) -> bool {
        self.max_selectable
            .is_some_and(|max| self.selected.len() >= max)
    }

    pub fn is_selected(&self, item: &K) -> bool {
        self.selected.contains(item)
    }

    /// Selects or deselects an item based on its current state.
    ///
    /// Returns whether the change was applied. The only case that returns
    /// `false` is an insertion blocked by the cap; this is a normal outcome,
    /// not an error.
    pub fn toggle(&mut self, item: K) -> bool {
        if self.selected.remove(&item) {
            strace!(len = self.selected.len(), "toggle: removed");
            self.notify();
            return true;
        }
        if self.is_selection_full() {
            strace!("toggle: blocked by cap");
            return false;
        }
        self.selected.insert(item);
        strace!(len = self.selected.len(), "toggle: added");
        self.notify();
        true
    }

    /// Toggles a batch of items as a unit.
    ///
    /// If every requested item is already selected, all of them are
    /// deselected and this returns `true` (a bulk deselect). Otherwise the
    /// not-yet-selected items are admitted in input order up to the remaining
    /// capacity, and this returns `true` only when every requested item ended
    /// up selected (i.e. the cap did not truncate the batch).
    pub fn toggle_all(&mut self, items: impl IntoIterator<Item = K>) -> bool {
        let items: Vec<K> = items.into_iter().collect();
        if items.iter().all(|item| self.selected.contains(item)) {
            let mut changed = false;
            for item in &items {
                changed |= self.selected.remove(item);
            }
            strace!(removed = items.len(), "toggle_all: bulk deselect");
            if changed {
                self.notify();
            }
            return true;
        }
        self.admit(items)
    }

    /// Selects an item.
    ///
    /// Returns `false` when the item was already selected or the cap blocked
    /// the insertion.
    pub fn select(&mut self, item: K) -> bool {
        if self.selected.contains(&item) || self.is_selection_full() {
            return false;
        }
        self.selected.insert(item);
        self.notify();
        true
    }

    /// Deselects an item. Returns `false` when it was not selected.
    pub fn deselect(&mut self, item: &K) -> bool {
        if !self.selected.remove(item) {
            return false;
        }
        self.notify();
        true
    }

    /// Selects a batch of items in input order, bounded by the cap.
    ///
    /// Returns `true` only when every requested item ended up selected.
    pub fn select_all(&mut self, items: impl IntoIterator<Item = K>) -> bool {
        self.admit(items.into_iter().collect())
    }

    /// Deselects a batch of items.
    ///
    /// Returns `true` only when every requested item was selected beforehand.
    pub fn deselect_all(&mut self, items: impl IntoIterator<Item = K>) -> bool {
        let mut changed = false;
        let mut all_removed = true;
        for item in items {
            if self.selected.remove(&item) {
                changed = true;
            } else {
                all_removed = false;
            }
        }
        if changed {
            self.notify();
        }
        all_removed
    }

    fn admit(&mut self, items: Vec<K>) -> bool {
        let mut changed = false;
        let mut all_selected = true;
        for item in items {
            if self.selected.contains(&item) {
                continue;
            }
            if self.is_selection_full() {
                all_selected = false;
                continue;
            }
            self.selected.insert(item);
            changed = true;
        }
        strace!(
            len = self.selected.len(),
            truncated = !all_selected,
            "admit"
        );
        if changed {
            self.notify();
        }
        all_selected
    }

    /// Clears the selection. This action is irreversible.
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        sdebug!(len = self.selected.len(), "clear");
        self.selected.clear();
        self.notify();
    }

    /// Drops every selected identity rejected by the predicate.
    ///
    /// Call this after the backing dataset shrinks or is replaced, so the
    /// selection does not reference items that no longer exist.
    pub fn retain(&mut self, f: impl FnMut(&K) -> bool) {
        let before = self.selected.len();
        self.selected.retain(f);
        if self.selected.len() != before {
            self.notify();
        }
    }

    /// Iterates over the selected identities without allocations.
    ///
    /// No order is promised.
    pub fn for_each_selected(&self, mut f: impl FnMut(&K)) {
        for item in self.selected.iter() {
            f(item);
        }
    }

    /// Collects the selected identities into `out` (clears `out` first).
    pub fn collect_selected(&self, out: &mut Vec<K>)
    where
        K: Clone,
    {
        out.clear();
        self.for_each_selected(|item| out.push(item.clone()));
    }

    /// Captures a snapshot of the selected identities (useful for
    /// persistence).
    ///
    /// Restore with [`Selection::restore`] or [`Selection::apply_snapshot`],
    /// re-supplying the cap.
    pub fn snapshot(&self) -> SelectionSnapshot<K>
    where
        K: Clone,
    {
        let mut selected = Vec::with_capacity(self.selected.len());
        self.for_each_selected(|item| selected.push(item.clone()));
        SelectionSnapshot { selected }
    }

    /// Replaces the selection's contents from a previously captured snapshot.
    ///
    /// The current cap and change callback are kept. Snapshot entries beyond
    /// the cap are dropped in order, like `Selection::new`.
    pub fn apply_snapshot(&mut self, snapshot: SelectionSnapshot<K>) {
        let mut next = KeySet::new();
        let mut dropped = 0usize;
        for item in snapshot.selected {
            if matches!(self.max_selectable, Some(max) if next.len() >= max) {
                dropped += 1;
                continue;
            }
            next.insert(item);
        }
        if dropped > 0 {
            swarn!(dropped, "apply_snapshot: snapshot exceeds the cap");
        }
        if next == self.selected {
            return;
        }
        self.selected = next;
        self.notify();
    }

    /// Changes the cap.
    ///
    /// When the new cap is smaller than the current selection, an unspecified
    /// subset is evicted so the invariant keeps holding.
    pub fn set_max_selectable(&mut self, max_selectable: Option<usize>) {
        if self.max_selectable == max_selectable {
            return;
        }
        self.max_selectable = max_selectable;
        if let Some(max) = max_selectable {
            if self.selected.len() > max {
                swarn!(
                    dropped = self.selected.len() - max,
                    max,
                    "set_max_selectable: evicted over-cap items"
                );
                let kept = core::mem::take(&mut self.selected);
                self.selected.extend(kept.into_iter().take(max));
            }
        }
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Selection<K>) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// This is recommended for UI adapters: a single input event may clear
    /// the selection and re-select a batch, and without batching each
    /// mutation triggers `on_change`, which can be expensive if the callback
    /// drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}

impl<K: SelectionKey> Default for Selection<K> {
    fn default() -> Self {
        Self::new(SelectionOptions::new())
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for Selection<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.selected)
            .field("max_selectable", &self.max_selectable)
            .finish_non_exhaustive()
    }
}
