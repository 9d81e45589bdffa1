use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::selection::Selection;

/// A callback fired after every observable selection change.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Selection<K>) + Send + Sync>;

/// Configuration for [`crate::Selection`].
///
/// This type is cheap to clone: the change callback is stored in an `Arc` so
/// hosts can tweak a field and rebuild a selection without reallocating
/// closures.
pub struct SelectionOptions<K> {
    /// Identities selected at construction time.
    ///
    /// Entries beyond `max_selectable` are dropped in order; the cap holds
    /// from the first observable state.
    pub initial_selected: Vec<K>,

    /// Upper bound on concurrently selected items. `None` means unbounded.
    ///
    /// The cap gates additions only; removing an item always succeeds.
    pub max_selectable: Option<usize>,

    /// Optional callback fired when the selection's state changes.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> SelectionOptions<K> {
    /// Creates options for an unbounded selection with nothing selected.
    pub fn new() -> Self {
        Self {
            initial_selected: Vec::new(),
            max_selectable: None,
            on_change: None,
        }
    }

    pub fn with_initial_selected(mut self, items: impl IntoIterator<Item = K>) -> Self {
        self.initial_selected = items.into_iter().collect();
        self
    }

    pub fn with_max_selectable(mut self, max_selectable: Option<usize>) -> Self {
        self.max_selectable = max_selectable;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Selection<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for SelectionOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for SelectionOptions<K> {
    fn clone(&self) -> Self {
        Self {
            initial_selected: self.initial_selected.clone(),
            max_selectable: self.max_selectable,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for SelectionOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionOptions")
            .field("initial_selected", &self.initial_selected)
            .field("max_selectable", &self.max_selectable)
            .finish_non_exhaustive()
    }
}
