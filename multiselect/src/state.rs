use alloc::vec::Vec;

/// A lightweight, serializable snapshot of the current selection.
///
/// The snapshot carries only the selected identities, as a plain list (no
/// promised order). The cap and change callback are not part of it; the host
/// re-supplies both through [`crate::SelectionOptions`] when restoring.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionSnapshot<K> {
    pub selected: Vec<K>,
}

impl<K> SelectionSnapshot<K> {
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
