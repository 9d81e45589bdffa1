#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// The bound an item identity type must satisfy.
///
/// Under `std` this is `Hash + Eq` (selections are backed by a `HashSet`);
/// under `no_std` it is `Ord` (`BTreeSet`). Blanket-implemented, never
/// implemented by hand.
#[cfg(feature = "std")]
pub trait SelectionKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> SelectionKey for K {}

#[cfg(not(feature = "std"))]
pub trait SelectionKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> SelectionKey for K {}
