//! A headless multi-selection state engine for list UIs.
//!
//! For adapter-level utilities (press/long-press dispatch), see the
//! `multiselect-adapter` crate.
//!
//! This crate focuses on the state machine behind "select items in a list":
//! a duplicate-free set of selected identities, an optional cap on how many
//! items may be selected at once, and toggle/bulk/clear operations that never
//! violate the cap.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - item identities (anything hashable)
//! - input events (which item was pressed)
//! - rendering (membership queries drive checkmarks, action bars, etc.)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod selection;
mod state;


pub use key::SelectionKey;
pub use options::{OnChangeCallback, SelectionOptions};
pub use selection::Selection;
pub use state::SelectionSnapshot;
