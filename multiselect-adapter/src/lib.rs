//! Adapter utilities for the `multiselect` crate.
//!
//! The `multiselect` crate is UI-agnostic and focuses on the core selection
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - Press/long-press dispatch (short press toggles only while a selection is
//!   active; long press starts one)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;

#[cfg(test)]
mod tests;

pub use controller::{PressOutcome, SelectionController};
pub use multiselect::SelectionKey;
