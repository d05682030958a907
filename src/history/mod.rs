//! Bounded snapshot history.
//!
//! Two stacks of full-frame snapshots: `undo` holds the past (oldest first,
//! capped at a fixed capacity with FIFO eviction) and `redo` mirrors the
//! current chain of undos. Any new edit invalidates `redo`.

mod store;

pub use store::{HistoryStore, DEFAULT_CAPACITY};
