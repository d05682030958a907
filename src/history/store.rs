//! Undo/redo stacks.

use crate::types::{Frame, HistoryStats, Snapshot};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Default number of undo steps kept.
pub const DEFAULT_CAPACITY: usize = 25;

/// Two-stack undo/redo history over full-frame snapshots.
///
/// Frames enter either by move (`push`) or as a fresh copy of the caller's
/// current frame (`undo`/`redo`), so nothing stored here is ever shared
/// with the caller.
pub struct HistoryStore {
    /// Past states, oldest at the front.
    undo: VecDeque<Snapshot>,

    /// Undone states, most recent at the back.
    redo: Vec<Snapshot>,

    /// Maximum undo depth (always at least 1).
    capacity: usize,
}

impl HistoryStore {
    /// Create a history holding at most `capacity` undo steps.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        if capacity == 0 {
            warn!("history capacity 0 requested, using 1");
        }
        let capacity = capacity.max(1);

        Self {
            undo: VecDeque::with_capacity(capacity),
            redo: Vec::new(),
            capacity,
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Record the state from before an edit.
    ///
    /// Evicts the oldest entry when over capacity and invalidates redo.
    pub fn push(&mut self, frame: Frame) {
        self.undo.push_back(Snapshot::new(frame));
        self.evict_overflow();

        if !self.redo.is_empty() {
            debug!(dropped = self.redo.len(), "redo invalidated by new edit");
            self.redo.clear();
        }

        debug!(undo = self.undo.len(), "pushed snapshot");
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Step back one state.
    ///
    /// `current` is the frame on screen; a copy of it becomes the redo
    /// target. Returns `None` without touching either stack when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: &Frame) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(Snapshot::new(current.clone()));

        debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        Some(previous)
    }

    /// Step forward one state. Mirror of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &Frame) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(Snapshot::new(current.clone()));
        self.evict_overflow();

        debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Some(next)
    }

    /// Drop every stored state (new document).
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        debug!("history cleared");
    }

    /// Total stored states across both stacks.
    pub fn size(&self) -> usize {
        self.undo.len() + self.redo.len()
    }

    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Undo entries, oldest first.
    pub fn undo_entries(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.undo.iter()
    }

    /// Redo entries, oldest first (the next redo target is last).
    pub fn redo_entries(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.redo.iter()
    }

    pub fn stats(&self) -> HistoryStats {
        let bytes = self
            .undo
            .iter()
            .chain(self.redo.iter())
            .map(Snapshot::byte_len)
            .sum();

        HistoryStats {
            undo_depth: self.undo.len(),
            redo_depth: self.redo.len(),
            capacity: self.capacity,
            bytes,
        }
    }

    fn evict_overflow(&mut self) {
        while self.undo.len() > self.capacity {
            if let Some(evicted) = self.undo.pop_front() {
                debug!(
                    width = evicted.width(),
                    height = evicted.height(),
                    "evicted oldest snapshot"
                );
            }
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
