//! The `Idle` / `Dragging` state machine.

use crate::history::HistoryStore;
use crate::types::{Control, Frame};
use std::mem;
use tracing::{debug, trace, warn};

/// Where the session is.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    /// A control is being dragged. `base` is the frame from before the drag.
    Dragging { control: Control, base: Frame },
}

/// Guards a single continuous adjustment.
///
/// Stray UI events are harmless: `preview` and `commit` while idle do
/// nothing, and `begin` while dragging is rejected without replacing the
/// active control.
#[derive(Debug, Default)]
pub struct EditSession {
    state: SessionState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag on `control`, capturing a copy of `current` as the base.
    ///
    /// Returns `false` (and changes nothing) if a drag is already active.
    pub fn begin(&mut self, control: Control, current: &Frame) -> bool {
        if let SessionState::Dragging { control: active, .. } = &self.state {
            warn!(%active, rejected = %control, "adjustment already in progress");
            return false;
        }

        self.state = SessionState::Dragging {
            control,
            base: current.clone(),
        };
        debug!(%control, "adjustment started");
        true
    }

    /// Compute a preview frame from the base.
    ///
    /// `compute` always receives the base captured by `begin`, never an
    /// earlier preview. Returns `None` without calling `compute` when idle.
    pub fn preview<F>(&self, compute: F) -> Option<Frame>
    where
        F: FnOnce(&Frame) -> Frame,
    {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Dragging { control, base } => {
                trace!(%control, "preview");
                Some(compute(base))
            }
        }
    }

    /// Finish the drag, pushing the base into `history` once.
    ///
    /// Returns the control that was committed, or `None` if idle.
    pub fn commit(&mut self, history: &mut HistoryStore) -> Option<Control> {
        match mem::take(&mut self.state) {
            SessionState::Idle => None,
            SessionState::Dragging { control, base } => {
                history.push(base);
                debug!(%control, "adjustment committed");
                Some(control)
            }
        }
    }

    /// Resolve a drag the host could not finish normally (focus loss).
    ///
    /// Records the base exactly as `commit` does and hands back a copy of it
    /// so the caller can put the pre-drag image back on screen.
    pub fn abort(&mut self, history: &mut HistoryStore) -> Option<Frame> {
        match mem::take(&mut self.state) {
            SessionState::Idle => None,
            SessionState::Dragging { control, base } => {
                let restored = base.clone();
                history.push(base);
                debug!(%control, "adjustment aborted");
                Some(restored)
            }
        }
    }

    /// Drop an active drag without recording anything.
    ///
    /// Only for when the document itself goes away.
    pub fn discard(&mut self) {
        if let SessionState::Dragging { control, .. } = mem::take(&mut self.state) {
            debug!(%control, "adjustment discarded");
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Dragging { .. })
    }

    pub fn active_control(&self) -> Option<Control> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Dragging { control, .. } => Some(*control),
        }
    }

    /// The captured base frame, if dragging.
    pub fn base(&self) -> Option<&Frame> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Dragging { base, .. } => Some(base),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
