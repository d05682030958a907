//! Editor struct tying history, sessions and transforms together.

use crate::error::{EditorError, Result};
use crate::history::{HistoryStore, DEFAULT_CAPACITY};
use crate::ops;
use crate::session::EditSession;
use crate::types::{Adjustment, Control, Edit, Frame, ImageInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension used by `save_as` when the target path has none.
const DEFAULT_EXTENSION: &str = "png";

/// Editor configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undo steps kept.
    pub history_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl EditorConfig {
    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything a status bar shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorStatus {
    pub info: ImageInfo,
    pub modified: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub last_action: String,
}

impl fmt::Display for EditorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modified = if self.modified { " (modified)" } else { "" };
        write!(
            f,
            "{}{} | {} x {} | Undo: {} | Redo: {} | Last: {}",
            self.info.filename,
            modified,
            self.info.width,
            self.info.height,
            self.can_undo,
            self.can_redo,
            self.last_action
        )
    }
}

/// A single open document and its edit history.
///
/// One-shot edits go through [`apply`](Self::apply), which records the
/// pre-edit frame before adopting the result. Slider drags go through
/// `begin_adjustment` / `preview_adjustment` / `end_adjustment` and land
/// in history as one entry.
pub struct Editor {
    config: EditorConfig,

    /// Frame on screen. Never stored in history while current.
    current: Option<Frame>,

    /// Where the document was opened from or last saved to.
    path: Option<PathBuf>,

    history: HistoryStore,

    session: EditSession,

    /// Latest value previewed in the active session.
    last_adjustment: Option<Adjustment>,

    modified: bool,

    last_action: String,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let history = HistoryStore::new(config.history_capacity);
        Self {
            config,
            current: None,
            path: None,
            history,
            session: EditSession::new(),
            last_adjustment: None,
            modified: false,
            last_action: "Ready".to_string(),
        }
    }

    // --- Document ---

    /// Open an image file, replacing the current document.
    ///
    /// On failure the current document is left untouched.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let frame = image::open(path)?.to_rgb8();

        info!(
            path = %path.display(),
            width = frame.width(),
            height = frame.height(),
            "opened image"
        );

        self.replace_document(frame, Some(path.to_path_buf()));
        self.last_action = "Opened image".to_string();
        Ok(())
    }

    /// Start a new, unsaved document from an in-memory frame.
    pub fn load_frame(&mut self, frame: Frame) {
        self.replace_document(frame, None);
        self.last_action = "Loaded image".to_string();
    }

    /// Close the document. History goes with it.
    pub fn close(&mut self) {
        self.session.discard();
        self.last_adjustment = None;
        self.history.clear();
        self.current = None;
        self.path = None;
        self.modified = false;
        self.last_action = "Closed image".to_string();
    }

    /// Save to the document's path.
    pub fn save(&mut self) -> Result<()> {
        let frame = self.current.as_ref().ok_or(EditorError::NoImage)?;
        let path = self.path.as_ref().ok_or(EditorError::NoPath)?;

        frame.save(path)?;
        info!(path = %path.display(), "saved image");

        self.modified = false;
        self.last_action = "Saved image".to_string();
        Ok(())
    }

    /// Save to a new path and adopt it. A path without an extension gets `.png`.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let frame = self.current.as_ref().ok_or(EditorError::NoImage)?;

        let mut path = path.as_ref().to_path_buf();
        if path.extension().is_none() {
            path.set_extension(DEFAULT_EXTENSION);
        }

        frame.save(&path)?;
        info!(path = %path.display(), "saved image");

        self.path = Some(path);
        self.modified = false;
        self.last_action = "Saved image as".to_string();
        Ok(())
    }

    fn replace_document(&mut self, frame: Frame, path: Option<PathBuf>) {
        self.session.discard();
        self.last_adjustment = None;
        self.history.clear();
        self.current = Some(frame);
        self.path = path;
        self.modified = false;
    }

    // --- One-shot edits ---

    /// Apply a discrete edit as one history entry.
    ///
    /// Any slider drag still in progress is committed first.
    pub fn apply(&mut self, edit: Edit) -> Result<()> {
        if self.current.is_none() {
            return Err(EditorError::NoImage);
        }
        self.finish_adjustment();

        let before = self.current.take().ok_or(EditorError::NoImage)?;
        let after = ops::apply_edit(&before, &edit);

        self.history.push(before);
        self.current = Some(after);

        self.modified = true;
        self.last_action = edit.label();
        debug!(action = %self.last_action, "edit applied");
        Ok(())
    }

    // --- Continuous adjustments ---

    /// Slider press. Returns `Ok(false)` if another drag is already active.
    pub fn begin_adjustment(&mut self, control: Control) -> Result<bool> {
        let current = self.current.as_ref().ok_or(EditorError::NoImage)?;
        let started = self.session.begin(control, current);
        if started {
            self.last_adjustment = None;
        }
        Ok(started)
    }

    /// Slider value change. Recomputes the preview from the drag's base.
    ///
    /// Ignored (returns `false`) when no drag is active or the adjustment
    /// belongs to a different control than the one being dragged.
    pub fn preview_adjustment(&mut self, adjustment: Adjustment) -> bool {
        let control = adjustment.control();
        if self.session.active_control() != Some(control) {
            return false;
        }

        match self
            .session
            .preview(|base| ops::apply_adjustment(base, &adjustment))
        {
            Some(frame) => {
                self.current = Some(frame);
                self.last_adjustment = Some(adjustment);
                self.modified = true;
                self.last_action = format!("Adjusting {}", control);
                true
            }
            None => false,
        }
    }

    /// Slider release. Records the whole drag as one undo step.
    pub fn end_adjustment(&mut self) -> bool {
        match self.session.commit(&mut self.history) {
            Some(control) => {
                self.last_action = match self.last_adjustment.take() {
                    Some(adjustment) => adjustment.label(),
                    None => format!("Adjusted {}", control),
                };
                true
            }
            None => false,
        }
    }

    /// The host lost the drag (focus loss, window hidden).
    ///
    /// Puts the pre-drag frame back on screen and records it once, the
    /// same way a release would.
    pub fn cancel_adjustment(&mut self) -> bool {
        let control = match self.session.active_control() {
            Some(control) => control,
            None => return false,
        };

        match self.session.abort(&mut self.history) {
            Some(base) => {
                self.current = Some(base);
                self.last_adjustment = None;
                self.last_action = format!("Cancelled {}", control);
                true
            }
            None => false,
        }
    }

    fn finish_adjustment(&mut self) {
        if self.session.is_active() {
            self.end_adjustment();
        }
    }

    // --- Undo / redo ---

    /// Returns `false` when there is no image or nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.finish_adjustment();

        let current = match &self.current {
            Some(frame) => frame,
            None => return false,
        };

        match self.history.undo(current) {
            Some(snapshot) => {
                self.current = Some(snapshot.into_frame());
                self.modified = true;
                self.last_action = "Undo".to_string();
                true
            }
            None => {
                debug!("nothing to undo");
                false
            }
        }
    }

    /// Returns `false` when there is no image or nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.finish_adjustment();

        let current = match &self.current {
            Some(frame) => frame,
            None => return false,
        };

        match self.history.redo(current) {
            Some(snapshot) => {
                self.current = Some(snapshot.into_frame());
                self.modified = true;
                self.last_action = "Redo".to_string();
                true
            }
            None => {
                debug!("nothing to redo");
                false
            }
        }
    }

    // --- Accessors ---

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn info(&self) -> ImageInfo {
        let frame = match &self.current {
            Some(frame) => frame,
            None => return ImageInfo::default(),
        };

        let filename = self
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Unsaved image".to_string());

        ImageInfo {
            filename,
            width: frame.width(),
            height: frame.height(),
        }
    }

    pub fn status(&self) -> EditorStatus {
        EditorStatus {
            info: self.info(),
            modified: self.modified,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            last_action: self.last_action.clone(),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
