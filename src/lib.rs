//! # Pixel History
//!
//! Undo/redo and live-adjustment sessions for a single-document raster
//! image editor.
//!
//! ## Core Concepts
//!
//! - **Snapshots**: Full-frame copies of the image, immutable once stored
//! - **History**: Bounded undo stack plus a redo stack invalidated by new edits
//! - **Sessions**: A slider drag previews from one base frame and commits once
//! - **Ops**: Pure pixel transforms (grayscale, blur, rotate, resize, ...)
//!
//! ## Example
//!
//! ```ignore
//! use pixel_history::{Adjustment, Control, Edit, Editor, EditorConfig};
//!
//! let mut editor = Editor::new(EditorConfig::default());
//! editor.open("photo.png")?;
//!
//! // One-shot edit: one undo step
//! editor.apply(Edit::Grayscale)?;
//!
//! // Slider drag: many previews, still one undo step
//! editor.begin_adjustment(Control::Blur)?;
//! editor.preview_adjustment(Adjustment::Blur(5));
//! editor.preview_adjustment(Adjustment::Blur(12));
//! editor.end_adjustment();
//!
//! editor.undo(); // back to grayscale
//! editor.undo(); // back to the original
//! ```

pub mod editor;
pub mod error;
pub mod history;
pub mod ops;
pub mod session;
pub mod types;

// Re-exports
pub use editor::{Editor, EditorConfig, EditorStatus};
pub use error::{EditorError, Result};
pub use history::{HistoryStore, DEFAULT_CAPACITY};
pub use session::{EditSession, SessionState};
pub use types::*;
