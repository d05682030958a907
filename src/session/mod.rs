//! Continuous-adjustment sessions.
//!
//! A slider drag is a session: `begin` captures the frame under the
//! cursor as the base, every `preview` recomputes from that base, and
//! `commit` records the base in history exactly once.
//!
//! # Example
//!
//! ```ignore
//! let mut session = EditSession::new();
//! session.begin(Control::Blur, &current);
//! current = session.preview(|base| ops::blur(base, 5)).unwrap();
//! current = session.preview(|base| ops::blur(base, 12)).unwrap();
//! session.commit(&mut history);
//! ```

mod edit_session;

pub use edit_session::{EditSession, SessionState};
