//! Integration tests for the editor.

use image::Rgb;
use pixel_history::{
    ops, Adjustment, Control, Edit, Editor, EditorConfig, FlipAxis, Fingerprint, Frame,
    HistoryStore, Rotation,
};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn photo() -> Frame {
    Frame::from_fn(32, 24, |x, y| {
        Rgb([(x * 7) as u8, (y * 9) as u8, ((x * y) % 251) as u8])
    })
}

fn test_editor(capacity: usize) -> Editor {
    init_tracing();
    let mut editor = Editor::new(EditorConfig {
        history_capacity: capacity,
    });
    editor.load_frame(photo());
    editor
}

// --- Realistic Workflow Tests ---

#[test]
fn test_one_shot_edits_undo_in_reverse_order() {
    let mut editor = test_editor(25);

    let original = editor.current().unwrap().clone();
    editor.apply(Edit::Grayscale).unwrap();
    let gray = editor.current().unwrap().clone();
    editor.apply(Edit::Rotate(Rotation::Cw90)).unwrap();
    let rotated = editor.current().unwrap().clone();
    editor.apply(Edit::Resize { percent: 50 }).unwrap();

    assert_eq!(editor.current().unwrap().dimensions(), (12, 16));
    assert_eq!(editor.history().undo_count(), 3);

    assert!(editor.undo());
    assert_eq!(editor.current().unwrap(), &rotated);
    assert!(editor.undo());
    assert_eq!(editor.current().unwrap(), &gray);
    assert!(editor.undo());
    assert_eq!(editor.current().unwrap(), &original);
    assert!(!editor.undo());

    assert_eq!(editor.history().redo_count(), 3);
}

#[test]
fn test_slider_drag_is_one_history_entry() {
    let mut editor = test_editor(25);
    let x = editor.current().unwrap().clone();

    assert!(editor.begin_adjustment(Control::Blur).unwrap());
    assert!(editor.preview_adjustment(Adjustment::Blur(5)));
    let y = editor.current().unwrap().clone();
    assert!(editor.preview_adjustment(Adjustment::Blur(12)));
    let z = editor.current().unwrap().clone();
    assert!(editor.end_adjustment());

    // Z is computed from X, not from Y
    assert_eq!(y, ops::blur(&x, 5));
    assert_eq!(z, ops::blur(&x, 12));
    assert_ne!(z, ops::blur(&y, 12));

    assert_eq!(editor.history().undo_count(), 1);
    assert_eq!(editor.history().undo_entries().next().unwrap().frame(), &x);
    assert_eq!(editor.current().unwrap(), &z);
    assert_eq!(editor.last_action(), "Blur (12)");

    assert!(editor.undo());
    assert_eq!(editor.current().unwrap(), &x);
    assert!(editor.redo());
    assert_eq!(editor.current().unwrap(), &z);
}

#[test]
fn test_long_drag_collapses() {
    let mut editor = test_editor(25);
    editor.apply(Edit::Flip(FlipAxis::Vertical)).unwrap();
    let base = editor.current().unwrap().clone();

    editor.begin_adjustment(Control::Contrast).unwrap();
    for level in (0..=200).step_by(5) {
        assert!(editor.preview_adjustment(Adjustment::Contrast(level)));
    }
    editor.end_adjustment();

    assert_eq!(editor.history().undo_count(), 2);
    assert_eq!(editor.current().unwrap(), &ops::contrast(&base, 200));
    assert_eq!(editor.history().undo_entries().last().unwrap().frame(), &base);
}

#[test]
fn test_new_edit_after_undo_invalidates_redo() {
    let mut editor = test_editor(25);
    editor.apply(Edit::Grayscale).unwrap();
    editor.apply(Edit::edge_detect()).unwrap();

    assert!(editor.undo());
    assert!(editor.can_redo());

    editor.begin_adjustment(Control::Brightness).unwrap();
    editor.preview_adjustment(Adjustment::Brightness(40));
    editor.end_adjustment();

    assert!(!editor.can_redo());
    assert!(!editor.redo());
}

#[test]
fn test_capacity_bounds_editor_history() {
    let mut editor = test_editor(3);

    for _ in 0..6 {
        editor.apply(Edit::Rotate(Rotation::Cw90)).unwrap();
        editor.apply(Edit::Flip(FlipAxis::Horizontal)).unwrap();
    }

    assert_eq!(editor.history().undo_count(), 3);
    let undone = (0..10).take_while(|_| editor.undo()).count();
    assert_eq!(undone, 3);
}

#[test]
fn test_undo_redo_round_trip_is_bit_exact() {
    let mut store = HistoryStore::new(4);
    let b = photo();
    let c = ops::grayscale(&b);
    store.push(b.clone());

    let undo_before = store.undo_count();
    let redo_before = store.redo_count();

    let restored = store.undo(&c).unwrap().into_frame();
    assert_eq!(restored, b);

    let back = store.redo(&restored).unwrap().into_frame();
    assert_eq!(Fingerprint::of(&back), Fingerprint::of(&c));
    assert_eq!(store.undo_count(), undo_before);
    assert_eq!(store.redo_count(), redo_before);
    assert_eq!(store.undo_entries().last().unwrap().fingerprint(), Fingerprint::of(&b));
}

#[test]
fn test_cancelled_drag_restores_base() {
    let mut editor = test_editor(25);
    let base = editor.current().unwrap().clone();

    editor.begin_adjustment(Control::Brightness).unwrap();
    editor.preview_adjustment(Adjustment::Brightness(-60));
    assert_ne!(editor.current().unwrap(), &base);

    assert!(editor.cancel_adjustment());
    assert_eq!(editor.current().unwrap(), &base);
    assert_eq!(editor.history().undo_count(), 1);
    assert!(!editor.session().is_active());
    assert!(!editor.cancel_adjustment());
}

// --- File Tests ---

#[test]
fn test_open_edit_save_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.png");
    photo().save(&path).unwrap();

    let mut editor = test_editor(25);
    editor.apply(Edit::Grayscale).unwrap();
    assert!(editor.can_undo());

    editor.open(&path).unwrap();
    assert_eq!(editor.current().unwrap(), &photo());
    assert!(!editor.can_undo());
    assert!(!editor.is_modified());
    assert_eq!(editor.info().filename, "input.png");
    assert_eq!(editor.last_action(), "Opened image");

    editor.apply(Edit::Flip(FlipAxis::Horizontal)).unwrap();
    assert!(editor.is_modified());
    editor.save().unwrap();
    assert!(!editor.is_modified());

    let mut reopened = Editor::default();
    reopened.open(&path).unwrap();
    assert_eq!(
        reopened.current().unwrap(),
        &ops::flip(&photo(), FlipAxis::Horizontal)
    );
}

#[test]
fn test_save_as_adopts_path_and_default_extension() {
    let dir = TempDir::new().unwrap();
    let mut editor = test_editor(25);
    editor.apply(Edit::Rotate(Rotation::Half)).unwrap();

    editor.save_as(dir.path().join("exported")).unwrap();

    let saved = dir.path().join("exported.png");
    assert!(saved.exists());
    assert_eq!(editor.path(), Some(saved.as_path()));
    assert_eq!(editor.info().filename, "exported.png");
    assert!(!editor.is_modified());
    assert_eq!(editor.last_action(), "Saved image as");

    // history survives a save
    assert!(editor.can_undo());
}

#[test]
fn test_open_clears_redo_and_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("second.bmp");
    Frame::from_pixel(5, 5, Rgb([1, 2, 3])).save(&path).unwrap();

    let mut editor = test_editor(25);
    editor.apply(Edit::Grayscale).unwrap();
    editor.undo();
    editor.begin_adjustment(Control::Blur).unwrap();
    editor.preview_adjustment(Adjustment::Blur(3));

    editor.open(&path).unwrap();

    assert!(!editor.session().is_active());
    assert!(!editor.can_redo());
    assert_eq!(editor.history().size(), 0);
    assert!(!editor.end_adjustment());
}
