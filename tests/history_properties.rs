//! Property tests for history and session invariants.

use image::Rgb;
use pixel_history::{ops, Control, EditSession, Frame, HistoryStore};
use proptest::prelude::*;

/// A tiny frame tagged by `id` in its first sample.
fn tagged(id: u8) -> Frame {
    let mut frame = Frame::from_pixel(2, 2, Rgb([0, 0, 0]));
    frame.put_pixel(0, 0, Rgb([id, 0, 0]));
    frame
}

fn tag(frame: &Frame) -> u8 {
    frame.get_pixel(0, 0)[0]
}

#[derive(Clone, Debug)]
enum Op {
    Push(u8),
    Undo(u8),
    Redo(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Push),
        any::<u8>().prop_map(Op::Undo),
        any::<u8>().prop_map(Op::Redo),
    ]
}

proptest! {
    #[test]
    fn pushes_keep_newest_within_capacity(
        capacity in 1usize..8,
        ids in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let mut store = HistoryStore::new(capacity);
        for &id in &ids {
            store.push(tagged(id));
            prop_assert!(store.undo_count() <= capacity);
        }

        let kept: Vec<u8> = store.undo_entries().map(|s| tag(s.frame())).collect();
        let start = ids.len().saturating_sub(capacity);
        prop_assert_eq!(kept, ids[start..].to_vec());
    }

    #[test]
    fn capacity_and_redo_bounds_hold_for_any_sequence(
        capacity in 1usize..6,
        steps in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut store = HistoryStore::new(capacity);
        let mut undos_since_push = 0usize;

        for op in steps {
            match op {
                Op::Push(id) => {
                    store.push(tagged(id));
                    undos_since_push = 0;
                    prop_assert!(!store.can_redo());
                }
                Op::Undo(id) => {
                    if store.undo(&tagged(id)).is_some() {
                        undos_since_push += 1;
                    }
                }
                Op::Redo(id) => {
                    if store.redo(&tagged(id)).is_some() {
                        undos_since_push -= 1;
                    }
                }
            }
            prop_assert!(store.undo_count() <= capacity);
            prop_assert_eq!(store.redo_count(), undos_since_push);
        }
    }

    #[test]
    fn undo_then_redo_restores_current(
        history in prop::collection::vec(any::<u8>(), 1..10),
        current in any::<u8>(),
    ) {
        let mut store = HistoryStore::new(16);
        for &id in &history {
            store.push(tagged(id));
        }
        let shape = (store.undo_count(), store.redo_count());

        let previous = store.undo(&tagged(current)).unwrap().into_frame();
        prop_assert_eq!(tag(&previous), *history.last().unwrap());

        let restored = store.redo(&previous).unwrap().into_frame();
        prop_assert_eq!(restored, tagged(current));
        prop_assert_eq!((store.undo_count(), store.redo_count()), shape);
    }

    #[test]
    fn previews_always_start_from_base(
        values in prop::collection::vec(-100i32..=100, 1..12),
    ) {
        let base = Frame::from_fn(6, 5, |x, y| Rgb([(x * 40) as u8, (y * 50) as u8, 128]));
        let mut session = EditSession::new();
        let mut history = HistoryStore::new(4);
        session.begin(Control::Brightness, &base);

        for &value in &values {
            let preview = session.preview(|b| ops::brightness(b, value)).unwrap();
            prop_assert_eq!(preview, ops::brightness(&base, value));
        }

        prop_assert_eq!(session.commit(&mut history), Some(Control::Brightness));
        prop_assert_eq!(history.undo_count(), 1);
        prop_assert_eq!(history.undo_entries().next().unwrap().frame(), &base);
    }
}
