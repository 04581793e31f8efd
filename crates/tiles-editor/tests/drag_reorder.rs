//! End-to-end drag-reorder and gesture routing across the catalog.

use proptest::prelude::*;
use tiles_core::{Point, Size, TileGridGesture};
use tiles_editor::{
    GestureOutcome, GestureTarget, MutableTileGridOrder, ThumbnailConfiguration, TileGridEditor,
    TileGridOrder, TileGridStyle,
};
use tiles_layout::{TileGridLayout, layout_tree};

fn content(n: usize) -> TileGridOrder {
    (0..n)
        .map(|i| ThumbnailConfiguration::new(format!("t{i}")))
        .collect()
}

fn editor(layout: TileGridLayout, style: TileGridStyle) -> TileGridEditor {
    let tree = layout_tree(layout, None).expect("catalog entry");
    TileGridEditor::new(tree, content(layout.tile_count()), Size::new(400.0, 300.0), style)
        .expect("editor")
}

fn sorted_ids(order: &MutableTileGridOrder) -> Vec<String> {
    let mut ids: Vec<String> = order.iter().map(|entry| entry.id.to_string()).collect();
    ids.sort();
    ids
}

fn press(editor: &mut TileGridEditor, index: usize) -> GestureOutcome {
    editor.handle(
        GestureTarget::Tile(index),
        TileGridGesture::LongPressStart {
            offset: Point::new(1.0, 1.0),
        },
    )
}

/// Drag tile `from` onto the center of tile `to` and release.
fn drag_onto(editor: &mut TileGridEditor, from: usize, to: usize) -> GestureOutcome {
    press(editor, from);
    let pointer = editor.drag().expect("dragging").pointer();
    let target = editor.bounds().rect(to).expect("rect").center();
    editor.handle(
        GestureTarget::Tile(from),
        TileGridGesture::LongPressMove {
            delta: target - pointer,
        },
    );
    editor.handle(GestureTarget::Tile(from), TileGridGesture::LongPressEnd)
}

#[test]
fn every_layout_swaps_first_and_last_tile() {
    for flipped in [false, true] {
        let style = TileGridStyle::new(4.0, 6.0, 1.0, flipped).expect("valid");
        for layout in TileGridLayout::ALL {
            let mut editor = editor(layout, style);
            let last = layout.tile_count() - 1;
            let outcome = drag_onto(&mut editor, 0, last);
            assert_eq!(
                outcome,
                GestureOutcome::Swapped { from: 0, to: last },
                "{layout} flipped={flipped}"
            );
            assert_eq!(editor.order().get(0).expect("entry").id.as_str(), format!("t{last}"));
            assert_eq!(editor.order().get(last).expect("entry").id.as_str(), "t0");

            // Dragging back restores the original order.
            drag_onto(&mut editor, last, 0);
            let ids: Vec<String> = editor
                .order()
                .iter()
                .map(|entry| entry.id.to_string())
                .collect();
            let expected: Vec<String> = (0..layout.tile_count()).map(|i| format!("t{i}")).collect();
            assert_eq!(ids, expected, "{layout} flipped={flipped}");
        }
    }
}

#[test]
fn dragging_into_spacing_gap_does_not_swap() {
    let style = TileGridStyle::new(0.0, 20.0, 1.0, false).expect("valid");
    let mut editor = editor("GridThree.One".parse().expect("layout"), style);
    press(&mut editor, 0);
    let pointer = editor.drag().expect("dragging").pointer();
    let first = editor.bounds().rect(0).expect("rect");
    // Land just below the first tile, inside the gap.
    let gap = Point::new(first.center().x, first.bottom + 5.0);
    let outcome = editor.handle(
        GestureTarget::Tile(0),
        TileGridGesture::LongPressMove {
            delta: gap - pointer,
        },
    );
    assert_eq!(outcome, GestureOutcome::DragMoved { candidate: None });
    assert_eq!(
        editor.handle(GestureTarget::Tile(0), TileGridGesture::LongPressEnd),
        GestureOutcome::DragEnded
    );
}

#[test]
fn dragging_past_the_bottom_edge_swaps_with_last_row() {
    let style = TileGridStyle::new(0.0, 0.0, 1.0, false).expect("valid");
    let mut editor = editor("GridThree.One".parse().expect("layout"), style);
    press(&mut editor, 0);
    let outcome = editor.handle(
        GestureTarget::Tile(0),
        TileGridGesture::LongPressMove {
            delta: Point::new(0.0, 5000.0),
        },
    );
    assert_eq!(outcome, GestureOutcome::DragMoved { candidate: Some(2) });
    assert_eq!(
        editor.handle(GestureTarget::Tile(0), TileGridGesture::LongPressEnd),
        GestureOutcome::Swapped { from: 0, to: 2 }
    );
}

#[test]
fn dragging_past_the_right_edge_targets_the_last_column() {
    let style = TileGridStyle::new(0.0, 0.0, 1.0, false).expect("valid");
    let mut editor = editor("GridThree.Two".parse().expect("layout"), style);
    press(&mut editor, 0);
    let outcome = editor.handle(
        GestureTarget::Tile(0),
        TileGridGesture::LongPressMove {
            delta: Point::new(5000.0, 0.0),
        },
    );
    assert_eq!(outcome, GestureOutcome::DragMoved { candidate: Some(2) });
}

#[test]
fn divider_drag_mid_session_updates_hit_testing() {
    let style = TileGridStyle::new(0.0, 0.0, 1.0, false).expect("valid");
    let mut editor = editor("GridThree.Two".parse().expect("layout"), style);
    press(&mut editor, 0);
    let divider = editor.tree().find("root:1").expect("node");
    editor.handle(
        GestureTarget::Divider(divider),
        TileGridGesture::DividerDrag {
            delta: Point::new(100.0, 0.0),
        },
    );
    // The divider clamps near x = 207, so a pointer at x = 200 stays on the first tile.
    let pointer = editor.drag().expect("dragging").pointer();
    let outcome = editor.handle(
        GestureTarget::Tile(0),
        TileGridGesture::LongPressMove {
            delta: Point::new(200.0 - pointer.x, 0.0),
        },
    );
    assert_eq!(outcome, GestureOutcome::DragMoved { candidate: Some(0) });
}

#[derive(Debug, Clone)]
enum Step {
    Press(usize, f32, f32),
    Move(f32, f32),
    Release,
    Cancel,
    Pan(usize, f32, f32),
    Zoom(usize, f32),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..10, 0.0f32..50.0, 0.0f32..50.0).prop_map(|(i, x, y)| Step::Press(i, x, y)),
        (-300.0f32..300.0, -300.0f32..300.0).prop_map(|(x, y)| Step::Move(x, y)),
        Just(Step::Release),
        Just(Step::Cancel),
        (0usize..10, -50.0f32..50.0, -50.0f32..50.0).prop_map(|(i, x, y)| Step::Pan(i, x, y)),
        (0usize..10, 0.25f32..4.0).prop_map(|(i, f)| Step::Zoom(i, f)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn gesture_streams_keep_order_a_permutation(
        layout_index in 0usize..TileGridLayout::ALL.len(),
        flipped in any::<bool>(),
        steps in prop::collection::vec(step(), 1..60),
    ) {
        let layout = TileGridLayout::ALL[layout_index];
        let style = TileGridStyle::new(0.0, 4.0, 1.0, flipped).expect("valid");
        let mut editor = editor(layout, style);
        let before = sorted_ids(editor.order());

        for step in steps {
            let (target, gesture) = match step {
                Step::Press(i, x, y) => (
                    GestureTarget::Tile(i),
                    TileGridGesture::LongPressStart { offset: Point::new(x, y) },
                ),
                Step::Move(x, y) => (
                    GestureTarget::Tile(0),
                    TileGridGesture::LongPressMove { delta: Point::new(x, y) },
                ),
                Step::Release => (GestureTarget::Tile(0), TileGridGesture::LongPressEnd),
                Step::Cancel => (GestureTarget::Tile(0), TileGridGesture::LongPressCancel),
                Step::Pan(i, x, y) => (
                    GestureTarget::Tile(i),
                    TileGridGesture::Pan { delta: Point::new(x, y) },
                ),
                Step::Zoom(i, f) => (GestureTarget::Tile(i), TileGridGesture::Zoom { factor: f }),
            };
            editor.handle(target, gesture);

            for entry in editor.order().iter() {
                prop_assert!((0.0..=1.0).contains(&entry.alignment.x));
                prop_assert!((0.0..=1.0).contains(&entry.alignment.y));
                prop_assert!(entry.scale.get() >= 1.0);
            }
        }

        prop_assert_eq!(sorted_ids(editor.order()), before);
    }
}
