#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use tiles_core::{Point, Size, TileGridGesture};
use tiles_editor::{GestureTarget, ThumbnailConfiguration, TileGridEditor, TileGridStyle};
use tiles_layout::{NodeId, TileGridLayout, layout_tree};

#[derive(Debug, Arbitrary)]
enum Op {
    Divider { node: u8, dx: i16, dy: i16 },
    Pan { tile: u8, dx: i16, dy: i16 },
    Zoom { tile: u8, factor: u8 },
    Press { tile: u8, x: u8, y: u8 },
    Move { dx: i16, dy: i16 },
    Release,
    Cancel,
    Resize { w: u16, h: u16 },
}

fn point(x: i16, y: i16) -> Point {
    Point::new(f32::from(x), f32::from(y))
}

fuzz_target!(|data: &[u8]| {
    let mut input = Unstructured::new(data);
    let Ok(pick) = u8::arbitrary(&mut input) else {
        return;
    };
    let Ok(flipped) = bool::arbitrary(&mut input) else {
        return;
    };
    let layout = TileGridLayout::ALL[pick as usize % TileGridLayout::ALL.len()];
    let tree = layout_tree(layout, None).expect("catalog entry builds");
    let dividers: Vec<NodeId> = tree
        .nodes()
        .filter(|(_, node)| node.has_line())
        .map(|(id, _)| id)
        .collect();
    let order = (0..layout.tile_count())
        .map(|i| ThumbnailConfiguration::new(format!("t{i}")))
        .collect();
    let style = TileGridStyle::new(0.0, 6.0, 1.0, flipped).expect("valid style");
    let mut editor =
        TileGridEditor::new(tree, order, Size::new(320.0, 240.0), style).expect("editor");

    let mut expected: Vec<String> = (0..layout.tile_count()).map(|i| format!("t{i}")).collect();
    while let Ok(op) = Op::arbitrary(&mut input) {
        let (target, gesture) = match op {
            Op::Divider { node, dx, dy } => (
                GestureTarget::Divider(dividers[node as usize % dividers.len()]),
                TileGridGesture::DividerDrag { delta: point(dx, dy) },
            ),
            Op::Pan { tile, dx, dy } => (
                GestureTarget::Tile(tile as usize),
                TileGridGesture::Pan { delta: point(dx, dy) },
            ),
            Op::Zoom { tile, factor } => (
                GestureTarget::Tile(tile as usize),
                TileGridGesture::Zoom {
                    factor: f32::from(factor) / 32.0,
                },
            ),
            Op::Press { tile, x, y } => (
                GestureTarget::Tile(tile as usize),
                TileGridGesture::LongPressStart {
                    offset: Point::new(f32::from(x), f32::from(y)),
                },
            ),
            Op::Move { dx, dy } => (
                GestureTarget::Tile(0),
                TileGridGesture::LongPressMove { delta: point(dx, dy) },
            ),
            Op::Release => (GestureTarget::Tile(0), TileGridGesture::LongPressEnd),
            Op::Cancel => (GestureTarget::Tile(0), TileGridGesture::LongPressCancel),
            Op::Resize { w, h } => {
                editor.set_container(Size::new(f32::from(w), f32::from(h)));
                continue;
            }
        };
        if let tiles_editor::GestureOutcome::Swapped { from, to } = editor.handle(target, gesture) {
            expected.swap(from, to);
        }

        for entry in editor.order().iter() {
            assert!((0.0..=1.0).contains(&entry.alignment.x));
            assert!((0.0..=1.0).contains(&entry.alignment.y));
            assert!(entry.scale.get() >= 1.0);
        }
    }

    let ids: Vec<String> = editor.order().iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, expected);
});
