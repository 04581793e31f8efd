//! Catalog-wide invariants: persistence round trips and gap-free tiling.

use tiles_layout::{
    FlipAxes, GridThree, MutableTileGridLayoutTree, Rect, Size, TileGridLayout, layout_tree,
};

const SIZES: [Size; 3] = [
    Size::new(300.0, 300.0),
    Size::new(1080.0, 1920.0),
    Size::new(640.0, 360.0),
];

const FLIPS: [FlipAxes; 4] = [
    FlipAxes::NONE,
    FlipAxes::VERTICAL,
    FlipAxes::HORIZONTAL,
    FlipAxes::all(),
];

fn overlap_area(a: &Rect, b: &Rect) -> f32 {
    a.intersection_opt(b).map_or(0.0, |rect| rect.area())
}

fn assert_tiles_container(tree: &MutableTileGridLayoutTree, size: Size, flips: FlipAxes) {
    let bounds = tree.to_bitmap_bounds(size, flips, 0.0);
    let layout = tree.layout();
    assert_eq!(bounds.len(), layout.tile_count(), "{layout}");

    let total: f32 = bounds.iter().map(|(_, rect)| rect.area()).sum();
    let container = size.width * size.height;
    assert!(
        (total - container).abs() <= container * 1e-4,
        "{layout} {flips:?}: tiles cover {total}, container is {container}"
    );

    let union = bounds.union().expect("non-empty");
    let full = Rect::from_size(size);
    for (edge, expected) in [
        (union.left, full.left),
        (union.top, full.top),
        (union.right, full.right),
        (union.bottom, full.bottom),
    ] {
        assert!((edge - expected).abs() < 1e-2, "{layout} {flips:?}: {union:?}");
    }

    let rects = bounds.as_slice();
    for (i, a) in rects.iter().enumerate() {
        assert!(!a.is_empty(), "{layout}: tile {i} is empty");
        for b in &rects[i + 1..] {
            assert!(
                overlap_area(a, b) <= container * 1e-5,
                "{layout} {flips:?}: {a:?} overlaps {b:?}"
            );
        }
    }
}

#[test]
fn every_layout_round_trips_through_list() {
    for layout in TileGridLayout::ALL {
        let tree = layout_tree(layout, None).expect("default build");
        let list = tree.to_list();
        assert_eq!(list.len(), tree.node_count() - 1, "{layout}");

        let rebuilt = layout_tree(layout, Some(&list)).expect("restored build");
        assert_eq!(rebuilt.to_list(), list, "{layout}");
        assert_eq!(rebuilt.node_count(), tree.node_count(), "{layout}");
    }
}

#[test]
fn round_trip_keeps_resized_positions() {
    for layout in TileGridLayout::ALL {
        let mut tree = layout_tree(layout, None).expect("default build");
        let movable: Vec<_> = tree
            .nodes()
            .filter(|(_, node)| node.has_line())
            .map(|(id, _)| id)
            .collect();
        for (step, id) in movable.into_iter().enumerate() {
            let delta = if step % 2 == 0 { 0.07 } else { -0.04 };
            tree.update_position_by(id, delta, false, false);
        }

        let list = tree.to_list();
        let rebuilt = layout_tree(layout, Some(&list)).expect("restored build");
        assert_eq!(rebuilt.to_list(), list, "{layout}");
        assert_eq!(
            rebuilt.to_bitmap_bounds(Size::new(500.0, 500.0), FlipAxes::NONE, 6.0),
            tree.to_bitmap_bounds(Size::new(500.0, 500.0), FlipAxes::NONE, 6.0),
            "{layout}"
        );
    }
}

#[test]
fn leaves_tile_the_container_without_gaps() {
    for layout in TileGridLayout::ALL {
        let tree = layout_tree(layout, None).expect("default build");
        for size in SIZES {
            for flips in FLIPS {
                assert_tiles_container(&tree, size, flips);
            }
        }
    }
}

#[test]
fn spacing_separates_neighbours_exactly() {
    let tree = layout_tree(GridThree::Two.into(), None).expect("default build");
    let bounds = tree.to_bitmap_bounds(Size::new(310.0, 100.0), FlipAxes::NONE, 10.0);
    let rects = bounds.as_slice();
    for pair in rects.windows(2) {
        let gap = pair[1].left - pair[0].right;
        assert!((gap - 10.0).abs() < 1e-3, "gap {gap}");
    }
    assert_eq!(rects[0].left, 0.0);
    assert_eq!(rects[2].right, 310.0);
}

#[test]
fn flipping_preserves_tile_sizes() {
    for layout in TileGridLayout::ALL {
        let tree = layout_tree(layout, None).expect("default build");
        let size = Size::new(400.0, 400.0);
        let plain = tree.to_bitmap_bounds(size, FlipAxes::NONE, 8.0);
        let flipped = tree.to_bitmap_bounds(size, FlipAxes::all(), 8.0);
        for ((_, a), (_, b)) in plain.iter().zip(flipped.iter()) {
            assert!((a.width() - b.width()).abs() < 1e-3, "{layout}");
            assert!((a.height() - b.height()).abs() < 1e-3, "{layout}");
        }
    }
}

#[test]
fn saved_positions_from_another_layout_are_rejected() {
    let three = layout_tree(GridThree::One.into(), None).expect("default build");
    let list = three.to_list();
    for layout in TileGridLayout::ALL {
        let expected = layout_tree(layout, None).expect("default build").node_count() - 1;
        if expected == list.len() {
            continue;
        }
        assert!(layout_tree(layout, Some(&list)).is_err(), "{layout}");
    }
}
