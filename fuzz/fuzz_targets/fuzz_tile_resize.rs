#![no_main]

use libfuzzer_sys::fuzz_target;
use tiles_core::FlipAxes;
use tiles_layout::{NodeId, TileGridLayout, layout_tree};

fuzz_target!(|data: &[u8]| {
    // First byte picks the topology; every following triple is one resize.
    let Some((&pick, steps)) = data.split_first() else {
        return;
    };
    let layout = TileGridLayout::ALL[pick as usize % TileGridLayout::ALL.len()];
    let mut tree = layout_tree(layout, None).expect("catalog entry builds");
    let movable: Vec<NodeId> = tree
        .nodes()
        .filter(|(_, node)| node.has_line())
        .map(|(id, _)| id)
        .collect();

    for step in steps.chunks_exact(3) {
        let id = movable[step[0] as usize % movable.len()];
        let percent = (step[1] as i8) as f32 / 64.0;
        let flip_v = step[2] & 1 == 1;
        let flip_h = step[2] & 2 == 2;
        let position = tree
            .update_position_by(id, percent, flip_v, flip_h)
            .expect("movable node");
        let (lower, upper) = tree.position_range(id).expect("movable range");
        if lower <= upper {
            assert!(position >= lower - 1e-5 && position <= upper + 1e-5);
        }
    }

    // Post-conditions: the list restores the same tree and no tile collapses.
    let list = tree.to_list();
    let restored = layout_tree(layout, Some(&list)).expect("own positions restore");
    assert_eq!(restored.to_list(), list);

    let bounds = tree.to_bitmap_bounds(tiles_core::Size::new(1000.0, 1000.0), FlipAxes::all(), 0.0);
    for (_, rect) in bounds.iter() {
        assert!(rect.width() > 0.0 && rect.height() > 0.0);
    }
});
