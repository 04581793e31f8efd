#![no_main]

use libfuzzer_sys::fuzz_target;
use tiles_core::{FlipAxes, Size};
use tiles_layout::{TileGridLayout, TileGridLayoutSnapshot, TreeBuildError, layout_tree};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a layout name must never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = text.parse::<TileGridLayout>();
    }

    // Arbitrary position lists either restore exactly into non-inverted
    // tiles or are rejected.
    let Some((&pick, rest)) = data.split_first() else {
        return;
    };
    let layout = TileGridLayout::ALL[pick as usize % TileGridLayout::ALL.len()];
    let positions: Vec<f32> = rest
        .chunks_exact(4)
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect();
    let snapshot = TileGridLayoutSnapshot {
        schema_version: tiles_layout::TILE_GRID_SNAPSHOT_SCHEMA_VERSION,
        layout,
        positions: positions.clone(),
    };
    match tiles_layout::MutableTileGridLayoutTree::from_snapshot(&snapshot) {
        Ok(tree) => {
            assert_eq!(tree.to_list(), positions);
            let again = layout_tree(layout, Some(&positions)).expect("same input builds");
            assert_eq!(again.to_list(), positions);
            let bounds = tree.to_bitmap_bounds(Size::new(1000.0, 1000.0), FlipAxes::NONE, 0.0);
            for (_, rect) in bounds.iter() {
                assert!(rect.width() >= 0.0 && rect.height() >= 0.0, "{rect:?}");
            }
        }
        Err(err) => assert!(matches!(
            err,
            TreeBuildError::PositionCountMismatch { .. }
                | TreeBuildError::InvalidPosition { .. }
                | TreeBuildError::UnorderedPositions { .. }
        )),
    }
});
