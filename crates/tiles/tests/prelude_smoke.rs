//! The prelude alone is enough to lay out, edit and persist a grid.

use tiles::prelude::*;

#[test]
fn build_edit_and_persist_with_prelude() {
    let layout: TileGridLayout = "GridFive.Three".parse().expect("catalog name");
    let tree = layout_tree(layout, None).expect("builds");
    let order: TileGridOrder = (0..layout.tile_count())
        .map(|i| ThumbnailConfiguration::new(format!("photo-{i}")))
        .collect();
    let style = TileGridStyle::new(8.0, 8.0, 1.0, true).expect("valid style");
    let outer = Rect::new(0.0, 0.0, 416.0, 516.0);
    let area = style.content_area(outer);
    assert_eq!(area.size(), Size::new(400.0, 400.0));

    let mut editor = TileGridEditor::new(tree, order, area.size(), style).expect("editor");
    let bounds: &TileGridBounds = editor.bounds();
    assert_eq!(bounds.len(), 5);
    assert!(bounds.union().is_some());

    let first = editor.bounds().rect(0).expect("rect").center();
    let second = editor.bounds().rect(1).expect("rect").center();
    editor.handle(
        GestureTarget::Tile(0),
        TileGridGesture::LongPressStart {
            offset: Point::new(4.0, 4.0),
        },
    );
    let pointer = editor.drag().expect("dragging").pointer();
    editor.handle(
        GestureTarget::Tile(0),
        TileGridGesture::LongPressMove {
            delta: second - pointer,
        },
    );
    editor.handle(GestureTarget::Tile(0), TileGridGesture::LongPressEnd);
    assert_eq!(editor.display_id(0).expect("id").as_str(), "photo-1");
    assert_ne!(first, second);

    let document = TileGridDocument::from_editor(&editor);
    let reopened = document.into_editor(area.size()).expect("reopens");
    assert_eq!(reopened.order(), editor.order());
}
