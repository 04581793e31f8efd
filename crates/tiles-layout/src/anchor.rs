//! Symbolic bounds for constraint-based renderers.
//!
//! Instead of numbers, every interior divider becomes a named [`Guideline`]
//! placed at a fraction of the container, and every tile becomes four links
//! to either a container side or a guideline. The host's own solver turns the
//! result into pixels.

use serde::{Deserialize, Serialize};
use tiles_core::{FlipAxes, Orientation};

use crate::tree::{MutableTileGridLayoutTree, NodeId};

/// One side of a rectangle, also used as the origin a guideline is measured
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Leading side along `axis`.
    #[must_use]
    pub const fn start(axis: Orientation) -> Self {
        match axis {
            Orientation::Vertical => Self::Top,
            Orientation::Horizontal => Self::Left,
        }
    }

    /// Trailing side along `axis`.
    #[must_use]
    pub const fn end(axis: Orientation) -> Self {
        match axis {
            Orientation::Vertical => Self::Bottom,
            Orientation::Horizontal => Self::Right,
        }
    }
}

/// A line at a fixed fraction of the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guideline {
    /// Named after the divider handle it mirrors, e.g. `"root:1[line]"`.
    pub id: String,
    /// Axis the fraction is measured along.
    pub axis: Orientation,
    /// Container side the fraction is measured from.
    pub origin: Side,
    /// Distance from `origin`, rounded to two decimals.
    pub fraction: f32,
}

/// Target of one tile side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// A side of the container.
    Parent(Side),
    /// A guideline by id.
    Guideline(String),
}

/// A tile side linked to an anchor with a margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorLink {
    pub anchor: Anchor,
    pub margin: f32,
}

/// The four links of one tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafConstraints {
    pub index: usize,
    /// Structural key of the leaf.
    pub reference: String,
    pub top: AnchorLink,
    pub bottom: AnchorLink,
    pub left: AnchorLink,
    pub right: AnchorLink,
}

/// Guidelines plus per-tile links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorSet {
    pub guidelines: Vec<Guideline>,
    /// Ordered by leaf index.
    pub leaves: Vec<LeafConstraints>,
}

impl AnchorSet {
    #[must_use]
    pub fn guideline(&self, id: &str) -> Option<&Guideline> {
        self.guidelines.iter().find(|guideline| guideline.id == id)
    }

    #[must_use]
    pub fn leaf(&self, index: usize) -> Option<&LeafConstraints> {
        self.leaves.get(index)
    }
}

/// Rounded to two decimals, the precision guidelines are published with.
fn rounded(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone)]
struct Slot {
    anchor: Anchor,
    linked: bool,
    /// Distance from the container's leading side, in container fractions.
    at: f32,
}

#[derive(Debug, Clone)]
struct AnchorFrame {
    top: Slot,
    bottom: Slot,
    left: Slot,
    right: Slot,
}

impl AnchorFrame {
    fn container() -> Self {
        let slot = |side: Side, at: f32| Slot {
            anchor: Anchor::Parent(side),
            linked: false,
            at,
        };
        Self {
            top: slot(Side::Top, 0.0),
            bottom: slot(Side::Bottom, 1.0),
            left: slot(Side::Left, 0.0),
            right: slot(Side::Right, 1.0),
        }
    }

    fn start(&self, axis: Orientation) -> &Slot {
        match axis {
            Orientation::Vertical => &self.top,
            Orientation::Horizontal => &self.left,
        }
    }

    fn end(&self, axis: Orientation) -> &Slot {
        match axis {
            Orientation::Vertical => &self.bottom,
            Orientation::Horizontal => &self.right,
        }
    }

    fn with_axis(&self, axis: Orientation, start: Slot, end: Slot) -> Self {
        let mut next = self.clone();
        match axis {
            Orientation::Vertical => {
                next.top = start;
                next.bottom = end;
            }
            Orientation::Horizontal => {
                next.left = start;
                next.right = end;
            }
        }
        next
    }
}

struct AnchorWalk<'t> {
    tree: &'t MutableTileGridLayoutTree,
    flips: FlipAxes,
    margin: f32,
    out: AnchorSet,
}

impl AnchorWalk<'_> {
    fn node(&mut self, id: NodeId, frame: &AnchorFrame) {
        let tree = self.tree;
        let Some(node) = tree.node(id) else {
            return;
        };
        if let Some(index) = node.leaf_index() {
            self.leaf(index, node.key(), frame);
            return;
        }

        let axis = node.orientation();
        let flipped = node.is_flipped(axis, self.flips);
        let outer_start = frame.start(axis).clone();
        let outer_end = frame.end(axis).clone();
        let length = outer_end.at - outer_start.at;
        let children = node.children();

        // Guidelines between consecutive children, in stacking order.
        let mut dividers = Vec::with_capacity(children.len().saturating_sub(1));
        for &next in children.iter().skip(1) {
            let Some(next_node) = tree.node(next) else {
                continue;
            };
            let offset = tree.leading_offset(next);
            let id = next_node
                .line_reference()
                .unwrap_or_else(|| format!("{}[line]", next_node.key()));
            let (origin, at, fraction) = if flipped {
                let at = outer_end.at - offset * length;
                (Side::end(axis), at, 1.0 - at)
            } else {
                let at = outer_start.at + offset * length;
                (Side::start(axis), at, at)
            };
            self.out.guidelines.push(Guideline {
                id: id.clone(),
                axis,
                origin,
                fraction: rounded(fraction),
            });
            dividers.push(Slot {
                anchor: Anchor::Guideline(id),
                linked: true,
                at,
            });
        }

        for (i, &child) in children.iter().enumerate() {
            let before = if i == 0 {
                None
            } else {
                dividers.get(i - 1).cloned()
            };
            let after = dividers.get(i).cloned();
            let (start, end) = if flipped {
                (
                    after.unwrap_or_else(|| outer_start.clone()),
                    before.unwrap_or_else(|| outer_end.clone()),
                )
            } else {
                (
                    before.unwrap_or_else(|| outer_start.clone()),
                    after.unwrap_or_else(|| outer_end.clone()),
                )
            };
            let child_frame = frame.with_axis(axis, start, end);
            self.node(child, &child_frame);
        }
    }

    fn leaf(&mut self, index: usize, key: &str, frame: &AnchorFrame) {
        let link = |slot: &Slot| AnchorLink {
            anchor: slot.anchor.clone(),
            margin: if slot.linked { self.margin } else { 0.0 },
        };
        let constraints = LeafConstraints {
            index,
            reference: key.to_owned(),
            top: link(&frame.top),
            bottom: link(&frame.bottom),
            left: link(&frame.left),
            right: link(&frame.right),
        };
        self.out.leaves.push(constraints);
    }
}

impl MutableTileGridLayoutTree {
    /// Derive guidelines and per-tile links.
    ///
    /// Linked sides carry a margin of `spacing / 2`; mirrored chains measure
    /// their guidelines from the opposite side.
    #[must_use]
    pub fn to_anchor_set(&self, flips: FlipAxes, spacing: f32) -> AnchorSet {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "tile_anchors",
            layout = %self.layout(),
            spacing
        )
        .entered();

        self.anchors(flips, spacing / 2.0)
    }

    /// Static preview variant: no mirroring and no margins.
    #[must_use]
    pub fn to_preview_anchor_set(&self) -> AnchorSet {
        self.anchors(FlipAxes::NONE, 0.0)
    }

    fn anchors(&self, flips: FlipAxes, margin: f32) -> AnchorSet {
        let mut walk = AnchorWalk {
            tree: self,
            flips,
            margin,
            out: AnchorSet::default(),
        };
        walk.node(self.root(), &AnchorFrame::container());
        let mut out = walk.out;
        out.leaves.sort_by_key(|leaf| leaf.index);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridFive, GridFour, GridThree, layout_tree};

    #[test]
    fn grid_three_one_guidelines() {
        let tree = layout_tree(GridThree::One.into(), None).expect("builds");
        let set = tree.to_anchor_set(FlipAxes::NONE, 8.0);
        assert_eq!(set.guidelines.len(), 2);
        let first = set.guideline("root:1[line]").expect("guideline");
        assert_eq!(first.origin, Side::Top);
        assert_eq!(first.axis, Orientation::Vertical);
        assert_eq!(first.fraction, 0.33);
        let second = set.guideline("root:2[line]").expect("guideline");
        assert_eq!(second.fraction, 0.67);
    }

    #[test]
    fn leaves_link_to_parent_or_guideline() {
        let tree = layout_tree(GridThree::One.into(), None).expect("builds");
        let set = tree.to_anchor_set(FlipAxes::NONE, 8.0);
        let middle = set.leaf(1).expect("leaf");
        assert_eq!(middle.reference, "root:1");
        assert_eq!(
            middle.top,
            AnchorLink {
                anchor: Anchor::Guideline("root:1[line]".into()),
                margin: 4.0
            }
        );
        assert_eq!(
            middle.bottom,
            AnchorLink {
                anchor: Anchor::Guideline("root:2[line]".into()),
                margin: 4.0
            }
        );
        assert_eq!(
            middle.left,
            AnchorLink {
                anchor: Anchor::Parent(Side::Left),
                margin: 0.0
            }
        );

        let top = set.leaf(0).expect("leaf");
        assert_eq!(top.top.anchor, Anchor::Parent(Side::Top));
        assert_eq!(top.top.margin, 0.0);
    }

    #[test]
    fn nested_guidelines_use_container_fractions() {
        let tree = layout_tree(GridThree::Four.into(), None).expect("builds");
        let set = tree.to_anchor_set(FlipAxes::NONE, 0.0);
        let column = set.guideline("root:1:1[line]").expect("guideline");
        assert_eq!(column.axis, Orientation::Horizontal);
        assert_eq!(column.origin, Side::Left);
        assert_eq!(column.fraction, 0.5);

        let tree = layout_tree(GridFive::Three.into(), None).expect("builds");
        let set = tree.to_anchor_set(FlipAxes::NONE, 0.0);
        // Chain at 0.8 holds four columns at quarter steps.
        let row = set.guideline("root:1[line]").expect("guideline");
        assert_eq!(row.fraction, 0.8);
        let column = set.guideline("root:1:1[line]").expect("guideline");
        assert_eq!(column.fraction, 0.25);
    }

    #[test]
    fn flipped_chain_measures_from_far_side() {
        let tree = layout_tree(GridFour::Three.into(), None).expect("builds");
        let set = tree.to_anchor_set(FlipAxes::VERTICAL, 0.0);
        let first = set.guideline("root:1[line]").expect("guideline");
        assert_eq!(first.origin, Side::Bottom);
        assert_eq!(first.fraction, 0.25);

        // First declared leaf sits at the bottom.
        let leaf = set.leaf(0).expect("leaf");
        assert_eq!(leaf.bottom.anchor, Anchor::Parent(Side::Bottom));
        assert_eq!(leaf.top.anchor, Anchor::Guideline("root:1[line]".into()));
    }

    #[test]
    fn preview_ignores_flips_and_margins() {
        let tree = layout_tree(GridFour::Three.into(), None).expect("builds");
        let preview = tree.to_preview_anchor_set();
        assert!(preview.guidelines.iter().all(|g| matches!(g.origin, Side::Top | Side::Left)));
        assert!(preview.leaves.iter().all(|leaf| {
            [&leaf.top, &leaf.bottom, &leaf.left, &leaf.right]
                .iter()
                .all(|link| link.margin == 0.0)
        }));
        assert_eq!(preview, tree.to_anchor_set(FlipAxes::NONE, 0.0));
    }

    #[test]
    fn one_link_set_per_leaf() {
        for layout in crate::TileGridLayout::ALL {
            let tree = layout_tree(layout, None).expect("builds");
            let set = tree.to_anchor_set(FlipAxes::all(), 4.0);
            assert_eq!(set.leaves.len(), layout.tile_count(), "{layout}");
            for (i, leaf) in set.leaves.iter().enumerate() {
                assert_eq!(leaf.index, i);
            }
            let dividers = tree.nodes().filter(|(_, node)| node.has_line()).count();
            assert_eq!(set.guidelines.len(), dividers, "{layout}");
        }
    }
}
