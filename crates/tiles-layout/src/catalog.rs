//! The fixed catalog of named split topologies.
//!
//! Every entry is a two-level name such as `GridFive.Three`: the family fixes
//! the tile count and the variant picks one arrangement. [`layout_tree`] is
//! the only way to turn a name into a tree; it dispatches to one short builder
//! declaration per entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tiles_core::{FlipAxes, Orientation};

use crate::builder::{ChainScope, TileGridLayoutTreeBuilder};
use crate::error::{LayoutParseError, TreeBuildError};
use crate::tree::MutableTileGridLayoutTree;

const THIRD: f32 = 1.0 / 3.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

macro_rules! grid_family {
    ($(#[$meta:meta])* $family:ident, $tiles:literal, [$($variant:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $family {
            $($variant),+
        }

        impl $family {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Number of tiles every variant of this family has.
            pub const TILE_COUNT: usize = $tiles;

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<$family> for TileGridLayout {
            fn from(variant: $family) -> Self {
                Self::$family(variant)
            }
        }
    };
}

grid_family!(
    /// Three-tile arrangements.
    GridThree, 3, [One, Two, Three, Four]
);
grid_family!(
    /// Four-tile arrangements.
    GridFour, 4, [One, Two, Three, Four, Five]
);
grid_family!(
    /// Five-tile arrangements.
    GridFive, 5, [One, Two, Three, Four, Five, Six, Seven]
);
grid_family!(
    /// Six-tile arrangements.
    GridSix, 6, [One, Two, Three, Four, Five, Six, Seven]
);
grid_family!(
    /// Seven-tile arrangements.
    GridSeven, 7, [One, Two, Three, Four, Five, Six, Seven, Eight]
);
grid_family!(
    /// Eight-tile arrangements.
    GridEight, 8, [One, Two, Three, Four, Five, Six]
);
grid_family!(
    /// Nine-tile arrangements.
    GridNine, 9, [One, Two, Three, Four, Five]
);

/// Name of one catalog topology.
///
/// Serialized as its display form, e.g. `"GridSix.Four"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileGridLayout {
    GridThree(GridThree),
    GridFour(GridFour),
    GridFive(GridFive),
    GridSix(GridSix),
    GridSeven(GridSeven),
    GridEight(GridEight),
    GridNine(GridNine),
}

impl TileGridLayout {
    /// The whole catalog, grouped by family.
    pub const ALL: [Self; 42] = [
        Self::GridThree(GridThree::One),
        Self::GridThree(GridThree::Two),
        Self::GridThree(GridThree::Three),
        Self::GridThree(GridThree::Four),
        Self::GridFour(GridFour::One),
        Self::GridFour(GridFour::Two),
        Self::GridFour(GridFour::Three),
        Self::GridFour(GridFour::Four),
        Self::GridFour(GridFour::Five),
        Self::GridFive(GridFive::One),
        Self::GridFive(GridFive::Two),
        Self::GridFive(GridFive::Three),
        Self::GridFive(GridFive::Four),
        Self::GridFive(GridFive::Five),
        Self::GridFive(GridFive::Six),
        Self::GridFive(GridFive::Seven),
        Self::GridSix(GridSix::One),
        Self::GridSix(GridSix::Two),
        Self::GridSix(GridSix::Three),
        Self::GridSix(GridSix::Four),
        Self::GridSix(GridSix::Five),
        Self::GridSix(GridSix::Six),
        Self::GridSix(GridSix::Seven),
        Self::GridSeven(GridSeven::One),
        Self::GridSeven(GridSeven::Two),
        Self::GridSeven(GridSeven::Three),
        Self::GridSeven(GridSeven::Four),
        Self::GridSeven(GridSeven::Five),
        Self::GridSeven(GridSeven::Six),
        Self::GridSeven(GridSeven::Seven),
        Self::GridSeven(GridSeven::Eight),
        Self::GridEight(GridEight::One),
        Self::GridEight(GridEight::Two),
        Self::GridEight(GridEight::Three),
        Self::GridEight(GridEight::Four),
        Self::GridEight(GridEight::Five),
        Self::GridEight(GridEight::Six),
        Self::GridNine(GridNine::One),
        Self::GridNine(GridNine::Two),
        Self::GridNine(GridNine::Three),
        Self::GridNine(GridNine::Four),
        Self::GridNine(GridNine::Five),
    ];

    /// Family part of the name, e.g. `"GridSix"`.
    #[must_use]
    pub const fn family(self) -> &'static str {
        match self {
            Self::GridThree(_) => "GridThree",
            Self::GridFour(_) => "GridFour",
            Self::GridFive(_) => "GridFive",
            Self::GridSix(_) => "GridSix",
            Self::GridSeven(_) => "GridSeven",
            Self::GridEight(_) => "GridEight",
            Self::GridNine(_) => "GridNine",
        }
    }

    /// Variant part of the name, e.g. `"Four"`.
    #[must_use]
    pub const fn variant(self) -> &'static str {
        match self {
            Self::GridThree(v) => v.name(),
            Self::GridFour(v) => v.name(),
            Self::GridFive(v) => v.name(),
            Self::GridSix(v) => v.name(),
            Self::GridSeven(v) => v.name(),
            Self::GridEight(v) => v.name(),
            Self::GridNine(v) => v.name(),
        }
    }

    /// Number of tiles in this topology.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        match self {
            Self::GridThree(_) => GridThree::TILE_COUNT,
            Self::GridFour(_) => GridFour::TILE_COUNT,
            Self::GridFive(_) => GridFive::TILE_COUNT,
            Self::GridSix(_) => GridSix::TILE_COUNT,
            Self::GridSeven(_) => GridSeven::TILE_COUNT,
            Self::GridEight(_) => GridEight::TILE_COUNT,
            Self::GridNine(_) => GridNine::TILE_COUNT,
        }
    }

    /// Catalog entries with `tiles` tiles.
    pub fn with_tile_count(tiles: usize) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |layout| layout.tile_count() == tiles)
    }

    /// Build this topology, see [`layout_tree`].
    pub fn tree(
        self,
        positions: Option<&[f32]>,
    ) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
        layout_tree(self, positions)
    }
}

impl fmt::Display for TileGridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.family(), self.variant())
    }
}

impl FromStr for TileGridLayout {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((family, variant)) = s.split_once('.') else {
            return Err(LayoutParseError::MissingSeparator {
                input: s.to_owned(),
            });
        };
        let parsed = match family {
            "GridThree" => GridThree::from_name(variant).map(Self::GridThree),
            "GridFour" => GridFour::from_name(variant).map(Self::GridFour),
            "GridFive" => GridFive::from_name(variant).map(Self::GridFive),
            "GridSix" => GridSix::from_name(variant).map(Self::GridSix),
            "GridSeven" => GridSeven::from_name(variant).map(Self::GridSeven),
            "GridEight" => GridEight::from_name(variant).map(Self::GridEight),
            "GridNine" => GridNine::from_name(variant).map(Self::GridNine),
            _ => {
                return Err(LayoutParseError::UnknownFamily {
                    family: family.to_owned(),
                });
            }
        };
        parsed.ok_or_else(|| LayoutParseError::UnknownVariant {
            family: family.to_owned(),
            variant: variant.to_owned(),
        })
    }
}

impl Serialize for TileGridLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileGridLayout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Build the tree for `layout`, optionally restoring saved positions.
///
/// `positions` must be a list previously produced by
/// [`MutableTileGridLayoutTree::to_list`] for the same layout.
pub fn layout_tree(
    layout: TileGridLayout,
    positions: Option<&[f32]>,
) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match layout {
        TileGridLayout::GridThree(v) => grid_three(v, positions),
        TileGridLayout::GridFour(v) => grid_four(v, positions),
        TileGridLayout::GridFive(v) => grid_five(v, positions),
        TileGridLayout::GridSix(v) => grid_six(v, positions),
        TileGridLayout::GridSeven(v) => grid_seven(v, positions),
        TileGridLayout::GridEight(v) => grid_eight(v, positions),
        TileGridLayout::GridNine(v) => grid_nine(v, positions),
    }
}

fn tree<F>(
    layout: impl Into<TileGridLayout>,
    orientation: Orientation,
    flips: FlipAxes,
    positions: Option<&[f32]>,
    declare: F,
) -> Result<MutableTileGridLayoutTree, TreeBuildError>
where
    F: FnOnce(&mut ChainScope<'_>),
{
    TileGridLayoutTreeBuilder::new(layout.into(), orientation)
        .flips(flips)
        .positions(positions)
        .build(declare)
}

/// `n` evenly spaced leaves.
fn even(scope: &mut ChainScope<'_>, n: usize) {
    for i in 0..n {
        scope.leaf(i as f32 / n as f32);
    }
}

use Orientation::{Horizontal as H, Vertical as V};

const NO_FLIP: FlipAxes = FlipAxes::NONE;
const FLIP_V: FlipAxes = FlipAxes::VERTICAL;
const FLIP_H: FlipAxes = FlipAxes::HORIZONTAL;
const FLIP_VH: FlipAxes = FlipAxes::all();

fn grid_three(
    v: GridThree,
    p: Option<&[f32]>,
) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match v {
        GridThree::One => tree(v, V, NO_FLIP, p, |s| even(s, 3)),
        GridThree::Two => tree(v, H, NO_FLIP, p, |s| even(s, 3)),
        GridThree::Three => tree(v, H, FLIP_H, p, |s| {
            s.leaf(0.0).chain(0.5, |c| even(c, 2));
        }),
        GridThree::Four => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0).chain(0.5, |c| even(c, 2));
        }),
    }
}

fn grid_four(v: GridFour, p: Option<&[f32]>) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match v {
        GridFour::One => tree(v, V, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 2)).chain(0.5, |c| even(c, 2));
        }),
        GridFour::Two => tree(v, V, NO_FLIP, p, |s| even(s, 4)),
        GridFour::Three => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0).leaf(0.25).chain(0.5, |c| even(c, 2));
        }),
        GridFour::Four => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0).chain(0.5, |c| even(c, 3));
        }),
        GridFour::Five => tree(v, H, FLIP_H, p, |s| {
            s.leaf(0.0).chain(0.5, |c| even(c, 3));
        }),
    }
}

fn grid_five(v: GridFive, p: Option<&[f32]>) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match v {
        GridFive::One => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0)
                .chain(THIRD, |c| even(c, 2))
                .chain(TWO_THIRDS, |c| even(c, 2));
        }),
        GridFive::Two => tree(v, V, NO_FLIP, p, |s| {
            s.leaf(0.0).chain(THIRD, |c| even(c, 3)).leaf(TWO_THIRDS);
        }),
        GridFive::Three => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0).chain(0.8, |c| even(c, 4));
        }),
        GridFive::Four => tree(v, H, FLIP_H, p, |s| {
            s.chain(0.0, |c| even(c, 2)).chain(0.5, |c| even(c, 3));
        }),
        GridFive::Five => tree(v, H, FLIP_H, p, |s| {
            s.leaf(0.0).chain(0.5, |c| even(c, 4));
        }),
        GridFive::Six => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 2)).chain(0.5, |c| even(c, 3));
        }),
        GridFive::Seven => tree(v, V, NO_FLIP, p, |s| even(s, 5)),
    }
}

fn grid_six(v: GridSix, p: Option<&[f32]>) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match v {
        GridSix::One => tree(v, V, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 2))
                .chain(THIRD, |c| even(c, 2))
                .chain(TWO_THIRDS, |c| even(c, 2));
        }),
        GridSix::Two => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0)
                .leaf(0.25)
                .chain(0.5, |c| even(c, 2))
                .chain(0.75, |c| even(c, 2));
        }),
        GridSix::Three => tree(v, H, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 2))
                .chain(THIRD, |c| even(c, 2))
                .chain(TWO_THIRDS, |c| even(c, 2));
        }),
        GridSix::Four => tree(v, V, FLIP_H, p, |s| {
            s.chain(0.0, |c| {
                c.leaf(0.0).chain(0.5, |cc| even(cc, 2));
            })
            .chain(0.5, |c| {
                c.leaf(0.0).chain(0.5, |cc| even(cc, 2));
            });
        }),
        GridSix::Five => tree(v, H, FLIP_H, p, |s| {
            s.leaf(0.0).chain(0.5, |c| even(c, 5));
        }),
        GridSix::Six => tree(v, V, FLIP_VH, p, |s| {
            s.chain(0.0, |c| even(c, 3)).chain(THIRD, |c| {
                c.leaf(0.0).chain(TWO_THIRDS, |cc| even(cc, 2));
            });
        }),
        GridSix::Seven => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 2))
                .leaf(THIRD)
                .chain(TWO_THIRDS, |c| even(c, 3));
        }),
    }
}

fn grid_seven(
    v: GridSeven,
    p: Option<&[f32]>,
) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match v {
        GridSeven::One => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0)
                .chain(0.25, |c| even(c, 2))
                .chain(0.5, |c| even(c, 2))
                .chain(0.75, |c| even(c, 2));
        }),
        GridSeven::Two => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0)
                .chain(0.5, |c| even(c, 3))
                .chain(0.75, |c| even(c, 3));
        }),
        GridSeven::Three => tree(v, H, FLIP_H, p, |s| {
            s.chain(0.0, |c| even(c, 3)).chain(0.5, |c| even(c, 4));
        }),
        GridSeven::Four => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 6)).leaf(0.2);
        }),
        GridSeven::Five => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 3))
                .chain(THIRD, |c| even(c, 2))
                .chain(TWO_THIRDS, |c| even(c, 2));
        }),
        GridSeven::Six => tree(v, H, FLIP_H, p, |s| {
            s.chain(0.0, |c| even(c, 5)).chain(0.5, |c| even(c, 2));
        }),
        GridSeven::Seven => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 2))
                .chain(0.25, |c| even(c, 4))
                .leaf(0.5);
        }),
        GridSeven::Eight => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 5)).leaf(0.2).leaf(0.6);
        }),
    }
}

fn grid_eight(
    v: GridEight,
    p: Option<&[f32]>,
) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match v {
        GridEight::One => tree(v, V, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 2))
                .chain(0.25, |c| even(c, 2))
                .chain(0.5, |c| even(c, 2))
                .chain(0.75, |c| even(c, 2));
        }),
        GridEight::Two => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 4))
                .leaf(0.25)
                .chain(0.75, |c| even(c, 3));
        }),
        GridEight::Three | GridEight::Five => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 4))
                .chain(0.2, |c| even(c, 2))
                .chain(0.6, |c| even(c, 2));
        }),
        GridEight::Four => tree(v, V, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 3))
                .chain(0.25, |c| even(c, 2))
                .chain(0.75, |c| even(c, 3));
        }),
        GridEight::Six => tree(v, H, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 2))
                .chain(0.25, |c| even(c, 2))
                .chain(0.5, |c| even(c, 2))
                .chain(0.75, |c| even(c, 2));
        }),
    }
}

fn grid_nine(v: GridNine, p: Option<&[f32]>) -> Result<MutableTileGridLayoutTree, TreeBuildError> {
    match v {
        GridNine::One => tree(v, V, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 3))
                .chain(THIRD, |c| even(c, 3))
                .chain(TWO_THIRDS, |c| even(c, 3));
        }),
        GridNine::Two => tree(v, H, NO_FLIP, p, |s| {
            s.chain(0.0, |c| even(c, 3))
                .chain(THIRD, |c| {
                    c.leaf(0.0).leaf(0.25).leaf(0.75);
                })
                .chain(TWO_THIRDS, |c| even(c, 3));
        }),
        GridNine::Three => tree(v, V, FLIP_V, p, |s| {
            s.leaf(0.0)
                .chain(0.5, |c| even(c, 4))
                .chain(0.75, |c| even(c, 4));
        }),
        GridNine::Four => tree(v, V, FLIP_V, p, |s| {
            s.chain(0.0, |c| even(c, 2))
                .chain(0.4, |c| even(c, 2))
                .chain(0.8, |c| even(c, 5));
        }),
        GridNine::Five => tree(v, V, FLIP_H, p, |s| {
            s.chain(0.0, |c| {
                c.chain(0.0, |cc| even(cc, 2)).leaf(THIRD);
            })
            .chain(THIRD, |c| {
                c.leaf(0.0).chain(TWO_THIRDS, |cc| even(cc, 2));
            })
            .chain(TWO_THIRDS, |c| {
                c.chain(0.0, |cc| even(cc, 2)).leaf(THIRD);
            });
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_forty_two_entries() {
        assert_eq!(TileGridLayout::ALL.len(), 42);
        let per_family: Vec<usize> = (3..=9)
            .map(|n| TileGridLayout::with_tile_count(n).count())
            .collect();
        assert_eq!(per_family, [4, 5, 7, 7, 8, 6, 5]);
    }

    #[test]
    fn display_and_parse() {
        let layout = TileGridLayout::GridSix(GridSix::Four);
        assert_eq!(layout.to_string(), "GridSix.Four");
        assert_eq!("GridSix.Four".parse::<TileGridLayout>(), Ok(layout));
        for layout in TileGridLayout::ALL {
            assert_eq!(layout.to_string().parse::<TileGridLayout>(), Ok(layout));
        }
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "GridSix".parse::<TileGridLayout>(),
            Err(LayoutParseError::MissingSeparator { .. })
        ));
        assert!(matches!(
            "GridTen.One".parse::<TileGridLayout>(),
            Err(LayoutParseError::UnknownFamily { .. })
        ));
        assert!(matches!(
            "GridThree.Five".parse::<TileGridLayout>(),
            Err(LayoutParseError::UnknownVariant { .. })
        ));
    }

    #[test]
    fn serde_uses_display_form() {
        let layout = TileGridLayout::GridNine(GridNine::Two);
        let json = serde_json::to_string(&layout).expect("serialize");
        assert_eq!(json, "\"GridNine.Two\"");
        let back: TileGridLayout = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, layout);
        assert!(serde_json::from_str::<TileGridLayout>("\"GridNine.Ten\"").is_err());
    }

    #[test]
    fn every_entry_builds_with_its_tile_count() {
        for layout in TileGridLayout::ALL {
            let tree = layout_tree(layout, None).expect("catalog entry builds");
            assert_eq!(tree.leaf_count(), layout.tile_count(), "{layout}");
            assert_eq!(tree.layout(), layout);
        }
    }

    #[test]
    fn grid_three_one_defaults() {
        let tree = layout_tree(GridThree::One.into(), None).expect("builds");
        assert_eq!(tree.to_list(), vec![0.0, THIRD, TWO_THIRDS]);
        let root = tree.node(tree.root()).expect("root");
        assert_eq!(root.orientation(), Orientation::Vertical);
        assert_eq!(root.flips(), FlipAxes::NONE);
    }

    #[test]
    fn flip_capabilities_follow_entry() {
        let tree = layout_tree(GridSix::Six.into(), None).expect("builds");
        assert_eq!(tree.node(tree.root()).expect("root").flips(), FlipAxes::all());
        let tree = layout_tree(GridFour::Five.into(), None).expect("builds");
        assert_eq!(
            tree.node(tree.root()).expect("root").flips(),
            FlipAxes::HORIZONTAL
        );
    }
}
