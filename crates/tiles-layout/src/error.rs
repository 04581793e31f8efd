//! Error types for tree construction and layout parsing.

use std::fmt;

/// Reasons a layout tree could not be built or restored.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeBuildError {
    /// A chain (or the root) was declared without children.
    EmptyChain { key: String },
    /// Override positions did not supply exactly one value per node.
    PositionCountMismatch { expected: usize, actual: usize },
    /// An override position was non-finite or outside `[0, 1]`.
    InvalidPosition { slot: usize, value: f32 },
    /// A child does not start strictly after its previous sibling and before
    /// the end of its chain.
    UnorderedPositions { key: String },
    /// A snapshot was written by an unknown schema.
    UnsupportedSchemaVersion { version: u16 },
}

impl fmt::Display for TreeBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChain { key } => write!(f, "chain {key} has no children"),
            Self::PositionCountMismatch { expected, actual } => write!(
                f,
                "expected {expected} override positions, got {actual}"
            ),
            Self::InvalidPosition { slot, value } => {
                write!(f, "override position {value} at slot {slot} is outside [0, 1]")
            }
            Self::UnorderedPositions { key } => write!(
                f,
                "position of {key} must lie after its previous sibling and before 1"
            ),
            Self::UnsupportedSchemaVersion { version } => write!(
                f,
                "unsupported tile grid schema version {version} (expected {})",
                crate::TILE_GRID_SNAPSHOT_SCHEMA_VERSION
            ),
        }
    }
}

impl std::error::Error for TreeBuildError {}

/// Failure to parse a `"GridThree.One"` style layout name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutParseError {
    /// The text has no `.` separating family and variant.
    MissingSeparator { input: String },
    /// The family (tile count) part is not known.
    UnknownFamily { family: String },
    /// The family exists but has no such variant.
    UnknownVariant { family: String, variant: String },
}

impl fmt::Display for LayoutParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { input } => {
                write!(f, "layout name {input:?} is not of the form Family.Variant")
            }
            Self::UnknownFamily { family } => write!(f, "unknown layout family {family:?}"),
            Self::UnknownVariant { family, variant } => {
                write!(f, "layout family {family} has no variant {variant:?}")
            }
        }
    }
}

impl std::error::Error for LayoutParseError {}
