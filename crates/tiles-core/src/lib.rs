#![forbid(unsafe_code)]

//! Core: geometry primitives and gesture events for tile grids.
//!
//! # Role in the workspace
//! `tiles-core` is the vocabulary layer. It owns the floating point geometry
//! types every other crate measures with, the axis flip flags, and the
//! classified gesture events a host feeds into an editor.
//!
//! # How it fits in the system
//! `tiles-layout` builds layout trees and derives rectangles in these types;
//! `tiles-editor` consumes [`TileGridGesture`] values and drives the tree and
//! the content order.

pub mod flip;
pub mod geometry;
pub mod gesture;

pub use flip::FlipAxes;
pub use geometry::{Orientation, Point, Rect, Size};
pub use gesture::TileGridGesture;
