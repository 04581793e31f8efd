#![forbid(unsafe_code)]

//! Gesture events delivered to a tile grid.
//!
//! Raw pointer decoding is the host's job. By the time an event reaches the
//! grid it has already been classified and carries its payload in pixels.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A high-level gesture aimed at one part of a tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileGridGesture {
    /// A divider line was dragged by `delta` pixels.
    DividerDrag { delta: Point },
    /// Content inside a tile was panned by `delta` pixels.
    Pan { delta: Point },
    /// A long press began at `offset`, local to the pressed tile.
    LongPressStart { offset: Point },
    /// The pointer moved by `delta` pixels while long-pressing.
    LongPressMove { delta: Point },
    /// The long press was released.
    LongPressEnd,
    /// The long press was interrupted.
    LongPressCancel,
    /// Pinch zoom by a multiplicative `factor`.
    Zoom { factor: f32 },
}

impl TileGridGesture {
    /// Whether the gesture belongs to a long-press drag sequence.
    #[must_use]
    pub const fn is_long_press(&self) -> bool {
        matches!(
            self,
            Self::LongPressStart { .. }
                | Self::LongPressMove { .. }
                | Self::LongPressEnd
                | Self::LongPressCancel
        )
    }
}
