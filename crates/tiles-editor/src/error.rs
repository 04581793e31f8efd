//! Error types for the content order and grid style.

use std::fmt;

/// The content order does not fit the layout it is paired with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// One configuration per tile is required.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "layout has {expected} tiles but the order holds {actual} configurations"
            ),
        }
    }
}

impl std::error::Error for OrderError {}

/// Invalid grid style values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleError {
    NegativePadding { value: f32 },
    NegativeSpacing { value: f32 },
    InvalidAspectRatio { value: f32 },
    NegativeTouchSize { value: f32 },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativePadding { value } => {
                write!(f, "padding must be finite and non-negative, got {value}")
            }
            Self::NegativeSpacing { value } => {
                write!(f, "spacing must be finite and non-negative, got {value}")
            }
            Self::InvalidAspectRatio { value } => {
                write!(f, "aspect ratio must be finite and positive, got {value}")
            }
            Self::NegativeTouchSize { value } => {
                write!(f, "line touch size must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for StyleError {}

/// Reasons an editor could not be assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    Order(OrderError),
    Style(StyleError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order(err) => write!(f, "content order: {err}"),
            Self::Style(err) => write!(f, "grid style: {err}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Order(err) => Some(err),
            Self::Style(err) => Some(err),
        }
    }
}

impl From<OrderError> for EditorError {
    fn from(err: OrderError) -> Self {
        Self::Order(err)
    }
}

impl From<StyleError> for EditorError {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}
