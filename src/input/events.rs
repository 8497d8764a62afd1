use crate::core::geom::Point;
use serde::{Deserialize, Serialize};

/// Pointer input driving a pan gesture.
///
/// Gesture recognition proper (pinch scale deltas, wheel zoom) happens
/// upstream; the engine only consumes the pointer lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    /// Mouse/pen press with a client position
    Mouse {
        position: Point,
        button: MouseButton,
    },
    /// Touch contact set; single-finger sets drive panning
    Touch { touches: Vec<TouchPoint> },
}

/// Individual touch point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl PointerInput {
    /// Gets the position a pan gesture would anchor on, if any.
    ///
    /// Touch input anchors on the first touch; empty touch sets anchor
    /// nothing.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerInput::Mouse { position, .. } => Some(*position),
            PointerInput::Touch { touches } => touches.first().map(|t| t.position),
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, PointerInput::Touch { .. })
    }
}
