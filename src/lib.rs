//! # panzoom
//!
//! A bounded pan/zoom/pinch transform engine for interactive viewports.
//!
//! The engine maintains a 2D affine view transform (scale, position) over a
//! content element inside a fixed wrapper, with bounded panning, inertial
//! fling deceleration, rubber-band overscroll, and smooth programmatic
//! animations such as snap-to-bounds and zoom-to-point.
//!
//! Hosts own a [`ViewContext`] for the lifetime of the widget, feed pointer
//! events into it (`pointer_down` / `pointer_move` / `pointer_up`), and call
//! [`ViewContext::tick`] roughly once per display refresh while any entry
//! point reported that frames are needed. The latest transform is read back
//! with [`ViewContext::transform_state`] after every event or tick.
//!
//! Everything is single-threaded and cooperative: there is no internal
//! scheduling, no background work, and at most one animation in flight per
//! context at any time.

pub mod animation;
pub mod core;
pub mod input;
pub mod prelude;
pub mod traits;

pub use crate::core::constants;

// Re-export public API
pub use crate::animation::easing::EasingType;

pub use crate::core::{
    bounds::Bounds,
    config::{AlignmentAnimationConfig, EngineConfig, PanningConfig},
    context::{TransformState, Velocity, ViewContext},
    geom::Point,
};

pub use crate::input::events::{MouseButton, PointerInput, TouchPoint};

pub use crate::traits::MeasurementProvider;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, PanZoomError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum PanZoomError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
