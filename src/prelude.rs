//! Prelude module for common panzoom types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use panzoom::prelude::*;`

pub use crate::animation::easing::EasingType;
pub use crate::animation::scheduler::{AnimationKind, AnimationState};

pub use crate::core::{
    bounds::Bounds,
    config::{AlignmentAnimationConfig, EngineConfig, PanningConfig},
    constants,
    context::{PointerSession, TransformState, Velocity, ViewContext},
    geom::Point,
};

pub use crate::input::events::{MouseButton, PointerInput, TouchPoint};

pub use crate::traits::{Lerp, MeasurementProvider};

pub use crate::{PanZoomError, Result};

pub use instant::Instant;
pub use std::time::Duration;
