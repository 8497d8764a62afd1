//! Configuration surface for the transform engine.
//!
//! Everything here is read-only for the duration of a gesture or animation;
//! hosts swap configurations between interactions, not during them.

use crate::animation::easing::EasingType;
use crate::core::geom::Point;
use crate::{PanZoomError, Result};
use std::time::Duration;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Smallest scale reachable through gestures.
    pub min_scale: f64,
    /// Largest scale reachable through gestures.
    pub max_scale: f64,
    /// Scale the view starts (and resets) at.
    pub initial_scale: f64,
    /// Position the view starts (and resets) at.
    pub initial_position: Point,
    /// Hard-limit panning to the computed bounds.
    pub limit_to_bounds: bool,
    /// Give zoomed-out content the full slack range instead of pinning it
    /// centered.
    pub center_zoomed_out: bool,
    /// Ignore the alignment sizes when deriving pan padding.
    pub disable_padding: bool,
    /// Elastic overscroll constant for live gestures; 0 keeps the hard clamp.
    pub rubber_band_constant: f64,
    /// Refuse new pan gestures while an animation is running.
    pub lock_interactions_during_animation: bool,
    pub panning: PanningConfig,
    pub alignment_animation: AlignmentAnimationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 8.0,
            initial_scale: 1.0,
            initial_position: Point::default(),
            limit_to_bounds: true,
            center_zoomed_out: false,
            disable_padding: false,
            rubber_band_constant: 0.0,
            lock_interactions_during_animation: false,
            panning: PanningConfig::default(),
            alignment_animation: AlignmentAnimationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Validates the scale limits and gesture tuning values.
    ///
    /// This is the only fallible surface of the engine; every runtime
    /// interaction degrades silently instead.
    pub fn validate(&self) -> Result<()> {
        if !self.min_scale.is_finite() || !self.max_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(PanZoomError::InvalidConfig(
                "scale limits must be positive and finite".into(),
            ));
        }
        if self.min_scale > self.max_scale {
            return Err(PanZoomError::InvalidConfig(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if !self.initial_scale.is_finite() || self.initial_scale <= 0.0 {
            return Err(PanZoomError::InvalidConfig(
                "initial_scale must be positive and finite".into(),
            ));
        }
        if !self.rubber_band_constant.is_finite() || self.rubber_band_constant < 0.0 {
            return Err(PanZoomError::InvalidConfig(
                "rubber_band_constant must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Pan gesture behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanningConfig {
    /// Disable pan gestures entirely.
    pub disabled: bool,
    /// Never hand a release off to inertial panning.
    pub velocity_disabled: bool,
    /// Freeze the horizontal axis during panning.
    pub lock_axis_x: bool,
    /// Freeze the vertical axis during panning.
    pub lock_axis_y: bool,
}

/// Snap-back-to-bounds animation, run after a gesture ends out of range.
///
/// The sizes double as the pan padding: they are how far a live gesture may
/// travel past the bounds before the alignment animation pulls it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentAnimationConfig {
    pub disabled: bool,
    pub size_x: f64,
    pub size_y: f64,
    pub animation_time: Duration,
    pub animation_type: EasingType,
    /// Recompute a fresh clamp target when a pan ends without a fling.
    /// When false the pan-end path trusts the clamping already applied
    /// during the gesture and leaves the position alone.
    pub recompute_on_align: bool,
}

impl Default for AlignmentAnimationConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            size_x: 100.0,
            size_y: 100.0,
            animation_time: Duration::from_millis(200),
            animation_type: EasingType::EaseOut,
            recompute_on_align: true,
        }
    }
}
