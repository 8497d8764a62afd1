use crate::animation::easing::EasingType;
use crate::animation::scheduler::{self, AnimationState};
use crate::core::bounds::{self, bound_limiter, Bounds};
use crate::core::config::EngineConfig;
use crate::core::geom::Point;
use crate::input::events::PointerInput;
use crate::input::panning;
use crate::prelude::{Duration, Instant};
use crate::traits::MeasurementProvider;
use serde::{Deserialize, Serialize};

/// The published view transform: scale plus wrapper-space translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub scale: f64,
    pub position_x: f64,
    pub position_y: f64,
}

impl TransformState {
    pub fn new(scale: f64, position_x: f64, position_y: f64) -> Self {
        Self {
            scale,
            position_x,
            position_y,
        }
    }

    /// All three components finite; invalid states are never published.
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.position_x.is_finite() && self.position_y.is_finite()
    }

    pub fn position(&self) -> Point {
        Point::new(self.position_x, self.position_y)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// Transient per-gesture pointer state, created on pointer-down and cleared
/// on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    /// Pointer position at gesture start, content-relative (client position
    /// minus the transform position at the time).
    pub start_coords: Point,
    /// Last observed client position.
    pub client_coords: Option<Point>,
    /// Last position sampled by the velocity tracker.
    pub last_position: Option<Point>,
}

/// Instantaneous fling estimate from the last two pointer samples, in px/ms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub total: f64,
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            total: (x * x + y * y).sqrt(),
        }
    }
}

/// The shared view-model every engine component reads and mutates: current
/// transform, gesture state, bounds, the animation slot, and configuration.
///
/// Owned by the hosting UI element for its lifetime. All access is
/// single-threaded and synchronous; multi-threaded hosts must serialize
/// access (single-owner task or mutex) themselves.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub(crate) config: EngineConfig,
    pub(crate) transform_state: TransformState,
    pub(crate) bounds: Bounds,
    pub(crate) explicit_bounds: Option<Bounds>,
    pub(crate) pointer: Option<PointerSession>,
    pub(crate) is_panning: bool,
    pub(crate) velocity: Option<Velocity>,
    pub(crate) animation: AnimationState,
    pub(crate) animation_request_id: u64,
    pub(crate) animate: bool,
    pub(crate) wrapper_size: Point,
    pub(crate) content_size: Point,
    pub(crate) mounted: bool,
}

impl ViewContext {
    /// Creates an unmounted context; the initial scale is clamped into the
    /// configured range rather than rejected.
    pub fn new(config: EngineConfig) -> Self {
        // max/min instead of clamp: a misconfigured (unvalidated) range must
        // not panic here.
        let scale = config.initial_scale.max(config.min_scale).min(config.max_scale);
        let transform_state =
            TransformState::new(scale, config.initial_position.x, config.initial_position.y);
        Self {
            config,
            transform_state,
            bounds: Bounds::zero(),
            explicit_bounds: None,
            pointer: None,
            is_panning: false,
            velocity: None,
            animation: AnimationState::Idle,
            animation_request_id: 0,
            animate: false,
            wrapper_size: Point::default(),
            content_size: Point::default(),
            mounted: false,
        }
    }

    // --- lifecycle ---------------------------------------------------------

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Unmounts the context, dropping any in-flight gesture or animation.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pointer = None;
        self.is_panning = false;
        self.velocity = None;
        self.animation = AnimationState::Idle;
        self.animate = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Both elements have been measured; until then bounds stay degenerate.
    pub fn is_ready(&self) -> bool {
        self.wrapper_size.x > 0.0
            && self.wrapper_size.y > 0.0
            && self.content_size.x > 0.0
            && self.content_size.y > 0.0
    }

    // --- measurements ------------------------------------------------------

    pub fn set_wrapper_size(&mut self, size: Point) {
        self.wrapper_size = size;
    }

    pub fn set_content_size(&mut self, size: Point) {
        self.content_size = size;
    }

    /// Pulls both element sizes from a measurement provider.
    pub fn refresh_measurements(&mut self, provider: &impl MeasurementProvider) {
        self.wrapper_size = provider.wrapper_size();
        self.content_size = provider.content_size();
    }

    // --- state access ------------------------------------------------------

    pub fn transform_state(&self) -> TransformState {
        self.transform_state
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn velocity(&self) -> Option<Velocity> {
        self.velocity
    }

    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    pub fn has_animation(&self) -> bool {
        self.animation.is_running()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The single write path for publishing a new transform.
    ///
    /// Non-finite targets are dropped silently; the previous state stays
    /// published and the next gesture or explicit call recovers.
    pub fn set_transform_state(&mut self, scale: f64, position_x: f64, position_y: f64) {
        let next = TransformState::new(scale, position_x, position_y);
        if !next.is_valid() {
            log::warn!("dropping non-finite transform {next:?}");
            return;
        }
        self.transform_state = next;
    }

    // --- bounds ------------------------------------------------------------

    /// Overrides the content-size-derived bounds with a content-space
    /// rectangle; `None` reverts to measuring the content.
    pub fn set_explicit_bounds(&mut self, bounds: Option<Bounds>) {
        self.explicit_bounds = bounds;
    }

    pub fn explicit_bounds(&self) -> Option<Bounds> {
        self.explicit_bounds
    }

    /// Recomputes and stores the pan range for `scale`.
    ///
    /// Bounds are never cached across scale changes; every zoom change and
    /// every gesture start lands here.
    pub(crate) fn recompute_bounds(&mut self, scale: f64) -> Bounds {
        self.bounds = bounds::calculate_bounds(
            self.wrapper_size,
            self.content_size,
            self.explicit_bounds.as_ref(),
            scale,
            self.config.center_zoomed_out,
        );
        self.bounds
    }

    /// Scaled content exceeds the wrapper on at least one axis.
    pub(crate) fn is_zoomed_beyond_wrapper(&self) -> bool {
        let scale = self.transform_state.scale;
        self.wrapper_size.x < self.content_size.x * scale
            || self.wrapper_size.y < self.content_size.y * scale
    }

    // --- gestures ----------------------------------------------------------

    /// Feeds a pointer-down event into the panning state machine.
    pub fn pointer_down(&mut self, event: &PointerInput) {
        panning::handle_panning_start(self, event);
    }

    /// Feeds a pointer-move; a no-op without an active gesture.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        panning::handle_panning(self, client_x, client_y);
    }

    /// Ends the gesture. Returns true when frames are needed (a fling or an
    /// alignment animation started).
    pub fn pointer_up(&mut self) -> bool {
        panning::handle_panning_end(self)
    }

    // --- animations --------------------------------------------------------

    /// Advances the active animation; invoked by the host roughly once per
    /// display refresh. Returns true while more frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        scheduler::tick(self, now)
    }

    /// Eased transition to `target`; a zero duration assigns it instantly.
    /// Returns true when a frame loop is required.
    pub fn animate_to(&mut self, target: TransformState, duration: Duration, easing: EasingType) -> bool {
        scheduler::animate(self, target, duration, easing)
    }

    /// Cancels whatever is in flight; idempotent.
    pub fn cancel_animations(&mut self) {
        scheduler::cancel_all_animations(self);
    }

    /// Animates the nearest in-bounds state, honoring the alignment config.
    pub fn align_to_bounds(&mut self, custom_time: Option<Duration>) -> bool {
        panning::handle_align_to_bounds(self, custom_time)
    }

    /// Zooms toward `point` (wrapper coordinates), keeping the content under
    /// it stationary. The requested scale is clamped into the configured
    /// range; out-of-range scales stay reachable through [`Self::animate_to`].
    pub fn zoom_to_point(
        &mut self,
        new_scale: f64,
        point: Point,
        duration: Duration,
        easing: EasingType,
    ) -> bool {
        if !self.mounted || !new_scale.is_finite() {
            return false;
        }
        let current = self.transform_state;
        let scale = new_scale.max(self.config.min_scale).min(self.config.max_scale);
        if current.scale <= 0.0 {
            return false;
        }

        let ratio = scale / current.scale;
        let position_x = point.x - (point.x - current.position_x) * ratio;
        let position_y = point.y - (point.y - current.position_y) * ratio;

        let bounds = self.recompute_bounds(scale);
        let limit = self.config.limit_to_bounds || self.config.center_zoomed_out;
        let target = TransformState::new(
            scale,
            bound_limiter(position_x, bounds.min_position_x, bounds.max_position_x, limit),
            bound_limiter(position_y, bounds.min_position_y, bounds.max_position_y, limit),
        );
        scheduler::animate(self, target, duration, easing)
    }

    /// Animates back to the configured initial scale and position.
    pub fn reset_transform(&mut self, duration: Duration, easing: EasingType) -> bool {
        let target = TransformState::new(
            self.config.initial_scale,
            self.config.initial_position.x,
            self.config.initial_position.y,
        );
        scheduler::animate(self, target, duration, easing)
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
