use crate::animation::easing::EasingType;
use crate::core::bounds::bound_limiter;
use crate::core::constants::{FRAME_INTERVAL_MS, VELOCITY_DECAY, VELOCITY_REST_THRESHOLD};
use crate::core::context::{TransformState, Velocity, ViewContext};
use crate::core::geom::Point;
use crate::input::panning;
use crate::prelude::{Duration, Instant};
use crate::traits::Lerp;

/// What a running animation is doing between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// Eased transition from the live state toward a fixed target.
    Easing {
        target: TransformState,
        duration: Duration,
        easing: EasingType,
    },
    /// Inertial panning driven by a decaying velocity vector.
    Velocity { velocity: Velocity },
}

/// The single-flight animation slot.
///
/// At most one animation runs per context. Each carries the request id it was
/// started under; a tick whose id no longer matches the context's live
/// counter is stale and must not mutate anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Running {
        id: u64,
        kind: AnimationKind,
        start_time: Instant,
    },
}

impl AnimationState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// Clears the animation slot, the velocity snapshot, and the animate flag
/// together; a no-op while unmounted, unmeasured, or already idle.
pub(crate) fn cancel_all_animations(ctx: &mut ViewContext) {
    if !ctx.mounted || !ctx.is_ready() {
        return;
    }
    if ctx.animation.is_running() || ctx.velocity.is_some() || ctx.animate {
        log::trace!("cancelling animation #{}", ctx.animation_request_id);
        ctx.animate = false;
        ctx.animation = AnimationState::Idle;
        ctx.velocity = None;
    }
}

/// Installs a new animation, superseding whatever was running.
pub(crate) fn start_animation(ctx: &mut ViewContext, kind: AnimationKind) {
    if !ctx.mounted {
        return;
    }
    cancel_all_animations(ctx);
    ctx.animation_request_id += 1;
    log::trace!("starting animation #{} {kind:?}", ctx.animation_request_id);
    ctx.animate = true;
    ctx.animation = AnimationState::Running {
        id: ctx.animation_request_id,
        kind,
        start_time: Instant::now(),
    };
}

/// Requests an eased transition to `target`.
///
/// Invalid (non-finite) targets and unmounted contexts are dropped silently.
/// A zero duration bypasses the scheduler: the request id is bumped so any
/// in-flight animation is superseded, and the target is assigned
/// synchronously without creating an animation handle. Returns true when a
/// frame loop is required.
pub(crate) fn animate(
    ctx: &mut ViewContext,
    target: TransformState,
    duration: Duration,
    easing: EasingType,
) -> bool {
    if !ctx.mounted || !target.is_valid() {
        log::debug!("animation request dropped: {target:?}");
        return false;
    }

    if duration.is_zero() {
        ctx.animation_request_id += 1;
        ctx.animation = AnimationState::Idle;
        ctx.animate = false;
        ctx.set_transform_state(target.scale, target.position_x, target.position_y);
        return false;
    }

    start_animation(
        ctx,
        AnimationKind::Easing {
            target,
            duration,
            easing,
        },
    );
    ctx.animation.is_running()
}

/// Advances the active animation by one frame.
///
/// Returns true while another frame is needed. Ticks are strictly
/// sequential; cancellation is cooperative and checked here, never
/// preemptive.
pub(crate) fn tick(ctx: &mut ViewContext, now: Instant) -> bool {
    let AnimationState::Running {
        id,
        kind,
        start_time,
    } = ctx.animation
    else {
        return false;
    };

    // A newer request superseded this animation between scheduling and
    // execution: exit without mutating the transform.
    if id != ctx.animation_request_id {
        log::trace!(
            "skipping stale frame from request #{id} (current is #{})",
            ctx.animation_request_id
        );
        ctx.animate = false;
        ctx.animation = AnimationState::Idle;
        return false;
    }

    match kind {
        AnimationKind::Easing {
            target,
            duration,
            easing,
        } => tick_easing(ctx, id, target, duration, easing, start_time, now),
        AnimationKind::Velocity { velocity } => tick_velocity(ctx, id, velocity, start_time),
    }
}

fn tick_easing(
    ctx: &mut ViewContext,
    id: u64,
    target: TransformState,
    duration: Duration,
    easing: EasingType,
    start_time: Instant,
    now: Instant,
) -> bool {
    let elapsed = now.duration_since(start_time);
    if elapsed >= duration {
        // Terminal frame: land exactly on the target, then release the slot
        // if nobody replaced this animation mid-frame.
        apply_easing_step(ctx, &target, 1.0);
        if let AnimationState::Running { id: current, .. } = ctx.animation {
            if current == id {
                ctx.animation = AnimationState::Idle;
                ctx.animate = false;
            }
        }
        log::trace!("animation #{id} complete");
        return false;
    }

    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    apply_easing_step(ctx, &target, easing.apply(progress));
    true
}

/// Interpolates from the live state toward the target by the eased step.
fn apply_easing_step(ctx: &mut ViewContext, target: &TransformState, step: f64) {
    let current = ctx.transform_state;
    ctx.set_transform_state(
        current.scale.lerp(&target.scale, step),
        current.position_x.lerp(&target.position_x, step),
        current.position_y.lerp(&target.position_y, step),
    );
}

fn tick_velocity(ctx: &mut ViewContext, id: u64, velocity: Velocity, start_time: Instant) -> bool {
    let current = ctx.transform_state;
    let bounds = ctx.bounds;
    let limit = ctx.config.limit_to_bounds;

    let delta = Point::new(velocity.x, velocity.y).multiply(FRAME_INTERVAL_MS);
    let proposed_x = current.position_x + delta.x;
    let proposed_y = current.position_y + delta.y;

    ctx.set_transform_state(
        current.scale,
        bound_limiter(proposed_x, bounds.min_position_x, bounds.max_position_x, limit),
        bound_limiter(proposed_y, bounds.min_position_y, bounds.max_position_y, limit),
    );

    let hit_bound = limit
        && (proposed_x < bounds.min_position_x
            || proposed_x > bounds.max_position_x
            || proposed_y < bounds.min_position_y
            || proposed_y > bounds.max_position_y);

    let decayed = Velocity::new(velocity.x * VELOCITY_DECAY, velocity.y * VELOCITY_DECAY);
    if hit_bound || decayed.total < VELOCITY_REST_THRESHOLD {
        ctx.animation = AnimationState::Idle;
        ctx.animate = false;
        log::trace!("fling #{id} finished");
        // Inertia can end on a rubber-banded or padded excursion.
        return panning::handle_align_to_bounds(ctx, None);
    }

    ctx.animation = AnimationState::Running {
        id,
        kind: AnimationKind::Velocity { velocity: decayed },
        start_time,
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;

    fn measured_context() -> ViewContext {
        let mut ctx = ViewContext::new(EngineConfig::default());
        ctx.set_wrapper_size(Point::new(300.0, 300.0));
        ctx.set_content_size(Point::new(600.0, 600.0));
        ctx.mount();
        ctx
    }

    #[test]
    fn test_instant_transform_sets_state_without_handle() {
        let mut ctx = measured_context();
        let before = ctx.animation_request_id;

        let needs_frames = animate(
            &mut ctx,
            TransformState::new(2.0, 10.0, 10.0),
            Duration::ZERO,
            EasingType::Linear,
        );

        assert!(!needs_frames);
        assert_eq!(ctx.transform_state, TransformState::new(2.0, 10.0, 10.0));
        assert!(!ctx.animation.is_running());
        assert_eq!(ctx.animation_request_id, before + 1);
    }

    #[test]
    fn test_invalid_target_is_dropped() {
        let mut ctx = measured_context();
        let before = ctx.transform_state;

        animate(
            &mut ctx,
            TransformState::new(f64::NAN, 0.0, 0.0),
            Duration::from_millis(100),
            EasingType::Linear,
        );

        assert_eq!(ctx.transform_state, before);
        assert!(!ctx.animation.is_running());
    }

    #[test]
    fn test_unmounted_context_ignores_requests() {
        let mut ctx = measured_context();
        ctx.unmount();

        animate(
            &mut ctx,
            TransformState::new(2.0, 0.0, 0.0),
            Duration::ZERO,
            EasingType::Linear,
        );
        assert_eq!(ctx.transform_state, TransformState::default());
    }

    #[test]
    fn test_single_flight_supersedes() {
        let mut ctx = measured_context();

        animate(
            &mut ctx,
            TransformState::new(2.0, 0.0, 0.0),
            Duration::from_millis(100),
            EasingType::Linear,
        );
        let first_id = ctx.animation_request_id;

        animate(
            &mut ctx,
            TransformState::new(4.0, -50.0, -50.0),
            Duration::from_millis(100),
            EasingType::Linear,
        );

        // Exactly one active animation, carrying the newer id.
        match ctx.animation {
            AnimationState::Running { id, .. } => assert_eq!(id, first_id + 1),
            AnimationState::Idle => panic!("expected a running animation"),
        }
    }

    #[test]
    fn test_stale_tick_performs_no_mutation() {
        let mut ctx = measured_context();
        animate(
            &mut ctx,
            TransformState::new(2.0, -20.0, -20.0),
            Duration::from_millis(100),
            EasingType::Linear,
        );

        // Simulate a newer request landing between scheduling and execution.
        ctx.animation_request_id += 1;
        let before = ctx.transform_state;

        let needs_frames = tick(&mut ctx, Instant::now());
        assert!(!needs_frames);
        assert_eq!(ctx.transform_state, before);
        assert!(!ctx.animation.is_running());
    }

    #[test]
    fn test_easing_tick_converges_on_target() {
        let mut ctx = measured_context();
        let target = TransformState::new(2.0, -40.0, -80.0);
        animate(&mut ctx, target, Duration::from_millis(100), EasingType::Linear);

        let start = Instant::now();
        assert!(tick(&mut ctx, start + Duration::from_millis(50)));
        let mid = ctx.transform_state;
        assert!(mid.scale > 1.0 && mid.scale < 2.0);
        assert!(mid.position_x < 0.0 && mid.position_x > -40.0);

        // Terminal frame lands exactly on the target and releases the slot.
        assert!(!tick(&mut ctx, start + Duration::from_millis(250)));
        assert_eq!(ctx.transform_state, target);
        assert!(!ctx.animation.is_running());
        assert!(!ctx.animate);
    }

    #[test]
    fn test_tick_without_animation_is_idle() {
        let mut ctx = measured_context();
        assert!(!tick(&mut ctx, Instant::now()));
    }

    #[test]
    fn test_cancel_all_is_idempotent() {
        let mut ctx = measured_context();
        animate(
            &mut ctx,
            TransformState::new(2.0, 0.0, 0.0),
            Duration::from_millis(100),
            EasingType::Linear,
        );
        ctx.velocity = Some(Velocity::new(1.0, 1.0));

        cancel_all_animations(&mut ctx);
        assert!(!ctx.animation.is_running());
        assert!(ctx.velocity.is_none());
        assert!(!ctx.animate);

        // Nothing left to clear; calling again must hold.
        cancel_all_animations(&mut ctx);
        assert!(!ctx.animation.is_running());
    }

    #[test]
    fn test_velocity_tick_decays_to_rest() {
        let mut ctx = measured_context();
        ctx.set_transform_state(2.0, -600.0, -600.0);
        ctx.recompute_bounds(2.0);
        start_animation(
            &mut ctx,
            AnimationKind::Velocity {
                velocity: Velocity::new(0.5, 0.25),
            },
        );

        let mut now = Instant::now();
        let mut frames = 0;
        while tick(&mut ctx, now) {
            now += Duration::from_millis(16);
            frames += 1;
            assert!(frames < 1000, "fling never converged");
        }

        assert!(!ctx.animation.is_running());
        // Inertia carried the view toward positive x/y but stayed bounded.
        let state = ctx.transform_state;
        assert!(state.position_x > -600.0);
        assert!(state.position_x <= ctx.bounds.max_position_x);
    }

    #[test]
    fn test_velocity_tick_stops_at_bound() {
        let mut ctx = measured_context();
        ctx.set_transform_state(1.0, -10.0, -10.0);
        ctx.recompute_bounds(1.0);
        // Hard toward the max-x bound at 0.
        start_animation(
            &mut ctx,
            AnimationKind::Velocity {
                velocity: Velocity::new(5.0, 0.0),
            },
        );

        let mut now = Instant::now();
        let mut frames = 0;
        while tick(&mut ctx, now) {
            now += Duration::from_millis(16);
            frames += 1;
            assert!(frames < 100, "bound hit should terminate the fling");
        }

        assert_eq!(ctx.transform_state.position_x, 0.0);
        assert!(!ctx.animation.is_running());
    }
}
