use crate::animation::scheduler::{self, AnimationState};
use crate::core::bounds::{bound_limiter, bounded_position};
use crate::core::constants::MIN_VELOCITY_TOTAL;
use crate::core::context::{PointerSession, TransformState, ViewContext};
use crate::core::geom::Point;
use crate::input::events::{PointerInput, TouchPoint};
use crate::input::velocity;
use crate::prelude::Duration;

/// Starts a pan gesture.
///
/// Refused while panning is disabled, the context is unmounted, or an
/// animation is running under the interaction lock. Otherwise cancels any
/// in-flight animation, recomputes the bounds at the current scale, and
/// records the gesture session.
pub(crate) fn handle_panning_start(ctx: &mut ViewContext, event: &PointerInput) {
    if !ctx.mounted || ctx.config.panning.disabled {
        return;
    }
    if ctx.animation.is_running() && ctx.config.lock_interactions_during_animation {
        return;
    }

    let scale = ctx.transform_state.scale;
    scheduler::cancel_all_animations(ctx);
    ctx.recompute_bounds(scale);

    match event {
        PointerInput::Touch { touches } => handle_touch_panning_setup(ctx, touches),
        PointerInput::Mouse { position, .. } => handle_panning_setup(ctx, *position),
    }
}

fn handle_panning_setup(ctx: &mut ViewContext, client: Point) {
    let TransformState {
        position_x,
        position_y,
        ..
    } = ctx.transform_state;

    ctx.is_panning = true;
    ctx.pointer = Some(PointerSession {
        start_coords: Point::new(client.x - position_x, client.y - position_y),
        client_coords: None,
        last_position: None,
    });
    log::trace!("panning started at ({}, {})", client.x, client.y);
}

fn handle_touch_panning_setup(ctx: &mut ViewContext, touches: &[TouchPoint]) {
    // Single-finger contact pans; anything else belongs to the pinch
    // recognizer upstream.
    if touches.len() == 1 {
        handle_panning_setup(ctx, touches[0].position);
    }
}

/// Advances the pan to a new client position; a no-op without a session.
///
/// The scale never changes during pure panning. Velocity is sampled only
/// when the client position moved on both axes since the last event.
pub(crate) fn handle_panning(ctx: &mut ViewContext, client_x: f64, client_y: f64) {
    let Some(target) = panning_client_position(ctx, client_x, client_y) else {
        return;
    };

    let padding_x = padding_value(ctx, ctx.config.alignment_animation.size_x);
    let padding_y = padding_value(ctx, ctx.config.alignment_animation.size_y);

    let moved_on_both_axes = match ctx.pointer.as_ref().and_then(|s| s.client_coords) {
        Some(previous) => previous.x != client_x && previous.y != client_y,
        None => true,
    };
    if moved_on_both_axes {
        velocity::handle_calculate_velocity(ctx, target);
    }
    if let Some(session) = ctx.pointer.as_mut() {
        session.client_coords = Some(Point::new(client_x, client_y));
    }

    handle_new_position(ctx, target, padding_x, padding_y);
}

/// Ends the gesture, deciding between inertia and bounds alignment.
///
/// Session, animate flag, animation slot, and velocity snapshot are cleared
/// unconditionally; the snapshot is read once beforehand to make the fling
/// decision. Returns true when frames are needed afterwards.
pub(crate) fn handle_panning_end(ctx: &mut ViewContext) -> bool {
    if !ctx.is_panning {
        return false;
    }

    let velocity_snapshot = ctx.velocity.take();
    ctx.is_panning = false;
    ctx.pointer = None;
    ctx.animate = false;
    ctx.animation = AnimationState::Idle;
    log::trace!("panning ended, velocity {velocity_snapshot:?}");

    if let Some(velocity_snapshot) = velocity_snapshot {
        let should_fling = !ctx.config.panning.velocity_disabled
            && velocity_snapshot.total > MIN_VELOCITY_TOTAL
            && ctx.is_zoomed_beyond_wrapper();
        if should_fling {
            return velocity::handle_velocity_panning(ctx, velocity_snapshot);
        }
    }

    if ctx.config.alignment_animation.recompute_on_align {
        return handle_align_to_bounds(ctx, None);
    }
    // The position was clamped on every move; trust it as-is.
    false
}

/// Animates the view back inside its bounds.
///
/// A no-op when alignment is disabled, the scale is below the minimum, no
/// alignment size is configured on either axis, or another animation is
/// already running (alignment never preempts). Returns true when frames are
/// needed; an instant snap (zero time) needs none.
pub(crate) fn handle_align_to_bounds(ctx: &mut ViewContext, custom_time: Option<Duration>) -> bool {
    let scale = ctx.transform_state.scale;
    let alignment = ctx.config.alignment_animation;

    let is_disabled = alignment.disabled
        || scale < ctx.config.min_scale
        || (alignment.size_x == 0.0 && alignment.size_y == 0.0);
    if is_disabled || ctx.animation.is_running() {
        return false;
    }

    let Some(target) = pan_to_bounds_target(ctx) else {
        return false;
    };
    scheduler::animate(
        ctx,
        target,
        custom_time.unwrap_or(alignment.animation_time),
        alignment.animation_type,
    )
}

/// Target position for the current client coordinates, honoring axis locks.
fn panning_client_position(ctx: &ViewContext, client_x: f64, client_y: f64) -> Option<Point> {
    let session = ctx.pointer.as_ref()?;
    let TransformState {
        position_x,
        position_y,
        ..
    } = ctx.transform_state;

    let mouse = Point::new(client_x, client_y).subtract(&session.start_coords);
    let x = if ctx.config.panning.lock_axis_x {
        position_x
    } else {
        mouse.x
    };
    let y = if ctx.config.panning.lock_axis_y {
        position_y
    } else {
        mouse.y
    };
    Some(Point::new(x, y))
}

/// Pan padding derived from an alignment size; zero when zoomed below the
/// minimum scale or padding is disabled.
fn padding_value(ctx: &ViewContext, size: f64) -> f64 {
    if size > 0.0 && ctx.transform_state.scale >= ctx.config.min_scale && !ctx.config.disable_padding
    {
        size
    } else {
        0.0
    }
}

fn handle_new_position(ctx: &mut ViewContext, target: Point, padding_x: f64, padding_y: f64) {
    let TransformState {
        scale,
        position_x,
        position_y,
    } = ctx.transform_state;
    if target.x == position_x && target.y == position_y {
        return;
    }

    let bounded = bounded_position(
        target.x,
        target.y,
        &ctx.bounds,
        ctx.config.limit_to_bounds,
        padding_x,
        padding_y,
        ctx.config.rubber_band_constant,
        ctx.is_ready(),
    );
    ctx.set_transform_state(scale, bounded.x, bounded.y);
}

/// Nearest in-bounds transform, or None when nothing is out of range.
fn pan_to_bounds_target(ctx: &ViewContext) -> Option<TransformState> {
    let TransformState {
        scale,
        position_x,
        position_y,
    } = ctx.transform_state;
    let bounds = ctx.bounds;

    let x_out = position_x < bounds.min_position_x || position_x > bounds.max_position_x;
    let y_out = position_y < bounds.min_position_y || position_y > bounds.max_position_y;
    if !x_out && !y_out {
        return None;
    }

    let x = bound_limiter(position_x, bounds.min_position_x, bounds.max_position_x, true);
    let y = bound_limiter(position_y, bounds.min_position_y, bounds.max_position_y, true);
    Some(TransformState::new(
        scale,
        if x_out { x } else { position_x },
        if y_out { y } else { position_y },
    ))
}
