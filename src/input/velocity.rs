use crate::animation::scheduler::{self, AnimationKind};
use crate::core::constants::FRAME_INTERVAL_MS;
use crate::core::context::{Velocity, ViewContext};
use crate::core::geom::Point;

/// Records the instantaneous velocity from the last two pointer samples.
///
/// Last sample wins: there is no smoothing or averaging across the gesture,
/// so a slow final movement before release reads as a slow release.
pub(crate) fn handle_calculate_velocity(ctx: &mut ViewContext, position: Point) {
    let Some(session) = ctx.pointer.as_mut() else {
        return;
    };
    let previous = session.last_position.replace(position);
    if let Some(previous) = previous {
        let delta = position.subtract(&previous);
        ctx.velocity = Some(Velocity::new(
            delta.x / FRAME_INTERVAL_MS,
            delta.y / FRAME_INTERVAL_MS,
        ));
    }
}

/// Hands a consumed velocity snapshot to the scheduler as an inertial pan.
///
/// Returns true when the fling actually started (the context was mounted).
pub(crate) fn handle_velocity_panning(ctx: &mut ViewContext, velocity: Velocity) -> bool {
    log::trace!("starting fling at {:.3} px/ms", velocity.total);
    scheduler::start_animation(ctx, AnimationKind::Velocity { velocity });
    ctx.animation.is_running()
}
