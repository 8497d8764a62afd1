use crate::core::constants::POSITION_PRECISION;
use crate::core::geom::{round_number, Point};
use serde::{Deserialize, Serialize};

/// The valid pan range at a specific scale, in wrapper coordinates.
///
/// Also doubles as the caller-facing rectangle shape for explicit bounds,
/// where the four values are content-space coordinates instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_position_x: f64,
    pub max_position_x: f64,
    pub min_position_y: f64,
    pub max_position_y: f64,
}

impl Bounds {
    pub fn new(
        min_position_x: f64,
        max_position_x: f64,
        min_position_y: f64,
        max_position_y: f64,
    ) -> Self {
        Self {
            min_position_x,
            max_position_x,
            min_position_y,
            max_position_y,
        }
    }

    /// Degenerate zero-extent bounds: no panning possible.
    ///
    /// Returned whenever the wrapper or content has not been measured yet;
    /// callers treat this as "not pannable", never as an error.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn width(&self) -> f64 {
        self.max_position_x - self.min_position_x
    }

    pub fn height(&self) -> f64 {
        self.max_position_y - self.min_position_y
    }

    /// Checks whether a position lies inside the range on both axes
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_position_x
            && x <= self.max_position_x
            && y >= self.min_position_y
            && y <= self.max_position_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::zero()
    }
}

/// Computes the pan range for a content rectangle drawn at `scale` inside
/// `wrapper_size`.
///
/// The same math serves both bounds sources: the measured content element is
/// a rectangle at the origin, an explicit caller rectangle carries its own
/// origin. When the scaled rectangle is smaller than the wrapper, the slack
/// is distributed as a centering factor (all of it when `center_zoomed_out`,
/// half otherwise). The `-origin * scale` offset keeps rectangles that do not
/// start at (0, 0) honest; without it the limits silently drift.
pub fn bounds_for_rect(
    wrapper_size: Point,
    rect_origin: Point,
    rect_size: Point,
    scale: f64,
    center_zoomed_out: bool,
) -> Bounds {
    let scaled_width = rect_size.x * scale;
    let scaled_height = rect_size.y * scale;
    let slack_x = wrapper_size.x - scaled_width;
    let slack_y = wrapper_size.y - scaled_height;

    let centering = if center_zoomed_out { 1.0 } else { 0.5 };
    let factor_x = if slack_x > 0.0 { slack_x * centering } else { 0.0 };
    let factor_y = if slack_y > 0.0 { slack_y * centering } else { 0.0 };

    let offset_x = rect_origin.x * scale;
    let offset_y = rect_origin.y * scale;

    Bounds::new(
        wrapper_size.x - scaled_width - factor_x - offset_x,
        factor_x - offset_x,
        wrapper_size.y - scaled_height - factor_y - offset_y,
        factor_y - offset_y,
    )
}

/// Computes the pan range for `scale`, preferring an explicit content-space
/// rectangle when one is set.
///
/// Degrades to [`Bounds::zero`] while either element is unmeasured.
pub fn calculate_bounds(
    wrapper_size: Point,
    content_size: Point,
    explicit_bounds: Option<&Bounds>,
    scale: f64,
    center_zoomed_out: bool,
) -> Bounds {
    let measurable = wrapper_size.x > 0.0
        && wrapper_size.y > 0.0
        && content_size.x > 0.0
        && content_size.y > 0.0;
    if !measurable {
        return Bounds::zero();
    }

    match explicit_bounds {
        Some(rect) => bounds_for_rect(
            wrapper_size,
            Point::new(rect.min_position_x, rect.min_position_y),
            Point::new(rect.width(), rect.height()),
            scale,
            center_zoomed_out,
        ),
        None => bounds_for_rect(
            wrapper_size,
            Point::default(),
            content_size,
            scale,
            center_zoomed_out,
        ),
    }
}

/// Keeps a value between the given bounds, used for limiting the view to
/// its boundaries.
///
/// 1# eg. bound_limiter(2.0, 0.0, 3.0, true) => 2.0
/// 2# eg. bound_limiter(4.0, 0.0, 3.0, true) => 3.0
/// 3# eg. bound_limiter(-2.0, 0.0, 3.0, true) => 0.0
/// 4# eg. bound_limiter(10.0, 0.0, 3.0, false) => 10.0
pub fn bound_limiter(value: f64, min_bound: f64, max_bound: f64, is_active: bool) -> f64 {
    if !is_active {
        return round_number(value, POSITION_PRECISION);
    }
    if value < min_bound {
        return round_number(min_bound, POSITION_PRECISION);
    }
    if value > max_bound {
        return round_number(max_bound, POSITION_PRECISION);
    }
    round_number(value, POSITION_PRECISION)
}

// Based on @aholachek's fluid-interfaces write-up; the constant controls how
// quickly the excursion saturates.
fn rubberband(distance: f64, dimension: f64, constant: f64) -> f64 {
    if dimension == 0.0 || !dimension.is_finite() {
        return distance.powf(constant * 5.0);
    }
    (distance * dimension * constant) / (dimension + constant * distance)
}

/// Eases a position past the violated bound instead of clamping it.
///
/// A constant of 0 degenerates to a hard clamp. Only live panning routes
/// through this; programmatic animations always hard-clamp.
pub fn rubberband_if_out_of_bounds(position: f64, min: f64, max: f64, constant: f64) -> f64 {
    if constant == 0.0 {
        return position.min(max).max(min);
    }
    if position < min {
        return min - rubberband(min - position, max - min, constant);
    }
    if position > max {
        return max + rubberband(position - max, max - min, constant);
    }
    position
}

/// Clamps a candidate pan position for a live gesture.
///
/// Padding (derived from the alignment sizes) widens the range, but only when
/// the wrapper has been measured. With limiting on and a nonzero rubber-band
/// constant the excursion is elastic; otherwise [`bound_limiter`] applies.
#[allow(clippy::too_many_arguments)]
pub fn bounded_position(
    position_x: f64,
    position_y: f64,
    bounds: &Bounds,
    limit_to_bounds: bool,
    padding_x: f64,
    padding_y: f64,
    rubber_band_constant: f64,
    measured: bool,
) -> Point {
    let (pad_x, pad_y) = if measured {
        (padding_x, padding_y)
    } else {
        (0.0, 0.0)
    };

    let min_x = bounds.min_position_x - pad_x;
    let max_x = bounds.max_position_x + pad_x;
    let min_y = bounds.min_position_y - pad_y;
    let max_y = bounds.max_position_y + pad_y;

    if limit_to_bounds && rubber_band_constant > 0.0 {
        Point::new(
            round_number(
                rubberband_if_out_of_bounds(position_x, min_x, max_x, rubber_band_constant),
                POSITION_PRECISION,
            ),
            round_number(
                rubberband_if_out_of_bounds(position_y, min_y, max_y, rubber_band_constant),
                POSITION_PRECISION,
            ),
        )
    } else {
        Point::new(
            bound_limiter(position_x, min_x, max_x, limit_to_bounds),
            bound_limiter(position_y, min_y, max_y, limit_to_bounds),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_limiter_examples() {
        assert_eq!(bound_limiter(2.0, 0.0, 3.0, true), 2.0);
        assert_eq!(bound_limiter(4.0, 0.0, 3.0, true), 3.0);
        assert_eq!(bound_limiter(-2.0, 0.0, 3.0, true), 0.0);
        assert_eq!(bound_limiter(10.0, 0.0, 3.0, false), 10.0);
    }

    #[test]
    fn test_bound_limiter_is_idempotent() {
        for value in [-250.0, -0.005, 0.0, 1.337, 2.999, 3.0, 750.25] {
            let once = bound_limiter(value, 0.0, 3.0, true);
            let twice = bound_limiter(once, 0.0, 3.0, true);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_rubberband_zero_constant_is_hard_clamp() {
        for position in [-50.0, 0.0, 37.5, 100.0, 180.0] {
            assert_eq!(
                rubberband_if_out_of_bounds(position, 0.0, 100.0, 0.0),
                position.clamp(0.0, 100.0)
            );
        }
    }

    #[test]
    fn test_rubberband_exact_bounds_are_fixed_points() {
        assert_eq!(rubberband_if_out_of_bounds(0.0, 0.0, 100.0, 0.15), 0.0);
        assert_eq!(rubberband_if_out_of_bounds(100.0, 0.0, 100.0, 0.15), 100.0);
    }

    #[test]
    fn test_rubberband_damps_overscroll() {
        let eased = rubberband_if_out_of_bounds(130.0, 0.0, 100.0, 0.15);
        assert!(eased > 100.0);
        assert!(eased < 130.0);

        let eased = rubberband_if_out_of_bounds(-30.0, 0.0, 100.0, 0.15);
        assert!(eased < 0.0);
        assert!(eased > -30.0);
    }

    #[test]
    fn test_bounds_zoomed_in_content() {
        // 200px content at 2x inside a 300px wrapper: 100px of overflow
        let bounds = calculate_bounds(
            Point::new(300.0, 300.0),
            Point::new(200.0, 200.0),
            None,
            2.0,
            false,
        );
        assert_eq!(bounds.min_position_x, -100.0);
        assert_eq!(bounds.max_position_x, 0.0);
        assert_eq!(bounds.min_position_y, -100.0);
        assert_eq!(bounds.max_position_y, 0.0);
    }

    #[test]
    fn test_bounds_zoomed_out_content_centers() {
        let wrapper = Point::new(300.0, 300.0);
        let content = Point::new(200.0, 200.0);

        // Half the slack on each side: the content is locked centered.
        let centered = calculate_bounds(wrapper, content, None, 1.0, false);
        assert_eq!(centered.min_position_x, 50.0);
        assert_eq!(centered.max_position_x, 50.0);

        // Full slack: the content can travel flush-left to flush-right.
        let free = calculate_bounds(wrapper, content, None, 1.0, true);
        assert_eq!(free.min_position_x, 0.0);
        assert_eq!(free.max_position_x, 100.0);
    }

    #[test]
    fn test_bounds_widen_with_scale() {
        let wrapper = Point::new(300.0, 300.0);
        let content = Point::new(400.0, 400.0);

        let at_two = calculate_bounds(wrapper, content, None, 2.0, false);
        let at_three = calculate_bounds(wrapper, content, None, 3.0, false);

        let range_two = at_two.max_position_x - at_two.min_position_x;
        let range_three = at_three.max_position_x - at_three.min_position_x;
        assert!(range_three > range_two);
        // The pan range tracks the scaled content exactly.
        assert_eq!(range_two, content.x * 2.0 - wrapper.x);
        assert_eq!(range_three, content.x * 3.0 - wrapper.x);
    }

    #[test]
    fn test_explicit_bounds_conversion() {
        let rect = Bounds::new(0.0, 100.0, 0.0, 50.0);
        let bounds = calculate_bounds(
            Point::new(300.0, 300.0),
            Point::new(300.0, 300.0),
            Some(&rect),
            1.0,
            false,
        );

        // 100x50 rectangle inside a 300x300 wrapper at 1x: half-slack
        // centering pins each axis to a single position.
        assert_eq!(bounds.min_position_x, 100.0);
        assert_eq!(bounds.max_position_x, 100.0);
        assert_eq!(bounds.min_position_y, 125.0);
        assert_eq!(bounds.max_position_y, 125.0);
    }

    #[test]
    fn test_explicit_bounds_respect_origin() {
        // Rectangle starting away from the origin, larger than the wrapper.
        let rect = Bounds::new(50.0, 250.0, 50.0, 250.0);
        let wrapper = Point::new(100.0, 100.0);
        let content = Point::new(100.0, 100.0);

        let bounds = calculate_bounds(wrapper, content, Some(&rect), 1.0, false);
        // Most-negative pan shows the right edge, most-positive the left edge.
        assert_eq!(bounds.min_position_x, -150.0);
        assert_eq!(bounds.max_position_x, -50.0);

        // The conversion is scale-dependent and must be redone per zoom.
        let bounds = calculate_bounds(wrapper, content, Some(&rect), 2.0, false);
        assert_eq!(bounds.min_position_x, -400.0);
        assert_eq!(bounds.max_position_x, -100.0);
    }

    #[test]
    fn test_unmeasured_elements_degenerate() {
        let unmeasured = Point::default();
        let measured = Point::new(300.0, 300.0);

        assert_eq!(
            calculate_bounds(unmeasured, measured, None, 1.0, false),
            Bounds::zero()
        );
        assert_eq!(
            calculate_bounds(measured, unmeasured, None, 1.0, false),
            Bounds::zero()
        );
    }

    #[test]
    fn test_bounded_position_padding_requires_measurement() {
        let bounds = Bounds::new(-100.0, 0.0, -100.0, 0.0);

        let padded = bounded_position(40.0, 40.0, &bounds, true, 50.0, 50.0, 0.0, true);
        assert_eq!(padded, Point::new(40.0, 40.0));

        let unpadded = bounded_position(40.0, 40.0, &bounds, true, 50.0, 50.0, 0.0, false);
        assert_eq!(unpadded, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_bounded_position_limit_disabled_passes_through() {
        let bounds = Bounds::new(-100.0, 0.0, -100.0, 0.0);
        let free = bounded_position(512.345_9, -512.345_9, &bounds, false, 0.0, 0.0, 0.0, true);
        assert_eq!(free, Point::new(512.35, -512.35));
    }
}
