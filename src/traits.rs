//! Shared trait abstractions for common patterns
//!
//! Small traits used across the engine and implemented by hosts.

use crate::core::geom::Point;

/// Unified interpolation trait for values that can be smoothly transitioned
pub trait Lerp {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Point::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }
}

/// Synchronous pixel-size source for the wrapper and content elements.
///
/// Implementations must be callable at any time and return `(0, 0)` for an
/// element that has not been laid out yet; the engine degrades to
/// zero-extent bounds until both sizes are known.
pub trait MeasurementProvider {
    /// Size of the fixed viewport element, in pixels.
    fn wrapper_size(&self) -> Point;

    /// Unscaled size of the transformed content element, in pixels.
    fn content_size(&self) -> Point;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_lerp() {
        assert_eq!(0.0_f64.lerp(&10.0, 0.0), 0.0);
        assert_eq!(0.0_f64.lerp(&10.0, 1.0), 10.0);
        assert_eq!(0.0_f64.lerp(&10.0, 0.5), 5.0);
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 20.0);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid, Point::new(5.0, 10.0));
    }
}
