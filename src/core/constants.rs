//! Engine-wide magic numbers in a single place, so the tuning knobs of the
//! interaction feel are easy to find and tweak.

/// Nominal display refresh interval in milliseconds. Pointer deltas are
/// normalized against this, which makes velocities read as px/ms.
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Minimum velocity magnitude (px/ms) for a release to start inertial
/// panning; slower releases snap back to bounds instead.
pub const MIN_VELOCITY_TOTAL: f64 = 0.1;

/// Per-frame decay factor applied to the fling vector.
pub const VELOCITY_DECAY: f64 = 0.92;

/// A fling stops once its magnitude falls below this (px/ms).
pub const VELOCITY_REST_THRESHOLD: f64 = 0.01;

/// Elastic overscroll constant used when callers opt into rubber-banding
/// (iOS famously ships 0.55).
pub const DEFAULT_RUBBER_BAND_CONSTANT: f64 = 0.15;

/// Decimal digits pan positions are rounded to before publishing.
pub const POSITION_PRECISION: u32 = 2;
