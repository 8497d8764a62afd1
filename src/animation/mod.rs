pub mod easing;
pub mod scheduler;

// Re-export commonly used types for convenience
pub use easing::EasingType;
pub use scheduler::{AnimationKind, AnimationState};
