/// Fixed table of named easing curves.
///
/// Every curve is a pure function from normalized time to normalized
/// progress, with the endpoints pinned at 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingType {
    Linear,
    EaseOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
}

impl EasingType {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingType::EaseInQuad => t * t,
            EasingType::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingType::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingType::EaseInCubic => t * t * t,
            EasingType::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingType::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingType::EaseInQuart => t.powi(4),
            EasingType::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            EasingType::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
        }
    }

    /// Looks a curve up by its conventional camel-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "easeOut" => Some(Self::EaseOut),
            "easeInQuad" => Some(Self::EaseInQuad),
            "easeOutQuad" => Some(Self::EaseOutQuad),
            "easeInOutQuad" => Some(Self::EaseInOutQuad),
            "easeInCubic" => Some(Self::EaseInCubic),
            "easeOutCubic" => Some(Self::EaseOutCubic),
            "easeInOutCubic" => Some(Self::EaseInOutCubic),
            "easeInQuart" => Some(Self::EaseInQuart),
            "easeOutQuart" => Some(Self::EaseOutQuart),
            "easeInOutQuart" => Some(Self::EaseInOutQuart),
            _ => None,
        }
    }
}

impl Default for EasingType {
    fn default() -> Self {
        Self::EaseOut
    }
}
