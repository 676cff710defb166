//! Easing curves for the ship flight and planet bobbing

use serde::{Deserialize, Serialize};

/// How progress maps onto distance covered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EasingFunction {
    /// Constant speed
    #[default]
    Linear,
    /// Quadratic slow start and slow landing
    EaseInOut,
}

impl EasingFunction {
    /// Map `t` (clamped to 0..=1) to eased progress
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut if t < 0.5 => 2.0 * t * t,
            Self::EaseInOut => 1.0 - (2.0 - 2.0 * t).powi(2) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_lands_where_linear_does() {
        let e = EasingFunction::EaseInOut;
        assert!(e.apply(0.0).abs() < 1e-6);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(e.apply(0.1) < EasingFunction::Linear.apply(0.1));
        assert!(e.apply(0.9) > EasingFunction::Linear.apply(0.9));
    }

    #[test]
    fn test_progress_is_clamped() {
        assert!((EasingFunction::Linear.apply(3.0) - 1.0).abs() < f32::EPSILON);
        assert!(EasingFunction::EaseInOut.apply(-1.0).abs() < f32::EPSILON);
    }
}
