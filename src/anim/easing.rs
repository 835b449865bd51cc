//! Easing curves for tweened values

use serde::{Deserialize, Serialize};

/// Easing functions over normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    QuadOut,
    #[default]
    CubicOut,
    CubicInOut,
    SineOut,
    /// Overshoots slightly before landing
    BackOut,
}

impl Easing {
    /// Apply the curve to `t` (clamped to [0, 1])
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let t = 2.0 * t - 2.0;
                    1.0 + t * t * t / 2.0
                }
            }
            Easing::SineOut => (t * std::f32::consts::FRAC_PI_2).sin(),
            Easing::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                let t = t - 1.0;
                1.0 + c3 * t * t * t + c1 * t * t
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineOut,
        Easing::BackOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Easing::Linear.apply(-2.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(3.0), 1.0);
    }

    #[test]
    fn test_back_out_overshoots() {
        assert!(Easing::BackOut.apply(0.7) > 1.0);
    }
}
