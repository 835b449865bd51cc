//! Damped spring curves
//!
//! Springs are evaluated in closed form from the time since release rather
//! than integrated per frame, so the value at a given instant does not depend
//! on how often the caller samples it. Unit mass, zero initial velocity.

use serde::{Deserialize, Serialize};

/// Spring parameters (damping ratio < 1 bounces, >= 1 does not)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringSpec {
    pub damping_ratio: f32,
    pub stiffness: f32,
}

impl SpringSpec {
    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
        }
    }

    /// Normalized step response: 0 at release, approaching 1 (may overshoot)
    pub fn progress(&self, secs: f32) -> f32 {
        if secs <= 0.0 {
            return 0.0;
        }
        let zeta = self.damping_ratio.max(0.0);
        let w0 = self.stiffness.max(f32::EPSILON).sqrt();

        if (zeta - 1.0).abs() < 1e-4 {
            // Critically damped
            1.0 - (-w0 * secs).exp() * (1.0 + w0 * secs)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * secs).exp();
            1.0 - envelope * ((wd * secs).cos() + (zeta * w0 / wd) * (wd * secs).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * secs).exp() - r1 * (r2 * secs).exp()) / (r2 - r1)
        }
    }

    /// Value travelling from `from` to `to`, `secs` after release
    pub fn interpolate(&self, from: f32, to: f32, secs: f32) -> f32 {
        from + (to - from) * self.progress(secs)
    }
}

/// A value springing toward a target after each retarget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringTransition {
    from: f32,
    to: f32,
    /// When the current target was set (None = at rest)
    started_at_ms: Option<u64>,
}

impl SpringTransition {
    /// A transition at rest on `value`
    pub fn at_rest(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at_ms: None,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Current value; snaps to the target once `settle_ms` have passed
    pub fn value(&self, spring: &SpringSpec, now_ms: u64, settle_ms: u64) -> f32 {
        match self.started_at_ms {
            None => self.to,
            Some(start) => {
                let elapsed = now_ms.saturating_sub(start);
                if elapsed >= settle_ms {
                    self.to
                } else {
                    spring.interpolate(self.from, self.to, elapsed as f32 / 1000.0)
                }
            }
        }
    }

    /// Start moving toward `to` from wherever the value currently is
    pub fn retarget(&mut self, to: f32, spring: &SpringSpec, now_ms: u64, settle_ms: u64) {
        self.from = self.value(spring, now_ms, settle_ms);
        self.to = to;
        self.started_at_ms = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_starts_at_zero() {
        for spring in [
            SpringSpec::new(0.6, 200.0),
            SpringSpec::new(1.0, 200.0),
            SpringSpec::new(1.5, 200.0),
        ] {
            assert_eq!(spring.progress(0.0), 0.0);
            assert!(spring.progress(0.001) < 0.01);
        }
    }

    #[test]
    fn test_progress_converges() {
        for spring in [
            SpringSpec::new(0.6, 200.0),
            SpringSpec::new(0.8, 300.0),
            SpringSpec::new(1.0, 300.0),
            SpringSpec::new(2.0, 300.0),
        ] {
            assert!((spring.progress(3.0) - 1.0).abs() < 1e-3, "{:?}", spring);
        }
    }

    #[test]
    fn test_underdamped_overshoots() {
        let spring = SpringSpec::new(0.6, 200.0);
        let peak = (1..100)
            .map(|i| spring.progress(i as f32 * 0.005))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.05);
    }

    #[test]
    fn test_overdamped_monotonic() {
        let spring = SpringSpec::new(2.0, 300.0);
        let mut last = 0.0;
        for i in 1..200 {
            let p = spring.progress(i as f32 * 0.01);
            assert!(p >= last - 1e-6);
            assert!(p <= 1.0 + 1e-6);
            last = p;
        }
    }

    #[test]
    fn test_fall_is_close_to_rest_at_settle_time() {
        // 500 units of fall should be within a few units of the plate by 700ms
        let spring = SpringSpec::new(0.6, 200.0);
        let offset = spring.interpolate(-500.0, 0.0, 0.7);
        assert!(offset.abs() < 5.0, "offset {}", offset);
    }

    #[test]
    fn test_transition_retarget_midway() {
        let spring = SpringSpec::new(0.8, 300.0);
        let mut t = SpringTransition::at_rest(0.85);
        assert_eq!(t.value(&spring, 0, 700), 0.85);

        t.retarget(1.0, &spring, 1000, 700);
        assert_eq!(t.value(&spring, 1000, 700), 0.85);
        let mid = t.value(&spring, 1100, 700);
        assert!(mid > 0.85);

        // Retarget mid-flight continues from the current value
        t.retarget(0.7, &spring, 1100, 700);
        assert!((t.value(&spring, 1100, 700) - mid).abs() < 1e-6);
        assert_eq!(t.value(&spring, 1800, 700), 0.7);
        assert_eq!(t.target(), 0.7);
    }
}
