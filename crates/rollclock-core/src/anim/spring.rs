/// Damping ratio that overshoots visibly before settling.
pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
/// Critical damping: fastest approach without overshoot.
pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

pub const STIFFNESS_LOW: f32 = 200.0;
pub const STIFFNESS_MEDIUM: f32 = 1500.0;

/// Unit-mass damped harmonic oscillator.
///
/// `step` uses the closed-form solution, so the result does not depend on
/// how a span of time is split into frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spring {
    pub damping_ratio: f32,
    pub stiffness: f32,
}

impl Spring {
    #[inline]
    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self { damping_ratio, stiffness }
    }

    /// Advances `(displacement, velocity)` by `dt` seconds.
    ///
    /// Displacement is measured from the rest position (value − target).
    /// A non-positive stiffness has no restoring force and collapses to rest.
    pub fn step(self, displacement: f32, velocity: f32, dt: f32) -> (f32, f32) {
        if self.stiffness <= 0.0 {
            return (0.0, 0.0);
        }

        let x0 = f64::from(displacement);
        let v0 = f64::from(velocity);
        let t = f64::from(dt.max(0.0));
        let omega = f64::from(self.stiffness).sqrt();
        let zeta = f64::from(self.damping_ratio.max(0.0));

        let (x, v) = if (zeta - 1.0).abs() < 1e-4 {
            let c = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = decay * (x0 + c * t);
            let v = decay * (c - omega * (x0 + c * t));
            (x, v)
        } else if zeta < 1.0 {
            let sigma = zeta * omega;
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + sigma * x0) / wd;
            let decay = (-sigma * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * ((b * wd - sigma * a) * cos - (a * wd + sigma * b) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        (x as f32, v as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: Spring, mut x: f32, mut v: f32, seconds: f32, fps: f32) -> (f32, f32, f32) {
        let dt = 1.0 / fps;
        let mut min_x = x;
        let steps = (seconds * fps) as usize;
        for _ in 0..steps {
            (x, v) = spring.step(x, v, dt);
            min_x = min_x.min(x);
        }
        (x, v, min_x)
    }

    #[test]
    fn zero_dt_is_identity() {
        let s = Spring::new(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW);
        let (x, v) = s.step(10.0, 3.0, 0.0);
        assert!((x - 10.0).abs() < 1e-5);
        assert!((v - 3.0).abs() < 1e-4);
    }

    #[test]
    fn low_bouncy_overshoots_then_settles() {
        let s = Spring::new(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW);
        let (x, v, min_x) = run(s, 100.0, 0.0, 3.0, 120.0);
        assert!(min_x < -0.5, "expected overshoot past rest, min {min_x}");
        assert!(x.abs() < 0.01 && v.abs() < 0.1, "not settled: x={x} v={v}");
    }

    #[test]
    fn critical_damping_does_not_overshoot() {
        let s = Spring::new(DAMPING_RATIO_NO_BOUNCY, STIFFNESS_MEDIUM);
        let (x, _, min_x) = run(s, 1.0, 0.0, 1.0, 60.0);
        assert!(min_x >= -1e-6);
        assert!(x.abs() < 1e-3);
    }

    #[test]
    fn overdamped_converges_without_overshoot() {
        let s = Spring::new(2.0, STIFFNESS_LOW);
        let (x, _, min_x) = run(s, 50.0, 0.0, 4.0, 60.0);
        assert!(min_x >= -1e-4);
        assert!(x.abs() < 0.05);
    }

    #[test]
    fn split_steps_match_single_step() {
        let s = Spring::new(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW);
        let (x1, v1) = s.step(40.0, -5.0, 0.2);
        let (xa, va) = s.step(40.0, -5.0, 0.1);
        let (x2, v2) = s.step(xa, va, 0.1);
        assert!((x1 - x2).abs() < 1e-3);
        assert!((v1 - v2).abs() < 1e-2);
    }

    #[test]
    fn zero_stiffness_rests_immediately() {
        assert_eq!(Spring::new(1.0, 0.0).step(5.0, 1.0, 0.016), (0.0, 0.0));
    }
}
