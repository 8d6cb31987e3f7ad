use std::time::Duration;

use super::easing::Easing;
use super::spring::Spring;

/// How a value travels to a new target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MotionSpec {
    /// Fixed-duration interpolation; restarts from the current value.
    Tween { duration: Duration, easing: Easing },
    /// Physics-based; keeps the current velocity across retargets.
    Spring(Spring),
}

impl MotionSpec {
    #[inline]
    pub const fn tween(duration: Duration, easing: Easing) -> Self {
        MotionSpec::Tween { duration, easing }
    }

    #[inline]
    pub const fn spring(damping_ratio: f32, stiffness: f32) -> Self {
        MotionSpec::Spring(Spring::new(damping_ratio, stiffness))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Motion {
    Idle,
    Tween { from: f32, elapsed: f32, duration: f32, easing: Easing },
    Spring(Spring),
}

/// Scalar that animates toward its target whenever the target changes.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    target: f32,
    velocity: f32,
    motion: Motion,
    /// Springs snap to the target once displacement and velocity both fall below this.
    threshold: f32,
}

impl AnimatedValue {
    pub const DEFAULT_THRESHOLD: f32 = 0.01;

    pub fn new(value: f32) -> Self {
        Self::with_threshold(value, Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(value: f32, threshold: f32) -> Self {
        Self {
            value,
            target: value,
            velocity: 0.0,
            motion: Motion::Idle,
            threshold: threshold.abs(),
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Units per second.
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.motion == Motion::Idle
    }

    /// Jumps to `target` and stops any running motion.
    pub fn snap_to(&mut self, target: f32) {
        self.target = target;
        self.finish();
    }

    /// Starts moving toward `target`.
    ///
    /// Re-requesting the current target is a no-op, so callers can invoke
    /// this every frame with the derived target.
    pub fn animate_to(&mut self, target: f32, spec: MotionSpec) {
        if target == self.target {
            return;
        }
        self.target = target;

        self.motion = match spec {
            MotionSpec::Tween { duration, easing } => {
                let duration = duration.as_secs_f32();
                if duration <= 0.0 {
                    self.finish();
                    return;
                }
                Motion::Tween { from: self.value, elapsed: 0.0, duration, easing }
            }
            MotionSpec::Spring(spring) => Motion::Spring(spring),
        };
    }

    /// Steps the running motion by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let dt = dt.max(0.0);

        match self.motion {
            Motion::Idle => {}
            Motion::Tween { from, elapsed, duration, easing } => {
                let elapsed = elapsed + dt;
                if elapsed >= duration {
                    self.finish();
                } else {
                    let prev = self.value;
                    let progress = easing.transform(elapsed / duration);
                    self.value = from + (self.target - from) * progress;
                    if dt > 0.0 {
                        self.velocity = (self.value - prev) / dt;
                    }
                    self.motion = Motion::Tween { from, elapsed, duration, easing };
                }
            }
            Motion::Spring(spring) => {
                let (x, v) = spring.step(self.value - self.target, self.velocity, dt);
                if x.abs() < self.threshold && v.abs() < self.threshold {
                    self.finish();
                } else {
                    self.value = self.target + x;
                    self.velocity = v;
                }
            }
        }

        self.value
    }

    fn finish(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
        self.motion = Motion::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::spring::{DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW};

    const FRAME: f32 = 1.0 / 60.0;

    fn tween_300() -> MotionSpec {
        MotionSpec::tween(Duration::from_millis(300), Easing::LINEAR_OUT_SLOW_IN)
    }

    fn frames(v: &mut AnimatedValue, n: usize) {
        for _ in 0..n {
            v.advance(FRAME);
        }
    }

    // ── tween ─────────────────────────────────────────────────────────────

    #[test]
    fn tween_finishes_at_duration() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(-40.0, tween_300());
        frames(&mut v, 17);
        assert!(!v.is_settled());
        assert!(v.value() < -30.0 && v.value() > -40.0);
        frames(&mut v, 2);
        assert!(v.is_settled());
        assert_eq!(v.value(), -40.0);
        assert_eq!(v.velocity(), 0.0);
    }

    #[test]
    fn tween_never_overshoots() {
        let mut v = AnimatedValue::new(100.0);
        v.animate_to(0.0, tween_300());
        for _ in 0..30 {
            let x = v.advance(FRAME);
            assert!((0.0..=100.0).contains(&x));
        }
    }

    #[test]
    fn retarget_restarts_from_current_value() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(40.0, tween_300());
        frames(&mut v, 6);
        let midway = v.value();
        v.animate_to(80.0, tween_300());
        v.advance(0.0);
        assert_eq!(v.value(), midway);
    }

    #[test]
    fn same_target_is_noop() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(40.0, tween_300());
        frames(&mut v, 9);
        let before = v.clone();
        v.animate_to(40.0, tween_300());
        assert_eq!(v, before);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(5.0, MotionSpec::tween(Duration::ZERO, Easing::Linear));
        assert!(v.is_settled());
        assert_eq!(v.value(), 5.0);
    }

    // ── spring ────────────────────────────────────────────────────────────

    #[test]
    fn spring_overshoots_and_settles() {
        let mut v = AnimatedValue::new(-180.0);
        v.animate_to(180.0, MotionSpec::spring(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW));
        let mut peak = f32::MIN;
        for _ in 0..240 {
            peak = peak.max(v.advance(FRAME));
        }
        assert!(peak > 180.0, "no overshoot, peak {peak}");
        assert!(v.is_settled());
        assert_eq!(v.value(), 180.0);
    }

    #[test]
    fn spring_keeps_velocity_from_tween() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(100.0, tween_300());
        frames(&mut v, 3);
        let vel = v.velocity();
        assert!(vel > 0.0);
        v.animate_to(0.0, MotionSpec::spring(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW));
        let before = v.value();
        v.advance(0.001);
        assert!(v.value() > before, "momentum should carry the value upward briefly");
    }

    #[test]
    fn snap_stops_motion() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(10.0, MotionSpec::spring(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW));
        v.advance(FRAME);
        v.snap_to(3.0);
        assert!(v.is_settled());
        assert_eq!(v.advance(FRAME), 3.0);
    }
}
