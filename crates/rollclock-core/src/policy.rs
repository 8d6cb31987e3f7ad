use std::time::Duration;

use crate::anim::{
    Easing, MotionSpec, DAMPING_RATIO_LOW_BOUNCY, DAMPING_RATIO_NO_BOUNCY, STIFFNESS_LOW,
    STIFFNESS_MEDIUM,
};
use crate::digit::{DigitPosition, DigitSlot};
use crate::time::Time;

/// Duration of the regular one-step slide.
pub const TICK_DURATION: Duration = Duration::from_millis(300);

/// Which transition a column uses to reach its new offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnimationCurve {
    /// Regular increment: short ease-out slide.
    Continuous,
    /// Rollover to the range minimum: slow spring that overshoots and settles.
    BounceReset,
}

impl AnimationCurve {
    pub fn motion(self) -> MotionSpec {
        match self {
            AnimationCurve::Continuous => {
                MotionSpec::tween(TICK_DURATION, Easing::LINEAR_OUT_SLOW_IN)
            }
            AnimationCurve::BounceReset => {
                MotionSpec::spring(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_LOW)
            }
        }
    }
}

/// Where a column should come to rest and how it gets there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationIntent {
    /// Vertical offset of the column, in the same unit as `unit_size`.
    pub target_offset: f32,
    pub curve: AnimationCurve,
}

/// Derives column intents from digit slots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DigitPolicy {
    /// Rendered height of one digit cell.
    pub unit_size: f32,
}

impl DigitPolicy {
    #[inline]
    pub const fn new(unit_size: f32) -> Self {
        Self { unit_size }
    }

    /// Offset centers the range midpoint at rest and moves one `unit_size`
    /// per value step; a value at the range minimum bounces.
    pub fn compute_intent(&self, slot: DigitSlot) -> AnimationIntent {
        let target_offset = self.unit_size * (slot.range.mid() - f32::from(slot.value));
        let curve = if slot.is_min() {
            AnimationCurve::BounceReset
        } else {
            AnimationCurve::Continuous
        };
        AnimationIntent { target_offset, curve }
    }

    /// Intents for the positions whose digit differs between `prev` and `next`.
    pub fn changed_slots(&self, prev: Time, next: Time) -> Vec<(DigitPosition, AnimationIntent)> {
        prev.slots()
            .into_iter()
            .zip(next.slots())
            .filter(|(a, b)| a.value != b.value)
            .map(|(_, b)| (b.position, self.compute_intent(b)))
            .collect()
    }

    /// Motion for a cell's active/inactive color change.
    pub fn color_motion(&self) -> MotionSpec {
        MotionSpec::spring(DAMPING_RATIO_NO_BOUNCY, STIFFNESS_MEDIUM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::DigitRange;

    fn t(h: u32, m: u32, s: u32) -> Time {
        Time::new(h, m, s).unwrap()
    }

    fn slot(position: DigitPosition, value: u8) -> DigitSlot {
        DigitSlot::new(position, value).unwrap()
    }

    const POLICY: DigitPolicy = DigitPolicy::new(40.0);

    // ── offsets ───────────────────────────────────────────────────────────

    #[test]
    fn hour_tens_middle_value_rests_at_zero() {
        let intent = POLICY.compute_intent(slot(DigitPosition::HourTens, 1));
        assert_eq!(intent.target_offset, 0.0);
        assert_eq!(intent.curve, AnimationCurve::Continuous);
    }

    #[test]
    fn ones_offsets_use_half_unit_mid() {
        assert_eq!(POLICY.compute_intent(slot(DigitPosition::SecondOnes, 0)).target_offset, 180.0);
        assert_eq!(POLICY.compute_intent(slot(DigitPosition::SecondOnes, 9)).target_offset, -180.0);
        assert_eq!(POLICY.compute_intent(slot(DigitPosition::SecondOnes, 4)).target_offset, 20.0);
    }

    #[test]
    fn each_step_moves_one_unit() {
        for p in DigitPosition::ALL {
            let range = p.range();
            for v in range.min..range.max {
                let a = POLICY.compute_intent(slot(p, v)).target_offset;
                let b = POLICY.compute_intent(slot(p, v + 1)).target_offset;
                assert_eq!(a - b, 40.0);
            }
        }
    }

    #[test]
    fn offset_for_nonzero_min_range() {
        let s = DigitSlot { position: DigitPosition::HourOnes, range: DigitRange::new(1, 3), value: 1 };
        let intent = POLICY.compute_intent(s);
        assert_eq!(intent.target_offset, 40.0 * (1.0 - 1.0));
        assert_eq!(intent.curve, AnimationCurve::BounceReset);
    }

    // ── curves ────────────────────────────────────────────────────────────

    #[test]
    fn min_bounces_everything_else_slides() {
        for p in DigitPosition::ALL {
            for v in p.range().iter() {
                let expected = if v == 0 { AnimationCurve::BounceReset } else { AnimationCurve::Continuous };
                assert_eq!(POLICY.compute_intent(slot(p, v)).curve, expected, "{p:?} {v}");
            }
        }
    }

    #[test]
    fn compute_intent_is_pure() {
        for s in t(12, 34, 56).slots() {
            assert_eq!(POLICY.compute_intent(s), POLICY.compute_intent(s));
        }
    }

    #[test]
    fn curve_motions() {
        assert!(matches!(
            AnimationCurve::Continuous.motion(),
            MotionSpec::Tween { duration, easing }
                if duration == TICK_DURATION && easing == Easing::LINEAR_OUT_SLOW_IN
        ));
        assert!(matches!(AnimationCurve::BounceReset.motion(), MotionSpec::Spring(s) if s.damping_ratio < 1.0));
    }

    // ── transitions ───────────────────────────────────────────────────────

    #[test]
    fn midnight_rollover_bounces_all_six() {
        let changed = POLICY.changed_slots(t(23, 59, 59), Time::MIDNIGHT);
        assert_eq!(changed.len(), 6);
        for (p, intent) in &changed {
            assert_eq!(intent.curve, AnimationCurve::BounceReset, "{p:?}");
        }
        assert_eq!(
            changed.iter().map(|(p, _)| *p).collect::<Vec<_>>(),
            DigitPosition::ALL.to_vec()
        );
    }

    #[test]
    fn single_second_step_changes_only_seconds_ones() {
        let changed = POLICY.changed_slots(t(12, 34, 56), t(12, 34, 57));
        assert_eq!(changed.len(), 1);
        let (p, intent) = changed[0];
        assert_eq!(p, DigitPosition::SecondOnes);
        assert_eq!(intent.curve, AnimationCurve::Continuous);
        assert_eq!(intent.target_offset, 40.0 * (4.5 - 7.0));
    }

    #[test]
    fn identical_times_change_nothing() {
        assert!(POLICY.changed_slots(t(8, 0, 0), t(8, 0, 0)).is_empty());
    }
}
