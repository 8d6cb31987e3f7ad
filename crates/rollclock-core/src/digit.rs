use std::ops::RangeInclusive;

use crate::time::{Time, TimeError};

/// Inclusive range of values a digit column can show.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DigitRange {
    pub min: u8,
    pub max: u8,
}

impl DigitRange {
    #[inline]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Number of cells in the column.
    #[inline]
    pub const fn len(self) -> usize {
        (self.max - self.min) as usize + 1
    }

    #[inline]
    pub const fn contains(self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }

    #[inline]
    pub fn iter(self) -> RangeInclusive<u8> {
        self.min..=self.max
    }

    /// Distance from `min` to the center of the range, in real units.
    ///
    /// For 0..=9 this is 4.5, not 4.
    #[inline]
    pub fn mid(self) -> f32 {
        f32::from(self.max - self.min) / 2.0
    }
}

/// One of the six rendered digit positions, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DigitPosition {
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
    SecondTens,
    SecondOnes,
}

impl DigitPosition {
    pub const ALL: [DigitPosition; 6] = [
        DigitPosition::HourTens,
        DigitPosition::HourOnes,
        DigitPosition::MinuteTens,
        DigitPosition::MinuteOnes,
        DigitPosition::SecondTens,
        DigitPosition::SecondOnes,
    ];

    pub const fn range(self) -> DigitRange {
        match self {
            DigitPosition::HourTens => DigitRange::new(0, 2),
            DigitPosition::MinuteTens | DigitPosition::SecondTens => DigitRange::new(0, 5),
            DigitPosition::HourOnes | DigitPosition::MinuteOnes | DigitPosition::SecondOnes => {
                DigitRange::new(0, 9)
            }
        }
    }

    /// Index into [`DigitPosition::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for the last digit of the hours and minutes groups.
    #[inline]
    pub const fn ends_group(self) -> bool {
        matches!(self, DigitPosition::HourOnes | DigitPosition::MinuteOnes)
    }

    pub const fn name(self) -> &'static str {
        match self {
            DigitPosition::HourTens => "hour-tens",
            DigitPosition::HourOnes => "hour-ones",
            DigitPosition::MinuteTens => "minute-tens",
            DigitPosition::MinuteOnes => "minute-ones",
            DigitPosition::SecondTens => "second-tens",
            DigitPosition::SecondOnes => "second-ones",
        }
    }
}

/// A digit position together with the value it currently shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DigitSlot {
    pub position: DigitPosition,
    pub range: DigitRange,
    pub value: u8,
}

impl DigitSlot {
    /// Returns `None` if `value` is outside the position's range.
    pub fn new(position: DigitPosition, value: u8) -> Option<Self> {
        let range = position.range();
        range.contains(value).then_some(Self { position, range, value })
    }

    /// True when the digit sits at the bottom of its range, i.e. has just rolled over.
    #[inline]
    pub fn is_min(self) -> bool {
        self.value == self.range.min
    }

    /// True if the cell showing `row` is the active one in this column.
    #[inline]
    pub fn is_active(self, row: u8) -> bool {
        row == self.value
    }
}

impl Time {
    pub fn slot(self, position: DigitPosition) -> DigitSlot {
        let field = match position {
            DigitPosition::HourTens | DigitPosition::HourOnes => self.hours(),
            DigitPosition::MinuteTens | DigitPosition::MinuteOnes => self.minutes(),
            DigitPosition::SecondTens | DigitPosition::SecondOnes => self.seconds(),
        };
        let value = match position {
            DigitPosition::HourTens | DigitPosition::MinuteTens | DigitPosition::SecondTens => {
                field / 10
            }
            _ => field % 10,
        };
        DigitSlot {
            position,
            range: position.range(),
            value: value as u8,
        }
    }

    /// Splits the time into its six digit slots, in display order.
    pub fn slots(self) -> [DigitSlot; 6] {
        DigitPosition::ALL.map(|p| self.slot(p))
    }

    /// Recombines six slots (in any order) into a time.
    pub fn from_slots(slots: &[DigitSlot; 6]) -> Result<Time, TimeError> {
        let mut digits = [None::<u8>; 6];
        for slot in slots {
            if !slot.position.range().contains(slot.value) {
                return Err(TimeError::DigitOutOfRange {
                    position: slot.position,
                    value: slot.value,
                });
            }
            digits[slot.position.index()] = Some(slot.value);
        }

        let mut values = [0u32; 6];
        for position in DigitPosition::ALL {
            let digit = digits[position.index()].ok_or(TimeError::MissingDigit(position))?;
            values[position.index()] = u32::from(digit);
        }

        Time::new(
            values[0] * 10 + values[1],
            values[2] * 10 + values[3],
            values[4] * 10 + values[5],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::SECONDS_PER_DAY;

    fn t(h: u32, m: u32, s: u32) -> Time {
        Time::new(h, m, s).unwrap()
    }

    // ── ranges ────────────────────────────────────────────────────────────

    #[test]
    fn ranges_per_position() {
        assert_eq!(DigitPosition::HourTens.range(), DigitRange::new(0, 2));
        assert_eq!(DigitPosition::MinuteTens.range(), DigitRange::new(0, 5));
        assert_eq!(DigitPosition::SecondTens.range(), DigitRange::new(0, 5));
        for p in [DigitPosition::HourOnes, DigitPosition::MinuteOnes, DigitPosition::SecondOnes] {
            assert_eq!(p.range(), DigitRange::new(0, 9));
        }
    }

    #[test]
    fn mid_uses_real_division() {
        assert_eq!(DigitRange::new(0, 9).mid(), 4.5);
        assert_eq!(DigitRange::new(0, 5).mid(), 2.5);
        assert_eq!(DigitRange::new(0, 2).mid(), 1.0);
    }

    #[test]
    fn len_and_iter_agree() {
        let r = DigitRange::new(0, 5);
        assert_eq!(r.len(), 6);
        assert_eq!(r.iter().count(), r.len());
    }

    #[test]
    fn index_matches_display_order() {
        for (i, p) in DigitPosition::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    // ── decomposition ─────────────────────────────────────────────────────

    #[test]
    fn every_time_round_trips_through_slots() {
        for secs in 0..SECONDS_PER_DAY {
            let time = Time::from_seconds_of_day(secs);
            let slots = time.slots();
            for slot in slots {
                assert!(slot.range.contains(slot.value), "{time}: {slot:?}");
            }
            assert_eq!(Time::from_slots(&slots), Ok(time));
        }
    }

    #[test]
    fn late_evening_slots() {
        let slots = t(23, 59, 59).slots();
        let values: Vec<u8> = slots.iter().map(|s| s.value).collect();
        assert_eq!(values, [2, 3, 5, 9, 5, 9]);
        assert_eq!(slots[0].range, DigitRange::new(0, 2));
    }

    #[test]
    fn from_slots_accepts_any_order() {
        let mut slots = t(12, 34, 56).slots();
        slots.reverse();
        assert_eq!(Time::from_slots(&slots), Ok(t(12, 34, 56)));
    }

    #[test]
    fn from_slots_rejects_bad_digit() {
        let mut slots = Time::MIDNIGHT.slots();
        slots[2].value = 7;
        assert_eq!(
            Time::from_slots(&slots),
            Err(TimeError::DigitOutOfRange { position: DigitPosition::MinuteTens, value: 7 })
        );
    }

    #[test]
    fn from_slots_rejects_missing_position() {
        let mut slots = Time::MIDNIGHT.slots();
        slots[5] = slots[4];
        assert_eq!(
            Time::from_slots(&slots),
            Err(TimeError::MissingDigit(DigitPosition::SecondOnes))
        );
    }

    #[test]
    fn from_slots_rejects_impossible_hour() {
        let mut slots = Time::MIDNIGHT.slots();
        slots[0].value = 2;
        slots[1].value = 9;
        assert!(matches!(
            Time::from_slots(&slots),
            Err(TimeError::OutOfRange { field: "hours", value: 29, .. })
        ));
    }

    // ── slots ─────────────────────────────────────────────────────────────

    #[test]
    fn slot_new_validates_range() {
        assert!(DigitSlot::new(DigitPosition::HourTens, 2).is_some());
        assert!(DigitSlot::new(DigitPosition::HourTens, 3).is_none());
    }

    #[test]
    fn slot_min_and_active() {
        let slot = DigitSlot::new(DigitPosition::SecondOnes, 0).unwrap();
        assert!(slot.is_min());
        assert!(slot.is_active(0));
        assert!(!slot.is_active(1));
    }
}
