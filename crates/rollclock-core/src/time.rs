use std::fmt;
use std::sync::Arc;

use chrono::Timelike;
use parking_lot::RwLock;

use crate::digit::DigitPosition;

pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Error returned when building a [`Time`] from out-of-range parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// An hours/minutes/seconds field exceeds its maximum.
    OutOfRange { field: &'static str, value: u32, max: u32 },
    /// A digit slot holds a value outside its position's range.
    DigitOutOfRange { position: DigitPosition, value: u8 },
    /// No slot was supplied for this position.
    MissingDigit(DigitPosition),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::OutOfRange { field, value, max } => {
                write!(f, "{field} {value} out of range 0..={max}")
            }
            TimeError::DigitOutOfRange { position, value } => {
                let r = position.range();
                write!(f, "{} digit {value} out of range {}..={}", position.name(), r.min, r.max)
            }
            TimeError::MissingDigit(position) => write!(f, "missing {} digit", position.name()),
        }
    }
}

impl std::error::Error for TimeError {}

/// Wall-clock time of day, second resolution.
///
/// Invariant: `hours < 24`, `minutes < 60`, `seconds < 60`. Leap seconds are
/// not represented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Time {
    pub const MIDNIGHT: Time = Time { hours: 0, minutes: 0, seconds: 0 };

    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, TimeError> {
        check("hours", hours, 23)?;
        check("minutes", minutes, 59)?;
        check("seconds", seconds, 59)?;
        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        })
    }

    /// Builds a time from seconds since midnight. Values past one day wrap.
    pub fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hours: (secs / 3600) as u8,
            minutes: (secs / 60 % 60) as u8,
            seconds: (secs % 60) as u8,
        }
    }

    #[inline]
    pub fn hours(self) -> u32 {
        u32::from(self.hours)
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        u32::from(self.minutes)
    }

    #[inline]
    pub fn seconds(self) -> u32 {
        u32::from(self.seconds)
    }

    #[inline]
    pub fn seconds_of_day(self) -> u32 {
        self.hours() * 3600 + self.minutes() * 60 + self.seconds()
    }

    /// The time one second later, wrapping 23:59:59 to 00:00:00.
    #[inline]
    pub fn next_second(self) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + 1)
    }
}

fn check(field: &'static str, value: u32, max: u32) -> Result<(), TimeError> {
    if value > max {
        Err(TimeError::OutOfRange { field, value, max })
    } else {
        Ok(())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

// ── sources ───────────────────────────────────────────────────────────────

/// Produces the current time of day.
///
/// Sampling is infallible; a platform that cannot provide time is expected
/// to handle that before it reaches the clock.
pub trait TimeSource: Send + Sync {
    fn sample(&self) -> Time;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline]
    fn sample(&self) -> Time {
        (**self).sample()
    }
}

/// Local wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn sample(&self) -> Time {
        let now = chrono::Local::now();
        // chrono encodes a leap second in the nanosecond field, so `second()`
        // already stays within 0..=59.
        Time {
            hours: now.hour() as u8,
            minutes: now.minute() as u8,
            seconds: now.second() as u8,
        }
    }
}

/// Source that reports whatever time was last stored in it.
#[derive(Debug, Default)]
pub struct FixedTimeSource {
    time: RwLock<Time>,
}

impl FixedTimeSource {
    pub fn new(time: Time) -> Self {
        Self { time: RwLock::new(time) }
    }

    pub fn set(&self, time: Time) {
        *self.time.write() = time;
    }

    /// Moves the stored time forward by one second and returns it.
    pub fn advance(&self) -> Time {
        let mut t = self.time.write();
        *t = t.next_second();
        *t
    }
}

impl TimeSource for FixedTimeSource {
    fn sample(&self) -> Time {
        *self.time.read()
    }
}
