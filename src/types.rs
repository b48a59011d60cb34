use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, EPOCH_SHIFT, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, or `None` if the value is 0 or > `MAX_YEAR`.
    pub(crate) const fn new(value: u16) -> Option<Self> {
        if value < MIN_YEAR || value > MAX_YEAR {
            return None;
        }
        match NonZeroU16::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, or `None` if the value is 0 or > `MAX_MONTH`.
    pub(crate) const fn new(value: u8) -> Option<Self> {
        if value > MAX_MONTH {
            return None;
        }
        match NonZeroU8::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days in this month of `year`
    pub const fn length_in(self, year: u16) -> u8 {
        if self.get() == FEBRUARY && is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.get() as usize]
        }
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// The 1st of any month
    pub(crate) const FIRST: Self = Self(NonZeroU8::MIN);

    /// Last day of the given month
    pub(crate) const fn last_of(year: Year, month: Month) -> Self {
        match NonZeroU8::new(month.length_in(year.get())) {
            Some(last) => Self(last),
            None => Self::FIRST,
        }
    }

    /// Creates a new Day, or `None` if the value is 0 or past the end of the month.
    pub(crate) const fn new(value: u8, year: Year, month: Month) -> Option<Self> {
        if value > month.length_in(year.get()) {
            return None;
        }
        match NonZeroU8::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1-12.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    match Month::new(month) {
        Some(month) => Some(month.length_in(year)),
        None => None,
    }
}

/// Number of whole days from 1970-01-01 to the given proleptic Gregorian date.
///
/// Counts in a year shifted to start on March 1st so the leap day is the last
/// day of the shifted year.
pub const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= FEBRUARY { year - 1 } else { year };
    let era = y.div_euclid(GREGORIAN_CYCLE as i64);
    let yoe = y - era * GREGORIAN_CYCLE as i64;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_GREGORIAN_CYCLE + doe - EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`]: `(year, month, day)` for a day number.
pub const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let doe = z - era * DAYS_PER_GREGORIAN_CYCLE;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * GREGORIAN_CYCLE as i64 + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}
