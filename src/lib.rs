//! Sexagenary day designations (eto) and traditional Japanese lucky-day flags.
//!
//! Every operation is a pure function of a civil [`CalendarDate`]; nothing is
//! read from a clock or a timezone.
//!
//! ```
//! use koyomi::{CalendarDate, LuckyDayTag};
//!
//! let date: CalendarDate = "2024-01-01".parse().unwrap();
//! assert_eq!(koyomi::classify(date).label(), "甲子");
//! assert_eq!(
//!     koyomi::evaluate(date),
//!     vec![LuckyDayTag::TenshaBi, LuckyDayTag::Ichiryumanbai]
//! );
//! ```

mod consts;
mod prelude;
mod range;
mod types;

pub mod config;
pub mod eto;
pub mod grid;
pub mod lucky;
pub mod moon;
pub mod season;

pub use config::{ConfigError, EvaluatorConfig};
pub use consts::*;
pub use eto::{Branch, CycleAnchor, EtoCalculator, SexagenaryDesignation, Stem};
pub use grid::{DayEntry, MonthView};
pub use lucky::{LuckyDayEvaluator, LuckyDayTag};
pub use moon::{MoonPhase, MoonPhaseProvider, PhaseName};
pub use range::{DateRange, RangeError};
pub use season::{Season, SolarMonth};
pub use types::{days_in_month, is_leap_year};

use crate::prelude::*;
use std::ops::Sub;
use std::str::FromStr;
use types::{Day, Month, Year, civil_from_days, days_from_civil};

/// Day number of 0001-01-01, the earliest supported date
const MIN_DAY_NUMBER: i64 = days_from_civil(MIN_YEAR as i64, JANUARY, MIN_DAY);
/// Day number of 9999-12-31, the latest supported date
const MAX_DAY_NUMBER: i64 = days_from_civil(MAX_YEAR as i64, DECEMBER, 31);

/// A civil date with no time-of-day component.
///
/// Always valid once constructed: the day exists in its month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, rejecting anything that is not a real civil date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the year is outside `1..=MAX_YEAR`,
    /// the month outside `1..=12`, or the day outside the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Self::from_ymd(year, month, day).ok_or(ParseError::InvalidDate { year, month, day })
    }

    /// Like [`CalendarDate::new`], usable in constant expressions.
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Option<Self> {
        let Some(year) = Year::new(year) else {
            return None;
        };
        let Some(month) = Month::new(month) else {
            return None;
        };
        match Day::new(day, year, month) {
            Some(day) => Some(Self { year, month, day }),
            None => None,
        }
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// First day of this date's month
    pub const fn first_of_month(&self) -> Self {
        Self {
            day: Day::FIRST,
            ..*self
        }
    }

    /// Last day of this date's month
    pub const fn last_of_month(&self) -> Self {
        Self {
            day: Day::last_of(self.year, self.month),
            ..*self
        }
    }

    /// Whole days since 1970-01-01, negative before it.
    pub const fn day_number(&self) -> i64 {
        days_from_civil(self.year.get() as i64, self.month.get(), self.day.get())
    }

    /// Date for a day number, or `None` outside the supported year range.
    pub fn from_day_number(days: i64) -> Option<Self> {
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&days) {
            return None;
        }
        let (year, month, day) = civil_from_days(days);
        let year = u16::try_from(year).ok()?;
        Self::new(year, month, day).ok()
    }

    /// Adds (or with a negative count, subtracts) whole days.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        Self::from_day_number(self.day_number().checked_add(days)?)
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        // 1970-01-01 was a Thursday.
        let index = (self.day_number() + 4).rem_euclid(i64::from(DAYS_IN_WEEK));
        u8::try_from(index).unwrap_or_default()
    }
}

impl Sub for CalendarDate {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        rhs.days_until(&self)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // ISO format only: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s)",
                parts.len()
            )));
        };

        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl CalendarDate {
    /// Helper to parse a numeric component with better error messages
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Sexagenary designation of `date` using the built-in calibration.
pub fn classify(date: CalendarDate) -> SexagenaryDesignation {
    EtoCalculator::new().classify(date)
}

/// Lucky-day tags of `date` under the default rule set.
pub fn evaluate(date: CalendarDate) -> Vec<LuckyDayTag> {
    LuckyDayEvaluator::new().evaluate(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        let d = "1991-08-15".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(1991, 8, 15));
        assert_eq!(d.year(), 1991);
        assert_eq!(d.month(), 8);
        assert_eq!(d.day(), 15);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let d = " 2024 - 01 - 06 ".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(2024, 1, 6));
    }

    #[test]
    fn test_parse_rejects_partial_and_foreign_formats() {
        assert!(matches!(
            "2024-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "01/06/2024".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-06-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-XX-06".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!("   ".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_invalid_dates_fail_fast() {
        assert_eq!(
            CalendarDate::new(2024, 13, 1),
            Err(ParseError::InvalidDate {
                year: 2024,
                month: 13,
                day: 1
            })
        );
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(ParseError::InvalidDate { .. })
        ));
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(ParseError::InvalidDate { .. })
        ));
        assert!(matches!(
            CalendarDate::new(2024, 4, 31),
            Err(ParseError::InvalidDate { .. })
        ));
        assert!(matches!(
            "1900-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDate { .. })
        ));
        assert!("2000-02-29".parse::<CalendarDate>().is_ok());
    }

    #[test]
    fn test_from_ymd_in_const_context() {
        const LEAP_DAY: Option<CalendarDate> = CalendarDate::from_ymd(2024, 2, 29);
        const NO_SUCH_DAY: Option<CalendarDate> = CalendarDate::from_ymd(2024, 13, 40);

        assert_eq!(LEAP_DAY, Some(date(2024, 2, 29)));
        assert_eq!(NO_SUCH_DAY, None);
        assert_eq!(CalendarDate::from_ymd(2023, 2, 29), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1991, 8, 5).to_string(), "1991-08-05");
        assert_eq!(date(812, 1, 1).to_string(), "0812-01-01");
        assert_eq!(
            CalendarDate::new(2024, 13, 1).unwrap_err().to_string(),
            "Invalid date: 2024-13-01"
        );
    }

    #[test]
    fn test_ordering() {
        assert!(date(1990, 12, 31) < date(1991, 1, 1));
        assert!(date(1991, 1, 31) < date(1991, 2, 1));
        assert!(date(1991, 2, 1) < date(1991, 2, 2));
    }

    #[test]
    fn test_day_arithmetic() {
        let d = date(2024, 2, 28);
        assert_eq!(d.succ(), Some(date(2024, 2, 29)));
        assert_eq!(d.checked_add_days(2), Some(date(2024, 3, 1)));
        assert_eq!(date(2024, 1, 1).checked_add_days(-1), Some(date(2023, 12, 31)));
        assert_eq!(date(2024, 3, 1) - date(2024, 1, 1), 60);
        assert_eq!(date(2024, 1, 1).days_until(&date(2023, 1, 1)), -365);
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(date(2024, 2, 17).first_of_month(), date(2024, 2, 1));
        assert_eq!(date(2024, 2, 17).last_of_month(), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 1).last_of_month(), date(2023, 2, 28));
        assert_eq!(date(2024, 4, 30).last_of_month(), date(2024, 4, 30));
    }

    #[test]
    fn test_day_arithmetic_at_supported_limits() {
        assert_eq!(date(9999, 12, 31).succ(), None);
        assert_eq!(date(1, 1, 1).checked_add_days(-1), None);
        assert_eq!(date(1, 1, 1).checked_add_days(i64::MAX), None);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1970, 1, 1).weekday(), 4); // Thursday
        assert_eq!(date(2000, 1, 1).weekday(), 6); // Saturday
        assert_eq!(date(2024, 1, 1).weekday(), 1); // Monday
        assert_eq!(date(2024, 9, 1).weekday(), 0); // Sunday
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 1, 6);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-01-06""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        for json in [r#""2024-13-01""#, r#""2024-02-30""#, r#""10000-01-01""#, r#""2024""#] {
            let result: Result<CalendarDate, _> = serde_json::from_str(json);
            assert!(result.is_err(), "{json} should be rejected");
        }
    }

    #[test]
    fn test_top_level_helpers() {
        let d = date(2024, 1, 6);
        assert_eq!(classify(d).label(), "己巳");
        assert_eq!(
            evaluate(d),
            vec![LuckyDayTag::MiNoHi, LuckyDayTag::SuperMi]
        );
    }
}
