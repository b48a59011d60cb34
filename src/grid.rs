//! Month views and per-day detail records for calendar displays.

use serde::Serialize;

use crate::consts::MIN_DAY;
use crate::lucky::{LuckyDayEvaluator, LuckyDayTag};
use crate::moon::{MoonPhase, MoonPhaseProvider};
use crate::prelude::*;
use crate::range::DateRange;
use crate::{CalendarDate, ParseError, SexagenaryDesignation};

/// Everything a calendar cell or detail panel shows for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub date: CalendarDate,
    pub designation: SexagenaryDesignation,
    pub lucky_days: Vec<LuckyDayTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon: Option<MoonPhase>,
}

impl DayEntry {
    pub fn new(date: CalendarDate, evaluator: &LuckyDayEvaluator) -> Self {
        Self {
            date,
            designation: evaluator.classify(date),
            lucky_days: evaluator.evaluate(date),
            moon: None,
        }
    }

    /// Attaches the moon phase reported by `provider`
    #[must_use]
    pub fn with_moon(mut self, provider: &dyn MoonPhaseProvider) -> Self {
        self.moon = Some(provider.phase(self.date));
        self
    }

    pub fn is_lucky(&self) -> bool {
        !self.lucky_days.is_empty()
    }
}

/// A displayed Gregorian month.
///
/// Navigation returns new values; the view itself never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "first.year()", "first.month()")]
pub struct MonthView {
    first: CalendarDate,
}

impl MonthView {
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the year or month is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        CalendarDate::new(year, month, MIN_DAY).map(Self::containing)
    }

    /// The month `date` falls in
    pub const fn containing(date: CalendarDate) -> Self {
        Self {
            first: date.first_of_month(),
        }
    }

    pub const fn year(&self) -> u16 {
        self.first.year()
    }

    pub const fn month(&self) -> u8 {
        self.first.month()
    }

    /// The following month, or `None` after December 9999
    pub fn next_month(&self) -> Option<Self> {
        self.last_day().succ().map(Self::containing)
    }

    /// The preceding month, or `None` before January of year 1
    pub fn prev_month(&self) -> Option<Self> {
        self.first.checked_add_days(-1).map(Self::containing)
    }

    pub const fn first_day(&self) -> CalendarDate {
        self.first
    }

    pub fn last_day(&self) -> CalendarDate {
        self.first.last_of_month()
    }

    /// Empty cells before the 1st in a grid whose weeks start on Sunday
    pub fn leading_blanks(&self) -> u8 {
        self.first.weekday()
    }

    pub fn days(&self) -> DateRange {
        DateRange::month_of(self.first)
    }

    /// Detail records for every day of the month
    pub fn entries(&self, evaluator: &LuckyDayEvaluator) -> Vec<DayEntry> {
        self.days()
            .iter()
            .map(|date| DayEntry::new(date, evaluator))
            .collect()
    }
}
