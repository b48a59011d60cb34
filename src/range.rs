use std::iter;

use crate::{CalendarDate, MIN_DAY, ParseError, prelude::*};

/// An inclusive span of civil dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error building a boundary date.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Every day of one Gregorian month.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` if the year or month is out of range.
    pub fn month(year: u16, month: u8) -> Result<Self, RangeError> {
        Ok(Self::month_of(CalendarDate::new(year, month, MIN_DAY)?))
    }

    /// Every day of the month containing `date`
    pub fn month_of(date: CalendarDate) -> Self {
        Self {
            start: date.first_of_month(),
            end: date.last_of_month(),
        }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days in the range (at least 1)
    pub const fn len(&self) -> usize {
        (self.start.days_until(&self.end) + 1) as usize
    }

    /// Always `false`: a valid range holds at least its start date
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates every day from start to end, inclusive
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let end = self.end;
        iter::successors(Some(self.start), move |d| d.succ().filter(|next| *next <= end))
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = Box<dyn Iterator<Item = CalendarDate>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
