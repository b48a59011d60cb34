//! Season and solar-month bucketing by fixed approximate solar-term dates.
//!
//! Every threshold includes its onset day: a date on the onset belongs to the
//! period that begins there.

use serde::Serialize;

use crate::consts::{DECEMBER, JANUARY, MAX_MONTH};
use crate::prelude::*;
use crate::CalendarDate;

/// One of the four traditional seasons, each opening on a "risshi" solar term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[display(fmt = "春")]
    Spring,
    #[display(fmt = "夏")]
    Summer,
    #[display(fmt = "秋")]
    Autumn,
    #[display(fmt = "冬")]
    Winter,
}

/// Onset `(month, day)` of each season, in calendar order: 立春, 立夏, 立秋, 立冬.
pub const SEASON_BOUNDARIES: [(Season, (u8, u8)); 4] = [
    (Season::Spring, (2, 4)),
    (Season::Summer, (5, 6)),
    (Season::Autumn, (8, 8)),
    (Season::Winter, (11, 7)),
];

/// Onset day of the solar month beginning in each Gregorian month (index 0 unused).
pub const SOLAR_MONTH_THRESHOLDS: [u8; 13] = [
    0, // index 0 unused (months are 1-indexed)
    6, // 小寒
    4, // 立春
    6, // 啓蟄
    5, // 清明
    6, // 立夏
    6, // 芒種
    7, // 小暑
    8, // 立秋
    8, // 白露
    8, // 寒露
    7, // 立冬
    7, // 大雪
];

/// Solar term opening each solar month (index 0 unused).
const SOLAR_TERM_NAMES: [&str; 13] = [
    "", "小寒", "立春", "啓蟄", "清明", "立夏", "芒種", "小暑", "立秋", "白露", "寒露", "立冬",
    "大雪",
];

impl Season {
    /// Season containing `date`. Winter runs from 立冬 across New Year to the day before 立春.
    pub fn of(date: CalendarDate) -> Self {
        let month_day = (date.month(), date.day());
        SEASON_BOUNDARIES
            .iter()
            .rev()
            .find(|(_, onset)| month_day >= *onset)
            .map_or(Self::Winter, |&(season, _)| season)
    }

    /// Onset `(month, day)` of this season
    pub fn onset(self) -> (u8, u8) {
        SEASON_BOUNDARIES
            .iter()
            .find(|(season, _)| *season == self)
            .map_or((0, 0), |&(_, onset)| onset)
    }
}

/// A solar month, numbered by the Gregorian month in which it begins (1..=12).
///
/// Solar month 1 opens at 小寒 in early January and runs to the day before 立春.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize)]
#[display(fmt = "{_0}")]
pub struct SolarMonth(u8);

impl SolarMonth {
    /// Solar month number `value`, or `None` outside `1..=12`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=MAX_MONTH).contains(&value).then_some(Self(value))
    }

    /// Solar month containing `date`.
    pub fn of(date: CalendarDate) -> Self {
        let month = date.month();
        if date.day() >= SOLAR_MONTH_THRESHOLDS[usize::from(month)] {
            Self(month)
        } else if month == JANUARY {
            Self(DECEMBER)
        } else {
            Self(month - 1)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Day of the Gregorian month on which this solar month begins
    pub const fn onset_day(self) -> u8 {
        SOLAR_MONTH_THRESHOLDS[self.0 as usize]
    }

    /// Name of the solar term opening this solar month
    pub const fn term_name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.0 as usize]
    }
}

/// Season containing `date`
pub fn season_of(date: CalendarDate) -> Season {
    Season::of(date)
}

/// Solar month containing `date`
pub fn solar_month_of(date: CalendarDate) -> SolarMonth {
    SolarMonth::of(date)
}
