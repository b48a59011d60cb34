use crate::CalendarDate;
use crate::eto::CycleAnchor;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Day number of 0000-03-01 counted from 1970-01-01
pub(crate) const EPOCH_SHIFT: i64 = 719_468;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Length of the sexagenary cycle
pub const CYCLE_LEN: u8 = 60;
/// Number of heavenly stems (jikkan)
pub const STEM_COUNT: u8 = 10;
/// Number of earthly branches (jūnishi)
pub const BRANCH_COUNT: u8 = 12;

/// Heavenly stem glyphs, 甲 through 癸
pub const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Earthly branch glyphs, 子 through 亥
pub const BRANCH_GLYPHS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Calibration point of the day cycle: 2024-01-01 was a 甲子 day.
///
/// Agrees with `(JDN + 49) mod 60`, with 2000-01-01 being 戊午 and with
/// 1949-10-01 being 甲子.
pub const CYCLE_ANCHOR: CycleAnchor = match CalendarDate::from_ymd(2024, 1, 1) {
    Some(date) => CycleAnchor {
        date,
        cycle_index: 0,
    },
    None => panic!("cycle anchor date does not exist"),
};
