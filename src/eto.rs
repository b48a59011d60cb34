//! Sexagenary (eto) day designations.
//!
//! Days advance one stem and one branch at a time, so only the 60 pairs whose
//! stem and branch indices share parity ever occur.

use serde::ser::SerializeStruct;

use crate::consts::{BRANCH_COUNT, BRANCH_GLYPHS, CYCLE_ANCHOR, CYCLE_LEN, STEM_COUNT, STEM_GLYPHS};
use crate::prelude::*;
use crate::CalendarDate;

/// One of the ten heavenly stems (jikkan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Stem {
    #[display(fmt = "甲")]
    Kinoe,
    #[display(fmt = "乙")]
    Kinoto,
    #[display(fmt = "丙")]
    Hinoe,
    #[display(fmt = "丁")]
    Hinoto,
    #[display(fmt = "戊")]
    Tsuchinoe,
    #[display(fmt = "己")]
    Tsuchinoto,
    #[display(fmt = "庚")]
    Kanoe,
    #[display(fmt = "辛")]
    Kanoto,
    #[display(fmt = "壬")]
    Mizunoe,
    #[display(fmt = "癸")]
    Mizunoto,
}

impl Stem {
    /// All stems in cycle order
    pub const ALL: [Self; 10] = [
        Self::Kinoe,
        Self::Kinoto,
        Self::Hinoe,
        Self::Hinoto,
        Self::Tsuchinoe,
        Self::Tsuchinoto,
        Self::Kanoe,
        Self::Kanoto,
        Self::Mizunoe,
        Self::Mizunoto,
    ];

    /// Stem at `index` (0 = 甲), or `None` past 9.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Position in the stem cycle, 0..=9
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the stem glyph, e.g. `甲`
    pub const fn glyph(self) -> &'static str {
        STEM_GLYPHS[self as usize]
    }

    /// Japanese kun reading
    pub const fn reading(self) -> &'static str {
        match self {
            Self::Kinoe => "きのえ",
            Self::Kinoto => "きのと",
            Self::Hinoe => "ひのえ",
            Self::Hinoto => "ひのと",
            Self::Tsuchinoe => "つちのえ",
            Self::Tsuchinoto => "つちのと",
            Self::Kanoe => "かのえ",
            Self::Kanoto => "かのと",
            Self::Mizunoe => "みずのえ",
            Self::Mizunoto => "みずのと",
        }
    }
}

/// One of the twelve earthly branches (jūnishi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Branch {
    #[display(fmt = "子")]
    Ne,
    #[display(fmt = "丑")]
    Ushi,
    #[display(fmt = "寅")]
    Tora,
    #[display(fmt = "卯")]
    U,
    #[display(fmt = "辰")]
    Tatsu,
    #[display(fmt = "巳")]
    Mi,
    #[display(fmt = "午")]
    Uma,
    #[display(fmt = "未")]
    Hitsuji,
    #[display(fmt = "申")]
    Saru,
    #[display(fmt = "酉")]
    Tori,
    #[display(fmt = "戌")]
    Inu,
    #[display(fmt = "亥")]
    I,
}

impl Branch {
    /// All branches in cycle order
    pub const ALL: [Self; 12] = [
        Self::Ne,
        Self::Ushi,
        Self::Tora,
        Self::U,
        Self::Tatsu,
        Self::Mi,
        Self::Uma,
        Self::Hitsuji,
        Self::Saru,
        Self::Tori,
        Self::Inu,
        Self::I,
    ];

    /// Branch at `index` (0 = 子), or `None` past 11.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Position in the branch cycle, 0..=11
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the branch glyph, e.g. `子`
    pub const fn glyph(self) -> &'static str {
        BRANCH_GLYPHS[self as usize]
    }

    /// Japanese kun reading
    pub const fn reading(self) -> &'static str {
        match self {
            Self::Ne => "ね",
            Self::Ushi => "うし",
            Self::Tora => "とら",
            Self::U => "う",
            Self::Tatsu => "たつ",
            Self::Mi => "み",
            Self::Uma => "うま",
            Self::Hitsuji => "ひつじ",
            Self::Saru => "さる",
            Self::Tori => "とり",
            Self::Inu => "いぬ",
            Self::I => "い",
        }
    }

    /// Zodiac animal associated with the branch
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ne => "鼠",
            Self::Ushi => "牛",
            Self::Tora => "虎",
            Self::U => "兎",
            Self::Tatsu => "龍",
            Self::Mi => "蛇",
            Self::Uma => "馬",
            Self::Hitsuji => "羊",
            Self::Saru => "猿",
            Self::Tori => "鶏",
            Self::Inu => "犬",
            Self::I => "猪",
        }
    }
}

/// A civil date known to fall on a given position of the 60-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleAnchor {
    pub(crate) date: CalendarDate,
    /// Position of the anchor date in the cycle, 0 = 甲子
    pub(crate) cycle_index: u8,
}

impl CycleAnchor {
    /// Anchor at a validated date.
    ///
    /// Returns `None` if `cycle_index` is not below 60.
    pub const fn new(date: CalendarDate, cycle_index: u8) -> Option<Self> {
        if cycle_index >= CYCLE_LEN {
            return None;
        }
        Some(Self { date, cycle_index })
    }

    /// Returns the anchor date
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the cycle position of the anchor date
    pub const fn cycle_index(&self) -> u8 {
        self.cycle_index
    }

    /// Whole days since 1970-01-01 of the anchor date
    pub const fn day_number(&self) -> i64 {
        self.date.day_number()
    }
}

impl Default for CycleAnchor {
    fn default() -> Self {
        CYCLE_ANCHOR
    }
}

/// Position of a day in the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}{}", stem, branch)]
pub struct SexagenaryDesignation {
    cycle_index: u8,
    stem: Stem,
    branch: Branch,
}

impl SexagenaryDesignation {
    /// Designation for any cycle position; wraps modulo 60 in both directions.
    pub fn from_cycle_index(index: i64) -> Self {
        let cycle_index = index.rem_euclid(i64::from(CYCLE_LEN)) as u8;
        Self {
            cycle_index,
            stem: Stem::ALL[usize::from(cycle_index % STEM_COUNT)],
            branch: Branch::ALL[usize::from(cycle_index % BRANCH_COUNT)],
        }
    }

    /// Position in the cycle, 0 (甲子) through 59 (癸亥)
    pub const fn cycle_index(&self) -> u8 {
        self.cycle_index
    }

    /// Returns the heavenly stem
    pub const fn stem(&self) -> Stem {
        self.stem
    }

    /// Returns the earthly branch
    pub const fn branch(&self) -> Branch {
        self.branch
    }

    /// Returns the stem position, 0..=9
    pub const fn stem_index(&self) -> u8 {
        self.stem.index()
    }

    /// Returns the branch position, 0..=11
    pub const fn branch_index(&self) -> u8 {
        self.branch.index()
    }

    /// Stem glyph followed by branch glyph, e.g. `甲子`
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// The following day's designation
    pub fn succ(&self) -> Self {
        Self::from_cycle_index(i64::from(self.cycle_index) + 1)
    }
}

impl serde::Serialize for SexagenaryDesignation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("SexagenaryDesignation", 5)?;
        state.serialize_field("stemIndex", &self.stem_index())?;
        state.serialize_field("branchIndex", &self.branch_index())?;
        state.serialize_field("stem", self.stem.glyph())?;
        state.serialize_field("branch", self.branch.glyph())?;
        state.serialize_field("label", &self.label())?;
        state.end()
    }
}

/// Maps civil dates onto the 60-day cycle by whole-day offset from an anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EtoCalculator {
    anchor: CycleAnchor,
}

impl EtoCalculator {
    /// Calculator calibrated with [`CYCLE_ANCHOR`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator calibrated with a different anchor
    pub const fn with_anchor(anchor: CycleAnchor) -> Self {
        Self { anchor }
    }

    /// Returns the anchor this calculator counts from
    pub const fn anchor(&self) -> CycleAnchor {
        self.anchor
    }

    /// Designation of `date`.
    ///
    /// Depends only on the day offset from the anchor, so it is exact for any
    /// supported date on either side of it.
    pub fn classify(&self, date: CalendarDate) -> SexagenaryDesignation {
        let offset = date.day_number() - self.anchor.day_number();
        SexagenaryDesignation::from_cycle_index(i64::from(self.anchor.cycle_index) + offset)
    }
}
