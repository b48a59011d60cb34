//! Traditional lucky-day (kichijitsu) flags.
//!
//! Each flag is an independent predicate over the date and its sexagenary
//! designation; a date may carry any combination of them.

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::SerializeStruct;

use crate::config::{ConfigError, EvaluatorConfig};
use crate::eto::{Branch, EtoCalculator, SexagenaryDesignation, Stem};
use crate::prelude::*;
use crate::season::{Season, SolarMonth};
use crate::CalendarDate;

/// A lucky-day category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum LuckyDayTag {
    /// 天赦日: one stem/branch pair per season
    #[display(fmt = "天赦日")]
    TenshaBi,
    /// 一粒万倍日: two branches per solar month
    #[display(fmt = "一粒万倍日")]
    Ichiryumanbai,
    /// 寅の日
    #[display(fmt = "寅の日")]
    ToraNoHi,
    /// 巳の日
    #[display(fmt = "巳の日")]
    MiNoHi,
    /// 己巳の日, a refinement of 巳の日 that recurs every 60 days
    #[display(fmt = "己巳の日")]
    SuperMi,
}

impl LuckyDayTag {
    /// All tags in evaluation order
    pub const ALL: [Self; 5] = [
        Self::TenshaBi,
        Self::Ichiryumanbai,
        Self::ToraNoHi,
        Self::MiNoHi,
        Self::SuperMi,
    ];

    /// Stable identifier used in serialized output
    pub const fn name(self) -> &'static str {
        match self {
            Self::TenshaBi => "TenshaBi",
            Self::Ichiryumanbai => "Ichiryumanbai",
            Self::ToraNoHi => "ToraNoHi",
            Self::MiNoHi => "MiNoHi",
            Self::SuperMi => "SuperMi",
        }
    }

    /// Display label, e.g. `天赦日`
    pub fn label(self) -> String {
        self.to_string()
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::TenshaBi => {
                "天が万物の罪を赦す日。暦の上で最上の吉日とされ、何事を始めるにも良い。"
            }
            Self::Ichiryumanbai => {
                "一粒の籾が万倍にも実る日。仕事始めや開店、出資など新しく始めることに吉。"
            }
            Self::ToraNoHi => {
                "虎は千里を行って千里を帰るとされ、旅立ちや金運に縁起が良い日。"
            }
            Self::MiNoHi => "弁財天の縁日。金運や財運に縁のある日とされる。",
            Self::SuperMi => {
                "六十日に一度巡る己巳の日。巳の日の中でも特に弁財天の御利益が強いとされる。"
            }
        }
    }
}

impl serde::Serialize for LuckyDayTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("LuckyDayTag", 3)?;
        state.serialize_field("tag", self.name())?;
        state.serialize_field("label", &self.label())?;
        state.serialize_field("description", self.description())?;
        state.end()
    }
}

/// The stem/branch pair making a day 天赦日 in each season.
pub const TENSHA_PAIRS: [(Season, Stem, Branch); 4] = [
    (Season::Spring, Stem::Tsuchinoe, Branch::Tora),
    (Season::Summer, Stem::Kinoe, Branch::Uma),
    (Season::Autumn, Stem::Tsuchinoe, Branch::Saru),
    (Season::Winter, Stem::Kinoe, Branch::Ne),
];

/// Branches of 一粒万倍日 for each solar month (index 0 unused).
///
/// Solar months are numbered by the Gregorian month they begin in, so
/// entry 2 is the month opening at 立春.
pub const ICHIRYUMANBAI_BRANCHES: [[Branch; 2]; 13] = [
    [Branch::Ne, Branch::Ne],      // unused
    [Branch::Ne, Branch::U],       // 小寒
    [Branch::Ushi, Branch::Uma],   // 立春
    [Branch::Tora, Branch::Tori],  // 啓蟄
    [Branch::Ne, Branch::U],       // 清明
    [Branch::U, Branch::Tatsu],    // 立夏
    [Branch::Mi, Branch::Uma],     // 芒種
    [Branch::Uma, Branch::Tori],   // 小暑
    [Branch::Ne, Branch::Hitsuji], // 立秋
    [Branch::U, Branch::Saru],     // 白露
    [Branch::Uma, Branch::Tori],   // 寒露
    [Branch::Tori, Branch::Inu],   // 立冬
    [Branch::Ne, Branch::I],       // 大雪
];

/// Evaluates the lucky-day rule set for civil dates.
///
/// Holds only immutable configuration; every evaluation is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LuckyDayEvaluator {
    calculator: EtoCalculator,
    /// Published 一粒万倍日 lists that replace the solar-month rule for their year
    almanac: BTreeMap<u16, BTreeSet<CalendarDate>>,
}

impl LuckyDayEvaluator {
    /// Evaluator with the built-in calibration and no almanac overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator using a specific calculator
    pub fn with_calculator(calculator: EtoCalculator) -> Self {
        Self {
            calculator,
            almanac: BTreeMap::new(),
        }
    }

    /// Builds an evaluator from validated configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn from_config(config: &EvaluatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let calculator = match &config.anchor {
            Some(anchor) => EtoCalculator::with_anchor(anchor.to_cycle_anchor()?),
            None => EtoCalculator::new(),
        };
        let almanac: BTreeMap<u16, BTreeSet<CalendarDate>> = config
            .ichiryumanbai_overrides
            .iter()
            .map(|entry| (entry.year, entry.dates.iter().copied().collect()))
            .collect();

        tracing::debug!(
            anchor = ?calculator.anchor(),
            override_years = ?almanac.keys().collect::<Vec<_>>(),
            "built lucky-day evaluator"
        );
        Ok(Self {
            calculator,
            almanac,
        })
    }

    pub const fn calculator(&self) -> &EtoCalculator {
        &self.calculator
    }

    /// Sexagenary designation of `date` under this evaluator's calibration
    pub fn classify(&self, date: CalendarDate) -> SexagenaryDesignation {
        self.calculator.classify(date)
    }

    /// Tags applying to `date`, in the order 天赦日, 一粒万倍日, 寅の日, 巳の日, 己巳の日.
    pub fn evaluate(&self, date: CalendarDate) -> Vec<LuckyDayTag> {
        let designation = self.calculator.classify(date);
        let tags: Vec<LuckyDayTag> = LuckyDayTag::ALL
            .into_iter()
            .filter(|&tag| self.applies(tag, date, designation))
            .collect();
        tracing::trace!(%date, %designation, ?tags, "evaluated lucky days");
        tags
    }

    /// Whether `tag` applies to `date`
    pub fn applies(
        &self,
        tag: LuckyDayTag,
        date: CalendarDate,
        designation: SexagenaryDesignation,
    ) -> bool {
        match tag {
            LuckyDayTag::TenshaBi => is_tensha_bi(date, designation),
            LuckyDayTag::Ichiryumanbai => self.is_ichiryumanbai(date, designation),
            LuckyDayTag::ToraNoHi => designation.branch() == Branch::Tora,
            LuckyDayTag::MiNoHi => designation.branch() == Branch::Mi,
            LuckyDayTag::SuperMi => {
                designation.stem() == Stem::Tsuchinoto && designation.branch() == Branch::Mi
            }
        }
    }

    fn is_ichiryumanbai(&self, date: CalendarDate, designation: SexagenaryDesignation) -> bool {
        match self.almanac.get(&date.year()) {
            Some(dates) => dates.contains(&date),
            None => ichiryumanbai_branches(SolarMonth::of(date)).contains(&designation.branch()),
        }
    }
}

fn is_tensha_bi(date: CalendarDate, designation: SexagenaryDesignation) -> bool {
    let season = Season::of(date);
    TENSHA_PAIRS.iter().any(|&(s, stem, branch)| {
        s == season && designation.stem() == stem && designation.branch() == branch
    })
}

/// The two 一粒万倍日 branches of a solar month
pub fn ichiryumanbai_branches(solar_month: SolarMonth) -> [Branch; 2] {
    ICHIRYUMANBAI_BRANCHES[usize::from(solar_month.get())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlmanacYear;
    use proptest::prelude::*;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn evaluate(d: CalendarDate) -> Vec<LuckyDayTag> {
        LuckyDayEvaluator::new().evaluate(d)
    }

    #[test]
    fn test_tensha_bi_2024() {
        // Published 天赦日 for 2024
        let expected = [
            (1, 1),
            (3, 15),
            (5, 30),
            (7, 29),
            (8, 12),
            (10, 11),
            (12, 26),
        ];
        let start = date(2024, 1, 1);
        let found: Vec<(u8, u8)> = (0..366)
            .filter_map(|n| start.checked_add_days(n))
            .filter(|d| evaluate(*d).contains(&LuckyDayTag::TenshaBi))
            .map(|d| (d.month(), d.day()))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_tensha_pair_outside_its_season() {
        // 戊寅 in spring
        let spring = date(2024, 3, 15);
        assert_eq!(LuckyDayEvaluator::new().classify(spring).label(), "戊寅");
        assert!(evaluate(spring).contains(&LuckyDayTag::TenshaBi));

        // Same pair 60 days later, after 立夏
        let summer = date(2024, 5, 14);
        assert_eq!(LuckyDayEvaluator::new().classify(summer).label(), "戊寅");
        assert!(!evaluate(summer).contains(&LuckyDayTag::TenshaBi));
    }

    #[test]
    fn test_ichiryumanbai_matches_published_january_2024() {
        let published: Vec<u8> = vec![1, 13, 16, 25, 28];
        let found: Vec<u8> = (1..=31)
            .map(|d| date(2024, 1, d))
            .filter(|d| evaluate(*d).contains(&LuckyDayTag::Ichiryumanbai))
            .map(|d| d.day())
            .collect();
        assert_eq!(found, published);
    }

    #[test]
    fn test_ichiryumanbai_uses_previous_solar_month_before_threshold() {
        // 2024-01-01 is 甲子: 子 is listed for the 大雪 month, which still applies.
        assert!(evaluate(date(2024, 1, 1)).contains(&LuckyDayTag::Ichiryumanbai));
        // 2024-01-12 is 乙亥: 亥 belongs to the 大雪 month, but 小寒 began on the 6th.
        assert!(!evaluate(date(2024, 1, 12)).contains(&LuckyDayTag::Ichiryumanbai));
    }

    #[test]
    fn test_ichiryumanbai_table_shape() {
        for month in 1..=12 {
            let [a, b] = ichiryumanbai_branches(SolarMonth::new(month).unwrap());
            assert_ne!(a, b, "solar month {month} must list two distinct branches");
        }
    }

    #[test]
    fn test_tora_and_mi() {
        // 2024-01-03 is 丙寅
        assert_eq!(evaluate(date(2024, 1, 3)), vec![LuckyDayTag::ToraNoHi]);
        // 2024-01-18 is 辛巳
        assert_eq!(evaluate(date(2024, 1, 18)), vec![LuckyDayTag::MiNoHi]);
    }

    #[test]
    fn test_super_mi_follows_mi_without_duplicates() {
        // 2024-01-06 is 己巳
        let tags = evaluate(date(2024, 1, 6));
        assert_eq!(tags, vec![LuckyDayTag::MiNoHi, LuckyDayTag::SuperMi]);
    }

    #[test]
    fn test_anchor_day_carries_two_tags() {
        assert_eq!(
            evaluate(date(2024, 1, 1)),
            vec![LuckyDayTag::TenshaBi, LuckyDayTag::Ichiryumanbai]
        );
    }

    #[test]
    fn test_almanac_override_replaces_rule_for_its_year_only() {
        let config = EvaluatorConfig {
            anchor: None,
            ichiryumanbai_overrides: vec![AlmanacYear {
                year: 2024,
                dates: vec![date(2024, 1, 2)],
            }],
        };
        let evaluator = LuckyDayEvaluator::from_config(&config).unwrap();

        assert!(evaluator.evaluate(date(2024, 1, 2)).contains(&LuckyDayTag::Ichiryumanbai));
        assert!(!evaluator.evaluate(date(2024, 1, 1)).contains(&LuckyDayTag::Ichiryumanbai));
        // Other years fall back to the solar-month rule.
        for day in 1..=31 {
            let d = date(2025, 1, day);
            assert_eq!(evaluator.evaluate(d), LuckyDayEvaluator::new().evaluate(d));
        }
    }

    #[test]
    fn test_label_and_description() {
        assert_eq!(LuckyDayTag::TenshaBi.label(), "天赦日");
        assert_eq!(LuckyDayTag::SuperMi.to_string(), "己巳の日");
        for tag in LuckyDayTag::ALL {
            assert!(!tag.description().is_empty());
        }
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(LuckyDayTag::MiNoHi).unwrap();
        assert_eq!(json["tag"], "MiNoHi");
        assert_eq!(json["label"], "巳の日");
        assert_eq!(json["description"], LuckyDayTag::MiNoHi.description());
    }

    proptest! {
        #[test]
        fn prop_super_mi_implies_mi(y in 1u16..=9999, m in 1u8..=12, d in 1u8..=28) {
            let tags = evaluate(date(y, m, d));
            if tags.contains(&LuckyDayTag::SuperMi) {
                prop_assert!(tags.contains(&LuckyDayTag::MiNoHi));
            }
        }

        #[test]
        fn prop_tags_are_ordered_and_unique(y in 1u16..=9999, m in 1u8..=12, d in 1u8..=28) {
            let tags = evaluate(date(y, m, d));
            prop_assert!(tags.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_evaluate_is_referentially_transparent(
            y in 1u16..=9999, m in 1u8..=12, d in 1u8..=28
        ) {
            let evaluator = LuckyDayEvaluator::new();
            let day = date(y, m, d);
            prop_assert_eq!(evaluator.evaluate(day), evaluator.evaluate(day));
            prop_assert_eq!(evaluator.evaluate(day), evaluate(day));
        }
    }
}
