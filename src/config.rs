//! Evaluator configuration loaded from TOML.
//!
//! ```toml
//! [anchor]
//! date = "2024-01-01"
//! cycle_index = 0
//!
//! [[ichiryumanbai_overrides]]
//! year = 2024
//! dates = ["2024-01-01", "2024-01-13"]
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::CYCLE_LEN;
use crate::eto::CycleAnchor;
use crate::CalendarDate;

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Anchor cycle index outside the 60-day cycle.
    #[error("Invalid anchor cycle index: {0} (must be below {max})", max = CYCLE_LEN)]
    InvalidCycleIndex(u8),

    /// Override list contains a date from another year.
    #[error("Override date {date} is not in year {year}")]
    OverrideYearMismatch { year: u16, date: CalendarDate },

    /// Two override lists for the same year.
    #[error("Duplicate override year: {0}")]
    DuplicateOverrideYear(u16),
}

/// Recalibration of the day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorConfig {
    pub date: CalendarDate,
    pub cycle_index: u8,
}

impl AnchorConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidCycleIndex` if `cycle_index` is not below 60.
    pub fn to_cycle_anchor(self) -> Result<CycleAnchor, ConfigError> {
        CycleAnchor::new(self.date, self.cycle_index)
            .ok_or(ConfigError::InvalidCycleIndex(self.cycle_index))
    }
}

/// Published 一粒万倍日 dates for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacYear {
    pub year: u16,
    pub dates: Vec<CalendarDate>,
}

/// Settings for [`LuckyDayEvaluator`](crate::LuckyDayEvaluator).
///
/// The default uses the built-in anchor and the solar-month rule for every year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluatorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<AnchorConfig>,
    pub ichiryumanbai_overrides: Vec<AlmanacYear>,
}

impl EvaluatorConfig {
    /// Load and validate a config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded evaluator config");
        Ok(config)
    }

    /// Parse and validate config text
    ///
    /// # Errors
    /// Returns `ConfigError` if the text cannot be parsed or validated.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns the first problem found: a cycle index outside the cycle, an
    /// override date outside its year, or a year listed twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(anchor) = &self.anchor {
            anchor.to_cycle_anchor()?;
        }

        let mut seen = BTreeSet::new();
        for entry in &self.ichiryumanbai_overrides {
            if !seen.insert(entry.year) {
                return Err(ConfigError::DuplicateOverrideYear(entry.year));
            }
            if let Some(date) = entry.dates.iter().find(|d| d.year() != entry.year) {
                return Err(ConfigError::OverrideYearMismatch {
                    year: entry.year,
                    date: *date,
                });
            }
        }
        Ok(())
    }
}
