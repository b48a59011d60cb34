//! Moon phase collaborator interface.
//!
//! The crate does no astronomy of its own; callers plug in a provider.

use serde::Serialize;

use crate::prelude::*;
use crate::CalendarDate;

/// One of the four principal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum PhaseName {
    #[display(fmt = "新月")]
    NewMoon,
    #[display(fmt = "上弦")]
    FirstQuarter,
    #[display(fmt = "満月")]
    FullMoon,
    #[display(fmt = "下弦")]
    LastQuarter,
}

impl PhaseName {
    /// Elongation of the moon at this phase, in degrees
    pub const fn angle(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FirstQuarter => 90.0,
            Self::FullMoon => 180.0,
            Self::LastQuarter => 270.0,
        }
    }

    /// Principal phase within `tolerance` degrees of `phase_angle`, if any.
    pub fn near(phase_angle: f64, tolerance: f64) -> Option<Self> {
        let angle = phase_angle.rem_euclid(360.0);
        [Self::NewMoon, Self::FirstQuarter, Self::FullMoon, Self::LastQuarter]
            .into_iter()
            .find(|phase| {
                let diff = (angle - phase.angle()).abs();
                diff.min(360.0 - diff) <= tolerance
            })
    }
}

/// Moon phase on a given day, as reported by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhase {
    /// Sun-moon elongation in degrees, `[0, 360)`
    pub phase_angle: f64,
    /// Illuminated fraction of the disc, in percent
    pub illumination: f64,
    /// Approximate days since the last new moon
    pub age_days: f64,
    pub name: Option<PhaseName>,
}

/// Source of moon phase data, typically backed by an astronomy library.
pub trait MoonPhaseProvider {
    fn phase(&self, date: CalendarDate) -> MoonPhase;
}
