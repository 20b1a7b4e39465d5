//! Urgency Tiers

use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How quickly a patient should be seen.
///
/// Ordered so that `Urgent` compares greatest. `None` is the sentinel carried
/// by the insufficient-symptoms outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Urgency {
    None,
    Low,
    Moderate,
    High,
    Urgent,
}

impl Urgency {
    /// Every tier, most urgent first
    pub const ALL: [Urgency; 5] = [
        Urgency::Urgent,
        Urgency::High,
        Urgency::Moderate,
        Urgency::Low,
        Urgency::None,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Urgent => "URGENT",
            Urgency::High => "HIGH",
            Urgency::Moderate => "MODERATE",
            Urgency::Low => "LOW",
            Urgency::None => "NONE",
        }
    }

    /// Follow-up advice for intake staff
    pub fn follow_up(&self) -> &'static str {
        match self {
            Urgency::Urgent => "Patient should see a doctor IMMEDIATELY or visit emergency room.",
            Urgency::High => {
                "Schedule doctor appointment as soon as possible (same day if available)."
            }
            Urgency::Moderate => "Schedule doctor appointment within 1-2 days.",
            Urgency::Low | Urgency::None => {
                "Home care recommended. See doctor if symptoms worsen or persist."
            }
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .iter()
            .copied()
            .find(|u| u.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::UnknownUrgency(s.to_string()))
    }
}
