//! Symptom Vocabulary and Intake Prompts
//!
//! Defines the closed set of symptom keys recognized by the rule table and the
//! questions shown to intake staff for each of them.

use crate::error::SymptomError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized symptom keys, in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomKey {
    /// Temperature above 100.4°F
    Fever,
    /// Temperature above 103°F
    HighFever,
    Cough,
    /// Severe or persistent cough
    SevereCough,
    SoreThroat,
    /// Runny or stuffy nose
    RunnyNose,
    Sneezing,
    /// Body aches or muscle pain
    BodyAches,
    /// Unusual fatigue or weakness
    Fatigue,
    /// Difficulty breathing or shortness of breath
    DifficultyBreathing,
    ChestPain,
    /// Itchy or watery eyes
    ItchyEyes,
    Headache,
    /// Nausea or vomiting
    Nausea,
    /// Symptoms have lasted more than 10 days
    DurationLong,
}

impl SymptomKey {
    /// Number of recognized keys
    pub const COUNT: usize = 15;

    /// Every key in canonical display order
    pub const ALL: [SymptomKey; Self::COUNT] = [
        SymptomKey::Fever,
        SymptomKey::HighFever,
        SymptomKey::Cough,
        SymptomKey::SevereCough,
        SymptomKey::SoreThroat,
        SymptomKey::RunnyNose,
        SymptomKey::Sneezing,
        SymptomKey::BodyAches,
        SymptomKey::Fatigue,
        SymptomKey::DifficultyBreathing,
        SymptomKey::ChestPain,
        SymptomKey::ItchyEyes,
        SymptomKey::Headache,
        SymptomKey::Nausea,
        SymptomKey::DurationLong,
    ];

    /// Get the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomKey::Fever => "fever",
            SymptomKey::HighFever => "high_fever",
            SymptomKey::Cough => "cough",
            SymptomKey::SevereCough => "severe_cough",
            SymptomKey::SoreThroat => "sore_throat",
            SymptomKey::RunnyNose => "runny_nose",
            SymptomKey::Sneezing => "sneezing",
            SymptomKey::BodyAches => "body_aches",
            SymptomKey::Fatigue => "fatigue",
            SymptomKey::DifficultyBreathing => "difficulty_breathing",
            SymptomKey::ChestPain => "chest_pain",
            SymptomKey::ItchyEyes => "itchy_eyes",
            SymptomKey::Headache => "headache",
            SymptomKey::Nausea => "nausea",
            SymptomKey::DurationLong => "duration_long",
        }
    }

    /// Position in canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Question asked to intake staff
    pub fn prompt(&self) -> &'static str {
        REGISTRY[self.index()].1
    }

    /// Short checkbox label for form-style input
    pub fn label(&self) -> &'static str {
        match self {
            SymptomKey::Fever => "Fever (>100.4°F)",
            SymptomKey::HighFever => "High Fever (>103°F)",
            SymptomKey::Cough => "Cough",
            SymptomKey::SevereCough => "Severe/Persistent Cough",
            SymptomKey::SoreThroat => "Sore Throat",
            SymptomKey::RunnyNose => "Runny / Stuffy Nose",
            SymptomKey::Sneezing => "Sneezing",
            SymptomKey::BodyAches => "Body Aches",
            SymptomKey::Fatigue => "Fatigue/Weakness",
            SymptomKey::DifficultyBreathing => "Difficulty Breathing",
            SymptomKey::ChestPain => "Chest Pain",
            SymptomKey::ItchyEyes => "Itchy / Watery Eyes",
            SymptomKey::Headache => "Headache",
            SymptomKey::Nausea => "Nausea/Vomiting",
            SymptomKey::DurationLong => "Symptoms lasting more than 10 days",
        }
    }

    /// Input grouping
    pub fn category(&self) -> SymptomCategory {
        match self {
            SymptomKey::Fever
            | SymptomKey::HighFever
            | SymptomKey::Fatigue
            | SymptomKey::BodyAches
            | SymptomKey::Headache
            | SymptomKey::Nausea => SymptomCategory::General,
            SymptomKey::Cough
            | SymptomKey::SevereCough
            | SymptomKey::SoreThroat
            | SymptomKey::DifficultyBreathing
            | SymptomKey::ChestPain => SymptomCategory::Respiratory,
            SymptomKey::RunnyNose | SymptomKey::Sneezing | SymptomKey::ItchyEyes => {
                SymptomCategory::NasalEyes
            }
            SymptomKey::DurationLong => SymptomCategory::Duration,
        }
    }
}

impl fmt::Display for SymptomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomKey {
    type Err = SymptomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymptomKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SymptomError::UnknownSymptomKey(s.to_string()))
    }
}

/// Grouping used to lay out symptom inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomCategory {
    General,
    Respiratory,
    NasalEyes,
    Duration,
}

impl SymptomCategory {
    /// Every category in display order
    pub const ALL: [SymptomCategory; 4] = [
        SymptomCategory::General,
        SymptomCategory::Respiratory,
        SymptomCategory::NasalEyes,
        SymptomCategory::Duration,
    ];

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            SymptomCategory::General => "General",
            SymptomCategory::Respiratory => "Respiratory",
            SymptomCategory::NasalEyes => "Nasal / Eyes",
            SymptomCategory::Duration => "Symptom Duration",
        }
    }
}

static REGISTRY: [(SymptomKey, &str); SymptomKey::COUNT] = [
    (SymptomKey::Fever, "Does the patient have a fever (temperature > 100.4°F)?"),
    (SymptomKey::HighFever, "Is the fever very high (temperature > 103°F)?"),
    (SymptomKey::Cough, "Does the patient have a cough?"),
    (SymptomKey::SevereCough, "Is the cough severe or persistent?"),
    (SymptomKey::SoreThroat, "Does the patient have a sore throat?"),
    (SymptomKey::RunnyNose, "Does the patient have a runny or stuffy nose?"),
    (SymptomKey::Sneezing, "Does the patient have sneezing?"),
    (SymptomKey::BodyAches, "Does the patient have body aches or muscle pain?"),
    (SymptomKey::Fatigue, "Does the patient experience unusual fatigue or weakness?"),
    (
        SymptomKey::DifficultyBreathing,
        "Does the patient have difficulty breathing or shortness of breath?",
    ),
    (SymptomKey::ChestPain, "Does the patient have chest pain?"),
    (SymptomKey::ItchyEyes, "Does the patient have itchy or watery eyes?"),
    (SymptomKey::Headache, "Does the patient have a headache?"),
    (SymptomKey::Nausea, "Does the patient have nausea or vomiting?"),
    (SymptomKey::DurationLong, "Have symptoms lasted more than 10 days?"),
];

/// List every recognized symptom with its prompt, in canonical display order
pub fn list_symptoms() -> &'static [(SymptomKey, &'static str)] {
    &REGISTRY
}

/// Keys belonging to one category, in canonical order
pub fn symptoms_in(category: SymptomCategory) -> impl Iterator<Item = SymptomKey> {
    SymptomKey::ALL
        .into_iter()
        .filter(move |key| key.category() == category)
}
