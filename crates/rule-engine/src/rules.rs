//! Clinical Rule Table
//!
//! Rules are listed from highest to lowest clinical priority. Several
//! predicates overlap (severe respiratory infection with both flu rules, high
//! fever with severe influenza); the position in the table decides which
//! outcome a patient receives, so entries must not be reordered.

use crate::urgency::Urgency;
use knowledge_base::SymptomState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable rule identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Emergency,
    SevereInfluenza,
    Influenza,
    ProlongedRespiratoryInfection,
    AllergicRhinitis,
    PossibleAllergicRhinitis,
    CommonCold,
    SevereRespiratoryInfection,
    InfluenzaGastrointestinal,
    MildRespiratoryInfection,
    FeverUnknownSource,
    HighFever,
    /// Unconditional default
    InsufficientSymptoms,
}

impl RuleId {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Emergency => "emergency",
            RuleId::SevereInfluenza => "severe_influenza",
            RuleId::Influenza => "influenza",
            RuleId::ProlongedRespiratoryInfection => "prolonged_respiratory_infection",
            RuleId::AllergicRhinitis => "allergic_rhinitis",
            RuleId::PossibleAllergicRhinitis => "possible_allergic_rhinitis",
            RuleId::CommonCold => "common_cold",
            RuleId::SevereRespiratoryInfection => "severe_respiratory_infection",
            RuleId::InfluenzaGastrointestinal => "influenza_gastrointestinal",
            RuleId::MildRespiratoryInfection => "mild_respiratory_infection",
            RuleId::FeverUnknownSource => "fever_unknown_source",
            RuleId::HighFever => "high_fever",
            RuleId::InsufficientSymptoms => "insufficient_symptoms",
        }
    }

    /// 1-based priority (1 = evaluated first)
    pub fn priority(&self) -> u8 {
        *self as u8 + 1
    }

    /// Whether this is the unconditional default
    pub fn is_default(&self) -> bool {
        matches!(self, RuleId::InsufficientSymptoms)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed outcome attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub diagnosis: &'static str,
    pub recommendation: &'static str,
    pub urgency: Urgency,
    pub explanation: &'static str,
}

/// A predicate over the symptom record and the outcome it selects
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    condition: fn(&SymptomState) -> bool,
    pub outcome: Outcome,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Check whether the rule applies
    pub fn matches(&self, state: &SymptomState) -> bool {
        (self.condition)(state)
    }

    /// 1-based priority
    pub fn priority(&self) -> u8 {
        self.id.priority()
    }
}

const REFER: &str = "REFER TO DOCTOR";
const HOME_REMEDY: &str = "HOME REMEDY RECOMMENDED";

/// Ordered rule table, highest priority first
pub static RULES: [Rule; 12] = [
    Rule {
        id: RuleId::Emergency,
        condition: emergency,
        outcome: Outcome {
            diagnosis: "POTENTIAL EMERGENCY",
            recommendation: "IMMEDIATE DOCTOR REFERRAL REQUIRED",
            urgency: Urgency::Urgent,
            explanation: "Difficulty breathing or chest pain requires immediate medical attention.",
        },
    },
    Rule {
        id: RuleId::SevereInfluenza,
        condition: severe_influenza,
        outcome: Outcome {
            diagnosis: "Severe Influenza (Flu)",
            recommendation: REFER,
            urgency: Urgency::High,
            explanation: "High fever with body aches and fatigue indicates severe flu requiring medical evaluation.",
        },
    },
    Rule {
        id: RuleId::Influenza,
        condition: influenza,
        outcome: Outcome {
            diagnosis: "Influenza (Flu)",
            recommendation: REFER,
            urgency: Urgency::Moderate,
            explanation: "Combination of fever, cough, and body aches is typical of flu.",
        },
    },
    Rule {
        id: RuleId::ProlongedRespiratoryInfection,
        condition: prolonged_respiratory_infection,
        outcome: Outcome {
            diagnosis: "Prolonged Upper Respiratory Infection",
            recommendation: REFER,
            urgency: Urgency::Moderate,
            explanation: "Symptoms lasting more than 10 days may indicate complications or secondary infection.",
        },
    },
    Rule {
        id: RuleId::AllergicRhinitis,
        condition: allergic_rhinitis,
        outcome: Outcome {
            diagnosis: "Allergic Rhinitis (Allergy)",
            recommendation: HOME_REMEDY,
            urgency: Urgency::Low,
            explanation: "Itchy eyes with sneezing and runny nose are typical allergy symptoms. \
                          Over-the-counter antihistamines may help. See doctor if symptoms persist.",
        },
    },
    Rule {
        id: RuleId::PossibleAllergicRhinitis,
        condition: possible_allergic_rhinitis,
        outcome: Outcome {
            diagnosis: "Possible Allergic Rhinitis",
            recommendation: HOME_REMEDY,
            urgency: Urgency::Low,
            explanation: "Sneezing and runny nose without fever suggests allergies. \
                          Monitor symptoms and see doctor if worsening.",
        },
    },
    Rule {
        id: RuleId::CommonCold,
        condition: common_cold,
        outcome: Outcome {
            diagnosis: "Common Cold",
            recommendation: HOME_REMEDY,
            urgency: Urgency::Low,
            explanation: "Typical cold symptoms. Rest, fluids, and over-the-counter medications recommended. \
                          See doctor if symptoms worsen or persist beyond 7-10 days.",
        },
    },
    Rule {
        id: RuleId::SevereRespiratoryInfection,
        condition: severe_respiratory_infection,
        outcome: Outcome {
            diagnosis: "Severe Respiratory Infection",
            recommendation: REFER,
            urgency: Urgency::High,
            explanation: "Severe cough with fever or breathing difficulty requires medical evaluation.",
        },
    },
    Rule {
        id: RuleId::InfluenzaGastrointestinal,
        condition: influenza_gastrointestinal,
        outcome: Outcome {
            diagnosis: "Influenza with Gastrointestinal Symptoms",
            recommendation: REFER,
            urgency: Urgency::Moderate,
            explanation: "Flu-like symptoms with nausea should be evaluated by a doctor.",
        },
    },
    Rule {
        id: RuleId::MildRespiratoryInfection,
        condition: mild_respiratory_infection,
        outcome: Outcome {
            diagnosis: "Mild Upper Respiratory Infection",
            recommendation: HOME_REMEDY,
            urgency: Urgency::Low,
            explanation: "Mild cold symptoms. Rest, stay hydrated, use over-the-counter medications. \
                          See doctor if symptoms worsen or don't improve in 5-7 days.",
        },
    },
    Rule {
        id: RuleId::FeverUnknownSource,
        condition: fever_unknown_source,
        outcome: Outcome {
            diagnosis: "Fever - Unknown Source",
            recommendation: "MONITOR AND CONSIDER DOCTOR VISIT",
            urgency: Urgency::Moderate,
            explanation: "Fever without other clear symptoms. Monitor closely. \
                          See doctor if fever persists beyond 3 days or worsens.",
        },
    },
    Rule {
        id: RuleId::HighFever,
        condition: high_fever,
        outcome: Outcome {
            diagnosis: "High Fever",
            recommendation: REFER,
            urgency: Urgency::High,
            explanation: "High fever requires medical evaluation to determine cause.",
        },
    },
];

/// Outcome when no rule applies
pub static DEFAULT_RULE: Rule = Rule {
    id: RuleId::InsufficientSymptoms,
    condition: always,
    outcome: Outcome {
        diagnosis: "Insufficient Symptoms for Diagnosis",
        recommendation: "MONITOR SYMPTOMS",
        urgency: Urgency::None,
        explanation: "No clear pattern detected. Please enter symptoms.",
    },
};

fn emergency(s: &SymptomState) -> bool {
    s.difficulty_breathing || s.chest_pain
}

fn severe_influenza(s: &SymptomState) -> bool {
    s.high_fever && s.body_aches && s.fatigue
}

fn influenza(s: &SymptomState) -> bool {
    s.fever && s.cough && s.body_aches
}

fn prolonged_respiratory_infection(s: &SymptomState) -> bool {
    s.duration_long && (s.cough || s.sore_throat)
}

fn allergic_rhinitis(s: &SymptomState) -> bool {
    s.itchy_eyes && s.sneezing && s.runny_nose
}

fn possible_allergic_rhinitis(s: &SymptomState) -> bool {
    s.sneezing && s.runny_nose && !s.fever
}

fn common_cold(s: &SymptomState) -> bool {
    (s.runny_nose || s.sneezing) && s.sore_throat && !s.fever
}

fn severe_respiratory_infection(s: &SymptomState) -> bool {
    s.severe_cough && (s.fever || s.difficulty_breathing)
}

fn influenza_gastrointestinal(s: &SymptomState) -> bool {
    s.fever && s.nausea && (s.body_aches || s.headache)
}

fn mild_respiratory_infection(s: &SymptomState) -> bool {
    (s.cough || s.sore_throat || s.runny_nose) && !s.fever
}

fn fever_unknown_source(s: &SymptomState) -> bool {
    s.fever && !s.high_fever
}

fn high_fever(s: &SymptomState) -> bool {
    s.high_fever
}

fn always(_: &SymptomState) -> bool {
    true
}
