//! Intake Form Vocabulary
//!
//! Demographic choices offered to intake staff and yes/no answer parsing for
//! question-by-question collection. Demographics are display-only.

use serde::{Deserialize, Serialize};

/// Suggested gender choices
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Suggested age group choices
pub const AGE_GROUP_OPTIONS: [&str; 5] = [
    "0-12 (Child)",
    "13-17 (Adolescent)",
    "18-39 (Young Adult)",
    "40-64 (Middle-aged Adult)",
    "65+ (Senior)",
];

/// Demographic fields carried alongside an assessment.
///
/// Free-form; never validated against the option lists and never consulted
/// by the rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub gender: String,
    pub age_group: String,
}

impl PatientInfo {
    /// Create patient info
    pub fn new(gender: impl Into<String>, age_group: impl Into<String>) -> Self {
        Self {
            gender: gender.into(),
            age_group: age_group.into(),
        }
    }
}

/// Parse a yes/no answer; `None` means ask again
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
