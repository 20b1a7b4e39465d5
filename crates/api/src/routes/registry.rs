//! Registry Routes
//!
//! Read-only views of the symptom vocabulary, demographic choices, and rule
//! table, for front ends that render the intake form.

use axum::{extract::State, Json};
use knowledge_base::{list_symptoms, SymptomCategory, SymptomKey, AGE_GROUP_OPTIONS, GENDER_OPTIONS};
use rule_engine::{Outcome, RuleId};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// One symptom input
#[derive(Debug, Serialize)]
pub struct SymptomEntry {
    pub key: SymptomKey,
    pub prompt: &'static str,
    pub label: &'static str,
    pub category: SymptomCategory,
    /// Section heading for the category
    pub category_title: &'static str,
}

/// Response for symptoms endpoint
#[derive(Debug, Serialize)]
pub struct SymptomResponse {
    pub data: Vec<SymptomEntry>,
    pub count: usize,
}

/// Response for demographics endpoint
#[derive(Debug, Serialize)]
pub struct DemographicsResponse {
    pub genders: &'static [&'static str],
    pub age_groups: &'static [&'static str],
}

/// One rule in the catalogue
#[derive(Debug, Serialize)]
pub struct RuleEntry {
    pub priority: u8,
    pub id: RuleId,
    pub outcome: Outcome,
}

/// Response for rules endpoint
#[derive(Debug, Serialize)]
pub struct RuleResponse {
    pub data: Vec<RuleEntry>,
    pub count: usize,
}

/// List symptom inputs in display order
pub async fn get_symptoms() -> Json<SymptomResponse> {
    let data: Vec<SymptomEntry> = list_symptoms()
        .iter()
        .map(|(key, prompt)| SymptomEntry {
            key: *key,
            prompt: *prompt,
            label: key.label(),
            category: key.category(),
            category_title: key.category().title(),
        })
        .collect();

    Json(SymptomResponse {
        count: data.len(),
        data,
    })
}

/// List demographic choices
pub async fn get_demographics() -> Json<DemographicsResponse> {
    Json(DemographicsResponse {
        genders: &GENDER_OPTIONS,
        age_groups: &AGE_GROUP_OPTIONS,
    })
}

/// List rules in priority order, default last
pub async fn get_rules(State(state): State<Arc<AppState>>) -> Json<RuleResponse> {
    let data: Vec<RuleEntry> = state
        .engine
        .catalogue()
        .map(|rule| RuleEntry {
            priority: rule.priority(),
            id: rule.id,
            outcome: rule.outcome,
        })
        .collect();

    Json(RuleResponse {
        count: data.len(),
        data,
    })
}
