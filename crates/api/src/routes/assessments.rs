//! Assessment Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use knowledge_base::PatientInfo;
use rule_engine::{Assessment, AssessmentResult, RuleId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::presentation::{style_for, UrgencyStyle, DISCLAIMER};
use crate::AppState;

/// Request body for a new assessment
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    /// One answer per recognized symptom key
    pub symptoms: BTreeMap<String, bool>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age_group: String,
}

/// Patient details echoed back for display
#[derive(Debug, Serialize)]
pub struct PatientSummary {
    #[serde(flatten)]
    pub info: PatientInfo,
    pub duration_long: bool,
}

/// Response for a completed assessment
#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub assessment_id: Uuid,
    pub assessed_at: DateTime<Utc>,
    pub patient: PatientSummary,
    pub result: AssessmentResult,
    /// Every rule that applied, in priority order
    pub matched_rules: Vec<RuleId>,
    pub style: UrgencyStyle,
    pub disclaimer: &'static str,
}

/// Evaluate one patient's symptoms
pub async fn create_assessment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let (request, assessment) = match accept(&state, payload) {
        Ok(accepted) => accepted,
        Err(e) => {
            metrics::counter!("assessments_rejected_total", "reason" => e.code()).increment(1);
            return Err(e);
        }
    };
    let Assessment {
        symptoms,
        result,
        matched_rules,
    } = assessment;

    metrics::counter!(
        "assessments_total",
        "urgency" => result.urgency.as_str(),
        "rule" => result.rule.as_str()
    )
    .increment(1);

    let assessment_id = Uuid::new_v4();
    info!(
        "Assessment {} -> {} [{}]",
        assessment_id, result.rule, result.urgency
    );

    Ok(Json(AssessmentResponse {
        assessment_id,
        assessed_at: Utc::now(),
        patient: PatientSummary {
            info: PatientInfo::new(request.gender, request.age_group),
            duration_long: symptoms.duration_long,
        },
        style: style_for(result.urgency),
        result,
        matched_rules,
        disclaimer: DISCLAIMER,
    }))
}

/// Parse the body and run it through the engine's checked entry point
fn accept(
    state: &AppState,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<(AssessmentRequest, Assessment), ApiError> {
    let Json(request) = payload?;
    let assessment = state.engine.assess(
        request
            .symptoms
            .iter()
            .map(|(key, present)| (key.as_str(), *present)),
    )?;
    Ok((request, assessment))
}
