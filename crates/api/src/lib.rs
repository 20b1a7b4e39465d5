//! Clinic Triage API Server
//!
//! HTTP front door for intake staff: serves the symptom registry and rule
//! table, and evaluates assessment requests against the rule engine. Nothing
//! about a patient is kept once the response is sent.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod error;
mod presentation;
mod rate_limit;
mod routes;
mod settings;

pub use error::{ApiError, ErrorBody};
pub use presentation::{style_for, UrgencyStyle, DISCLAIMER};
pub use rate_limit::{create_governor_config, RateLimitConfig};
pub use settings::{ConfigError, LoggingSettings, ServerSettings, Settings};

use knowledge_base::SymptomKey;
use rule_engine::RuleEngine;

/// Application state shared across handlers
pub struct AppState {
    /// Rule engine over the static rule table
    pub engine: RuleEngine,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Prometheus handle, when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(metrics: Option<PrometheusHandle>) -> Self {
        Self {
            engine: RuleEngine::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            metrics,
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub version: String,
    pub uptime_seconds: u64,
    pub rule_count: usize,
    pub symptom_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/symptoms", get(routes::registry::get_symptoms))
        .route("/api/v1/demographics", get(routes::registry::get_demographics))
        .route("/api/v1/rules", get(routes::registry::get_rules))
        .route("/api/v1/assessments", post(routes::assessments::create_assessment))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        rule_count: state.engine.rules().len(),
        symptom_count: SymptomKey::COUNT,
    })
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Initialize logging
pub fn init_logging(settings: &LoggingSettings) -> Result<(), ConfigError> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(settings.max_level()?)
        .with_target(true);

    let installed = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ConfigError::Invalid(format!("tracing subscriber: {}", e)))
}

/// Run the server
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let metrics = if settings.server.metrics {
        Some(PrometheusBuilder::new().install_recorder()?)
    } else {
        None
    };

    let state = Arc::new(AppState::new(metrics));
    let mut app = create_router(state);

    if settings.rate_limit.enabled {
        let governor = create_governor_config(&settings.rate_limit)?;
        app = app.layer(GovernorLayer { config: governor });
        info!(
            "Rate limiting enabled: burst {}, one request per {}s",
            settings.rate_limit.burst_size, settings.rate_limit.per_second
        );
    }

    let addr = settings.server.socket_addr();
    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(AppState::new(None)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        if let Some(content_type) = response.headers().get(header::CONTENT_TYPE) {
            assert_eq!(content_type, "application/json");
        }
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_assessment(body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    fn symptoms_with(present: &[&str]) -> Value {
        let map: serde_json::Map<String, Value> = SymptomKey::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), Value::Bool(present.contains(&k.as_str()))))
            .collect();
        Value::Object(map)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["rule_count"], 12);
        assert_eq!(body["symptom_count"], 15);
    }

    #[tokio::test]
    async fn test_symptoms_in_display_order() {
        let (status, body) = get_json("/api/v1/symptoms").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 15);

        let keys: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["key"].as_str().unwrap())
            .collect();
        let expected: Vec<&str> = SymptomKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, expected);
        assert_eq!(body["data"][0]["category"], "general");
        assert_eq!(body["data"][0]["label"], "Fever (>100.4°F)");
        assert_eq!(body["data"][0]["category_title"], "General");
        assert_eq!(body["data"][5]["category_title"], "Nasal / Eyes");
    }

    #[tokio::test]
    async fn test_demographics() {
        let (status, body) = get_json("/api/v1/demographics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["genders"], json!(["Male", "Female", "Other"]));
        assert_eq!(body["age_groups"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_rules_catalogue() {
        let (status, body) = get_json("/api/v1/rules").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 13);
        assert_eq!(body["data"][0]["id"], "emergency");
        assert_eq!(body["data"][0]["outcome"]["urgency"], "URGENT");
        assert_eq!(body["data"][12]["id"], "insufficient_symptoms");
        assert_eq!(body["data"][12]["priority"], 13);
    }

    #[tokio::test]
    async fn test_assessment_emergency() {
        let (status, body) = post_assessment(json!({
            "symptoms": symptoms_with(&["difficulty_breathing", "fever"]),
            "gender": "Female",
            "age_group": "65+ (Senior)",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["diagnosis"], "POTENTIAL EMERGENCY");
        assert_eq!(body["result"]["urgency"], "URGENT");
        assert_eq!(body["result"]["rule"], "emergency");
        assert_eq!(body["style"]["class"], "urgent");
        assert_eq!(body["patient"]["gender"], "Female");
        assert_eq!(body["patient"]["age_group"], "65+ (Senior)");
        assert_eq!(body["patient"]["duration_long"], false);
        assert_eq!(body["disclaimer"], DISCLAIMER);
        assert!(body["assessment_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_assessment_default_outcome() {
        let (status, body) = post_assessment(json!({
            "symptoms": symptoms_with(&[]),
            "gender": "Other",
            "age_group": "18-39 (Young Adult)",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["diagnosis"], "Insufficient Symptoms for Diagnosis");
        assert_eq!(body["result"]["urgency"], "NONE");
        assert_eq!(body["style"]["label"], "-");
        assert_eq!(body["matched_rules"], json!([]));
    }

    #[tokio::test]
    async fn test_assessment_reports_overlapping_rules() {
        let (status, body) = post_assessment(json!({
            "symptoms": symptoms_with(&["high_fever", "body_aches", "fatigue"]),
            "gender": "Male",
            "age_group": "40-64 (Middle-aged Adult)",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["diagnosis"], "Severe Influenza (Flu)");
        assert_eq!(body["matched_rules"], json!(["severe_influenza", "high_fever"]));
    }

    #[tokio::test]
    async fn test_assessment_missing_key() {
        let mut symptoms = symptoms_with(&["cough"]);
        symptoms.as_object_mut().unwrap().remove("nausea");

        let (status, body) = post_assessment(json!({
            "symptoms": symptoms,
            "gender": "Male",
            "age_group": "0-12 (Child)",
        }))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "missing_symptom_key");
        assert!(body["detail"].as_str().unwrap().contains("nausea"));
    }

    #[tokio::test]
    async fn test_assessment_unknown_key() {
        let mut symptoms = symptoms_with(&[]);
        symptoms
            .as_object_mut()
            .unwrap()
            .insert("rash".to_string(), Value::Bool(true));

        let (status, body) = post_assessment(json!({ "symptoms": symptoms })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "unknown_symptom_key");
    }

    async fn post_raw(body: &str) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_assessment_non_boolean_answer() {
        let mut symptoms = symptoms_with(&[]);
        symptoms["fever"] = Value::String("yes".to_string());

        let (status, body) = post_assessment(json!({ "symptoms": symptoms })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invalid_body");
        assert!(body["detail"].as_str().unwrap().contains("symptoms.fever"));
    }

    #[tokio::test]
    async fn test_assessment_without_symptoms_field() {
        let (status, body) = post_assessment(json!({ "gender": "Male" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invalid_body");
    }

    #[tokio::test]
    async fn test_assessment_malformed_json() {
        let (status, body) = post_raw("{\"symptoms\": {").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_body");
        assert!(!body["detail"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_metrics_disabled() {
        let (status, _) = get_json("/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
