//! # API REST
//!
//! REST API implementation for DIAGNOSIFY.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, mapping failures to status codes)
//!
//! Uses `api-shared` for request/response types and validation, and `diagnosify-core` for the
//! scoring itself.

#![warn(rust_2018_idioms)]

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    BodySystemRes, ConditionRes, ConditionsRes, ErrorRes, HealthRes, HealthService, PredictReq,
    PredictRes, RecommendationRes, RecommendationsRes, ScoredConditionRes, SymptomsQuery,
    SymptomsRes, TopRecommendationRes, ValidationError, PREDICTION_FAILED_MESSAGE,
};
use diagnosify_core::{
    BodySystem, Condition, CoreConfig, Recommendations, ScoredCondition, Severity,
    SymptomChecker, TopRecommendation,
};

/// Application state shared across REST API handlers
#[derive(Clone)]
struct AppState {
    checker: SymptomChecker,
}

type ApiError = (StatusCode, Json<ErrorRes>);

#[derive(OpenApi)]
#[openapi(
    paths(health, predict, recommend, list_conditions, list_symptoms),
    components(schemas(
        HealthRes,
        PredictReq,
        PredictRes,
        ScoredConditionRes,
        api_shared::Severity,
        RecommendationsRes,
        RecommendationRes,
        TopRecommendationRes,
        ConditionsRes,
        ConditionRes,
        SymptomsRes,
        BodySystemRes,
        ErrorRes,
    ))
)]
struct ApiDoc;

/// Build the REST application around a resolved configuration.
///
/// Panics inside handlers are caught and turned into a JSON `500` response.
pub fn router(cfg: Arc<CoreConfig>) -> Router {
    let state = AppState {
        checker: SymptomChecker::new(cfg),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/predict", post(predict))
        .route("/api/recommendations", post(recommend))
        .route("/api/conditions", get(list_conditions))
        .route("/api/symptoms", get(list_symptoms))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state);

    with_failure_handling(app)
}

/// Bind `addr` and serve the REST application until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(addr: &str, cfg: Arc<CoreConfig>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- DIAGNOSIFY REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(cfg)).await?;
    Ok(())
}

fn with_failure_handling(app: Router) -> Router {
    app.layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorRes::new(PREDICTION_FAILED_MESSAGE)),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = PredictReq,
    responses(
        (status = 200, description = "Ranked condition predictions", body = PredictRes),
        (status = 400, description = "Invalid or missing symptoms array", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Rank catalog conditions against a symptom report
///
/// Returns every condition scoring above the confidence threshold, highest first. A report that
/// matches nothing yields an empty `predictions` list, not an error.
///
/// The body is read as JSON whatever its `Content-Type` says.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not JSON or `symptoms` is not an array of strings,
/// - `symptoms` is missing or empty.
#[axum::debug_handler]
async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictRes>, ApiError> {
    let symptoms = validated_symptoms(&body)?;
    let predictions = state.checker.predict(&symptoms);

    Ok(Json(PredictRes {
        predictions: predictions.into_iter().map(scored_condition_res).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/recommendations",
    request_body = PredictReq,
    responses(
        (status = 200, description = "Advice for the best-matching condition", body = RecommendationRes),
        (status = 400, description = "Invalid or missing symptoms array", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Recommendation bundle for the top-ranked prediction
///
/// `recommendation` is `null` when no condition scores above the threshold.
#[axum::debug_handler]
async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RecommendationRes>, ApiError> {
    let symptoms = validated_symptoms(&body)?;
    let recommendation = state.checker.recommend(&symptoms);

    Ok(Json(RecommendationRes {
        recommendation: recommendation.map(top_recommendation_res),
    }))
}

#[utoipa::path(
    get,
    path = "/api/conditions",
    responses(
        (status = 200, description = "Catalog conditions in catalog order", body = ConditionsRes)
    )
)]
#[axum::debug_handler]
async fn list_conditions(State(state): State<AppState>) -> Json<ConditionsRes> {
    Json(ConditionsRes {
        conditions: state.checker.conditions().iter().map(condition_res).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/symptoms",
    params(SymptomsQuery),
    responses(
        (status = 200, description = "Symptom vocabulary grouped by body system", body = SymptomsRes)
    )
)]
/// Symptom vocabulary, optionally filtered by a case-insensitive search term
#[axum::debug_handler]
async fn list_symptoms(
    State(state): State<AppState>,
    Query(query): Query<SymptomsQuery>,
) -> Json<SymptomsRes> {
    let body_systems = state.checker.search_symptoms(query.search.as_deref());
    Json(SymptomsRes {
        body_systems: body_systems.into_iter().map(body_system_res).collect(),
    })
}

// Helper functions

/// Decode a symptom request body from raw bytes, so a missing `Content-Type` header is accepted.
fn validated_symptoms(body: &[u8]) -> Result<Vec<String>, ApiError> {
    let result = serde_json::from_slice::<PredictReq>(body)
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))
        .and_then(PredictReq::into_symptoms);

    result.map_err(|e| {
        tracing::warn!("Rejected symptom request: {:?}", e);
        (StatusCode::BAD_REQUEST, Json(ErrorRes::new(e.to_string())))
    })
}

fn severity_res(severity: Severity) -> api_shared::Severity {
    match severity {
        Severity::Mild => api_shared::Severity::Mild,
        Severity::Moderate => api_shared::Severity::Moderate,
        Severity::Severe => api_shared::Severity::Severe,
    }
}

fn recommendations_res(recommendations: &Recommendations) -> RecommendationsRes {
    RecommendationsRes {
        medications: recommendations.medications.clone(),
        diet: recommendations.diet.clone(),
        precautions: recommendations.precautions.clone(),
    }
}

fn scored_condition_res(scored: ScoredCondition) -> ScoredConditionRes {
    ScoredConditionRes {
        recommendations: recommendations_res(&scored.recommendations),
        name: scored.name,
        confidence: scored.confidence,
        description: scored.description,
        severity: severity_res(scored.severity),
    }
}

fn top_recommendation_res(top: TopRecommendation) -> TopRecommendationRes {
    TopRecommendationRes {
        condition: top.condition,
        confidence: top.confidence,
        medications: top.medications,
        diet: top.diet,
        precautions: top.precautions,
    }
}

fn condition_res(condition: &Condition) -> ConditionRes {
    ConditionRes {
        name: condition.name().to_string(),
        symptoms: condition.reference_symptoms().to_vec(),
        description: condition.description().to_string(),
        severity: severity_res(condition.severity()),
        recommendations: recommendations_res(condition.recommendations()),
    }
}

fn body_system_res(system: BodySystem) -> BodySystemRes {
    BodySystemRes {
        name: system.name.into_inner(),
        symptoms: system.symptoms,
    }
}
