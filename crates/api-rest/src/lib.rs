//! # API REST
//!
//! REST API for the triage engine.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, CORS, message ids and timestamps)
//!
//! Uses `api-shared` for wire types and `triage-core` for every decision.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    ChatReplyReq, ChatReplyRes, HealthRes, HealthService, IntakeReq, MentalHealthReq,
    MentalHealthRes, TriageRes, ValidationErrorRes, WelcomeRes,
};
use triage_core::{
    CatalogId, ChatMessage, ChatRole, SymptomIntake, TriageLevel, TriageResult, TriageService,
    ValidationErrorKind,
};

/// Application state for the REST API server.
///
/// The service wraps a read-only configuration, so cloning per request is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: TriageService,
}

impl AppState {
    pub fn new(service: TriageService) -> Self {
        Self { service }
    }
}

type ApiError = (StatusCode, Json<ValidationErrorRes>);

/// Map an unreadable or mis-shaped JSON body to the same field-level error body as a rejected
/// intake, reported against `<root>`.
fn unreadable_body(route: &str, rejection: JsonRejection) -> ApiError {
    tracing::warn!("Unreadable {} body: {}", route, rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorRes {
            field: "<root>".into(),
            kind: ValidationErrorKind::WrongType,
            message: rejection.body_text(),
        }),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(health, triage, chat_reply, chat_welcome, mental_health),
    components(schemas(
        HealthRes,
        IntakeReq,
        TriageRes,
        ChatReplyReq,
        ChatReplyRes,
        WelcomeRes,
        MentalHealthReq,
        MentalHealthRes,
        ValidationErrorRes,
        ValidationErrorKind,
        SymptomIntake,
        TriageResult,
        TriageLevel,
        CatalogId,
        ChatMessage,
        ChatRole,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/triage", post(triage))
        .route("/chat/reply", post(chat_reply))
        .route("/chat/welcome", get(chat_welcome))
        .route("/chat/mental-health", post(mental_health))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Liveness probe for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/triage",
    request_body = IntakeReq,
    responses(
        (status = 200, description = "Intake classified", body = TriageRes),
        (status = 400, description = "Intake rejected", body = ValidationErrorRes)
    )
)]
/// Validate and classify a symptom intake
///
/// Returns the canonical intake, the triage result and the composed assistant message.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not JSON,
/// - a field has the wrong type or is out of range, or
/// - `symptoms` is missing.
#[axum::debug_handler]
async fn triage(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<TriageRes>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| unreadable_body("/triage", rejection))?;

    match state.service.process_intake(&raw) {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(e) => Err((StatusCode::BAD_REQUEST, Json(ValidationErrorRes::from(&e)))),
    }
}

#[utoipa::path(
    post,
    path = "/chat/reply",
    request_body = ChatReplyReq,
    responses(
        (status = 200, description = "Assistant reply", body = ChatReplyRes),
        (status = 400, description = "Body is not a valid chat reply request", body = ValidationErrorRes)
    )
)]
/// Answer the latest turn of a conversation
///
/// Crisis keywords in the latest user message take precedence over every other reply.
///
/// # Errors
/// Returns `400 Bad Request` if the body is not JSON or does not match `ChatReplyReq`.
#[axum::debug_handler]
async fn chat_reply(
    State(state): State<AppState>,
    payload: Result<Json<ChatReplyReq>, JsonRejection>,
) -> Result<Json<ChatReplyRes>, ApiError> {
    let Json(req) = payload.map_err(|rejection| unreadable_body("/chat/reply", rejection))?;
    let message = state
        .service
        .compose_chat_reply(&req.messages, req.triage.as_ref());
    Ok(Json(ChatReplyRes {
        id: uuid::Uuid::new_v4().to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
        message,
    }))
}

#[utoipa::path(
    get,
    path = "/chat/welcome",
    responses(
        (status = 200, description = "Opening message for a new session", body = WelcomeRes)
    )
)]
#[axum::debug_handler]
async fn chat_welcome(State(state): State<AppState>) -> Json<WelcomeRes> {
    Json(WelcomeRes {
        message: state.service.welcome_message(),
    })
}

#[utoipa::path(
    post,
    path = "/chat/mental-health",
    request_body = MentalHealthReq,
    responses(
        (status = 200, description = "Mental-health check", body = MentalHealthRes),
        (status = 400, description = "Body is not a valid mental-health request", body = ValidationErrorRes)
    )
)]
/// Check free text for a mental-health concern and list support resources when one is found.
#[axum::debug_handler]
async fn mental_health(
    State(state): State<AppState>,
    payload: Result<Json<MentalHealthReq>, JsonRejection>,
) -> Result<Json<MentalHealthRes>, ApiError> {
    let Json(req) =
        payload.map_err(|rejection| unreadable_body("/chat/mental-health", rejection))?;
    let concern = state.service.detects_mental_health_concern(&req.content);
    let resources = if concern {
        state
            .service
            .mental_health_resources()
            .iter()
            .map(|r| (*r).to_owned())
            .collect()
    } else {
        Vec::new()
    };
    Ok(Json(MentalHealthRes { concern, resources }))
}
