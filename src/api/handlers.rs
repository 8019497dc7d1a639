//! HTTP request handlers

use super::types::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};
use super::AppState;
use crate::dispatch::{transition, DispatchContext, Flow, UnknownFlow};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        // Chat turns on the configured flow
        .route("/api/chat", post(chat))
        // Path the existing browser client posts to
        .route("/.netlify/functions/ai-chatbot", post(chat))
        // Chat turns on an explicit flow
        .route("/api/chat/:flow", post(chat_with_flow))
        .route("/health", get(health))
        .route("/version", get(get_version))
        .with_state(state);

    with_middleware(routes)
}

fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

// ============================================================
// Chat
// ============================================================

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    respond(state.default_flow, payload)
}

async fn chat_with_flow(
    Path(flow): Path<String>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let flow: Flow = flow
        .parse()
        .map_err(|e: UnknownFlow| AppError::NotFound(e.to_string()))?;
    respond(flow, payload)
}

fn respond(
    flow: Flow,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected chat request");
        AppError::BadRequest(rejection.body_text())
    })?;

    let conversation = req.state.unwrap_or_default();
    tracing::info!(
        flow = %flow,
        step = %conversation.step,
        message = ?req.message,
        "Chat turn"
    );

    let result = transition(&conversation, &DispatchContext::new(flow), req.message.as_deref());

    tracing::info!(
        flow = %flow,
        next_step = %result.next_state.step,
        buttons = result.choices.len(),
        "Chat reply"
    );

    Ok(Json(result.into()))
}

// ============================================================
// Service info
// ============================================================

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        flow: state.default_flow,
    })
}

async fn get_version() -> &'static str {
    concat!("type_guide ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    tracing::error!(details = %details, "Handler panicked");
    AppError::Internal(details).into_response()
}
