//! HTTP API surface for the oficio service.
//!
//! Routes:
//! - `POST /api/recommend`: typed request `{ "skills": ["..."] }`, returns
//!   the ordered recommendation list or a structured error payload
//! - `GET /api/skills`: sorted selectable skill labels for pickers
//! - `GET /healthz`: liveness probe
//! - `GET /`: embedded web UI
//!
//! Malformed bodies are rejected with 400 before the pipeline runs; the
//! pipeline's user-input errors map to 422 with distinct machine-readable
//! codes. Enrichment misses ride inside 200 responses as explicit `null`
//! blocks, never as errors.

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use oficio_core::{OccupationMatch, RecommendError, Recommender};

use crate::ui;

/// Shared per-process state: the recommender over the immutable assets.
#[derive(Clone)]
pub struct AppState {
    /// Recommendation pipeline, safe to share across requests.
    pub recommender: Recommender,
}

/// Typed request body for `POST /api/recommend`.
///
/// Deliberately strict: an explicit array of strings under `skills`.
/// Anything else (missing key, nested values, non-strings) is a 400 before
/// the pipeline is reached.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Skill labels in the local language.
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RecommendResponse {
    recommendations: Vec<OccupationMatch>,
    resolved: Vec<String>,
    dropped: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dropped: Option<Vec<String>>,
}

impl ErrorBody {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.into(),
                dropped: None,
            },
        }
    }

    fn with_dropped(mut self, dropped: Vec<String>) -> Self {
        self.error.dropped = Some(dropped);
        self
    }
}

/// Builds the application router over the given recommender.
pub fn router(recommender: Recommender) -> Router {
    Router::new()
        .route("/", get(ui_page))
        .route("/healthz", get(healthz))
        .route("/api/recommend", post(recommend))
        .route("/api/skills", get(skills))
        .with_state(AppState { recommender })
}

async fn ui_page() -> Html<&'static str> {
    Html(ui::INDEX_PAGE)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn skills(State(state): State<AppState>) -> Json<serde_json::Value> {
    let labels = state.recommender.selectable_labels();
    Json(serde_json::json!({ "skills": labels }))
}

async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(
                target: "oficio::http",
                reason = %rejection.body_text(),
                "Rejecting malformed recommend request"
            );
            let body = ErrorBody::new(
                "invalid_request",
                "request body must be JSON with a string array under the `skills` key",
            );
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match state.recommender.recommend(&request.skills) {
        Ok(recommendation) => {
            let body = RecommendResponse {
                recommendations: recommendation.matches,
                resolved: recommendation.resolved,
                dropped: recommendation.dropped,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            let message = err.to_string();
            let mut body = ErrorBody::new(err.code(), message);
            if let RecommendError::NoSkillsRecognized { dropped } = err {
                body = body.with_dropped(dropped);
            }
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
    }
}

/// Builds the CORS layer from comma-separated origins; `*` allows any
/// origin, invalid entries are skipped with a warning.
fn build_cors_layer(origins: &str) -> CorsLayer {
    if origins.split(',').any(|o| o.trim() == "*") {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| {
            let origin = origin.trim();
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(
                        target: "oficio::http",
                        origin,
                        "Skipping invalid CORS origin"
                    );
                    None
                }
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
}

/// Starts the HTTP server on `bind_addr` and serves until shutdown.
pub async fn serve(
    recommender: Recommender,
    bind_addr: &str,
    cors_origins: Option<&str>,
) -> Result<()> {
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid bind address: {bind_addr}"))?;

    let mut app = router(recommender);
    if let Some(origins) = cors_origins {
        app = app.layer(build_cors_layer(origins));
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(
        target: "oficio::http",
        bind = %addr,
        cors = cors_origins.unwrap_or("disabled"),
        "HTTP server listening"
    );

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}
