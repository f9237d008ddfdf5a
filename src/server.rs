//! Stateless HTTP front for the engine.
//!
//! `POST /process` accepts the form a browser client submits
//! (`operation`, `algorithm`, `text`, `param`) and answers with
//! `{"result": "..."}`. Failures answer with
//! `{"error": {"kind": ..., "message": ...}}` and a non-2xx status so the
//! client can tell them apart from a result.

use std::sync::Arc;

use anyhow::Context;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::engine::{self, AlgorithmId, Direction, TransformRequest};
use crate::error::{EngineError, ParseIdError};
use crate::format::{FormatOptions, TransformResult};

/// Form fields of a `/process` submission.
///
/// The key parameter is accepted under the generic name `param` or under
/// the algorithm-specific names a form may use.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessForm {
    pub operation: String,
    pub algorithm: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, alias = "shift", alias = "key", alias = "rails", alias = "order")]
    pub param: String,
    /// Checkbox value; any of `on`, `true`, `1`, `yes` asks for steps.
    #[serde(default)]
    pub steps: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error response returned by handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, kind: &str, message: impl Into<String>) -> Self {
        ApiError {
            status,
            body: ErrorBody {
                error: ErrorDetail {
                    kind: kind.to_string(),
                    message: message.into(),
                },
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, err.kind(), err.to_string())
    }
}

impl From<ParseIdError> for ApiError {
    fn from(err: ParseIdError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, "bad_request", err.to_string())
    }
}

impl From<FormRejection> for ApiError {
    fn from(err: FormRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, "bad_request", err.body_text())
    }
}

/// Builds the router. `options` are the server-wide formatting defaults.
pub fn router(options: FormatOptions) -> Router {
    Router::new()
        .route("/process", post(process))
        .route("/health", get(health))
        .with_state(Arc::new(options))
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.bind_addr` and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "ciphercraft listening");
    axum::serve(listener, router(config.format_options()))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("serve http")
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn process(
    State(defaults): State<Arc<FormatOptions>>,
    form: Result<Form<ProcessForm>, FormRejection>,
) -> Result<Json<TransformResult>, ApiError> {
    let Form(form) = form?;
    let direction: Direction = form.operation.parse()?;
    let algorithm: AlgorithmId = form.algorithm.parse()?;

    let mut options = (*defaults).clone();
    if let Some(value) = form.steps.as_deref() {
        options.show_steps |= matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "on" | "true" | "1" | "yes"
        );
    }

    let request = TransformRequest::new(direction, algorithm, form.param, form.text);
    let result = engine::run_with(&request, &options)?;
    Ok(Json(result))
}
