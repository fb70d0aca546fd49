//! HTTP API around the validator and converter.
//!
//! A locale switch in a client is a plain re-request: post the same value
//! with the new `language`. The server keeps no per-client state.

use crate::config::Config;
use crate::converter::convert_to_words;
use crate::error::{ConversionError, ValidationError};
use crate::i18n::{ConversionMetrics, Language, LanguageConfig, LanguageRegistry, MetricsReport};
use crate::validator;
use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub default_language: Language,
    pub metrics: Arc<ConversionMetrics>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            default_language: config.default_language,
            metrics: Arc::new(ConversionMetrics::new()),
        }
    }
}

// ==================== Request/Response Types ====================

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub value: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ConvertResponse {
    pub value: u32,
    pub language: Language,
    pub words: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ValidateResponse {
    pub valid: bool,
    pub reason: Option<String>,
}

// ==================== Errors ====================

/// Error returned by a handler, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Conversion(ConversionError),
    UnknownLanguage(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conversion(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(e) => e.to_string(),
            ApiError::Conversion(e) => e.to_string(),
            ApiError::UnknownLanguage(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

// ==================== Handlers ====================

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn languages(State(state): State<AppState>) -> Json<Vec<Value>> {
    let entries = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config: &LanguageConfig| {
            json!({
                "code": config.code,
                "name": config.name,
                "native_name": config.native_name,
                "is_default": config.language == state.default_language,
            })
        })
        .collect();

    Json(entries)
}

pub async fn validate_input(Json(request): Json<ValidateRequest>) -> Json<ValidateResponse> {
    match validator::check(&request.value) {
        Ok(_) => Json(ValidateResponse {
            valid: true,
            reason: None,
        }),
        Err(e) => Json(ValidateResponse {
            valid: false,
            reason: Some(e.to_string()),
        }),
    }
}

pub async fn convert_json(
    State(state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    convert(&state, &request.value, request.language.as_deref()).map(Json)
}

pub async fn convert_query(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let raw = query.value.map(Value::String).unwrap_or(Value::Null);
    convert(&state, &raw, query.lang.as_deref()).map(Json)
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.metrics.report())
}

/// Resolve the language, validate, convert, and record the outcome.
fn convert(
    state: &AppState,
    raw: &Value,
    language: Option<&str>,
) -> Result<ConvertResponse, ApiError> {
    let language = match language {
        Some(code) if !code.trim().is_empty() => {
            Language::from_code(code).map_err(|e| ApiError::UnknownLanguage(e.to_string()))?
        }
        _ => state.default_language,
    };

    let value = validator::check(raw).map_err(|e| {
        warn!(input = %raw, error = %e, "Rejected conversion input");
        state.metrics.record_rejection();
        ApiError::Validation(e)
    })?;

    let words = convert_to_words(u64::from(value), language).map_err(|e| {
        warn!(value, error = %e, "Conversion outside supported domain");
        state.metrics.record_domain_error();
        ApiError::Conversion(e)
    })?;

    state.metrics.record_conversion(language);
    Ok(ConvertResponse {
        value,
        language,
        words,
    })
}

// ==================== Server ====================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
        .route("/api/validate", post(validate_input))
        .route("/api/convert", get(convert_query).post(convert_json))
        .route("/api/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(
        "Listening on {} (default language: {})",
        address, config.default_language
    );

    let state = AppState::new(config);
    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("{}", state.metrics.report().format());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
