//! HTTP API for training and serving the PM2.5 model.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check, including whether a model is live
//! - `POST /api/upload` - Train on a CSV body and publish the new model
//! - `POST /api/predict` - Predict PM2.5 for one query
//!
//! ## Example
//!
//! ```rust,ignore
//! let app = create_router(AppState::new());
//! axum::serve(listener, app).await?;
//! ```

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smogcast::{predict, train_model, ModelRegistry, PredictQuery, TrainError, TrainReport};

use crate::ingest;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Registry holding the active model bundle, if any.
    registry: Arc<ModelRegistry>,
}

impl AppState {
    /// Create state with an empty registry: no model is served until the
    /// first successful upload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Health check response
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether a trained model is currently being served
    pub trained: bool,
}

/// Successful training response
#[derive(Serialize, Deserialize)]
pub struct TrainResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Training summary, flattened into the response object
    #[serde(flatten)]
    pub report: TrainReport,
}

/// Prediction response
#[derive(Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted PM2.5 concentration
    pub prediction: f64,
}

/// Error response
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Create the API router
///
/// # Arguments
///
/// * `state` - Application state with the model registry
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/predict", post(predict_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        trained: state.registry.is_trained(),
    })
}

/// Train on an uploaded CSV body and publish the resulting model.
///
/// The previous model keeps serving until the new one is fully trained; a
/// failed upload leaves it untouched.
async fn upload_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TrainResponse>, (StatusCode, Json<ErrorResponse>)> {
    let records = ingest::parse_records(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejected malformed CSV upload");
        bad_request(format!("invalid CSV: {err}"))
    })?;

    let (bundle, report) = train_model(&records).map_err(|err| match err {
        TrainError::Dataset(inner) => {
            tracing::warn!(error = %inner, "upload produced no trainable data");
            bad_request(inner.to_string())
        }
        TrainError::Fit(inner) => {
            tracing::error!(error = %inner, "least-squares fit failed");
            internal_error(inner.to_string())
        }
    })?;

    state.registry.publish(bundle);
    tracing::info!(
        samples = report.sample_count,
        cities = report.cities.len(),
        states = report.states.len(),
        "published new model"
    );

    Ok(Json(TrainResponse {
        message: "Model trained successfully".to_string(),
        report,
    }))
}

/// Predict PM2.5 for one query against the active model.
async fn predict_handler(
    State(state): State<AppState>,
    Json(query): Json<PredictQuery>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let prediction = predict(&state.registry, &query).map_err(|err| {
        tracing::warn!(error = %err, "prediction rejected");
        bad_request(err.to_string())
    })?;

    Ok(Json(PredictResponse { prediction }))
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn internal_error(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
}
