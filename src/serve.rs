//! HTTP serving layer.
//!
//! Stateless JSON handlers over one loaded artifact snapshot, shared
//! read-only across requests. The router is built here, in the library, so
//! the handlers and their request validation are testable; the binary only
//! loads artifacts and binds a listener.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::artifacts::ModelArtifacts;
use crate::predict::estimate_price;
use crate::types::{LocationsResponse, PredictRequest, PredictResponse};

#[derive(Clone)]
pub struct AppState {
    artifacts: Arc<ModelArtifacts>,
}

/// Builds the API router over a loaded artifact snapshot.
pub fn router(artifacts: Arc<ModelArtifacts>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/locations", get(locations))
        .route("/api/predict", post(predict))
        .layer(cors)
        .with_state(AppState { artifacts })
}

/// Checks the documented preconditions of the predictor: positive area,
/// at least one bedroom and bathroom, non-negative balconies.
fn validate(request: &PredictRequest) -> Result<(), String> {
    if request.total_sqft <= 0.0 {
        return Err("total_sqft must be positive".to_string());
    }
    if request.bhk < 1 || request.bath < 1.0 || request.balcony < 0.0 {
        return Err("bhk and bath must be at least 1, balcony at least 0".to_string());
    }
    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Bengaluru House Price API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: state.artifacts.locations().to_vec(),
    })
}

async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    validate(&request).map_err(|message| (StatusCode::UNPROCESSABLE_ENTITY, message))?;

    tracing::info!(
        location = %request.location,
        total_sqft = request.total_sqft,
        bhk = request.bhk,
        "Predict request"
    );

    let price = estimate_price(
        &state.artifacts,
        &request.location,
        request.total_sqft,
        request.bhk,
        request.bath,
        request.balcony,
    )
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(PredictResponse {
        predicted_price_lakhs: price,
    }))
}
