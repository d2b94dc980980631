//! Image submission endpoints (/api/verify-age, /api/save-image)

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;
use crate::constants::{CAPTURE_PREFIX, VERIFICATION_PREFIX};
use crate::error::VerifyError;
use crate::intake;
use crate::models::VerificationResult;
use crate::verification;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/verify-age", post(verify_age))
        .route("/api/save-image", post(save_image))
}

#[derive(Deserialize)]
struct ImageSubmission {
    /// Optional so a missing field maps to InvalidInput rather than a 422
    /// from the JSON extractor
    image: Option<String>,
}

#[derive(Serialize)]
struct SaveImageResponse {
    success: bool,
    filename: String,
}

/// POST /api/verify-age - run a submission through the full pipeline
async fn verify_age(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImageSubmission>,
) -> Result<Json<VerificationResult>, VerifyError> {
    let data_uri = req.image.unwrap_or_default();

    let result = verification::verify(
        &state.store,
        state.classifier.as_ref(),
        VERIFICATION_PREFIX,
        &data_uri,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/save-image - decode and persist only, no verdict
async fn save_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImageSubmission>,
) -> Result<Json<SaveImageResponse>, VerifyError> {
    let data_uri = req.image.unwrap_or_default();

    let (_image, artifact) =
        intake::decode_and_store(&state.store, CAPTURE_PREFIX, &data_uri).await?;

    Ok(Json(SaveImageResponse {
        success: true,
        filename: artifact.filename,
    }))
}
