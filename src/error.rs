//! Error taxonomy for the verification pipeline and its HTTP mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// The two caller-visible failure states. Storage failures never appear
/// here: they are absorbed inside `ImageStore` and the pipeline proceeds.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Empty or missing image payload
    #[error("No image provided")]
    InvalidInput,

    /// Unexpected failure during decode or classification. The cause is
    /// logged server-side and never reaches the client.
    #[error("Verification failed")]
    Failed(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for VerifyError {
    fn into_response(self) -> Response {
        let status = match &self {
            VerifyError::InvalidInput => StatusCode::BAD_REQUEST,
            VerifyError::Failed(cause) => {
                tracing::error!("verification failed: {cause:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn invalid_input_maps_to_400() {
        let response = VerifyError::InvalidInput.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unexpected_failure_maps_to_500() {
        let response = VerifyError::Failed(anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_are_opaque() {
        assert_eq!(VerifyError::InvalidInput.to_string(), "No image provided");
        // The cause never leaks into the client-facing message
        let err = VerifyError::Failed(anyhow!("secret internal detail"));
        assert_eq!(err.to_string(), "Verification failed");
    }
}
