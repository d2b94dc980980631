//! Verification orchestration: decode, persist best-effort, classify
//!
//! The one entry point both transports share. Persistence failures never
//! fail the verdict, and the generated filename is returned even when no
//! storage tier accepted the write.

use tracing::{info, warn};

use crate::classifier::AgeClassifier;
use crate::error::VerifyError;
use crate::intake;
use crate::models::{StorageLocation, VerificationResult};
use crate::storage::ImageStore;

const ADULT_MESSAGE: &str = "Access granted: Adult verified";
const MINOR_MESSAGE: &str = "Access denied: Minor detected";

/// Success-path message for a verdict. No other variants exist.
pub fn verdict_message(is_adult: bool) -> &'static str {
    if is_adult { ADULT_MESSAGE } else { MINOR_MESSAGE }
}

/// Run one submission through the full pipeline.
pub async fn verify(
    store: &ImageStore,
    classifier: &dyn AgeClassifier,
    prefix: &str,
    data_uri: &str,
) -> Result<VerificationResult, VerifyError> {
    let (image, artifact) = intake::decode_and_store(store, prefix, data_uri).await?;
    if artifact.location == StorageLocation::None {
        warn!("no storage tier accepted {}", artifact.filename);
    }

    let is_adult = classifier.classify(&image).map_err(VerifyError::Failed)?;

    info!(
        "Age verification: {} - Result: {}",
        artifact.filename,
        if is_adult { "+18" } else { "-18" }
    );

    Ok(VerificationResult {
        success: true,
        is_adult,
        filename: artifact.filename,
        message: verdict_message(is_adult).to_string(),
    })
}
