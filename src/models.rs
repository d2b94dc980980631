//! Request-scoped data types for the verification pipeline

use serde::Serialize;

/// A decoded image submission. Owned by a single request and discarded after
/// persistence and scoring.
pub struct CapturedImage {
    pub raw_bytes: Vec<u8>,
    /// MIME type declared in the data-URI prefix (e.g. "image/png"), or
    /// `None` when the submission carried no prefix.
    pub mime_type: Option<String>,
}

/// Which storage tier accepted the write, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageLocation {
    /// Application-local uploads directory
    Primary,
    /// Platform temp directory
    Fallback,
    /// No tier accepted the write; a valid terminal state
    None,
}

/// Outcome of one persistence attempt
pub struct StoredArtifact {
    pub filename: String,
    pub location: StorageLocation,
}

/// Final verdict returned to the caller. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub success: bool,
    pub is_adult: bool,
    pub filename: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_to_camel_case_wire_shape() {
        let result = VerificationResult {
            success: true,
            is_adult: false,
            filename: "verification-1700000000000.png".to_string(),
            message: "Access denied: Minor detected".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["isAdult"], false);
        assert_eq!(json["filename"], "verification-1700000000000.png");
        assert_eq!(json["message"], "Access denied: Minor detected");
    }
}
