//! Application constants

/// Default directory for persisted image submissions (primary storage tier)
pub const DEFAULT_UPLOAD_DIR: &str = "public/uploads";

/// Maximum request body size for image submissions (10 MB)
pub const MAX_IMAGE_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Filename prefix for submissions to /api/verify-age
pub const VERIFICATION_PREFIX: &str = "verification";

/// Filename prefix for submissions to /api/save-image
pub const CAPTURE_PREFIX: &str = "capture";
