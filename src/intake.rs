//! Image intake: data-URI stripping, base64 decoding, best-effort persistence
//!
//! Submissions arrive as `data:image/<subtype>;base64,<payload>` strings. The
//! prefix is matched leniently rather than parsed as full MIME grammar, and a
//! string without the prefix is treated as a raw base64 payload. Decoded
//! bytes are not validated as an image; malformed bytes flow through
//! unchanged.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::VerifyError;
use crate::models::{CapturedImage, StoredArtifact};
use crate::storage::{self, ImageStore};

/// Split a `data:image/<subtype>;base64,` prefix off a submission.
///
/// `<subtype>` is one or more word characters. Returns the declared MIME
/// type and the remaining payload, or `None` when the prefix is absent.
fn strip_data_uri_prefix(input: &str) -> Option<(String, &str)> {
    let rest = input.strip_prefix("data:image/")?;
    let subtype_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if subtype_end == 0 {
        return None;
    }

    let (subtype, rest) = rest.split_at(subtype_end);
    let payload = rest.strip_prefix(";base64,")?;
    Some((format!("image/{}", subtype), payload))
}

/// Decode a submitted image.
///
/// Empty input is the only client-level rejection; a payload that fails
/// base64 decoding is an unexpected failure, not `InvalidInput`.
pub fn decode_image(data_uri: &str) -> Result<CapturedImage, VerifyError> {
    if data_uri.is_empty() {
        return Err(VerifyError::InvalidInput);
    }

    let (mime_type, payload) = match strip_data_uri_prefix(data_uri) {
        Some((mime, payload)) => (Some(mime), payload),
        None => (None, data_uri),
    };

    let raw_bytes = STANDARD
        .decode(payload)
        .map_err(|e| VerifyError::Failed(anyhow::Error::new(e)))?;

    Ok(CapturedImage {
        raw_bytes,
        mime_type,
    })
}

/// Decode a submission and persist it through the store's tier list.
///
/// Storage failures are absorbed by the store; only decode failures surface.
/// The artifact's filename is generated here and returned regardless of
/// whether any tier accepted the write.
pub async fn decode_and_store(
    store: &ImageStore,
    prefix: &str,
    data_uri: &str,
) -> Result<(CapturedImage, StoredArtifact), VerifyError> {
    let image = decode_image(data_uri)?;
    let filename = storage::generate_filename(prefix);
    let artifact = store.store(&filename, &image.raw_bytes).await;
    Ok((image, artifact))
}
