//! End-to-end pipeline tests against disposable storage roots

use tempfile::TempDir;

use agegate::classifier::{FixedClassifier, RandomClassifier};
use agegate::error::VerifyError;
use agegate::intake;
use agegate::models::StorageLocation;
use agegate::storage::ImageStore;
use agegate::verification;

/// Base64 of the 8-byte PNG signature
const PNG_SIGNATURE_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

#[tokio::test]
async fn known_png_submission_verifies_end_to_end() {
    let root = TempDir::new().unwrap();
    let store = ImageStore::new(root.path());

    let result = verification::verify(
        &store,
        &FixedClassifier::new(true),
        "verification",
        PNG_SIGNATURE_URI,
    )
    .await
    .unwrap();

    assert!(result.success);
    assert!(result.is_adult);
    assert_eq!(result.message, "Access granted: Adult verified");

    let saved = std::fs::read(root.path().join(&result.filename)).unwrap();
    assert_eq!(saved, b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn shipped_classifier_produces_one_of_the_two_templates() {
    let root = TempDir::new().unwrap();
    let store = ImageStore::new(root.path());

    let result = verification::verify(
        &store,
        &RandomClassifier::new(),
        "verification",
        PNG_SIGNATURE_URI,
    )
    .await
    .unwrap();

    assert!(result.success);
    let expected = if result.is_adult {
        "Access granted: Adult verified"
    } else {
        "Access denied: Minor detected"
    };
    assert_eq!(result.message, expected);
}

#[tokio::test]
async fn capture_path_persists_without_classifying() {
    let root = TempDir::new().unwrap();
    let store = ImageStore::new(root.path());

    let (image, artifact) = intake::decode_and_store(&store, "capture", PNG_SIGNATURE_URI)
        .await
        .unwrap();

    assert_eq!(image.mime_type.as_deref(), Some("image/png"));
    assert_eq!(artifact.location, StorageLocation::Primary);
    assert!(artifact.filename.starts_with("capture-"));
    assert!(root.path().join(&artifact.filename).exists());
}

#[tokio::test]
async fn verdict_still_returned_when_every_tier_is_dead() {
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let store = ImageStore::with_fallback(blocker.join("a"), blocker.join("b"));

    let result = verification::verify(
        &store,
        &FixedClassifier::new(false),
        "verification",
        PNG_SIGNATURE_URI,
    )
    .await
    .unwrap();

    assert!(result.success);
    assert_eq!(result.message, "Access denied: Minor detected");
    assert!(result.filename.starts_with("verification-"));
}

#[tokio::test]
async fn empty_submission_is_rejected_as_client_error() {
    let root = TempDir::new().unwrap();
    let store = ImageStore::new(root.path());

    let result =
        verification::verify(&store, &FixedClassifier::new(true), "verification", "").await;

    assert!(matches!(result, Err(VerifyError::InvalidInput)));
}
