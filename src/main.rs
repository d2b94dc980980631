use std::path::PathBuf;
use std::sync::Arc;

use agegate::classifier::{AgeClassifier, FixedClassifier, RandomClassifier};
use agegate::constants::{DEFAULT_UPLOAD_DIR, MAX_IMAGE_UPLOAD_SIZE};
use agegate::storage::ImageStore;
use agegate::{AppState, build_router};

/// AGE_CLASSIFIER selects the scoring step: "random" (default) ships the
/// coin flip; "adult" / "minor" pin the verdict for demos.
fn classifier_from_env() -> Arc<dyn AgeClassifier> {
    match std::env::var("AGE_CLASSIFIER").as_deref() {
        Ok("adult") => Arc::new(FixedClassifier::new(true)),
        Ok("minor") => Arc::new(FixedClassifier::new(false)),
        Ok("random") | Err(_) => Arc::new(RandomClassifier::new()),
        Ok(other) => {
            tracing::warn!("unknown AGE_CLASSIFIER {:?}, using random", other);
            Arc::new(RandomClassifier::new())
        }
    }
}

fn body_limit() -> usize {
    std::env::var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(MAX_IMAGE_UPLOAD_SIZE)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let upload_dir = std::env::var("UPLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

    let state = Arc::new(AppState {
        store: ImageStore::new(upload_dir),
        classifier: classifier_from_env(),
    });

    let app = build_router(state, body_limit());

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.expect("Server failed");
}
