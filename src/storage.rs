//! Best-effort image persistence with ordered fallback
//!
//! Deployment targets often have a read-only filesystem outside the temp
//! dir, so a write falls through an ordered list of candidate sinks: the
//! uploads directory, then the platform temp dir. Every failure is logged
//! and swallowed; exhausting the list is a valid outcome, not an error.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::{StorageLocation, StoredArtifact};

/// A candidate directory tagged with the tier it represents
struct StorageTier {
    location: StorageLocation,
    dir: PathBuf,
}

/// Ordered list of storage sinks, tried sequentially per write
pub struct ImageStore {
    tiers: Vec<StorageTier>,
}

impl ImageStore {
    /// Standard two-tier store: `upload_dir`, then the platform temp dir.
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self::with_fallback(upload_dir, std::env::temp_dir())
    }

    /// Two-tier store with an explicit fallback directory.
    pub fn with_fallback(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            tiers: vec![
                StorageTier {
                    location: StorageLocation::Primary,
                    dir: primary.into(),
                },
                StorageTier {
                    location: StorageLocation::Fallback,
                    dir: fallback.into(),
                },
            ],
        }
    }

    /// Write `bytes` under `filename` in the first tier that accepts it.
    ///
    /// Each attempt runs to completion before the next tier is tried, with
    /// no retries within a tier. Never fails: when every tier rejects the
    /// write the artifact reports `StorageLocation::None`.
    pub async fn store(&self, filename: &str, bytes: &[u8]) -> StoredArtifact {
        for tier in &self.tiers {
            match write_to_dir(&tier.dir, filename, bytes).await {
                Ok(()) => {
                    debug!(
                        "saved {} bytes to {:?}",
                        bytes.len(),
                        tier.dir.join(filename)
                    );
                    return StoredArtifact {
                        filename: filename.to_string(),
                        location: tier.location,
                    };
                }
                Err(e) => {
                    warn!("write to {:?} failed: {}", tier.dir, e);
                }
            }
        }

        StoredArtifact {
            filename: filename.to_string(),
            location: StorageLocation::None,
        }
    }
}

async fn write_to_dir(dir: &Path, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(filename), bytes).await
}

/// Generate `<prefix>-<unix-millis>.png`.
///
/// Uniqueness relies on timestamp granularity only. The extension is fixed
/// regardless of the submitted MIME subtype.
pub fn generate_filename(prefix: &str) -> String {
    format!("{}-{}.png", prefix, Utc::now().timestamp_millis())
}
