use anyhow::Result;

use super::AgeClassifier;
use crate::models::CapturedImage;

/// Classifier that always returns the configured verdict - for reproducible
/// tests or demo opt-out.
pub struct FixedClassifier {
    verdict: bool,
}

impl FixedClassifier {
    pub fn new(verdict: bool) -> Self {
        Self { verdict }
    }
}

impl AgeClassifier for FixedClassifier {
    fn classify(&self, _image: &CapturedImage) -> Result<bool> {
        Ok(self.verdict)
    }
}
