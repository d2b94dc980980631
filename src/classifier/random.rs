use anyhow::Result;
use rand::Rng;

use super::AgeClassifier;
use crate::models::CapturedImage;

/// Stand-in scorer: a uniform coin flip, independent per call, ignoring the
/// image bytes entirely. A real estimation model slots in behind the same
/// trait.
pub struct RandomClassifier;

impl RandomClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AgeClassifier for RandomClassifier {
    fn classify(&self, _image: &CapturedImage) -> Result<bool> {
        Ok(rand::rng().random_bool(0.5))
    }
}
