use anyhow::Result;

use crate::models::CapturedImage;

/// Pluggable scoring capability: produce an adult/minor verdict from image
/// bytes. Implementations carry no state between calls.
pub trait AgeClassifier: Send + Sync {
    /// Returns true when the subject is judged an adult.
    fn classify(&self, image: &CapturedImage) -> Result<bool>;
}

mod fixed;
mod random;

pub use fixed::FixedClassifier;
pub use random::RandomClassifier;
