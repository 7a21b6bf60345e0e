//! Feature detector trait.

use crate::types::{DetectedFeature, FeatureCategory};

/// A source-file scanner that reports web-platform feature usage.
///
/// Concrete detectors live outside this workspace (they carry the parser
/// dependencies); the engine only consumes the occurrence stream they
/// produce. Detectors attribute occurrences to Baseline feature IDs where
/// they can and leave `feature_id` unset where they cannot.
pub trait FeatureDetector: Send + Sync {
    /// Unique identifier for this detector, e.g. `css-scanner`.
    fn id(&self) -> &str;

    /// The category of features this detector reports.
    fn category(&self) -> FeatureCategory;

    /// Scan one file's contents and report every occurrence found.
    fn detect(&self, file: &str, contents: &str) -> Vec<DetectedFeature>;
}
