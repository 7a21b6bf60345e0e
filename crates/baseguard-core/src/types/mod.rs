//! Data model shared by detection and enforcement.
//! Detected occurrences, Baseline maturity classification, severity scales.

pub mod baseline;
pub mod feature;
pub mod severity;

pub use baseline::{BaselineFeatureInfo, BaselineStatus, BaselineSupport, BaselineThreshold};
pub use feature::{DetectedFeature, FeatureCategory, SourceLocation};
pub use severity::{EnforcementLevel, Severity};
