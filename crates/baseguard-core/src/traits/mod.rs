//! Seams between the engine and its pluggable collaborators.

pub mod baseline_source;
pub mod detector;

pub use baseline_source::BaselineSource;
pub use detector::FeatureDetector;
