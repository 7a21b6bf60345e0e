//! Core types, traits, errors, config, tracing, and constants for Baseguard.
//!
//! Baseguard checks detected web-platform feature usage against Baseline
//! maturity policy. This crate is the foundation layer shared by the
//! snapshot store (`baseguard-baseline`) and the policy engine
//! (`baseguard-policy`): the detection and Baseline data model, the merged
//! enforcement configuration with layered resolution, the error enums, and
//! the tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

pub use config::{CliOverrides, ConfigWarning, EnforcementConfig};
pub use errors::{ConfigError, SnapshotError};
pub use traits::{BaselineSource, FeatureDetector};
pub use types::{
    BaselineFeatureInfo, BaselineStatus, BaselineThreshold, DetectedFeature, EnforcementLevel,
    FeatureCategory, Severity, SourceLocation,
};
